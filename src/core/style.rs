use smallvec::SmallVec;

/// CSS `display` values the page toggles between.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Display {
    None,
    Flex,
    Block,
}

impl Display {
    pub fn as_css(self) -> &'static str {
        match self {
            Display::None => "none",
            Display::Flex => "flex",
            Display::Block => "block",
        }
    }
}

/// The only style properties the animation is allowed to touch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StyleValue {
    Opacity(f32),
    Display(Display),
    PointerEvents(bool),
}

impl StyleValue {
    pub fn property(&self) -> &'static str {
        match self {
            StyleValue::Opacity(_) => "opacity",
            StyleValue::Display(_) => "display",
            StyleValue::PointerEvents(_) => "pointer-events",
        }
    }

    pub fn css_value(&self) -> String {
        match self {
            StyleValue::Opacity(v) => format!("{}", v.clamp(0.0, 1.0)),
            StyleValue::Display(d) => d.as_css().to_string(),
            StyleValue::PointerEvents(true) => "auto".to_string(),
            StyleValue::PointerEvents(false) => "none".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleCommand {
    pub element: &'static str,
    pub value: StyleValue,
}

/// One frame's worth of style writes; the common case fits inline.
pub type StyleBatch = SmallVec<[StyleCommand; 24]>;

#[inline]
pub fn push(batch: &mut StyleBatch, element: &'static str, value: StyleValue) {
    batch.push(StyleCommand { element, value });
}

/// Last value written for `(element, property)` in `batch`, if any.
pub fn last_value(batch: &[StyleCommand], element: &str, property: &str) -> Option<StyleValue> {
    batch
        .iter()
        .rev()
        .find(|c| c.element == element && c.value.property() == property)
        .map(|c| c.value)
}
