mod common;

use common::core::config::IMAGE_PATHS;
use common::core::gallery::*;
use common::core::style::*;

#[derive(Default)]
struct RecordingContainer {
    tiles: Vec<GalleryEntry>,
    clears: usize,
    fail_path: Option<&'static str>,
}

impl GalleryContainer for RecordingContainer {
    fn clear(&mut self) {
        self.clears += 1;
        self.tiles.clear();
    }

    fn append(&mut self, entry: &GalleryEntry) -> anyhow::Result<()> {
        if self.fail_path == Some(entry.path.as_str()) {
            anyhow::bail!("cannot create tile");
        }
        self.tiles.push(entry.clone());
        Ok(())
    }
}

#[test]
fn populates_one_tile_per_image_in_order() {
    let mut c = RecordingContainer::default();
    assert_eq!(populate(&mut c, &IMAGE_PATHS), 17);
    let paths: Vec<&str> = c.tiles.iter().map(|t| t.path.as_str()).collect();
    assert_eq!(paths, IMAGE_PATHS.to_vec());
    assert_eq!(c.tiles[0].label, "Portfolio image 1");
    assert_eq!(c.tiles[16].label, "Portfolio image 17");
    assert_eq!(
        c.tiles[4].background(),
        "url('./assets/PortfolioImages/portfolio_im5.jpeg')"
    );
}

#[test]
fn repopulating_replaces_previous_tiles() {
    let mut c = RecordingContainer::default();
    populate(&mut c, &IMAGE_PATHS);
    populate(&mut c, &IMAGE_PATHS);
    assert_eq!(c.clears, 2);
    assert_eq!(c.tiles.len(), 17);
}

#[test]
fn failing_tile_is_skipped() {
    let mut c = RecordingContainer {
        fail_path: Some(IMAGE_PATHS[3]),
        ..Default::default()
    };
    assert_eq!(populate(&mut c, &IMAGE_PATHS), 16);
    assert!(c.tiles.iter().all(|t| t.path != IMAGE_PATHS[3]));
    assert_eq!(c.tiles[3].path, IMAGE_PATHS[4]);
    assert_eq!(c.tiles[3].label, "Portfolio image 5");
}

#[test]
fn empty_path_list_clears_container() {
    let mut c = RecordingContainer::default();
    populate(&mut c, &IMAGE_PATHS);
    let none: [&str; 0] = [];
    assert_eq!(populate(&mut c, &none), 0);
    assert!(c.tiles.is_empty());
}

#[test]
fn style_values_render_as_css() {
    assert_eq!(StyleValue::Opacity(0.25).css_value(), "0.25");
    assert_eq!(StyleValue::Opacity(1.5).css_value(), "1");
    assert_eq!(StyleValue::Opacity(-0.5).css_value(), "0");
    assert_eq!(StyleValue::Display(Display::Flex).css_value(), "flex");
    assert_eq!(StyleValue::PointerEvents(true).css_value(), "auto");
    assert_eq!(StyleValue::PointerEvents(false).property(), "pointer-events");

    let mut batch = StyleBatch::new();
    push(&mut batch, "a", StyleValue::Opacity(0.0));
    push(&mut batch, "a", StyleValue::Display(Display::None));
    push(&mut batch, "a", StyleValue::Opacity(1.0));
    assert_eq!(last_value(&batch, "a", "opacity"), Some(StyleValue::Opacity(1.0)));
    assert_eq!(last_value(&batch, "b", "opacity"), None);
}

#[derive(Default)]
struct OpLog(Vec<&'static str>);

impl GalleryContainer for OpLog {
    fn clear(&mut self) {
        self.0.push("clear");
    }
    fn append(&mut self, _entry: &GalleryEntry) -> anyhow::Result<()> {
        self.0.push("append");
        Ok(())
    }
}

#[test]
fn each_load_clears_before_appending() {
    let mut log = OpLog::default();
    populate(&mut log, &IMAGE_PATHS[..3]);
    populate(&mut log, &IMAGE_PATHS[..2]);
    assert_eq!(
        log.0,
        ["clear", "append", "append", "append", "clear", "append", "append"]
    );
}
