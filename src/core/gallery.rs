/// One selectable gallery tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryEntry {
    pub path: String,
    pub label: String,
}

impl GalleryEntry {
    pub fn background(&self) -> String {
        format!("url('{}')", self.path)
    }
}

/// Entries for `paths` in input order, labelled from 1.
pub fn gallery_entries<S: AsRef<str>>(paths: &[S]) -> Vec<GalleryEntry> {
    paths
        .iter()
        .enumerate()
        .map(|(i, p)| GalleryEntry {
            path: p.as_ref().to_string(),
            label: format!("Portfolio image {}", i + 1),
        })
        .collect()
}

/// Where gallery tiles are placed; the page implements this over a DOM
/// element.
pub trait GalleryContainer {
    fn clear(&mut self);
    fn append(&mut self, entry: &GalleryEntry) -> anyhow::Result<()>;
}

/// Replaces the container's content with one tile per path.
///
/// A tile that fails to append is logged and skipped; the rest still load.
/// Returns the number of tiles appended.
pub fn populate<C: GalleryContainer + ?Sized, S: AsRef<str>>(container: &mut C, paths: &[S]) -> usize {
    container.clear();
    let mut appended = 0;
    for entry in gallery_entries(paths) {
        match container.append(&entry) {
            Ok(()) => appended += 1,
            Err(e) => log::warn!("[gallery] skipping {}: {:?}", entry.path, e),
        }
    }
    log::info!("[gallery] {} of {} tiles loaded", appended, paths.len());
    appended
}
