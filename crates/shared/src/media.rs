use crate::error::{BrowserError, BrowserResult};
use serde::{Deserialize, Serialize};
use std::{
    ops::Index,
    path::{Path, PathBuf},
    sync::Arc,
};

/// A single photo shown by the browser.
///
/// The `selected` flag travels with the item. Items are identified by their
/// position in the owning [`MediaList`], not by any field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub photo: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default)]
    pub selected: bool,
}

impl MediaItem {
    pub fn new(photo: impl Into<PathBuf>) -> Self {
        Self {
            photo: photo.into(),
            thumb: None,
            caption: None,
            selected: false,
        }
    }

    /// Path used for grid cells; falls back to the full photo.
    pub fn thumb_path(&self) -> &Path {
        self.thumb.as_deref().unwrap_or(&self.photo)
    }

    /// File name of the photo, for labels and the action sheet.
    pub fn file_name(&self) -> Option<&str> {
        self.photo.file_name().and_then(|name| name.to_str())
    }
}

/// Immutable, cheaply clonable list of media items.
///
/// Updates never touch an existing list: [`MediaList::with_selection`]
/// returns a fresh list that shares every untouched item with the old one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaList {
    items: Arc<[Arc<MediaItem>]>,
}

impl MediaList {
    pub fn new(items: Vec<MediaItem>) -> Self {
        items.into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Arc<MediaItem>> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[Arc<MediaItem>] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<MediaItem>> {
        self.items.iter()
    }

    /// Whether both lists are the same allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }

    pub fn check_index(&self, index: usize) -> BrowserResult<()> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(BrowserError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }

    /// Copy-on-write selection update.
    ///
    /// Returns the new list together with the replaced item. Every other slot
    /// of the new list is pointer-equal to the same slot of `self`.
    pub fn with_selection(
        &self,
        index: usize,
        selected: bool,
    ) -> BrowserResult<(MediaList, Arc<MediaItem>)> {
        self.check_index(index)?;

        let updated = Arc::new(MediaItem {
            selected,
            ..MediaItem::clone(&self.items[index])
        });

        let mut items: Vec<Arc<MediaItem>> = self.items.to_vec();
        items[index] = Arc::clone(&updated);

        Ok((
            MediaList {
                items: items.into(),
            },
            updated,
        ))
    }

    /// Indices of selected items, in list order.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.selected)
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.items.iter().filter(|item| item.selected).count()
    }
}

impl Default for MediaList {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl FromIterator<MediaItem> for MediaList {
    fn from_iter<I: IntoIterator<Item = MediaItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Arc::new).collect(),
        }
    }
}

impl Index<usize> for MediaList {
    type Output = MediaItem;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(count: usize) -> MediaList {
        (0..count)
            .map(|i| MediaItem::new(format!("/photos/{i}.jpg")))
            .collect()
    }

    #[test]
    fn test_with_selection_replaces_only_target() {
        let list = sample(4);
        let (updated, item) = list.with_selection(2, true).unwrap();

        assert!(item.selected);
        assert!(updated[2].selected);
        assert!(!list[2].selected, "old list must not change");
        assert!(!Arc::ptr_eq(&list.items()[2], &updated.items()[2]));

        for idx in [0, 1, 3] {
            assert!(Arc::ptr_eq(&list.items()[idx], &updated.items()[idx]));
        }
    }

    #[test]
    fn test_with_selection_out_of_range() {
        let list = sample(2);
        assert_eq!(
            list.with_selection(5, true).unwrap_err(),
            BrowserError::IndexOutOfRange { index: 5, len: 2 }
        );
    }

    #[test]
    fn test_selected_indices() {
        let list = sample(5);
        let (list, _) = list.with_selection(1, true).unwrap();
        let (list, _) = list.with_selection(4, true).unwrap();

        assert_eq!(list.selected_indices(), vec![1, 4]);
        assert_eq!(list.selected_count(), 2);
    }

    #[test]
    fn test_thumb_path_fallback() {
        let plain = MediaItem::new("/photos/a.jpg");
        assert_eq!(plain.thumb_path(), Path::new("/photos/a.jpg"));

        let thumbed = MediaItem {
            thumb: Some(PathBuf::from("/thumbs/a.jpg")),
            ..plain
        };
        assert_eq!(thumbed.thumb_path(), Path::new("/thumbs/a.jpg"));
    }
}
