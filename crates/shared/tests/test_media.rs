#[cfg(test)]
mod tests {
    use shared::{MediaItem, MediaList};
    use std::path::PathBuf;

    #[test]
    fn test_media_item_defaults_from_json() {
        let item: MediaItem = serde_json::from_str(r#"{ "photo": "/photos/sunset.jpg" }"#).unwrap();

        assert_eq!(item.photo, PathBuf::from("/photos/sunset.jpg"));
        assert!(item.thumb.is_none());
        assert!(item.caption.is_none());
        assert!(!item.selected);
    }

    #[test]
    fn test_media_item_full_json() {
        let json = r#"{
            "photo": "/photos/beach.jpg",
            "thumb": "/thumbs/beach.jpg",
            "caption": "Beach",
            "selected": true
        }"#;
        let item: MediaItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.caption.as_deref(), Some("Beach"));
        assert_eq!(item.thumb, Some(PathBuf::from("/thumbs/beach.jpg")));
        assert!(item.selected);
        assert_eq!(item.file_name(), Some("beach.jpg"));
    }

    #[test]
    fn test_media_list_clone_shares_storage() {
        let list = MediaList::new(vec![MediaItem::new("a.jpg"), MediaItem::new("b.jpg")]);
        let copy = list.clone();

        assert!(list.ptr_eq(&copy));

        let (updated, _) = list.with_selection(0, true).unwrap();
        assert!(!list.ptr_eq(&updated));
        assert_eq!(updated.len(), 2);
    }
}
