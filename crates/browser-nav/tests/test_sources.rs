#[cfg(test)]
mod tests {
    use browser_nav::{MediaSource, SourceError, load, load_sync};
    use std::fs;

    fn touch(dir: &std::path::Path, name: &str) {
        fs::write(dir.join(name), b"not really an image").unwrap();
    }

    #[tokio::test]
    async fn test_directory_scan_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "img10.jpg");
        touch(dir.path(), "img2.png");
        touch(dir.path(), "readme.txt");
        touch(dir.path(), ".hidden.jpg");

        let loaded = load(dir.path().to_path_buf(), false).await.unwrap();
        let names: Vec<_> = loaded
            .media
            .iter()
            .filter_map(|item| item.file_name().map(str::to_string))
            .collect();

        assert_eq!(names, vec!["img2.png", "img10.jpg"]);
        assert_eq!(loaded.start_index, None);
    }

    #[tokio::test]
    async fn test_directory_scan_includes_hidden() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), ".hidden.jpg");
        touch(dir.path(), "shown.jpg");

        let loaded = load(dir.path().to_path_buf(), true).await.unwrap();
        assert_eq!(loaded.media.len(), 2);
    }

    #[test]
    fn test_photo_source_starts_at_photo() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.jpg");
        touch(dir.path(), "b.jpg");
        touch(dir.path(), "c.jpg");

        let photo = dir.path().join("b.jpg");
        assert_eq!(
            MediaSource::detect(&photo).unwrap(),
            MediaSource::Photo(photo.clone())
        );

        let loaded = load_sync(&photo, false).unwrap();
        assert_eq!(loaded.media.len(), 3);
        assert_eq!(loaded.start_index, Some(1));
    }

    #[test]
    fn test_photo_source_with_bare_file_name() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.jpg");
        touch(dir.path(), "b.jpg");

        std::env::set_current_dir(dir.path()).unwrap();
        let loaded = load_sync(std::path::Path::new("b.jpg"), false).unwrap();

        assert_eq!(loaded.media.len(), 2);
        assert_eq!(loaded.start_index, Some(1));
    }

    #[test]
    fn test_manifest_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("album.json");
        fs::write(
            &manifest,
            r#"[
                { "photo": "one.jpg", "caption": "One" },
                { "photo": "/abs/two.jpg", "thumb": "thumbs/two.jpg", "selected": true }
            ]"#,
        )
        .unwrap();

        let loaded = load_sync(&manifest, false).unwrap();
        let media = loaded.media;

        assert_eq!(media.len(), 2);
        assert_eq!(media[0].photo, dir.path().join("one.jpg"));
        assert_eq!(media[0].caption.as_deref(), Some("One"));
        assert_eq!(media[1].photo, std::path::PathBuf::from("/abs/two.jpg"));
        assert_eq!(media[1].thumb, Some(dir.path().join("thumbs/two.jpg")));
        assert!(media[1].selected);
    }

    #[test]
    fn test_invalid_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("broken.json");
        fs::write(&manifest, "{ not json").unwrap();

        assert!(matches!(
            load_sync(&manifest, false),
            Err(SourceError::Manifest { .. })
        ));
    }

    #[test]
    fn test_empty_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "notes.txt");

        assert!(matches!(
            load_sync(dir.path(), false),
            Err(SourceError::NoPhotos(_))
        ));
    }

    #[test]
    fn test_unsupported_source() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "notes.txt");

        assert!(matches!(
            MediaSource::detect(&dir.path().join("notes.txt")),
            Err(SourceError::Unsupported(_))
        ));
    }
}
