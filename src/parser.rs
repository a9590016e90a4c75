use crate::error::{FeedError, Result};
use crate::model::Feed;
use std::fs;
use std::path::Path;

pub fn load(path: impl AsRef<Path>) -> Result<Feed> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| FeedError::read(path, e))?;
    log::debug!("read {} bytes from {}", text.len(), path.display());
    from_str(&text)
}

// syntax first, then schema, so the two failures stay distinguishable
pub fn from_str(text: &str) -> Result<Feed> {
    let value: serde_yaml::Value = serde_yaml::from_str(text).map_err(FeedError::Parse)?;
    serde_yaml::from_value(value).map_err(FeedError::Field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::SAMPLE_FEED as FEED;
    use std::io::Write;

    #[test]
    fn parse_feed() {
        let feed = from_str(FEED).expect("parse failed");
        assert_eq!(feed.title, "Rusty Waves");
        assert_eq!(feed.link, "https://example.com");
        assert_eq!(feed.items.len(), 2);
        assert_eq!(feed.items[0].title, "Episode 1");
        assert_eq!(feed.items[1].file, "/audio/ep2.mp3");
        assert_eq!(feed.items[1].length, "41000000");
    }

    #[test]
    fn empty_item_list() {
        let text = FEED.split("item:").next().unwrap_or_default().to_string() + "item: []\n";
        let feed = from_str(&text).expect("parse failed");
        assert!(feed.items.is_empty());
    }

    #[test]
    fn missing_title_is_field_error() {
        let text = FEED.replace("title: Rusty Waves\n", "");
        let err = from_str(&text).expect_err("title is required");
        assert!(matches!(err, FeedError::Field(_)));
        assert!(err.to_string().contains("title"), "{}", err);
    }

    #[test]
    fn episode_without_file_is_field_error() {
        let text = FEED.replace("    file: /audio/ep1.mp3\n", "");
        let err = from_str(&text).expect_err("file is required");
        assert!(matches!(err, FeedError::Field(_)));
        assert!(err.to_string().contains("file"), "{}", err);
    }

    #[test]
    fn float_length_is_field_error() {
        let text = FEED.replace("length: 41000000", "length: 4.1e7");
        assert!(matches!(from_str(&text), Err(FeedError::Field(_))));
    }

    #[test]
    fn missing_item_key_is_field_error() {
        let text = FEED.split("item:").next().unwrap_or_default();
        assert!(matches!(from_str(text), Err(FeedError::Field(_))));
    }

    #[test]
    fn malformed_yaml_is_parse_error() {
        let err = from_str("title: [unclosed\nlink: x").expect_err("bad yaml");
        assert!(matches!(err, FeedError::Parse(_)));
    }

    #[test]
    fn non_mapping_is_field_error() {
        assert!(matches!(from_str("- a\n- b\n"), Err(FeedError::Field(_))));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        let path = dir.path().join("feed.yaml");
        let mut f = fs::File::create(&path).expect("create failed");
        f.write_all(FEED.as_bytes()).expect("write failed");
        drop(f);

        let feed = load(&path).expect("load failed");
        assert_eq!(feed.items.len(), 2);
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        let err = load(dir.path().join("feed.yaml")).expect_err("no file");
        assert!(matches!(err, FeedError::NotFound { .. }));
    }
}
