use serde::{Deserialize, Deserializer};

/// Podcast description as read from `feed.yaml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Feed {
    pub link: String,
    pub title: String,
    pub format: String,
    pub subtitle: String,
    pub author: String,
    pub description: String,
    pub image: String,
    pub language: String,
    pub category: String,
    #[serde(rename = "item")]
    pub items: Vec<Item>,
}

/// One episode.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Item {
    pub title: String,
    pub description: String,
    #[serde(deserialize_with = "scalar_text")]
    pub duration: String,
    #[serde(deserialize_with = "scalar_text")]
    pub published: String,
    pub file: String,
    #[serde(deserialize_with = "scalar_text")]
    pub length: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    UInt(u64),
}

// free-form fields: strings pass through, integers keep their digits, floats are refused
fn scalar_text<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Scalar::deserialize(de)? {
        Scalar::Text(s) => s,
        Scalar::Int(n) => n.to_string(),
        Scalar::UInt(n) => n.to_string(),
    })
}
