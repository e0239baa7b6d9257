use serde::{Deserialize, Serialize};

/// Category record as supplied by the external catalog source.
///
/// `title`, `metaDescription` and `url` are genuinely optional upstream, so
/// they are modeled as `Option` rather than empty-string sentinels. A title
/// of `"0"` is present and numeric, not absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCategory {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub children: Vec<RawCategory>,
}

/// Display-ready category node consumed by the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayNode {
    pub name: String,
    pub id: i64,
    pub image: String,
    pub order: i64,
    pub children: Vec<DisplayNode>,
    pub show_on_home: bool,
}
