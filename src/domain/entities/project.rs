use serde::{Deserialize, Serialize};

/// One project entry. Older rows used `title` where newer ones use `name`;
/// the alias keeps both decoding into the same field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    #[serde(alias = "title")]
    pub name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub technologies: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: bool,
}
