use serde::{Deserialize, Serialize};

/// One certification entry; `title` is the legacy alias for `name`.
/// `date` is a "YYYY-MM" token like the period fields elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    #[serde(alias = "title")]
    pub name: Option<String>,
    pub issuer: Option<String>,
    pub date: Option<String>,
    pub url: Option<String>,
}
