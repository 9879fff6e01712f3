use serde::{Deserialize, Serialize};

/// One employment entry. Every field is optional so that entries written by
/// older clients keep decoding as the shape evolves; unknown fields are
/// ignored. Dates are "YYYY-MM" tokens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: bool,
    pub description: Option<String>,
}
