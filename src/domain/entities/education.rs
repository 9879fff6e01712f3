use serde::{Deserialize, Serialize};

/// One education entry, same tolerance rules as [`crate::entities::experience::Experience`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub degree: Option<String>,
    pub school: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: bool,
    pub description: Option<String>,
}
