use serde::{Deserialize, Serialize};

/// A language entry, accepting the same bare-string shorthand as
/// [`crate::entities::skill::Skill`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "LanguageRepr")]
pub struct Language {
    pub name: Option<String>,
    pub level: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LanguageRepr {
    Shorthand(String),
    Record {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        level: Option<String>,
    },
}

impl From<LanguageRepr> for Language {
    fn from(repr: LanguageRepr) -> Self {
        match repr {
            LanguageRepr::Shorthand(name) => Language { name: Some(name), level: None },
            LanguageRepr::Record { name, level } => Language { name, level },
        }
    }
}
