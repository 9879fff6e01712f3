use serde::{Deserialize, Serialize};

/// A skill entry. Legacy blobs may hold a bare string (`"Python"`) instead of
/// a record; that shorthand is normalized into the record form while
/// deserializing, so the rest of the crate only ever sees `Skill`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "SkillRepr")]
pub struct Skill {
    pub name: Option<String>,
    pub level: Option<String>,
}

/// Wire/stored shape: full record or bare-string shorthand.
#[derive(Deserialize)]
#[serde(untagged)]
enum SkillRepr {
    Shorthand(String),
    Record {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        level: Option<String>,
    },
}

impl From<SkillRepr> for Skill {
    fn from(repr: SkillRepr) -> Self {
        match repr {
            SkillRepr::Shorthand(name) => Skill { name: Some(name), level: None },
            SkillRepr::Record { name, level } => Skill { name, level },
        }
    }
}
