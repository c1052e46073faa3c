use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single catalog entry. Ids are opaque strings; freshly created records
/// get a random UUID, callers may bring their own on create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coffee {
    #[serde(default)]
    pub id: String,
    pub name: String,
}

impl Coffee {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
        }
    }

    pub fn with_id(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
