use serde::{Deserialize, Serialize};

/// A single catalog entry. Every field is free text on the wire; fields
/// absent from a create payload decode to the empty string. `image_url` is a
/// reference to an externally hosted image and is never fetched or checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub image_url: String,
}
