use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A member to find by their institutional email address or their Discord ID.
#[derive(Getters, Debug, Serialize, Deserialize)]
pub struct MemberToLookUp {
    identifier: String,
}

impl MemberToLookUp {
    #[cfg(any(test, feature = "test"))]
    pub fn new(identifier: String) -> Self {
        Self { identifier }
    }
}
