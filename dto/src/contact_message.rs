use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A message left by a visitor through the contact form.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct ContactMessage {
    name: String,
    email: String,
    message: String,
}

impl ContactMessage {
    pub fn new(name: String, email: String, message: String) -> Self {
        Self {
            name,
            email,
            message,
        }
    }
}
