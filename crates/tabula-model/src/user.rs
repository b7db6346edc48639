use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a user.
pub type UserId = Uuid;

/// A user known to the store layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable identifier, used as the key in the user store.
    pub id: UserId,
    /// Login / contact email.
    #[serde(default)]
    pub email: String,
    /// Display name shown in the UI.
    #[serde(default)]
    pub display_name: String,
}

impl User {
    /// Construct a user with a freshly generated id.
    pub fn new(email: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            display_name: display_name.into(),
        }
    }
}
