use serde::{Deserialize, Serialize};

/// Offline-persisted identity of the signed-in user.
/// Read-only for the home and recovery flows; only the settings/logout
/// flow deletes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocalUserData {
    #[serde(rename = "uniId")]
    pub uni_id: String,
}
