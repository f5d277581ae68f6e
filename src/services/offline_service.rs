use crate::models::LocalUserData;
use crate::utils::storage::{load_from_storage, remove_from_storage};
use crate::utils::STORAGE_KEY_USER_DATA;

/// Offline user data of the signed-in user, if any. The sign-in flow
/// (outside this core) is the only writer.
pub fn get_offline_user_data() -> Option<LocalUserData> {
    load_from_storage::<LocalUserData>(STORAGE_KEY_USER_DATA)
}

/// Drop the stored identity. Only the settings/logout flow calls this;
/// the home and recovery flows treat the identity as read-only.
pub fn delete_offline_user_data() -> Result<(), String> {
    remove_from_storage(STORAGE_KEY_USER_DATA)
}
