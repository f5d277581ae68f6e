use serde::{de::DeserializeOwned, Serialize};
use web_sys::{window, Storage};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let storage = get_local_storage().ok_or("localStorage is not available")?;
    let json = serde_json::to_string(value)
        .map_err(|e| format!("Serialization error: {}", e))?;
    storage
        .set_item(key, &json)
        .map_err(|_| "Could not write to localStorage".to_string())?;
    Ok(())
}

pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = get_local_storage()?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

pub fn remove_from_storage(key: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("localStorage is not available")?;
    storage
        .remove_item(key)
        .map_err(|_| "Could not remove from localStorage".to_string())?;
    Ok(())
}

// These need a real localStorage, so they run in a browser only.
#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn save_load_remove_round_trip() {
        save_to_storage("storage_test_key", &"value".to_string()).unwrap();
        assert_eq!(
            load_from_storage::<String>("storage_test_key"),
            Some("value".to_string())
        );

        remove_from_storage("storage_test_key").unwrap();
        assert_eq!(load_from_storage::<String>("storage_test_key"), None);
    }

    #[wasm_bindgen_test]
    fn loading_a_missing_key_yields_none() {
        assert_eq!(load_from_storage::<String>("storage_test_never_set"), None);
    }
}
