use web_sys::{window, Storage};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Read a raw string entry, empty string when missing or storage unavailable.
pub fn load_string(key: &str) -> String {
    get_local_storage()
        .and_then(|storage| storage.get_item(key).ok().flatten())
        .unwrap_or_default()
}

/// Persist a raw string entry. Storage failures are logged, never propagated.
pub fn save_string(key: &str, value: &str) {
    match get_local_storage() {
        Some(storage) => {
            if storage.set_item(key, value).is_err() {
                log::error!("❌ Failed to write {} to localStorage", key);
            }
        }
        None => log::error!("❌ localStorage not available"),
    }
}
