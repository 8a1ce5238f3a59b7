//! localStorage persistence for the admin data and theme.
//!
//! The admin data is stored as one camelCase JSON document under
//! [`RESUME_STORAGE_KEY`]. Missing or unreadable data falls back to the
//! bundled defaults instead of failing.

use serde::{Serialize, de::DeserializeOwned};
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, Url};

use super::dom;
use crate::config::{EXPORT_FILE_NAME, RESUME_STORAGE_KEY, THEME_STORAGE_KEY};
use crate::core::admin::bundled_data;
use crate::core::error::StorageError;
use crate::models::{ResumeData, Theme};

/// Read and deserialize a localStorage entry.
///
/// Returns `Ok(None)` if the key doesn't exist.
pub fn get<T: DeserializeOwned>(key: &str) -> Result<Option<T>, StorageError> {
    let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
    let Some(json) = storage.get_item(key).ok().flatten() else {
        return Ok(None);
    };
    serde_json::from_str(&json)
        .map(Some)
        .map_err(|e| StorageError::Parse(e.to_string()))
}

/// Serialize and store data in localStorage.
pub fn set<T: Serialize>(key: &str, data: &T) -> Result<(), StorageError> {
    let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
    let json = serde_json::to_string(data).map_err(|e| StorageError::Serialize(e.to_string()))?;
    storage
        .set_item(key, &json)
        .map_err(|_| StorageError::Write)
}

// =============================================================================
// Resume data
// =============================================================================

/// Load saved admin data, falling back to the bundled dataset.
pub fn load_resume() -> ResumeData {
    match get::<ResumeData>(RESUME_STORAGE_KEY) {
        Ok(Some(data)) => return data,
        Ok(None) => {}
        Err(_err) => {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::warn_1(&format!("Ignoring saved resume data: {}", _err).into());
        }
    }

    bundled_data().unwrap_or_else(|_err| {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::error_1(&format!("Bundled resume data is invalid: {}", _err).into());
        ResumeData::default()
    })
}

pub fn save_resume(data: &ResumeData) -> Result<(), StorageError> {
    set(RESUME_STORAGE_KEY, data)
}

/// Pretty-printed JSON used for export.
pub fn export_json(data: &ResumeData) -> Result<String, StorageError> {
    serde_json::to_string_pretty(data).map_err(|e| StorageError::Serialize(e.to_string()))
}

/// Download the admin data as [`EXPORT_FILE_NAME`].
pub fn export_resume(data: &ResumeData) -> Result<(), StorageError> {
    let json = export_json(data)?;
    download(&json, "application/json", EXPORT_FILE_NAME)
        .map_err(|e| StorageError::Export(format!("{:?}", e)))
}

fn download(contents: &str, mime: &str, file_name: &str) -> Result<(), JsValue> {
    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;

    let url = Url::create_object_url_with_blob(&blob)?;
    let result = dom::click_download(&url, file_name);
    Url::revoke_object_url(&url)?;
    result
}

// =============================================================================
// Theme
// =============================================================================

/// Raw stored theme preference, if any. Parse with [`Theme::resolve`].
pub fn stored_theme() -> Option<String> {
    dom::local_storage()?.get_item(THEME_STORAGE_KEY).ok().flatten()
}

pub fn save_theme(theme: Theme) -> Result<(), StorageError> {
    let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
    storage
        .set_item(THEME_STORAGE_KEY, theme.as_str())
        .map_err(|_| StorageError::Write)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn clear(key: &str) {
        if let Some(storage) = dom::local_storage() {
            let _ = storage.remove_item(key);
        }
    }

    #[wasm_bindgen_test]
    fn test_save_then_load_resume() {
        clear(RESUME_STORAGE_KEY);
        let data = ResumeData {
            projects: bundled_data().unwrap().projects,
            ..Default::default()
        };

        save_resume(&data).unwrap();
        assert_eq!(load_resume(), data);
        clear(RESUME_STORAGE_KEY);
    }

    #[wasm_bindgen_test]
    fn test_corrupt_resume_falls_back_to_bundled() {
        let storage = dom::local_storage().unwrap();
        storage.set_item(RESUME_STORAGE_KEY, "{not json").unwrap();
        assert_eq!(load_resume(), bundled_data().unwrap());
        clear(RESUME_STORAGE_KEY);
    }

    #[wasm_bindgen_test]
    fn test_theme_persistence() {
        clear(THEME_STORAGE_KEY);
        assert_eq!(stored_theme(), None);
        save_theme(Theme::Dark).unwrap();
        assert_eq!(stored_theme().as_deref(), Some("dark"));
        assert_eq!(Theme::resolve(stored_theme().as_deref(), false), Theme::Dark);
        clear(THEME_STORAGE_KEY);
    }
}
