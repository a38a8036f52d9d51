use std::collections::HashMap;
use std::path::Path;

/// Resolves a logical key name to a spreadsheet id via the keys file.
///
/// Lookup never fails: an unreadable file, a malformed file, or an absent
/// name all yield an empty id, which the caller surfaces as a connection
/// failure downstream.
pub fn spreadsheet_key(keys_path: &Path, key_name: &str) -> String {
    let contents = match std::fs::read_to_string(keys_path) {
        Ok(contents) => contents,
        Err(err) => {
            tracing::warn!("Keys file {} is unreadable: {err}", keys_path.display());
            return String::new();
        }
    };

    let keys: HashMap<String, String> = match serde_json::from_str(&contents) {
        Ok(keys) => keys,
        Err(err) => {
            tracing::warn!(
                "Keys file {} is not a JSON object of strings: {err}",
                keys_path.display()
            );
            return String::new();
        }
    };

    keys.get(key_name).cloned().unwrap_or_default()
}
