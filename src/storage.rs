//! Public URLs for images kept in object storage.
//!
//! Locations store an opaque `image_path`; this turns it into something a
//! browser can fetch.

use crate::config::StorageConfig;

/// Resolve an image path to a public URL.
///
/// Absolute `http(s)://` URLs and `/`-rooted paths pass through. Relative
/// paths are served from the public bucket; without a configured storage URL
/// they resolve to an empty string.
pub fn public_image_url(storage: &StorageConfig, path: &str) -> String {
    let safe_path = strip_quotes(path.trim());
    if safe_path.is_empty() {
        return String::new();
    }

    let lower = safe_path.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") || safe_path.starts_with('/') {
        return safe_path.to_string();
    }

    let Some(base_url) = storage.public_url.as_deref() else {
        return String::new();
    };

    let encoded_path = safe_path
        .split('/')
        .map(encode_component)
        .collect::<Vec<_>>()
        .join("/");

    format!(
        "{}/storage/v1/object/public/{}/{}",
        base_url.trim_end_matches('/'),
        storage.bucket,
        encoded_path
    )
}

/// Drop one leading and one trailing quote character
fn strip_quotes(value: &str) -> &str {
    let value = value
        .strip_prefix('"')
        .or_else(|| value.strip_prefix('\''))
        .unwrap_or(value);
    value
        .strip_suffix('"')
        .or_else(|| value.strip_suffix('\''))
        .unwrap_or(value)
}

/// Percent-encode a path segment, leaving URI-component safe characters alone
fn encode_component(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => encoded.push(byte as char),
            other => encoded.push_str(&format!("%{:02X}", other)),
        }
    }
    encoded
}
