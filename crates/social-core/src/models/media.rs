//! Media upload payloads.

use serde::{Deserialize, Serialize};

/// Response of the media upload endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadResult {
    /// Object key inside the media store.
    pub key: String,
    /// Public URL of the uploaded file.
    pub url: String,
}
