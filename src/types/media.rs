//! Media upload types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A previously registered media upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaUpload {
    /// Media identifier
    #[serde(default)]
    pub media_id: Option<String>,
    /// Media type (e.g. `video`)
    #[serde(default)]
    pub media_type: Option<String>,
    /// Processing status (e.g. `registered`, `processing`, `succeeded`)
    #[serde(default)]
    pub status: Option<String>,
}

/// Result of registering a new media upload.
///
/// The caller uploads the file to `upload_url` with `upload_parameters` as
/// form fields, then references `media_id` when creating the pin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterMediaUpload {
    /// Media identifier
    #[serde(default)]
    pub media_id: Option<String>,
    /// Media type
    #[serde(default)]
    pub media_type: Option<String>,
    /// URL to upload the file to
    #[serde(default)]
    pub upload_url: Option<String>,
    /// Form parameters to include with the upload
    #[serde(default)]
    pub upload_parameters: Option<HashMap<String, String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_media_upload_decodes() {
        let upload: RegisterMediaUpload = serde_json::from_value(json!({
            "media_id": "1023",
            "media_type": "video",
            "upload_url": "https://pinterest-media-upload.s3-accelerate.amazonaws.com/",
            "upload_parameters": {"x-amz-date": "20240601T000000Z"}
        }))
        .unwrap();

        assert_eq!(upload.media_id.as_deref(), Some("1023"));
        assert_eq!(
            upload.upload_parameters.unwrap()["x-amz-date"],
            "20240601T000000Z"
        );
    }
}
