//! Image reference model.
//!
//! Only the URI is stored; core never touches the referenced bytes.

use crate::model::marker::MarkerId;
use serde::{Deserialize, Serialize};

/// Store-generated identifier of an image row.
pub type ImageId = i64;

/// A persisted reference to externally stored photo content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub id: ImageId,
    /// Opaque location string returned by the image picker.
    pub uri: String,
    /// Serialized as `markerId` to match the stored column name.
    #[serde(rename = "markerId")]
    pub marker_id: MarkerId,
}

impl Image {
    pub fn new(id: ImageId, uri: impl Into<String>, marker_id: MarkerId) -> Self {
        Self {
            id,
            uri: uri.into(),
            marker_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Image;

    #[test]
    fn marker_id_uses_column_name_in_json() {
        let image = Image::new(3, "file://x.jpg", 1);
        let json = serde_json::to_value(&image).unwrap();
        assert_eq!(json["markerId"], 1);
        assert_eq!(json["uri"], "file://x.jpg");

        let back: Image = serde_json::from_value(json).unwrap();
        assert_eq!(back, image);
    }
}
