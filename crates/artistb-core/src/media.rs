//! Image references embedded in profile, artwork and exhibition rows.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::row::{Row, coerce_string};

/// A remote image with optional intrinsic size and alt text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl ImageRef {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            width: None,
            height: None,
            alt: None,
        }
    }

    /// Reads an image from a column value.
    ///
    /// A bare string must be an absolute `http(s)` URL. An object may carry
    /// the URL under `url` or `src`, alt text under `alt` or `altText`, and
    /// numeric `width` / `height`.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(url) if url.starts_with("http") => Some(Self::new(url.as_str())),
            Value::Object(obj) => {
                let url = obj
                    .get("url")
                    .and_then(coerce_string)
                    .or_else(|| obj.get("src").and_then(coerce_string))
                    .filter(|url| url.starts_with("http"))?;
                let alt = obj
                    .get("alt")
                    .and_then(coerce_string)
                    .or_else(|| obj.get("altText").and_then(coerce_string));
                Some(Self {
                    url,
                    width: obj.get("width").and_then(dimension),
                    height: obj.get("height").and_then(dimension),
                    alt,
                })
            }
            _ => None,
        }
    }
}

fn dimension(value: &Value) -> Option<u32> {
    value.as_u64().and_then(|n| u32::try_from(n).ok())
}

/// Returns the first alias that holds a usable image.
pub fn image_by_keys(row: &Row, keys: &[&str]) -> Option<ImageRef> {
    keys.iter()
        .filter_map(|key| row.get(*key))
        .find_map(ImageRef::from_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_image_requires_http() {
        assert_eq!(
            ImageRef::from_value(&json!("https://cdn.example.com/a.jpg")),
            Some(ImageRef::new("https://cdn.example.com/a.jpg"))
        );
        assert_eq!(ImageRef::from_value(&json!("/local/a.jpg")), None);
    }

    #[test]
    fn test_object_image_with_src_and_alt_text() {
        let image = ImageRef::from_value(&json!({
            "src": "https://cdn.example.com/b.jpg",
            "altText": "Oil on linen",
            "width": 1200,
            "height": 900
        }))
        .unwrap();
        assert_eq!(image.url, "https://cdn.example.com/b.jpg");
        assert_eq!(image.alt.as_deref(), Some("Oil on linen"));
        assert_eq!((image.width, image.height), (Some(1200), Some(900)));
    }

    #[test]
    fn test_arrays_are_not_images() {
        assert_eq!(
            ImageRef::from_value(&json!(["https://cdn.example.com/c.jpg"])),
            None
        );
    }

    #[test]
    fn test_image_by_keys_skips_unusable_aliases() {
        let row = json!({
            "image_url": "",
            "featured_image": {"url": "ftp://nope"},
            "thumbnail": "https://cdn.example.com/t.jpg"
        });
        let row = row.as_object().cloned().unwrap();
        let image = image_by_keys(&row, &["image_url", "featured_image", "thumbnail"]);
        assert_eq!(image.map(|i| i.url), Some("https://cdn.example.com/t.jpg".to_string()));
    }
}
