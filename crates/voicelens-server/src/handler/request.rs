//! Request parameter extraction.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;
use url::Url;
use voicelens_core::ocr::ImageSource;
use voicelens_core::{Error, Result};

/// Input fields of the voicelens route, accepted both as query
/// parameters and as JSON body fields. Query parameters take precedence.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct VoicelensParams {
    /// Base64-encoded image bytes.
    #[serde(default)]
    pub image: Option<String>,
    /// URL of an image the recognizer can fetch itself.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Text message for the chat passthrough.
    #[serde(default)]
    pub message: Option<String>,
}

impl VoicelensParams {
    /// Merges query parameters over body fields, field by field.
    pub fn merged(query: Self, body: Option<Self>) -> Self {
        let body = body.unwrap_or_default();
        Self {
            image: query.image.or(body.image),
            image_url: query.image_url.or(body.image_url),
            message: query.message.or(body.message),
        }
    }

    /// Whether the request carried no usable input at all.
    pub fn is_empty(&self) -> bool {
        self.image.is_none() && self.image_url.is_none() && self.message.is_none()
    }

    /// Decodes the image input into a provider source, if present.
    ///
    /// Inline base64 takes precedence over a URL when both are supplied.
    pub fn image_source(&self) -> Result<Option<ImageSource>> {
        if let Some(encoded) = &self.image {
            let bytes = STANDARD.decode(encoded).map_err(|err| {
                Error::serialization()
                    .with_message("image field is not valid base64")
                    .with_source(err)
            })?;
            return Ok(Some(ImageSource::Bytes(bytes)));
        }

        if let Some(raw_url) = &self.image_url {
            let url = Url::parse(raw_url).map_err(|err| {
                Error::serialization()
                    .with_message("image_url field is not a valid URL")
                    .with_source(err)
            })?;
            return Ok(Some(ImageSource::Url(url)));
        }

        Ok(None)
    }

    /// The message field, with empty strings treated as absent.
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .filter(|message| !message.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_fields_win_over_body_fields() {
        let query = VoicelensParams {
            message: Some("from query".to_string()),
            ..Default::default()
        };
        let body = VoicelensParams {
            message: Some("from body".to_string()),
            image: Some(STANDARD.encode(b"img")),
            ..Default::default()
        };

        let merged = VoicelensParams::merged(query, Some(body));
        assert_eq!(merged.message.as_deref(), Some("from query"));
        assert!(merged.image.is_some());
    }

    #[test]
    fn invalid_base64_image_is_a_serialization_error() {
        let params = VoicelensParams {
            image: Some("not base64 !!".to_string()),
            ..Default::default()
        };
        let error = params.image_source().unwrap_err();
        assert_eq!(error.kind(), voicelens_core::ErrorKind::Serialization);
    }

    #[test]
    fn inline_image_wins_over_image_url() {
        let params = VoicelensParams {
            image: Some(STANDARD.encode(b"img")),
            image_url: Some("https://example.com/a.png".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            params.image_source().unwrap(),
            Some(ImageSource::Bytes(_))
        ));
    }

    #[test]
    fn blank_message_counts_as_absent() {
        let params = VoicelensParams {
            message: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(params.message().is_none());
    }
}
