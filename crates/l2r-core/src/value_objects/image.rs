//! Inline image payload
//!
//! Images travel to the backend as `data:<mime>;base64,<payload>` URIs.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::DomainError;

/// Raw image bytes with their MIME type
#[derive(Clone, PartialEq, Eq)]
pub struct ImageData {
    mime: String,
    bytes: Vec<u8>,
}

impl ImageData {
    pub fn new(mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime: mime.into(),
            bytes,
        }
    }

    /// JPEG image, the format the camera picker produces
    pub fn jpeg(bytes: Vec<u8>) -> Self {
        Self::new("image/jpeg", bytes)
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Encode as a base64 data URI
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }

    /// Decode a base64 data URI
    pub fn from_data_uri(uri: &str) -> Result<Self, DomainError> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or_else(|| DomainError::InvalidImage("missing data: prefix".to_string()))?;
        let (mime, payload) = rest
            .split_once(";base64,")
            .ok_or_else(|| DomainError::InvalidImage("not a base64 data URI".to_string()))?;
        if mime.is_empty() {
            return Err(DomainError::InvalidImage("missing MIME type".to_string()));
        }
        let bytes = STANDARD
            .decode(payload)
            .map_err(|e| DomainError::InvalidImage(e.to_string()))?;
        Ok(Self::new(mime, bytes))
    }
}

impl std::fmt::Debug for ImageData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageData")
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}
