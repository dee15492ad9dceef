//! Response types for speech synthesis.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use uuid::Uuid;

/// Response from a synthesis operation.
#[derive(Clone)]
pub struct SpeechResponse {
    /// Request ID this response corresponds to.
    pub request_id: Uuid,
    /// Raw audio bytes as returned by the service.
    pub audio: Vec<u8>,
    /// Content type of the audio payload, e.g. `audio/mpeg`.
    pub content_type: String,
}

impl std::fmt::Debug for SpeechResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechResponse")
            .field("request_id", &self.request_id)
            .field("audio_len", &self.audio.len())
            .field("content_type", &self.content_type)
            .finish()
    }
}

impl SpeechResponse {
    /// Create a new synthesis response.
    pub fn new(request_id: Uuid, audio: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            request_id,
            audio,
            content_type: content_type.into(),
        }
    }

    /// The audio payload encoded as standard base64.
    pub fn audio_base64(&self) -> String {
        STANDARD.encode(&self.audio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64_round_trips_the_audio_bytes() {
        let response = SpeechResponse::new(Uuid::new_v4(), vec![0x49, 0x44, 0x33], "audio/mpeg");
        let encoded = response.audio_base64();
        assert_eq!(STANDARD.decode(encoded).unwrap(), response.audio);
    }
}
