//! Synthesis result model and SSML assembly.

mod ssml;

pub use ssml::build_ssml;
use uuid::Uuid;
use voicelens_core::speech::SpeechResponse;
use voicelens_core::{Error, Result};

/// Terminal reason of a synthesis call, mirroring the speech SDK's
/// result-reason enum as far as the pipeline consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultReason {
    /// Synthesis completed and audio data is available.
    SynthesizingAudioCompleted,
    /// Synthesis was canceled by the service.
    Canceled,
}

/// Details reported with a canceled synthesis.
#[derive(Debug, Clone)]
pub struct CancellationDetails {
    /// Coarse cancellation reason, e.g. `Error`.
    pub reason: String,
    /// Service-provided error detail.
    pub error_details: String,
}

/// Outcome of a synthesis call.
///
/// `audio` is only populated when `reason` is
/// [`ResultReason::SynthesizingAudioCompleted`]; a canceled result carries
/// [`CancellationDetails`] instead.
#[derive(Debug, Clone)]
pub struct SynthesisResult {
    /// Why the call terminated.
    pub reason: ResultReason,
    /// Synthesized audio bytes.
    pub audio: Vec<u8>,
    /// Content type of the audio payload.
    pub content_type: String,
    /// Cancellation details, present when `reason` is `Canceled`.
    pub cancellation: Option<CancellationDetails>,
}

impl SynthesisResult {
    /// A completed synthesis carrying audio.
    pub fn completed(audio: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            reason: ResultReason::SynthesizingAudioCompleted,
            audio,
            content_type: content_type.into(),
            cancellation: None,
        }
    }

    /// A canceled synthesis carrying the reported details.
    pub fn canceled(reason: impl Into<String>, error_details: impl Into<String>) -> Self {
        Self {
            reason: ResultReason::Canceled,
            audio: Vec::new(),
            content_type: String::new(),
            cancellation: Some(CancellationDetails {
                reason: reason.into(),
                error_details: error_details.into(),
            }),
        }
    }

    /// Converts the terminal result into a provider response.
    ///
    /// A completed result yields the audio; a canceled result becomes
    /// [`voicelens_core::ErrorKind::UpstreamCanceled`] carrying the
    /// cancellation reason and error detail.
    pub fn into_speech_response(self, request_id: Uuid) -> Result<SpeechResponse> {
        match self.reason {
            ResultReason::SynthesizingAudioCompleted => {
                Ok(SpeechResponse::new(request_id, self.audio, self.content_type))
            }
            ResultReason::Canceled => {
                let (reason, error_details) = match self.cancellation {
                    Some(details) => (details.reason, details.error_details),
                    None => ("Error".to_string(), "no detail reported".to_string()),
                };

                Err(Error::upstream_canceled().with_message(format!(
                    "Speech synthesis canceled: {reason}, error details: {error_details}"
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use voicelens_core::ErrorKind;

    use super::*;

    #[test]
    fn completed_result_carries_the_audio_bytes() {
        let audio = vec![0x49, 0x44, 0x33, 0x04];
        let result = SynthesisResult::completed(audio.clone(), "audio/mpeg");

        let response = result.into_speech_response(Uuid::new_v4()).unwrap();
        assert_eq!(response.audio, audio);
        assert_eq!(response.content_type, "audio/mpeg");
    }

    #[test]
    fn canceled_result_surfaces_reason_and_detail() {
        let result = SynthesisResult::canceled("Error (401 Unauthorized)", "bad key");

        let error = result.into_speech_response(Uuid::new_v4()).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::UpstreamCanceled);

        let message = error.to_string();
        assert!(message.contains("Error (401 Unauthorized)"));
        assert!(message.contains("bad key"));
    }
}
