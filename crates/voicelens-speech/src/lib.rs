#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod provider;

pub mod client;
pub mod synthesis;

pub use client::{SpeechClient, SpeechConfig};
pub use synthesis::{CancellationDetails, ResultReason, SynthesisResult};
pub use voicelens_core::{Error, ErrorKind, Result};

/// Tracing target for client lifecycle events.
pub const TRACING_TARGET_CLIENT: &str = "voicelens_speech::client";

/// Tracing target for synthesis calls.
pub const TRACING_TARGET_SYNTHESIS: &str = "voicelens_speech::synthesis";
