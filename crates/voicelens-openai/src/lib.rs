#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod provider;

pub mod client;
pub mod completion;

pub use client::{OpenAiClient, OpenAiConfig};
pub use completion::{CompletionRequest, CompletionResponse};
pub use voicelens_core::{Error, ErrorKind, Result};

/// Tracing target for client lifecycle events.
pub const TRACING_TARGET_CLIENT: &str = "voicelens_openai::client";

/// Tracing target for completion calls.
pub const TRACING_TARGET_COMPLETION: &str = "voicelens_openai::completion";
