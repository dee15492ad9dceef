#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod provider;

pub mod client;
pub mod read;

pub use client::{PollConfig, VisionClient, VisionConfig};
pub use read::{AnalyzeResult, OperationStatus, ReadOperation};
pub use voicelens_core::{Error, ErrorKind, Result};

/// Tracing target for client lifecycle events.
pub const TRACING_TARGET_CLIENT: &str = "voicelens_vision::client";

/// Tracing target for read operations.
pub const TRACING_TARGET_READ: &str = "voicelens_vision::read";
