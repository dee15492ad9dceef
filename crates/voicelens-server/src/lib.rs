#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

pub mod error;
pub mod handler;
pub mod pipeline;
pub mod service;

pub use error::{Error, Result};
pub use handler::routes;
pub use service::{PipelineMode, PipelineSettings, ServiceState};
