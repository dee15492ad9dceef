//! Read API client and configuration.

mod vision_client;
mod vision_config;

pub use vision_client::VisionClient;
pub use vision_config::{PollConfig, VisionConfig};
