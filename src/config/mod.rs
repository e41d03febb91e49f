//! JSON configuration for the command-line tool.

pub mod goodness;

pub use goodness::{load_config, DetectionConfig, GoodnessOutputConfig, GoodnessToolConfig};
