pub mod config;
pub mod detection;
pub mod error;
pub mod models;

pub use config::DetectorConfig;
pub use detection::PageDetector;
pub use error::DetectError;
pub use models::{Point, Quad};
