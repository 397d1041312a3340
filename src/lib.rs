//! SplitX CLI Library
//!
//! Drives ffmpeg/ffprobe to split a video into fixed-duration, video-only
//! segments, and to convert single files under a deadline.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;
pub mod engine;
pub mod planner;
pub mod ports;

// Re-export commonly used types
pub use app::{AppContainer, ConvertInteractor, DefaultAppContainer, SplitInteractor};
pub use domain::errors::DomainError;
pub use domain::model::{AppConfig, ProbeResult, Resolution, Segment, SegmentPlan, SplitReport, TimeRange};
pub use planner::SegmentPlanner;
