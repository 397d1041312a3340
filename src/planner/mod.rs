//! Segment planning module

pub mod segments;

pub use segments::SegmentPlanner;
