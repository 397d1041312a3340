//! Fixed-length segment planning

use tracing::debug;

use crate::domain::errors::DomainError;
use crate::domain::model::{Segment, SegmentPlan, TimeRange, MIN_SEGMENT_SECS};

/// Upper bound on segments per run; anything above comes from a bogus duration
pub const MAX_SEGMENT_COUNT: usize = 1_000_000;

/// Splits a time window into contiguous segments of at most `max_segment_duration`
pub struct SegmentPlanner {
    max_segment_duration: f64,
}

impl SegmentPlanner {
    /// Create a planner for segments of at most `max_segment_duration` seconds
    pub fn new(max_segment_duration: u32) -> Self {
        Self {
            max_segment_duration: f64::from(max_segment_duration.max(1)),
        }
    }

    /// Plan segments covering `time_range` resolved against `total_duration`.
    ///
    /// The last segment is truncated at the effective end and dropped when
    /// shorter than [`MIN_SEGMENT_SECS`].
    pub fn plan(&self, total_duration: f64, time_range: &TimeRange) -> Result<SegmentPlan, DomainError> {
        let (start, end) = time_range.resolve(total_duration)?;
        let span = end - start;
        let count = (span / self.max_segment_duration).ceil();
        if count > MAX_SEGMENT_COUNT as f64 {
            return Err(DomainError::Probe(format!(
                "implausible duration {:.3}s: {} segments of {}s exceeds the limit of {}",
                span, count, self.max_segment_duration, MAX_SEGMENT_COUNT
            )));
        }
        let count = count as usize;

        debug!(
            start,
            end,
            count,
            max = self.max_segment_duration,
            "Planning segments"
        );

        let mut segments = Vec::with_capacity(count);
        for i in 0..count {
            let segment_start = start + i as f64 * self.max_segment_duration;
            let mut duration = self.max_segment_duration;

            if segment_start + duration > end {
                duration = end - segment_start;
                if duration < MIN_SEGMENT_SECS {
                    debug!(index = i + 1, duration, "Dropping short trailing segment");
                    break;
                }
            }

            segments.push(Segment {
                index: i + 1,
                start: segment_start,
                duration,
            });
        }

        Ok(SegmentPlan { segments })
    }
}
