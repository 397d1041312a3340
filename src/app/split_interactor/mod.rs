// Split interactor - Orchestrates the segment splitting use case

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error, info};

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules;
use crate::engine::{display_command, SegmentCommand};
use crate::planner::SegmentPlanner;
use crate::ports::*;

/// Interactor for the split use case
pub struct SplitInteractor {
    probe_port: Arc<dyn ProbePort>,
    execute_port: Arc<dyn ExecutePort>,
    fs_port: Arc<dyn FsPort>,
    config: Arc<AppConfig>,
}

impl SplitInteractor {
    /// Create new split interactor with injected ports
    pub fn new(
        probe_port: Arc<dyn ProbePort>,
        execute_port: Arc<dyn ExecutePort>,
        fs_port: Arc<dyn FsPort>,
        config: Arc<AppConfig>,
    ) -> Self {
        Self {
            probe_port,
            execute_port,
            fs_port,
            config,
        }
    }

    /// Split `input` into segments written to `output_dir`.
    ///
    /// Segments run one at a time; the first failure aborts the rest and
    /// leaves already written segments in place.
    pub async fn split(&self, input: &Path, output_dir: &Path) -> Result<SplitReport, DomainError> {
        info!("Splitting {} into {}", input.display(), output_dir.display());

        self.fs_port.create_directory(output_dir).await?;

        let duration = self.probe_port.duration(input).await?;
        let planner = SegmentPlanner::new(self.config.segments.max_segment_duration);
        let plan = planner.plan(duration, &self.config.time_range)?;

        let resolution = self.probe_port.resolution(input).await?;
        let has_subtitle = self.probe_port.has_subtitle(input).await?;
        let probe = ProbeResult {
            duration,
            resolution,
            has_subtitle,
        };
        info!(
            duration,
            resolution = %resolution,
            has_subtitle,
            "Probed input"
        );

        let decision = rules::decide(&probe, &self.config);
        if self.config.subtitle.keep && !decision.carry_subtitles {
            info!("No subtitle stream found, segments will carry none");
        }
        if decision.carry_subtitles {
            debug!(encoding = %self.config.subtitle.encoding, "Carrying subtitles");
        }
        info!(
            segments = plan.len(),
            video = ?decision.video,
            "Segment plan ready"
        );

        let extension = input
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();

        let mut written = Vec::with_capacity(plan.len());
        for segment in plan.iter() {
            let output = self.segment_path(output_dir, segment.index, &extension);
            self.write_segment(input, &output, segment, &decision).await?;
            written.push(WrittenSegment {
                index: segment.index,
                start: segment.start,
                duration: segment.duration,
                path: output,
            });
        }

        info!("Wrote {} segments", written.len());
        Ok(SplitReport {
            input: input.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            probe,
            decision,
            segments: written,
            completed_at: Utc::now(),
        })
    }

    fn segment_path(&self, output_dir: &Path, index: usize, extension: &str) -> PathBuf {
        output_dir.join(self.config.segments.output_name.file_name(index, extension))
    }

    async fn write_segment(
        &self,
        input: &Path,
        output: &Path,
        segment: &Segment,
        decision: &SplitDecision,
    ) -> Result<(), DomainError> {
        let command = SegmentCommand::new(input, output, *segment, decision);
        let args = command.build_args();
        let program = &self.config.binaries.ffmpeg;

        info!(
            index = segment.index,
            start = segment.start,
            duration = segment.duration,
            "Writing {}",
            output.display()
        );
        debug!("Executing: {}", display_command(program, &args));

        let result = self.execute_port.run(program, &args).await.map_err(|e| {
            DomainError::Encode {
                segment: Some(segment.index),
                message: e.to_string(),
            }
        })?;

        if !result.success {
            error!(index = segment.index, "ffmpeg failed");
            return Err(DomainError::Encode {
                segment: Some(segment.index),
                message: result.diagnostic(),
            });
        }
        Ok(())
    }
}
