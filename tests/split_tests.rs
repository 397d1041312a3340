//! Split use case driven through fake probe/executor ports

mod common;

use std::path::Path;
use std::sync::Arc;

use common::{has_pair, FakeProbe, RecordingExecutor};
use splitx_cli::adapters::FsStdAdapter;
use splitx_cli::domain::model::{AppConfig, TargetResolution, TimeRange, VideoStrategy};
use splitx_cli::{DomainError, SplitInteractor};
use tempfile::TempDir;

fn interactor(
    probe: Arc<FakeProbe>,
    executor: Arc<RecordingExecutor>,
    config: AppConfig,
) -> SplitInteractor {
    SplitInteractor::new(probe, executor, Arc::new(FsStdAdapter::new()), Arc::new(config))
}

#[tokio::test]
async fn test_split_writes_one_command_per_segment() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("segments");
    let probe = Arc::new(FakeProbe::new(25.0, 1920, 1080, false));
    let executor = Arc::new(RecordingExecutor::new());

    let report = interactor(probe.clone(), executor.clone(), AppConfig::default())
        .split(Path::new("/videos/movie.mp4"), &out)
        .await
        .unwrap();

    assert!(out.is_dir());
    assert_eq!(probe.calls(), vec!["duration", "resolution", "has_subtitle"]);

    let calls = executor.calls();
    assert_eq!(calls.len(), 3);
    assert!(calls.iter().all(|(program, _)| program == "ffmpeg"));

    let expected = [("0.000", "10.000"), ("10.000", "10.000"), ("20.000", "5.000")];
    for (i, ((_, args), (start, duration))) in calls.iter().zip(expected).enumerate() {
        assert!(has_pair(args, "-i", "/videos/movie.mp4"));
        assert!(has_pair(args, "-ss", start));
        assert!(has_pair(args, "-t", duration));
        assert!(has_pair(args, "-c:v", "copy"));
        let output = out.join(format!("segment_{:03}.mp4", i + 1));
        assert_eq!(args.last().unwrap(), &output.to_string_lossy().to_string());
    }

    assert_eq!(report.segments.len(), 3);
    assert_eq!(report.segments[2].index, 3);
    assert_eq!(report.segments[2].duration, 5.0);
    assert_eq!(report.decision.video, VideoStrategy::Copy);
}

#[tokio::test]
async fn test_exact_multiple_produces_no_extra_segment() {
    let temp = TempDir::new().unwrap();
    let executor = Arc::new(RecordingExecutor::new());

    let report = interactor(
        Arc::new(FakeProbe::new(20.0, 1280, 720, false)),
        executor.clone(),
        AppConfig::default(),
    )
    .split(Path::new("clip.mov"), temp.path())
    .await
    .unwrap();

    assert_eq!(executor.calls().len(), 2);
    assert!(report.segments.iter().all(|s| s.duration == 10.0));
}

#[tokio::test]
async fn test_missing_subtitles_override_keep() {
    let temp = TempDir::new().unwrap();
    let executor = Arc::new(RecordingExecutor::new());
    let mut config = AppConfig::default();
    config.subtitle.keep = true;

    let report = interactor(
        Arc::new(FakeProbe::new(8.0, 1280, 720, false)),
        executor.clone(),
        config,
    )
    .split(Path::new("clip.mkv"), temp.path())
    .await
    .unwrap();

    assert!(!report.decision.carry_subtitles);
    let (_, args) = &executor.calls()[0];
    assert!(args.contains(&"-sn".to_string()));
    assert!(!args.iter().any(|a| a.starts_with("0:s")));
}

#[tokio::test]
async fn test_present_subtitles_are_carried() {
    let temp = TempDir::new().unwrap();
    let executor = Arc::new(RecordingExecutor::new());
    let mut config = AppConfig::default();
    config.subtitle.keep = true;

    interactor(
        Arc::new(FakeProbe::new(8.0, 1280, 720, true)),
        executor.clone(),
        config,
    )
    .split(Path::new("clip.mkv"), temp.path())
    .await
    .unwrap();

    let (_, args) = &executor.calls()[0];
    assert!(has_pair(args, "-map", "0:s:0?"));
    assert!(has_pair(args, "-c:s", "copy"));
}

#[tokio::test]
async fn test_resolution_mismatch_reencodes() {
    let temp = TempDir::new().unwrap();
    let executor = Arc::new(RecordingExecutor::new());
    let mut config = AppConfig::default();
    config.resolution = TargetResolution {
        width: 1280,
        height: 720,
        force_resize: false,
    };
    config.quality.crf = 20;

    interactor(
        Arc::new(FakeProbe::new(8.0, 640, 360, false)),
        executor.clone(),
        config,
    )
    .split(Path::new("small.mp4"), temp.path())
    .await
    .unwrap();

    let (_, args) = &executor.calls()[0];
    assert!(has_pair(args, "-c:v", "libx264"));
    assert!(has_pair(args, "-crf", "20"));
    assert!(has_pair(args, "-preset", "medium"));
}

#[tokio::test]
async fn test_first_failure_aborts_remaining_segments() {
    let temp = TempDir::new().unwrap();
    let executor = Arc::new(RecordingExecutor::failing_on(2));

    let err = interactor(
        Arc::new(FakeProbe::new(45.0, 1280, 720, false)),
        executor.clone(),
        AppConfig::default(),
    )
    .split(Path::new("long.mp4"), temp.path())
    .await
    .unwrap_err();

    assert_eq!(executor.calls().len(), 2);
    match err {
        DomainError::Encode { segment, message } => {
            assert_eq!(segment, Some(2));
            assert!(message.contains("Conversion failed!"));
        }
        other => panic!("expected encode error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_inverted_range_runs_no_encoder() {
    let temp = TempDir::new().unwrap();
    let executor = Arc::new(RecordingExecutor::new());
    let probe = Arc::new(FakeProbe::new(25.0, 1280, 720, false));
    let mut config = AppConfig::default();
    config.time_range = TimeRange::new(5.0, 3.0);

    let err = interactor(probe.clone(), executor.clone(), config)
        .split(Path::new("clip.mp4"), temp.path())
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::InvalidRange { .. }));
    assert!(executor.calls().is_empty());
    assert_eq!(probe.calls(), vec!["duration"]);
}

#[tokio::test]
async fn test_time_window_and_custom_template() {
    let temp = TempDir::new().unwrap();
    let executor = Arc::new(RecordingExecutor::new());
    let mut config = AppConfig::default();
    config.time_range = TimeRange::new(30.0, 45.0);
    config.segments.output_name =
        splitx_cli::domain::model::OutputTemplate::parse("part-%02d").unwrap();

    let report = interactor(
        Arc::new(FakeProbe::new(120.0, 1280, 720, false)),
        executor.clone(),
        config,
    )
    .split(Path::new("talk.webm"), temp.path())
    .await
    .unwrap();

    let names: Vec<String> = report
        .segments
        .iter()
        .map(|s| s.path.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["part-01.webm", "part-02.webm"]);
    assert!(has_pair(&executor.calls()[1].1, "-ss", "40.000"));
    assert!(has_pair(&executor.calls()[1].1, "-t", "5.000"));
}

#[tokio::test]
async fn test_unusable_output_directory() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("file");
    std::fs::write(&blocker, b"x").unwrap();
    let executor = Arc::new(RecordingExecutor::new());

    let err = interactor(
        Arc::new(FakeProbe::new(25.0, 1280, 720, false)),
        executor.clone(),
        AppConfig::default(),
    )
    .split(Path::new("clip.mp4"), &blocker.join("out"))
    .await
    .unwrap_err();

    assert!(matches!(err, DomainError::Directory { .. }));
    assert!(executor.calls().is_empty());
}

#[tokio::test]
async fn test_absurd_duration_runs_no_encoder() {
    let temp = TempDir::new().unwrap();
    let executor = Arc::new(RecordingExecutor::new());

    let err = interactor(
        Arc::new(FakeProbe::new(1e300, 1280, 720, false)),
        executor.clone(),
        AppConfig::default(),
    )
    .split(Path::new("clip.mp4"), temp.path())
    .await
    .unwrap_err();

    assert!(matches!(err, DomainError::Probe(_)));
    assert!(executor.calls().is_empty());
}
