// Adapters - External system implementations

pub mod exec_process;
pub mod fs_std;
pub mod probe_ffprobe;
pub mod tracing_log;
pub mod yaml_config;

// Re-export adapters
pub use exec_process::ProcessExecutor;
pub use fs_std::FsStdAdapter;
pub use probe_ffprobe::FFprobeAdapter;
pub use tracing_log::{init_logging, LogLevel};
pub use yaml_config::{YamlConfigAdapter, DEFAULT_CONFIG_PATH};
