use std::sync::Arc;

use crate::adapters::{FFprobeAdapter, FsStdAdapter, ProcessExecutor};
use crate::app::{convert_interactor::ConvertInteractor, split_interactor::SplitInteractor};
use crate::domain::errors::DomainError;
use crate::domain::model::AppConfig;
use crate::ports::{ConfigPort, ExecutePort, FsPort, ProbePort};

pub trait AppContainer: Send + Sync {
    fn split_interactor(&self) -> Arc<SplitInteractor>;
    fn convert_interactor(&self) -> Arc<ConvertInteractor>;
}

pub struct DefaultAppContainer {
    split_interactor: Arc<SplitInteractor>,
    convert_interactor: Arc<ConvertInteractor>,
}

impl DefaultAppContainer {
    /// Load configuration once and wire the real adapters around it
    pub async fn load(config_port: &dyn ConfigPort) -> Result<Self, DomainError> {
        let config = config_port.load().await?;
        Ok(Self::new(config))
    }

    pub fn new(config: Arc<AppConfig>) -> Self {
        let execute_port: Arc<dyn ExecutePort> = Arc::new(ProcessExecutor::new());
        let fs_port: Arc<dyn FsPort> = Arc::new(FsStdAdapter::new());
        let probe_port: Arc<dyn ProbePort> = Arc::new(FFprobeAdapter::new(
            config.binaries.ffprobe.clone(),
            Arc::clone(&execute_port),
        ));

        let split_interactor = Arc::new(SplitInteractor::new(
            probe_port,
            Arc::clone(&execute_port),
            Arc::clone(&fs_port),
            Arc::clone(&config),
        ));

        let convert_interactor = Arc::new(ConvertInteractor::new(execute_port, fs_port, config));

        Self {
            split_interactor,
            convert_interactor,
        }
    }
}

impl AppContainer for DefaultAppContainer {
    fn split_interactor(&self) -> Arc<SplitInteractor> {
        Arc::clone(&self.split_interactor)
    }

    fn convert_interactor(&self) -> Arc<ConvertInteractor> {
        Arc::clone(&self.convert_interactor)
    }
}
