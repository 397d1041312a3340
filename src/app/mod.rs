// Application layer - Use case interactors

pub mod container;
pub mod convert_interactor;
pub mod split_interactor;

// Re-export interactors
pub use container::{AppContainer, DefaultAppContainer};
pub use convert_interactor::{ConvertInteractor, DEFAULT_CONVERT_DEADLINE};
pub use split_interactor::SplitInteractor;
