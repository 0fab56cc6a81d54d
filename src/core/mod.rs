pub mod estimator;
pub mod projector;
pub mod session;

pub use crate::domain::model::{CapacityReport, ProjectionInput, ProjectionResult};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
