#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unsafe_code)]

pub mod config_store;
mod error;
pub mod lifecycle;
pub mod properties;
pub mod reporter;
pub mod scheduler;
pub mod system;

pub use config_store::InMemoryConfigStore;
pub use error::ReporterError;
pub use lifecycle::LifecycleEventDispatcher;
pub use properties::{ConfigFileError, load_properties_file, parse_properties};
pub use reporter::{AgentSystemInfo, ParameterPublisher, ReporterState};
pub use scheduler::{FixedDelayScheduler, catch_all};

// Re-export system probe implementation
pub use system::DefaultSystemProbe;
