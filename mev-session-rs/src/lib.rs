#[cfg(feature = "api")]
pub mod api;
pub mod beacon;
mod builder;
pub mod chain;
pub mod compat;
mod config;
pub mod dev;
mod environment;
mod error;
pub(crate) mod serde;
#[cfg(feature = "api")]
mod service;
mod session;
pub mod signing;
mod state;
pub mod types;

pub use builder::{Builder, BuilderArgs, BuilderConfig, PAYMENT_TX_GAS_LIMIT};
pub use config::{
    Config, DEFAULT_GAS_CEIL, DEFAULT_MAX_CONCURRENT_SESSIONS, DEFAULT_SESSION_IDLE_TIMEOUT,
};
pub use environment::{EnvironmentParams, ExecutionEnvironment};
pub use error::{BundleError, ChainError, EngineError, Error};
#[cfg(feature = "api")]
pub use service::{Service, ServiceHandle};
pub use session::{Session, SessionManager};
pub use state::{PendingState, StateReader};
