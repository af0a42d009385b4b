//! Boundary types shared between the result list model and the runners that
//! feed it.
//!
//! A [`BackendManager`] receives queries together with a [`RunnerSelector`]
//! and reports matches back through a [`SessionHandle`]. The reference
//! manager shipped with `runnel` drives [`Runner`] implementations kept in a
//! [`RunnerRegistry`], but any manager honouring the handle contract works.

pub mod context;
pub mod error;
pub mod manager;
pub mod registry;
pub mod session;
pub mod types;

pub use context::RunnerContext;
pub use error::{ManagerError, RunnerRegistryError};
pub use manager::{BackendManager, ManagerFactory};
pub use registry::{RegisteredRunner, Runner, RunnerRegistry};
pub use session::{SessionEvent, SessionEventKind, SessionHandle, SessionToken};
pub use types::{Match, MatchAction, MatchType, RunnerSelector};
