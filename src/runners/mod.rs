//! Reference backend: a worker thread that queries registered [`Runner`]s.
//!
//! [`Runner`]: runnel_runner_api::Runner

pub mod builtin;
mod commands;
mod threaded;

pub use threaded::ThreadedManager;
