mod registered_runner;
mod runner;
mod store;

pub use registered_runner::RegisteredRunner;
pub use runner::Runner;
pub use store::RunnerRegistry;
