pub mod config;
pub mod console;
pub mod logging;
pub mod services;
#[cfg(target_arch = "wasm32")]
pub mod web;

// Re-export the pieces embedders reach for
pub use config::ClientConfig;
pub use console::controller::{ConsoleController, PollOutcome, SubmitOutcome};
pub use console::snapshot::{CommandRequest, OutputSnapshot};
pub use console::status::{Status, StatusState};
pub use services::api::{ApiError, ConsoleApi};
