pub mod controller;
#[cfg(not(target_arch = "wasm32"))]
pub mod driver;
pub mod render;
pub mod snapshot;
pub mod status;
pub mod view;
