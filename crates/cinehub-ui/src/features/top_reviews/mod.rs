//! Top-rated and top-reviewed movies.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
