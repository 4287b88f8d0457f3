//! Free-text movie search.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
