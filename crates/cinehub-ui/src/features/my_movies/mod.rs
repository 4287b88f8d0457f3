//! Watched movies and custom lists.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
