//! Person detail overlay.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
