//! Home page: popular rails and the triple ticker.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
