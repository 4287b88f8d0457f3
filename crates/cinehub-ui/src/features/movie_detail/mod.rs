//! Movie detail overlay: sections, actions, modals.

#[cfg(target_arch = "wasm32")]
pub mod actions;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
