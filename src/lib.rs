pub mod accordion;
pub mod content;
pub mod menu;
pub mod navigation;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

#[cfg(not(target_arch = "wasm32"))]
pub mod server;
