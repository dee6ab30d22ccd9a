//! Chilling SMP wiki viewer
//!
//! Leptos components for the single-page wiki. Build with the `csr` feature
//! (e.g. `wasm-pack build --target web -- --features csr`) to get the browser
//! entry point and the `window.location` / `navigator.clipboard` bindings;
//! without it the components run against in-memory stand-ins.

pub mod clipboard;
pub mod components;
pub mod router;

#[cfg(feature = "csr")]
pub mod app;

pub use clipboard::{Clipboard, CopyFeedback, MemoryClipboard};
pub use components::*;
pub use router::{HashRouter, Location, MemoryLocation};
