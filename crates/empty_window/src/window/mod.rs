//! Window management
//!
//! ```text
//! ┌─────────────────────────────────┐
//! │     Application Code            │
//! └─────────────┬───────────────────┘
//!               │ Uses
//!        ┌──────▼───────┐
//!        │ WindowHandle │ ← Public API (handle.rs)
//!        └──────┬───────┘
//!               │ Uses
//!      ┌────────▼────────┐
//!      │ WindowBackend   │ ← Native window contract (backend.rs)
//!      └────────┬────────┘
//!               │ Implemented by
//!      ┌────────▼────────┐
//!      │ GlfwWindow      │ ← GLFW window + context guard (glfw_backend.rs)
//!      └─────────────────┘
//! ```
//!
//! Input is handled by the plain functions in [`callbacks`], dispatched from
//! inside [`WindowHandle::run`].

pub mod backend;
pub mod callbacks;
pub mod error;
pub mod glfw_backend;
pub mod handle;

#[cfg(test)]
mod mock;

pub use backend::WindowBackend;
pub use error::{WindowError, WindowResult};
pub use handle::{WindowHandle, WindowState};
