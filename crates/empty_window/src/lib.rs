//! # Empty Window
//!
//! A single native window with a custom icon, driven by a blocking GLFW
//! event loop.
//!
//! ## Features
//!
//! - **RAII Lifecycle**: the GLFW context and the native window are acquired
//!   together and released together, including on construction failure
//! - **Input Callbacks**: Escape or a right click closes the window
//! - **Window Icon**: PNG icon decoded with the `image` crate
//! - **Configuration**: optional TOML/RON override of the built-in defaults
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use empty_window::prelude::*;
//!
//! fn main() {
//!     logging::init();
//!
//!     let config = WindowConfig::default();
//!     let mut window = match WindowHandle::new(&config) {
//!         Ok(window) => window,
//!         Err(e) => {
//!             log::error!("{e}");
//!             std::process::exit(1);
//!         }
//!     };
//!
//!     window.run();
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod assets;
pub mod config;
pub mod foundation;
pub mod window;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        assets::{AssetError, IconImage},
        config::{Config, ConfigError, WindowConfig},
        foundation::logging,
        window::{WindowBackend, WindowError, WindowHandle, WindowResult, WindowState},
    };
}
