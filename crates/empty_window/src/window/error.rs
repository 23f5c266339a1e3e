//! Window errors

use thiserror::Error;

use crate::config::ConfigError;

/// Window management errors
///
/// Every variant is fatal to the program: the entry point logs it and exits.
#[derive(Error, Debug)]
pub enum WindowError {
    /// The requested size or title cannot be used
    #[error("Invalid window configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// `glfwInit` failed
    #[error("Failed to initialize GLFW: {0}")]
    InitializationFailed(String),

    /// `glfwCreateWindow` failed
    #[error("Failed to create GLFW window")]
    CreationFailed,
}

/// Result alias for window operations
pub type WindowResult<T> = Result<T, WindowError>;
