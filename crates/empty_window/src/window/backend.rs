//! Native window contract
//!
//! [`WindowHandle`](super::WindowHandle) talks to the native window only
//! through this trait. The GLFW implementation lives in
//! [`glfw_backend`](super::glfw_backend); tests substitute a scripted one.

use glfw::WindowEvent;

use crate::assets::IconImage;

/// Operations the window handle needs from a native window
///
/// All methods are called from the thread that owns the window.
pub trait WindowBackend {
    /// Whether the close-requested flag is set
    fn should_close(&self) -> bool;

    /// Set or clear the close-requested flag
    fn set_should_close(&mut self, should_close: bool);

    /// Present the back buffer
    fn swap_buffers(&mut self);

    /// Process pending window-system events
    ///
    /// Input events picked up here are returned by the next
    /// [`flush_events`](Self::flush_events).
    fn poll_events(&mut self);

    /// Drain the events collected by the last [`poll_events`](Self::poll_events)
    fn flush_events(&mut self) -> Vec<WindowEvent>;

    /// Replace the window icon
    ///
    /// Takes ownership so the pixel buffer is freed as soon as the call returns.
    fn set_icon(&mut self, icon: IconImage);
}
