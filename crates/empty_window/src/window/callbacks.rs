//! Input callbacks
//!
//! Plain functions that react to input by setting the close-requested flag
//! on the window that produced the event. They run inside
//! [`WindowHandle::run`](super::WindowHandle::run) on the window's thread.

use glfw::{Action, Key, MouseButton, WindowEvent};

use super::backend::WindowBackend;

/// Keyboard callback signature
pub type KeyCallback = fn(&mut dyn WindowBackend, Key, Action);

/// Mouse button callback signature
pub type MouseButtonCallback = fn(&mut dyn WindowBackend, MouseButton, Action);

/// Close the window when Escape is pressed
pub fn keyboard(window: &mut dyn WindowBackend, key: Key, action: Action) {
    if action == Action::Press && key == Key::Escape {
        log::debug!("Escape pressed, requesting close");
        window.set_should_close(true);
    }
}

/// Close the window when the right mouse button is pressed
pub fn mouse(window: &mut dyn WindowBackend, button: MouseButton, action: Action) {
    if action == Action::Press && button == MouseButton::Button2 {
        log::debug!("Right mouse button pressed, requesting close");
        window.set_should_close(true);
    }
}

/// The callbacks registered on a window
#[derive(Clone, Copy)]
pub struct InputCallbacks {
    /// Called for every key event
    pub keyboard: KeyCallback,
    /// Called for every mouse button event
    pub mouse: MouseButtonCallback,
}

impl InputCallbacks {
    /// Route one event to the matching callback
    pub fn dispatch(&self, window: &mut dyn WindowBackend, event: &WindowEvent) {
        match *event {
            WindowEvent::Key(key, _scancode, action, _mods) => (self.keyboard)(window, key, action),
            WindowEvent::MouseButton(button, action, _mods) => (self.mouse)(window, button, action),
            _ => {}
        }
    }
}

impl Default for InputCallbacks {
    fn default() -> Self {
        Self { keyboard, mouse }
    }
}
