//! GLFW window backend
//!
//! [`GlfwContext`] owns the process-wide GLFW initialization and
//! [`GlfwWindow`] owns one native window on top of it. The window is always
//! destroyed before the context is terminated.

use std::sync::atomic::{AtomicUsize, Ordering};

use glfw::{Context, WindowEvent};

use super::backend::WindowBackend;
use super::error::{WindowError, WindowResult};
use crate::assets::IconImage;
use crate::config::WindowConfig;

static LIVE_CONTEXTS: AtomicUsize = AtomicUsize::new(0);

/// Number of [`GlfwContext`] guards currently alive in this process
pub fn live_contexts() -> usize {
    LIVE_CONTEXTS.load(Ordering::SeqCst)
}

fn log_glfw_error(error: glfw::Error, description: String) {
    log::error!("GLFW error {:?}: {}", error, description);
}

/// Scope guard for the GLFW library
///
/// `glfwInit` runs in [`GlfwContext::init`]; `glfwTerminate` runs when the
/// guard and every window created from it have been dropped.
pub struct GlfwContext {
    glfw: glfw::Glfw,
}

impl GlfwContext {
    /// Initialize GLFW
    pub fn init() -> WindowResult<Self> {
        let glfw = glfw::init(log_glfw_error)
            .map_err(|e| WindowError::InitializationFailed(format!("{e:?}")))?;

        LIVE_CONTEXTS.fetch_add(1, Ordering::SeqCst);
        log::debug!("GLFW initialized");
        Ok(Self { glfw })
    }
}

impl Drop for GlfwContext {
    fn drop(&mut self) {
        LIVE_CONTEXTS.fetch_sub(1, Ordering::SeqCst);
        log::debug!("GLFW terminated");
    }
}

/// A GLFW window together with the context that created it
pub struct GlfwWindow {
    // Declared before `context`: the window must go first.
    window: Option<glfw::PWindow>,
    events: glfw::GlfwReceiver<(f64, WindowEvent)>,
    context: GlfwContext,
}

impl GlfwWindow {
    /// Initialize GLFW and open a window
    ///
    /// If the window cannot be created the context is dropped, and GLFW
    /// terminated, before the error is returned.
    pub fn new(config: &WindowConfig) -> WindowResult<Self> {
        Self::create_with_hints(config, Vec::new())
    }

    pub(crate) fn create_with_hints(
        config: &WindowConfig,
        extra_hints: Vec<glfw::WindowHint>,
    ) -> WindowResult<Self> {
        let mut context = GlfwContext::init()?;

        context.glfw.window_hint(glfw::WindowHint::Resizable(false));
        for hint in extra_hints {
            context.glfw.window_hint(hint);
        }

        let (mut window, events) = context
            .glfw
            .create_window(config.width, config.height, &config.title, glfw::WindowMode::Windowed)
            .ok_or(WindowError::CreationFailed)?;

        if config.vsync {
            window.make_current();
            context.glfw.set_swap_interval(glfw::SwapInterval::Sync(1));
        }

        // Route key and mouse button events to our receiver
        window.set_key_polling(true);
        window.set_mouse_button_polling(true);

        log::info!(
            "Created {}x{} window \"{}\"",
            config.width,
            config.height,
            config.title
        );

        Ok(Self {
            window: Some(window),
            events,
            context,
        })
    }
}

impl WindowBackend for GlfwWindow {
    fn should_close(&self) -> bool {
        self.window.as_ref().map_or(true, |w| w.should_close())
    }

    fn set_should_close(&mut self, should_close: bool) {
        if let Some(window) = self.window.as_mut() {
            window.set_should_close(should_close);
        }
    }

    fn swap_buffers(&mut self) {
        if let Some(window) = self.window.as_mut() {
            window.swap_buffers();
        }
    }

    fn poll_events(&mut self) {
        self.context.glfw.poll_events();
    }

    fn flush_events(&mut self) -> Vec<WindowEvent> {
        glfw::flush_messages(&self.events)
            .map(|(_, event)| event)
            .collect()
    }

    fn set_icon(&mut self, icon: IconImage) {
        if let Some(window) = self.window.as_mut() {
            window.set_icon_from_pixels(vec![icon.into_pixel_image()]);
        }
    }
}

impl Drop for GlfwWindow {
    fn drop(&mut self) {
        if let Some(window) = self.window.take() {
            drop(window);
            log::debug!("Native window destroyed");
        }
    }
}
