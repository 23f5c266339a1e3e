//! Application-facing window handle
//!
//! A [`WindowHandle`] is the whole lifetime of the program's window: it is
//! created with the GLFW context, runs the event loop, and tears both down
//! when dropped.

use std::path::Path;

use super::backend::WindowBackend;
use super::callbacks::InputCallbacks;
use super::error::WindowResult;
use super::glfw_backend::GlfwWindow;
use crate::assets::IconImage;
use crate::config::WindowConfig;

/// Where the window is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    /// The loop keeps running
    Open,
    /// Close was requested; `run` returns and the handle is dropped next
    Closing,
}

/// The program's single window
pub struct WindowHandle {
    width: u32,
    height: u32,
    title: String,
    callbacks: InputCallbacks,
    backend: Box<dyn WindowBackend>,
}

impl WindowHandle {
    /// Initialize GLFW and open a window
    ///
    /// Registers the keyboard and mouse callbacks and tries to set the icon
    /// from `config.icon_path`. A missing or broken icon is logged and
    /// ignored.
    ///
    /// # Errors
    /// Returns an error if the config is invalid, GLFW cannot be
    /// initialized or the window cannot be created. GLFW has already been
    /// terminated when the error is returned.
    pub fn new(config: &WindowConfig) -> WindowResult<Self> {
        config.validate()?;
        let backend = GlfwWindow::new(config)?;
        Ok(Self::from_backend(Box::new(backend), config))
    }

    /// Wrap an already created native window
    ///
    /// Does everything [`WindowHandle::new`] does after window creation.
    pub fn from_backend(backend: Box<dyn WindowBackend>, config: &WindowConfig) -> Self {
        let mut handle = Self {
            width: config.width,
            height: config.height,
            title: config.title.clone(),
            callbacks: InputCallbacks::default(),
            backend,
        };

        if let Some(icon_path) = &config.icon_path {
            handle.set_icon(icon_path);
        }

        handle
    }

    /// Load a PNG and use it as the window icon
    ///
    /// Returns `false` and keeps the current icon if the file cannot be
    /// decoded.
    pub fn set_icon<P: AsRef<Path>>(&mut self, path: P) -> bool {
        match IconImage::from_file(path) {
            Ok(icon) => {
                self.backend.set_icon(icon);
                true
            }
            Err(e) => {
                log::error!("{e}; keeping the default icon");
                false
            }
        }
    }

    /// Run the event loop until close is requested
    ///
    /// Each iteration presents the back buffer, polls window events and
    /// hands input events to the registered callbacks.
    pub fn run(&mut self) {
        log::info!("Entering event loop for \"{}\"", self.title);

        while !self.backend.should_close() {
            self.backend.swap_buffers();
            self.backend.poll_events();

            for event in self.backend.flush_events() {
                self.callbacks.dispatch(self.backend.as_mut(), &event);
            }
        }

        log::info!("Close requested, leaving event loop");
    }

    /// Ask the loop to stop after the current iteration
    pub fn request_close(&mut self) {
        self.backend.set_should_close(true);
    }

    /// Whether close has been requested
    pub fn should_close(&self) -> bool {
        self.backend.should_close()
    }

    /// Current lifecycle state
    pub fn state(&self) -> WindowState {
        if self.should_close() {
            WindowState::Closing
        } else {
            WindowState::Open
        }
    }

    /// Requested client-area width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Requested client-area height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Window title
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl Drop for WindowHandle {
    fn drop(&mut self) {
        log::debug!("Releasing window \"{}\"", self.title);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::mock::MockBackend;
    use glfw::{Action, Key, Modifiers, MouseButton, WindowEvent};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Lets a test look at the mock after the handle has taken ownership
    struct Shared(Rc<RefCell<MockBackend>>);

    impl WindowBackend for Shared {
        fn should_close(&self) -> bool {
            self.0.borrow().should_close()
        }
        fn set_should_close(&mut self, should_close: bool) {
            self.0.borrow_mut().set_should_close(should_close);
        }
        fn swap_buffers(&mut self) {
            self.0.borrow_mut().swap_buffers();
        }
        fn poll_events(&mut self) {
            self.0.borrow_mut().poll_events();
        }
        fn flush_events(&mut self) -> Vec<WindowEvent> {
            self.0.borrow_mut().flush_events()
        }
        fn set_icon(&mut self, icon: IconImage) {
            self.0.borrow_mut().set_icon(icon);
        }
    }

    fn handle_with(mock: MockBackend, config: &WindowConfig) -> (WindowHandle, Rc<RefCell<MockBackend>>) {
        let shared = Rc::new(RefCell::new(mock));
        let handle = WindowHandle::from_backend(Box::new(Shared(Rc::clone(&shared))), config);
        (handle, shared)
    }

    fn no_icon() -> WindowConfig {
        WindowConfig::new(800, 600, "test").without_icon()
    }

    fn key_press(key: Key) -> WindowEvent {
        WindowEvent::Key(key, 0, Action::Press, Modifiers::empty())
    }

    fn button_press(button: MouseButton) -> WindowEvent {
        WindowEvent::MouseButton(button, Action::Press, Modifiers::empty())
    }

    #[test]
    fn test_new_handle_is_open() {
        for (w, h, title) in [(1, 1, "a"), (800, 600, "Window with Icon"), (3840, 2160, "4k")] {
            let config = WindowConfig::new(w, h, title).without_icon();
            let (handle, _) = handle_with(MockBackend::new(), &config);
            assert!(!handle.should_close());
            assert_eq!(handle.state(), WindowState::Open);
            assert_eq!((handle.width(), handle.height(), handle.title()), (w, h, title));
        }
    }

    #[test]
    fn test_missing_icon_is_not_fatal() {
        let config = no_icon().with_icon("no/such/icon.png");
        let (handle, mock) = handle_with(MockBackend::new(), &config);
        assert!(!handle.should_close());
        assert_eq!(mock.borrow().icon, None);
    }

    #[test]
    fn test_icon_is_applied() {
        let path = std::env::temp_dir().join(format!("empty_window_handle_icon_{}.png", std::process::id()));
        image::RgbaImage::from_pixel(16, 8, image::Rgba([0, 0, 255, 255]))
            .save(&path)
            .unwrap();

        let (mut handle, mock) = handle_with(MockBackend::new(), &no_icon().with_icon(&path));
        assert_eq!(mock.borrow().icon, Some((16, 8)));

        assert!(!handle.set_icon("no/such/icon.png"));
        assert_eq!(mock.borrow().icon, Some((16, 8)));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_run_stops_on_escape() {
        let mut mock = MockBackend::new();
        mock.push_batch(vec![]);
        mock.push_batch(vec![key_press(Key::A), button_press(MouseButton::Button1)]);
        mock.push_batch(vec![key_press(Key::Escape)]);
        mock.push_batch(vec![key_press(Key::B)]);

        let (mut handle, mock) = handle_with(mock, &no_icon());
        handle.run();

        assert_eq!(handle.state(), WindowState::Closing);
        assert_eq!(mock.borrow().polls, 3);
        assert_eq!(mock.borrow().swaps, 3);
    }

    #[test]
    fn test_run_stops_on_right_click() {
        let mut mock = MockBackend::new();
        mock.push_batch(vec![button_press(MouseButton::Button3)]);
        mock.push_batch(vec![button_press(MouseButton::Button2)]);

        let (mut handle, mock) = handle_with(mock, &no_icon());
        handle.run();

        assert!(handle.should_close());
        assert_eq!(mock.borrow().polls, 2);
    }

    #[test]
    fn test_run_stops_on_external_close() {
        let mut mock = MockBackend::new();
        mock.close_after_polls = Some(5);

        let (mut handle, mock) = handle_with(mock, &no_icon());
        handle.run();

        assert_eq!(mock.borrow().polls, 5);
        assert_eq!(mock.borrow().swaps, 5);
    }

    #[test]
    fn test_run_returns_immediately_when_already_closing() {
        let (mut handle, mock) = handle_with(MockBackend::new(), &no_icon());
        handle.request_close();
        assert_eq!(handle.state(), WindowState::Closing);

        handle.run();
        assert_eq!(mock.borrow().polls, 0);
        assert_eq!(mock.borrow().swaps, 0);
    }

    #[test]
    fn test_invalid_config_fails_before_glfw() {
        let config = WindowConfig::new(0, 600, "zero");
        let result = WindowHandle::new(&config);
        assert!(matches!(result, Err(crate::window::WindowError::InvalidConfig(_))));
    }
}
