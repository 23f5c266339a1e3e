//! Opens one window with a custom icon and waits for Escape or a right click.

use empty_window::prelude::*;

/// Optional overrides for the built-in window settings
const CONFIG_PATH: &str = "window.toml";

fn main() {
    logging::init();

    let config = WindowConfig::load_or_default(CONFIG_PATH);

    let mut window = match WindowHandle::new(&config) {
        Ok(window) => window,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    window.run();

    log::info!("Window closed");
}
