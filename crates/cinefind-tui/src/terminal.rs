//! Terminal setup and restoration

use ratatui::DefaultTerminal;

/// Enter the alternate screen in raw mode, restoring it on panic
pub fn init() -> DefaultTerminal {
    install_panic_hook();
    ratatui::init()
}

/// Leave the alternate screen and raw mode
pub fn restore() {
    ratatui::restore();
}

fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore();
        previous(info);
    }));
}
