//! Runtime logging routed into the in-terminal log pane.
//!
//! Records go through the `log` facade and are buffered by `tui-logger`. Its
//! own background thread feeds the log pane, so nothing is written over the
//! alternate screen.

use std::sync::Once;

use log::LevelFilter;

static INIT: Once = Once::new();

/// Install the `tui-logger` backend. Repeated calls are no-ops.
pub fn initialize() {
    INIT.call_once(|| {
        if tui_logger::init_logger(LevelFilter::Debug).is_ok() {
            tui_logger::set_default_level(LevelFilter::Debug);
        }
    });
}
