//! Terminal capability checks

use std::io::IsTerminal;

/// Whether table rows should carry ANSI colours
///
/// Colour is off when explicitly disabled, when `NO_COLOR` is set, or when
/// stdout is not a terminal.
pub fn color_enabled(disabled_by_flag: bool) -> bool {
    if disabled_by_flag || std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}

/// Whether progress output on stderr would be visible to a person
pub fn stderr_is_terminal() -> bool {
    std::io::stderr().is_terminal()
}
