pub(crate) mod fs;
pub(crate) mod terminal;

// Public API - utilities used by the renderer and the binary
pub use fs::{display_path, normalize_separators};
pub use terminal::{color_enabled, stderr_is_terminal};
