//! Progress spinner shown while repositories are scanned

use anyhow::Result;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

use super::config::{SPINNER_TEMPLATE, SPINNER_TICK_MILLIS};
use crate::utils::stderr_is_terminal;

/// Creates a spinner on stderr with the given message
///
/// The spinner is hidden when stderr is not a terminal, so piped output stays
/// clean.
pub fn create_spinner(message: impl Into<String>) -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    if !stderr_is_terminal() {
        spinner.set_draw_target(ProgressDrawTarget::hidden());
    }
    spinner.set_style(create_spinner_style()?);
    spinner.set_message(message.into());
    spinner.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MILLIS));
    Ok(spinner)
}

/// Creates the spinner style configuration
pub(crate) fn create_spinner_style() -> Result<ProgressStyle> {
    Ok(ProgressStyle::default_spinner().template(SPINNER_TEMPLATE)?)
}
