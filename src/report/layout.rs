use std::fmt::Display;

/// Width of banner lines, in characters.
pub const BANNER_WIDTH: usize = 75;

/// Width labels are padded to with `.` before the value.
pub const LABEL_WIDTH: usize = 50;

/// A full-width line of `*`.
pub fn banner() -> String {
    "*".repeat(BANNER_WIDTH)
}

/// `label` padded with dots to [`LABEL_WIDTH`], followed by `value`.
///
/// Labels longer than the width are kept whole.
pub fn dotted(label: &str, value: impl Display) -> String {
    format!("{:.<width$}{}", label, value, width = LABEL_WIDTH)
}

/// Workout hours are always shown with two decimals.
pub fn hours(value: f64) -> String {
    format!("{:.2}", value)
}
