pub mod layout;
mod writer;

pub use writer::{DEFAULT_REPORT_PATH, render_report, write_report};
