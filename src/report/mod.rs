pub mod formatter;
pub mod outcome;

pub use formatter::ReportFormatter;
pub use outcome::*;
