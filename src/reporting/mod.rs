pub mod formatter;

pub use formatter::format_evaluation_text;
