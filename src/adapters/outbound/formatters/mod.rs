/// Formatter adapters for the supported report formats
mod console_formatter;
mod json_formatter;
mod markdown_formatter;

pub use console_formatter::ConsoleFormatter;
pub use json_formatter::JsonFormatter;
pub use markdown_formatter::MarkdownFormatter;
