use crate::adapters::outbound::formatters::{ConsoleFormatter, JsonFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::AuditFormatter;

/// Factory for creating audit formatters
///
/// Selects the formatter adapter for an output format. Colour only applies
/// to the text format.
pub struct FormatterFactory;

impl FormatterFactory {
    /// # Examples
    /// ```
    /// use node_flag_audit::application::dto::OutputFormat;
    /// use node_flag_audit::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json, false);
    /// ```
    pub fn create(format: OutputFormat, colored: bool) -> Box<dyn AuditFormatter> {
        match format {
            OutputFormat::Text => Box::new(ConsoleFormatter::new(colored)),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }

    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Text => "📝 Rendering text report...",
            OutputFormat::Json => "📝 Rendering JSON report...",
            OutputFormat::Markdown => "📝 Rendering Markdown report...",
        }
    }
}
