mod flag_synthesizer;
mod report_assembler;
mod resource_profiler;
mod script_analyzer;

pub use flag_synthesizer::{DerivedLimits, FlagSynthesizer};
pub use report_assembler::{ReportAssembler, TOOL_NAME};
pub use resource_profiler::ResourceProfiler;
pub use script_analyzer::{suggested_command, ScriptAnalyzer};
