use crate::flag_audit::domain::{
    AuditResult, DependencyReport, Importance, Priority, ResourceProfile, SynthesizedFlags,
};
use crate::ports::outbound::AuditFormatter;
use crate::shared::Result;
use owo_colors::{OwoColorize, Style};
use std::fmt::Write;

const RULE: &str = "────────────────────────────────────────────────────────────";

/// ConsoleFormatter adapter for human-readable terminal output
///
/// Colors are applied through owo-colors styles and can be switched off
/// (`--no-color`, or when the report is written to a file).
pub struct ConsoleFormatter {
    colored: bool,
}

impl ConsoleFormatter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn paint(&self, text: impl std::fmt::Display, style: Style) -> String {
        if self.colored {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    fn heading(&self, text: &str) -> String {
        self.paint(text, Style::new().bold().cyan())
    }

    fn priority_style(priority: Priority) -> Style {
        match priority {
            Priority::High => Style::new().bold().red(),
            Priority::Medium => Style::new().bold().yellow(),
            Priority::Low => Style::new().bold().blue(),
        }
    }

    fn importance_style(importance: Importance) -> Style {
        match importance {
            Importance::Critical => Style::new().red(),
            Importance::Important => Style::new().yellow(),
            Importance::Optional => Style::new().dimmed(),
        }
    }

    fn render_header(&self, out: &mut String, result: &AuditResult) -> std::fmt::Result {
        writeln!(out, "{}", self.heading("Node.js Launch Flag Audit"))?;
        writeln!(out, "{}", RULE)?;
        writeln!(out, "Environment: {}", self.paint(result.environment, Style::new().bold()))?;
        writeln!(out)
    }

    fn render_dependencies(&self, out: &mut String, report: &DependencyReport) -> std::fmt::Result {
        if !report.checked {
            return Ok(());
        }

        writeln!(out, "{}", self.heading("Dependencies"))?;
        if report.vulnerable.is_empty() {
            writeln!(out, "  {}", self.paint("No known vulnerabilities", Style::new().green()))?;
        }
        for vulnerable in &report.vulnerable {
            writeln!(
                out,
                "  {} {}@{}",
                self.paint("✖", Style::new().red()),
                self.paint(&vulnerable.package, Style::new().bold()),
                vulnerable.current_version
            )?;
            for advisory in &vulnerable.advisories {
                writeln!(
                    out,
                    "      {} [{}] {}",
                    advisory.id,
                    advisory.severity.as_deref().unwrap_or("UNKNOWN"),
                    advisory.summary.as_deref().unwrap_or("")
                )?;
            }
            writeln!(out, "      → {}", vulnerable.recommendation)?;
        }

        for outdated in &report.outdated {
            writeln!(
                out,
                "  {} {} {} → {} ({})",
                self.paint("↑", Style::new().yellow()),
                self.paint(&outdated.package, Style::new().bold()),
                outdated.current_version,
                outdated.latest_version,
                outdated.update_type
            )?;
        }

        for failed in &report.failed {
            writeln!(
                out,
                "  {} {}: {}",
                self.paint("?", Style::new().dimmed()),
                failed.package,
                failed.error
            )?;
        }
        writeln!(out)
    }

    fn render_recommendations(&self, out: &mut String, result: &AuditResult) -> std::fmt::Result {
        writeln!(out, "{}", self.heading("Recommendations"))?;
        if result.recommendations.is_empty() {
            let done = "Scripts already carry the recommended flags";
            writeln!(out, "  {}", self.paint(done, Style::new().green()))?;
            return writeln!(out);
        }

        for priority in Priority::all() {
            let group: Vec<_> = result.recommendations_with_priority(priority).collect();
            if group.is_empty() {
                continue;
            }
            let label = format!("{} priority", priority);
            writeln!(out, "  {}", self.paint(label, Self::priority_style(priority)))?;

            for rec in group {
                writeln!(
                    out,
                    "  • {} ({}): {}",
                    self.paint(&rec.script_name, Style::new().bold()),
                    rec.category,
                    rec.reason
                )?;
                for flag in &rec.missing_flags {
                    let importance = flag.importance();
                    writeln!(
                        out,
                        "      {:<45} {} {}",
                        flag.render(),
                        self.paint(format!("[{}]", importance), Self::importance_style(importance)),
                        flag.description()
                    )?;
                }
                let command = self.paint(&rec.suggested_command, Style::new().green());
                writeln!(out, "    $ {}", command)?;
                writeln!(out, "    package.json: {}", rec.script_suggestion)?;
            }
        }
        writeln!(out)
    }

    fn render_system(&self, out: &mut String, profile: &ResourceProfile) -> std::fmt::Result {
        writeln!(out, "{}", self.heading("System"))?;
        writeln!(
            out,
            "  CPUs:   {} × {} ({} MHz)",
            profile.cpu_count(),
            profile.cpu_model(),
            profile.cpu_speed_mhz()
        )?;
        match profile.memory() {
            Some(memory) => {
                writeln!(
                    out,
                    "  Memory: {} GiB total, {} GiB free",
                    memory.total_gib(),
                    memory.free_gib()
                )?;
                writeln!(out, "  Recommended heap: {} GiB", memory.recommended_heap_gib())?;
            }
            None => {
                let unavailable = self.paint("unavailable", Style::new().yellow());
                writeln!(out, "  Memory: {}", unavailable)?
            }
        }
        writeln!(out, "  Platform: {} ({})", profile.platform(), profile.arch())?;
        writeln!(out)
    }

    /// Summarizes the flag set the current environment starts with
    fn render_flag_summary(&self, out: &mut String, result: &AuditResult) -> std::fmt::Result {
        let (label, set) = Self::summary_set(result);
        if set.is_empty() {
            return Ok(());
        }

        writeln!(out, "{}", self.heading(&format!("Flags ({})", label)))?;
        for importance in Importance::all() {
            let names: Vec<String> = set
                .iter()
                .filter(|flag| flag.importance() == importance)
                .map(|flag| flag.render())
                .collect();
            if names.is_empty() {
                continue;
            }
            let label = self.paint(importance, Self::importance_style(importance));
            writeln!(out, "  {}: {}", label, names.join(" "))?;
        }
        writeln!(out, "  $ node {}", set.rendered().join(" "))?;
        writeln!(out)
    }

    fn summary_set(result: &AuditResult) -> (&'static str, &crate::flag_audit::domain::FlagSet) {
        let flags: &SynthesizedFlags = &result.flags;
        if !result.environment.is_production() {
            ("development.recommended", &flags.development.recommended)
        } else if result.resource_profile.is_high_performance() {
            ("production.high_performance", &flags.production.high_performance)
        } else {
            ("production.secure", &flags.production.secure)
        }
    }
}

impl AuditFormatter for ConsoleFormatter {
    fn format(&self, result: &AuditResult) -> Result<String> {
        let mut out = String::new();

        self.render_header(&mut out, result)?;
        self.render_dependencies(&mut out, &result.dependencies)?;
        self.render_recommendations(&mut out, result)?;
        self.render_system(&mut out, &result.resource_profile)?;
        self.render_flag_summary(&mut out, result)?;
        writeln!(out, "{}", RULE)?;
        writeln!(
            out,
            "Generated {} by {} {}",
            result.timestamp, result.tool_name, result.tool_version
        )?;

        Ok(out)
    }
}
