use crate::flag_audit::domain::{
    AuditResult, DependencyReport, FlagSet, Recommendation, ResourceProfile, SynthesizedFlags,
};
use crate::ports::outbound::AuditFormatter;
use crate::shared::Result;

/// Markdown table header for a flag list
const FLAG_TABLE_HEADER: &str = "| Flag | Importance | Description |\n";
const FLAG_TABLE_SEPARATOR: &str = "|------|------------|-------------|\n";

const VULN_TABLE_HEADER: &str = "| Package | Current Version | Advisory | Severity | Fixed Version |\n";
const VULN_TABLE_SEPARATOR: &str = "|---------|-----------------|----------|----------|---------------|\n";

const OUTDATED_TABLE_HEADER: &str = "| Package | Current Version | Latest Version | Update |\n";
const OUTDATED_TABLE_SEPARATOR: &str = "|---------|-----------------|----------------|--------|\n";

/// MarkdownFormatter adapter for a shareable Markdown report
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn code(text: &str) -> String {
        format!("`{}`", Self::escape_cell(text))
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, result: &AuditResult) {
        output.push_str("# Node.js Launch Flag Audit\n\n");
        output.push_str(&format!("- **Audit ID:** {}\n", result.audit_id));
        output.push_str(&format!("- **Generated:** {}\n", result.timestamp));
        output.push_str(&format!("- **Environment:** {}\n", result.environment));
        output.push_str(&format!(
            "- **Tool:** {} {}\n\n",
            result.tool_name, result.tool_version
        ));
    }

    fn render_system(&self, output: &mut String, profile: &ResourceProfile) {
        output.push_str("## System Resources\n\n");
        output.push_str("| Property | Value |\n|----------|-------|\n");

        let memory = match profile.memory() {
            Some(m) => format!(
                "{} GiB total, {} GiB free (recommended heap {} GiB)",
                m.total_gib(),
                m.free_gib(),
                m.recommended_heap_gib()
            ),
            None => "unavailable".to_string(),
        };
        let rows = [
            ("CPU", format!("{} × {}", profile.cpu_count(), profile.cpu_model())),
            ("CPU speed", format!("{} MHz", profile.cpu_speed_mhz())),
            ("Memory", memory),
            ("Platform", format!("{} ({})", profile.platform(), profile.arch())),
            (
                "High performance",
                if profile.is_high_performance() { "yes" } else { "no" }.to_string(),
            ),
        ];
        for (property, value) in rows {
            output.push_str(&format!("| {} | {} |\n", property, Self::escape_cell(&value)));
        }
        output.push('\n');
    }

    fn render_flag_table(&self, output: &mut String, flags: &FlagSet) {
        output.push_str(FLAG_TABLE_HEADER);
        output.push_str(FLAG_TABLE_SEPARATOR);
        for flag in flags {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::code(&flag.render()),
                flag.importance(),
                Self::escape_cell(flag.description())
            ));
        }
        output.push('\n');
    }

    fn render_recommendations(&self, output: &mut String, recommendations: &[Recommendation]) {
        output.push_str("## Recommendations\n\n");

        if recommendations.is_empty() {
            output.push_str("No missing flags were found for the `start` or `debug` scripts.\n\n");
            return;
        }

        for rec in recommendations {
            output.push_str(&format!(
                "### `{}` · {} ({})\n\n",
                rec.script_name, rec.category, rec.priority
            ));
            output.push_str(&format!("{}\n\n", rec.reason));
            self.render_flag_table(output, &rec.missing_flags);
            output.push_str("Suggested command:\n\n");
            output.push_str(&format!("```sh\n{}\n```\n\n", rec.suggested_command));
            output.push_str("package.json:\n\n");
            output.push_str(&format!("```json\n{}\n```\n\n", rec.script_suggestion));
        }
    }

    fn render_flag_sets(&self, output: &mut String, flags: &SynthesizedFlags) {
        output.push_str("## Recommended Flag Sets\n\n");

        if flags.is_empty() {
            output.push_str(
                "Host memory could not be determined, so no flag sets were synthesized.\n\n",
            );
            return;
        }

        for (label, set) in flags.leaves() {
            if set.is_empty() {
                continue;
            }
            output.push_str(&format!("### {}\n\n", label));
            output.push_str(&format!("```sh\nnode {}\n```\n\n", set.rendered().join(" ")));
        }
    }

    fn render_dependencies(&self, output: &mut String, report: &DependencyReport) {
        if !report.checked {
            return;
        }
        output.push_str("## Dependencies\n\n");

        if report.vulnerable.is_empty() {
            output.push_str("No known vulnerabilities found.\n\n");
        } else {
            output.push_str("### Vulnerable\n\n");
            output.push_str(VULN_TABLE_HEADER);
            output.push_str(VULN_TABLE_SEPARATOR);
            for vulnerable in &report.vulnerable {
                for advisory in &vulnerable.advisories {
                    output.push_str(&format!(
                        "| {} | {} | {} | {} | {} |\n",
                        Self::escape_cell(&vulnerable.package),
                        Self::escape_cell(&vulnerable.current_version),
                        Self::escape_cell(&advisory.id),
                        advisory.severity.as_deref().unwrap_or("N/A"),
                        advisory.fixed_version.as_deref().unwrap_or("N/A"),
                    ));
                }
            }
            output.push('\n');
        }

        if !report.outdated.is_empty() {
            output.push_str("### Outdated\n\n");
            output.push_str(OUTDATED_TABLE_HEADER);
            output.push_str(OUTDATED_TABLE_SEPARATOR);
            for outdated in &report.outdated {
                output.push_str(&format!(
                    "| {} | {} | {} | {} |\n",
                    Self::escape_cell(&outdated.package),
                    Self::escape_cell(&outdated.current_version),
                    Self::escape_cell(&outdated.latest_version),
                    outdated.update_type
                ));
            }
            output.push('\n');
        }

        if !report.failed.is_empty() {
            output.push_str("### Lookup Failures\n\n");
            for failed in &report.failed {
                output.push_str(&format!("- **{}**: {}\n", failed.package, failed.error));
            }
            output.push('\n');
        }
    }
}

impl AuditFormatter for MarkdownFormatter {
    fn format(&self, result: &AuditResult) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, result);
        self.render_system(&mut output, &result.resource_profile);
        self.render_recommendations(&mut output, &result.recommendations);
        self.render_flag_sets(&mut output, &result.flags);
        self.render_dependencies(&mut output, &result.dependencies);

        Ok(output)
    }
}
