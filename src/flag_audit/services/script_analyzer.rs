use crate::flag_audit::domain::{
    flag_tokens, Category, Environment, FlagSet, Recommendation, ResourceProfile, Script,
    Scripts, SynthesizedFlags, DEBUG_SCRIPT, START_SCRIPT,
};
use crate::flag_audit::policies::{CategoryRules, RecommendationPolicy, RuleContext};
use crate::flag_audit::services::FlagSynthesizer;

const DEFAULT_PROGRAM: &str = "node";

/// ScriptAnalyzer service for comparing declared scripts against the
/// synthesized flag sets
///
/// Only the `start` and `debug` scripts are analyzed; every other script is
/// skipped silently.
pub struct ScriptAnalyzer {
    rules: CategoryRules,
}

impl ScriptAnalyzer {
    pub fn new(rules: CategoryRules) -> Self {
        Self { rules }
    }

    /// Produces recommendations for every analyzed script, in manifest order
    ///
    /// Within a script, recommendations follow the order security,
    /// performance, debug, production. The production category is dropped
    /// outside the production environment.
    ///
    /// Targets come from the baseline tree, so a flag declared in one script
    /// is still recommended for a script that lacks it.
    pub fn analyze(
        &self,
        scripts: &Scripts,
        environment: Environment,
        profile: &ResourceProfile,
    ) -> Vec<Recommendation> {
        let baseline = FlagSynthesizer::baseline(profile);
        scripts
            .iter()
            .filter_map(|script| {
                let target = Self::target_set(script.name(), environment, profile, &baseline)?;
                Some(self.analyze_script(script, target, environment, profile))
            })
            .flatten()
            .collect()
    }

    /// Picks the flag set a script is measured against
    pub fn target_set<'a>(
        script_name: &str,
        environment: Environment,
        profile: &ResourceProfile,
        flags: &'a SynthesizedFlags,
    ) -> Option<&'a FlagSet> {
        match script_name {
            START_SCRIPT if environment.is_production() && profile.is_high_performance() => {
                Some(&flags.production.high_performance)
            }
            START_SCRIPT if environment.is_production() => Some(&flags.production.secure),
            START_SCRIPT => Some(&flags.development.recommended),
            DEBUG_SCRIPT if !flags.development.debug.is_empty() => Some(&flags.development.debug),
            _ => None,
        }
    }

    fn analyze_script(
        &self,
        script: &Script,
        target: &FlagSet,
        environment: Environment,
        profile: &ResourceProfile,
    ) -> Vec<Recommendation> {
        let missing = target.without_names(&script.flag_names());
        if missing.is_empty() {
            return Vec::new();
        }

        let ctx = RuleContext {
            script_name: script.name(),
            environment,
        };
        let current_flags = flag_tokens(script.command());

        self.rules
            .partition(&missing, &ctx)
            .into_iter()
            .filter(|(category, _)| {
                environment.is_production() || *category != Category::Production
            })
            .map(|(category, missing_flags)| {
                let command = suggested_command(script.command(), &missing_flags);
                Recommendation {
                    script_name: script.name().to_string(),
                    current_flags: current_flags.clone(),
                    category,
                    priority: RecommendationPolicy::priority(category, script.name()),
                    reason: RecommendationPolicy::reason(category, script.name(), profile),
                    script_suggestion: format!("\"{}\": \"{}\"", script.name(), command),
                    suggested_command: command,
                    missing_flags,
                }
            })
            .collect()
    }
}

impl Default for ScriptAnalyzer {
    fn default() -> Self {
        Self::new(CategoryRules::standard())
    }
}

/// Rebuilds a launch command with the missing flags inserted
///
/// Layout: program, existing flags, missing flags, remaining arguments.
/// The program is the first non-flag token, `node` when there is none.
pub fn suggested_command(command: &str, missing: &FlagSet) -> String {
    let mut program: Option<&str> = None;
    let mut existing: Vec<&str> = Vec::new();
    let mut arguments: Vec<&str> = Vec::new();

    for token in command.split_whitespace() {
        if token.starts_with("--") {
            existing.push(token);
        } else if program.is_none() {
            program = Some(token);
        } else {
            arguments.push(token);
        }
    }

    let rendered = missing.rendered();
    let mut parts: Vec<&str> = vec![program.unwrap_or(DEFAULT_PROGRAM)];
    parts.extend(existing);
    parts.extend(rendered.iter().map(String::as_str));
    parts.extend(arguments);
    parts.join(" ")
}
