use crate::flag_audit::domain::{Category, Environment, FlagName, FlagSet, DEBUG_SCRIPT};

/// What a rule is evaluated against besides the flag itself
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub script_name: &'a str,
    pub environment: Environment,
}

/// A single categorization rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryRule {
    /// Every flag of the `debug` script is a debug flag
    DebugScript,
    /// Flag name contains any of the needles
    NameContains {
        needles: &'static [&'static str],
        category: Category,
    },
    /// Like `NameContains`, but only in production
    ProductionNameContains {
        needles: &'static [&'static str],
        category: Category,
    },
    /// Always matches
    Fallback(Category),
}

impl CategoryRule {
    pub fn evaluate(&self, name: &FlagName, ctx: &RuleContext<'_>) -> Option<Category> {
        match self {
            CategoryRule::DebugScript => {
                (ctx.script_name == DEBUG_SCRIPT).then_some(Category::Debug)
            }
            CategoryRule::NameContains { needles, category } => needles
                .iter()
                .any(|needle| name.contains(needle))
                .then_some(*category),
            CategoryRule::ProductionNameContains { needles, category } => {
                (ctx.environment.is_production()
                    && needles.iter().any(|needle| name.contains(needle)))
                .then_some(*category)
            }
            CategoryRule::Fallback(category) => Some(*category),
        }
    }
}

/// Ordered rule chain; the first matching rule decides the category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRules {
    rules: Vec<CategoryRule>,
}

impl CategoryRules {
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        Self { rules }
    }

    /// The standard chain:
    /// 1. `debug` script → debug
    /// 2. `secure` / `experimental` / `report` → security
    /// 3. `heap` / `space-size` / `optimize` → performance
    /// 4. production and `abort` / `title` → production
    /// 5. anything else → performance
    pub fn standard() -> Self {
        Self::new(vec![
            CategoryRule::DebugScript,
            CategoryRule::NameContains {
                needles: &["secure", "experimental", "report"],
                category: Category::Security,
            },
            CategoryRule::NameContains {
                needles: &["heap", "space-size", "optimize"],
                category: Category::Performance,
            },
            CategoryRule::ProductionNameContains {
                needles: &["abort", "title"],
                category: Category::Production,
            },
            CategoryRule::Fallback(Category::Performance),
        ])
    }

    pub fn categorize(&self, name: &FlagName, ctx: &RuleContext<'_>) -> Category {
        self.rules
            .iter()
            .find_map(|rule| rule.evaluate(name, ctx))
            .unwrap_or(Category::Performance)
    }

    /// Splits a flag set into per-category sets, in `Category::all()` order,
    /// omitting empty categories.
    pub fn partition(&self, flags: &FlagSet, ctx: &RuleContext<'_>) -> Vec<(Category, FlagSet)> {
        Category::all()
            .into_iter()
            .map(|category| {
                let members: FlagSet = flags
                    .iter()
                    .filter(|flag| self.categorize(flag.name(), ctx) == category)
                    .cloned()
                    .collect();
                (category, members)
            })
            .filter(|(_, members)| !members.is_empty())
            .collect()
    }
}

impl Default for CategoryRules {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> FlagName {
        FlagName::new(s.to_string()).unwrap()
    }

    fn ctx(script_name: &str, environment: Environment) -> RuleContext<'_> {
        RuleContext {
            script_name,
            environment,
        }
    }

    #[test]
    fn test_debug_script_overrides_everything() {
        let rules = CategoryRules::standard();
        let c = ctx("debug", Environment::Production);
        assert_eq!(rules.categorize(&name("--secure-heap"), &c), Category::Debug);
        assert_eq!(rules.categorize(&name("--title"), &c), Category::Debug);
    }

    #[test]
    fn test_security_beats_performance() {
        let rules = CategoryRules::standard();
        let c = ctx("start", Environment::Development);
        assert_eq!(rules.categorize(&name("--secure-heap"), &c), Category::Security);
        assert_eq!(
            rules.categorize(&name("--secure-heap-min"), &c),
            Category::Security
        );
    }

    #[test]
    fn test_security_needles() {
        let rules = CategoryRules::standard();
        let c = ctx("start", Environment::Production);
        assert_eq!(
            rules.categorize(&name("--no-experimental-fetch"), &c),
            Category::Security
        );
        assert_eq!(
            rules.categorize(&name("--report-on-fatalerror"), &c),
            Category::Security
        );
    }

    #[test]
    fn test_performance_needles() {
        let rules = CategoryRules::standard();
        let c = ctx("start", Environment::Production);
        assert_eq!(
            rules.categorize(&name("--max-old-space-size"), &c),
            Category::Performance
        );
        assert_eq!(
            rules.categorize(&name("--optimize-for-size"), &c),
            Category::Performance
        );
        assert_eq!(
            rules.categorize(&name("--heapsnapshot-near-heap-limit"), &c),
            Category::Performance
        );
    }

    #[test]
    fn test_production_rule_only_in_production() {
        let rules = CategoryRules::standard();
        assert_eq!(
            rules.categorize(
                &name("--abort-on-uncaught-exception"),
                &ctx("start", Environment::Production)
            ),
            Category::Production
        );
        assert_eq!(
            rules.categorize(
                &name("--abort-on-uncaught-exception"),
                &ctx("start", Environment::Development)
            ),
            Category::Performance
        );
    }

    #[test]
    fn test_fallback_is_performance() {
        let rules = CategoryRules::standard();
        let c = ctx("start", Environment::Production);
        assert_eq!(rules.categorize(&name("--no-deprecation"), &c), Category::Performance);
    }

    #[test]
    fn test_rule_evaluation_in_isolation() {
        let rule = CategoryRule::NameContains {
            needles: &["heap"],
            category: Category::Performance,
        };
        let c = ctx("start", Environment::Development);
        assert_eq!(
            rule.evaluate(&name("--track-heap-objects"), &c),
            Some(Category::Performance)
        );
        assert_eq!(rule.evaluate(&name("--title"), &c), None);
        assert_eq!(CategoryRule::DebugScript.evaluate(&name("--title"), &c), None);
    }

    #[test]
    fn test_empty_chain_defaults_to_performance() {
        let rules = CategoryRules::new(vec![]);
        let c = ctx("start", Environment::Production);
        assert_eq!(rules.categorize(&name("--title"), &c), Category::Performance);
    }
}
