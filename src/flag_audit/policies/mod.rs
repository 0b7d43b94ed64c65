pub mod category_rules;
pub mod flag_catalog;
pub mod recommendation_policy;

pub use category_rules::{CategoryRule, CategoryRules, RuleContext};
pub use flag_catalog::{FlagCatalog, FlagInfo};
pub use recommendation_policy::RecommendationPolicy;
