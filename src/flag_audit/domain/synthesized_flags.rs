use super::flag::FlagSet;
use serde::Serialize;

/// Flag sets targeted at development
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DevelopmentFlags {
    pub basic: FlagSet,
    pub recommended: FlagSet,
    pub debug: FlagSet,
}

/// Flag sets targeted at production
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProductionFlags {
    pub basic: FlagSet,
    pub secure: FlagSet,
    pub high_performance: FlagSet,
}

/// Full recommended flag tree for one resource profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SynthesizedFlags {
    pub development: DevelopmentFlags,
    pub production: ProductionFlags,
}

impl SynthesizedFlags {
    /// Tree with every leaf empty, used when host resources are unavailable
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every leaf with a stable label, development first
    pub fn leaves(&self) -> [(&'static str, &FlagSet); 6] {
        [
            ("development.basic", &self.development.basic),
            ("development.recommended", &self.development.recommended),
            ("development.debug", &self.development.debug),
            ("production.basic", &self.production.basic),
            ("production.secure", &self.production.secure),
            ("production.high_performance", &self.production.high_performance),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.leaves().iter().all(|(_, set)| set.is_empty())
    }
}
