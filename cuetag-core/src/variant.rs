//! Variant registry
//!
//! A variant is a named, immutable combination of decision toggles. The
//! registry is a closed `'static` table; lookups by unknown names fail
//! instead of falling back to a default.

use serde::Serialize;

use crate::error::{CuetagError, Result};

/// What the mitigation exception does to a negative call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MitigationPolicy {
    /// Downgrade to Neutral.
    Neutralize,
    /// Flip to Positive.
    Reverse,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantConfig {
    pub name: &'static str,
    /// Future tense needs a temporal expression alongside the future cue.
    pub require_time_for_future_tense: bool,
    /// Any negative cue wins over positive cues.
    pub strengthen_negative_polarity: bool,
    /// Mitigation vocabulary overrides a strengthened negative call.
    pub enable_mitigation_exception: bool,
    pub mitigation: MitigationPolicy,
}

pub const DEFAULT_VARIANT: &str = "26_C";

pub const VARIANTS: &[VariantConfig] = &[
    // future tense needs an explicit time expression
    VariantConfig {
        name: "26_A",
        require_time_for_future_tense: true,
        strengthen_negative_polarity: false,
        enable_mitigation_exception: false,
        mitigation: MitigationPolicy::Neutralize,
    },
    // negative polarity strengthened
    VariantConfig {
        name: "26_B",
        require_time_for_future_tense: false,
        strengthen_negative_polarity: true,
        enable_mitigation_exception: false,
        mitigation: MitigationPolicy::Neutralize,
    },
    // 26_A + 26_B + mitigation neutralizes
    VariantConfig {
        name: "26_C",
        require_time_for_future_tense: true,
        strengthen_negative_polarity: true,
        enable_mitigation_exception: true,
        mitigation: MitigationPolicy::Neutralize,
    },
    // 26_C, mitigation reverses to positive
    VariantConfig {
        name: "27_A",
        require_time_for_future_tense: true,
        strengthen_negative_polarity: true,
        enable_mitigation_exception: true,
        mitigation: MitigationPolicy::Reverse,
    },
    // 26_C, conservative neutralize
    VariantConfig {
        name: "27_B",
        require_time_for_future_tense: true,
        strengthen_negative_polarity: true,
        enable_mitigation_exception: true,
        mitigation: MitigationPolicy::Neutralize,
    },
];

/// Look up a variant by exact name.
pub fn lookup(name: &str) -> Result<&'static VariantConfig> {
    VARIANTS
        .iter()
        .find(|v| v.name == name)
        .ok_or_else(|| CuetagError::UnknownVariant {
            name: name.to_string(),
            known: names().collect::<Vec<_>>().join(", "),
        })
}

pub fn names() -> impl Iterator<Item = &'static str> {
    VARIANTS.iter().map(|v| v.name)
}

impl VariantConfig {
    /// Compact one-line description, e.g. for `cuetag variants`.
    pub fn describe(&self) -> String {
        let policy = match self.mitigation {
            MitigationPolicy::Neutralize => "neutralize",
            MitigationPolicy::Reverse => "reverse",
        };
        format!(
            "{} time_gate={} strengthen_neg={} mitigation={}",
            self.name,
            self.require_time_for_future_tense,
            self.strengthen_negative_polarity,
            if self.enable_mitigation_exception { policy } else { "off" }
        )
    }
}
