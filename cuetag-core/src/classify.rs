//! Rule-based attribute classifiers
//!
//! Each attribute is decided by an ordered chain of named rules plus a
//! fallback label. The first rule whose predicate holds wins, no matter how
//! many later rules would also hold, so the order of each `*_CHAIN` table is
//! load-bearing.
//!
//! Type and certainty depend on the text alone; tense and polarity also read
//! the active [`VariantConfig`].

use std::fmt;

use crate::labels::{Certainty, DiscourseType, Polarity, Prediction, Tense};
use crate::lexicon::{
    CERTAIN, CONVERSATIONAL, FACTUAL_REPORT, FUTURE, INFERENTIAL, MITIGATION, NEGATIVE,
    NEGATIVE_MORPHEMES, PAST, POSITIVE, PREDICTIVE, PRESENT, TEMPORAL, UNCERTAIN,
};
use crate::variant::{MitigationPolicy, VariantConfig};

// ============================================================================
// Rule chains
// ============================================================================

/// One `(predicate, label)` step of a priority chain.
///
/// `X` is the extra context the predicate reads: `()` for text-only
/// attributes, [`VariantConfig`] for variant-dependent ones.
pub struct Rule<L, X: ?Sized = ()> {
    pub name: &'static str,
    pub label: L,
    pub applies: fn(&str, &X) -> bool,
}

/// A rule chain with its fallback label.
pub struct Chain<L: 'static, X: ?Sized + 'static = ()> {
    pub rules: &'static [Rule<L, X>],
    pub fallback: L,
}

impl<L: Copy + 'static, X: ?Sized + 'static> Chain<L, X> {
    /// The first rule that applies, if any.
    pub fn matched(&self, text: &str, ctx: &X) -> Option<&'static Rule<L, X>> {
        self.rules.iter().find(|r| (r.applies)(text, ctx))
    }

    pub fn decide(&self, text: &str, ctx: &X) -> L {
        self.matched(text, ctx).map_or(self.fallback, |r| r.label)
    }
}

// ============================================================================
// Type
// ============================================================================

pub static TYPE_CHAIN: Chain<DiscourseType> = Chain {
    rules: &[
        Rule {
            name: "conversational",
            label: DiscourseType::Conversational,
            applies: |t, _| CONVERSATIONAL.matches(t),
        },
        Rule {
            name: "predictive",
            label: DiscourseType::Predictive,
            applies: |t, _| PREDICTIVE.matches(t),
        },
        Rule {
            name: "inferential",
            label: DiscourseType::Inferential,
            applies: |t, _| INFERENTIAL.matches(t),
        },
        Rule {
            name: "factual_report",
            label: DiscourseType::Factual,
            applies: |t, _| FACTUAL_REPORT.matches(t),
        },
    ],
    fallback: DiscourseType::Factual,
};

pub fn classify_type(text: &str) -> DiscourseType {
    TYPE_CHAIN.decide(text, &())
}

// ============================================================================
// Tense
// ============================================================================

fn is_future(text: &str, cfg: &VariantConfig) -> bool {
    let candidate = FUTURE.matches(text) || PREDICTIVE.matches(text);
    let has_time = TEMPORAL.matches(text);
    candidate && (has_time || !cfg.require_time_for_future_tense)
}

pub static TENSE_CHAIN: Chain<Tense, VariantConfig> = Chain {
    rules: &[
        Rule {
            name: "future",
            label: Tense::Future,
            applies: is_future,
        },
        Rule {
            name: "past",
            label: Tense::Past,
            applies: |t, _| PAST.matches(t),
        },
        Rule {
            name: "present",
            label: Tense::Present,
            applies: |t, _| PRESENT.matches(t),
        },
    ],
    fallback: Tense::Present,
};

pub fn classify_tense(text: &str, cfg: &VariantConfig) -> Tense {
    TENSE_CHAIN.decide(text, cfg)
}

// ============================================================================
// Certainty
// ============================================================================

pub static CERTAINTY_CHAIN: Chain<Certainty> = Chain {
    rules: &[
        // hedging overrides any certainty cue
        Rule {
            name: "hedged",
            label: Certainty::Uncertain,
            applies: |t, _| UNCERTAIN.matches(t),
        },
        Rule {
            name: "asserted",
            label: Certainty::Certain,
            applies: |t, _| CERTAIN.matches(t) || FACTUAL_REPORT.matches(t),
        },
    ],
    fallback: Certainty::Certain,
};

pub fn classify_certainty(text: &str) -> Certainty {
    CERTAINTY_CHAIN.decide(text, &())
}

// ============================================================================
// Polarity
// ============================================================================

fn has_negative(text: &str) -> bool {
    NEGATIVE.matches(text) || NEGATIVE_MORPHEMES.matches(text)
}

fn strengthened_negative(text: &str, cfg: &VariantConfig) -> bool {
    cfg.strengthen_negative_polarity && has_negative(text)
}

fn mitigated(text: &str, cfg: &VariantConfig, policy: MitigationPolicy) -> bool {
    strengthened_negative(text, cfg)
        && cfg.enable_mitigation_exception
        && cfg.mitigation == policy
        && MITIGATION.matches(text)
}

pub static POLARITY_CHAIN: Chain<Polarity, VariantConfig> = Chain {
    rules: &[
        Rule {
            name: "mitigation_reverse",
            label: Polarity::Positive,
            applies: |t, c| mitigated(t, c, MitigationPolicy::Reverse),
        },
        Rule {
            name: "mitigation_neutralize",
            label: Polarity::Neutral,
            applies: |t, c| mitigated(t, c, MitigationPolicy::Neutralize),
        },
        Rule {
            name: "strengthened_negative",
            label: Polarity::Negative,
            applies: strengthened_negative,
        },
        Rule {
            name: "positive_only",
            label: Polarity::Positive,
            applies: |t, _| POSITIVE.matches(t) && !has_negative(t),
        },
        Rule {
            name: "negative_only",
            label: Polarity::Negative,
            applies: |t, _| has_negative(t) && !POSITIVE.matches(t),
        },
    ],
    // neither cue, or both cues without strengthening
    fallback: Polarity::Neutral,
};

pub fn classify_polarity(text: &str, cfg: &VariantConfig) -> Polarity {
    POLARITY_CHAIN.decide(text, cfg)
}

// ============================================================================
// All four
// ============================================================================

pub fn classify(text: &str, cfg: &VariantConfig) -> Prediction {
    Prediction {
        kind: classify_type(text),
        polarity: classify_polarity(text, cfg),
        tense: classify_tense(text, cfg),
        certainty: classify_certainty(text),
    }
}

/// Names of the rules that fired for each attribute, `None` where the fallback applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trace {
    pub kind: Option<&'static str>,
    pub polarity: Option<&'static str>,
    pub tense: Option<&'static str>,
    pub certainty: Option<&'static str>,
}

pub fn trace(text: &str, cfg: &VariantConfig) -> Trace {
    Trace {
        kind: TYPE_CHAIN.matched(text, &()).map(|r| r.name),
        polarity: POLARITY_CHAIN.matched(text, cfg).map(|r| r.name),
        tense: TENSE_CHAIN.matched(text, cfg).map(|r| r.name),
        certainty: CERTAINTY_CHAIN.matched(text, &()).map(|r| r.name),
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = |rule: Option<&'static str>| rule.unwrap_or("fallback");
        write!(
            f,
            "type={} pol={} tense={} cert={}",
            name(self.kind),
            name(self.polarity),
            name(self.tense),
            name(self.certainty)
        )
    }
}
