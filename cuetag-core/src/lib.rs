pub mod classify;
pub mod config;
pub mod corpus;
pub mod error;
pub mod eval;
pub mod labels;
pub mod lexicon;
pub mod validate;
pub mod variant;

pub use classify::{classify, classify_certainty, classify_polarity, classify_tense, classify_type};
pub use config::CuetagConfig;
pub use corpus::{CorpusRecord, LabeledRow};
pub use error::CuetagError;
pub use eval::{evaluate, Metrics};
pub use labels::{Certainty, DiscourseType, GoldLabel, Label, Polarity, Prediction, Script, Tense};
pub use validate::{validate_lines, ValidationIssue};
pub use variant::{MitigationPolicy, VariantConfig, DEFAULT_VARIANT};
