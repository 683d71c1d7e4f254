//! Evaluation harness
//!
//! Runs the four classifiers over labeled rows in input order and reports
//! per-attribute accuracy plus their unweighted mean. Rows that fail
//! validation are skipped and never count toward the sample total.

use serde::Serialize;

use crate::classify::{classify, trace};
use crate::corpus::{labeled_rows, CorpusRecord};
use crate::labels::{GoldLabel, Prediction};
use crate::variant::VariantConfig;

// ============================================================================
// PUBLIC API
// ============================================================================

/// Accuracy report for one evaluation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Metrics {
    pub sample_count: usize,
    pub type_accuracy: f64,
    pub polarity_accuracy: f64,
    pub tense_accuracy: f64,
    pub certainty_accuracy: f64,
    pub macro_average: f64,
}

impl Metrics {
    /// `variant=<name> samples=<n> type=<acc> pol=<acc> tense=<acc> cert=<acc> avg=<acc>`
    pub fn summary_line(&self, variant: &str) -> String {
        format!(
            "variant={} samples={} type={:.4} pol={:.4} tense={:.4} cert={:.4} avg={:.4}",
            variant,
            self.sample_count,
            self.type_accuracy,
            self.polarity_accuracy,
            self.tense_accuracy,
            self.certainty_accuracy,
            self.macro_average
        )
    }
}

/// Evaluate `records` under `cfg`, stopping after `limit` valid rows if given.
pub fn evaluate<'a, I>(records: I, cfg: &VariantConfig, limit: Option<usize>) -> Metrics
where
    I: IntoIterator<Item = &'a CorpusRecord>,
{
    let mut tally = Tally::default();

    for row in labeled_rows(records) {
        if limit.is_some_and(|max| tally.total >= max) {
            tracing::debug!("Row limit {} reached", tally.total);
            break;
        }
        let prediction = classify(row.text, cfg);
        if !tally.record(&prediction, &row.gold) {
            tracing::debug!(
                "Mismatch on '{}': predicted {}, gold {:?}, rules {}",
                row.text,
                prediction,
                row.gold,
                trace(row.text, cfg)
            );
        }
    }

    let metrics = tally.finish();
    tracing::info!(
        "Evaluation complete: variant={} samples={} avg={:.4}",
        cfg.name,
        metrics.sample_count,
        metrics.macro_average
    );
    metrics
}

// ============================================================================
// INTERNAL HELPERS
// ============================================================================

#[derive(Debug, Default)]
struct Tally {
    total: usize,
    kind: usize,
    polarity: usize,
    tense: usize,
    certainty: usize,
}

impl Tally {
    /// Count one row; `true` when all four attributes match.
    fn record(&mut self, prediction: &Prediction, gold: &GoldLabel) -> bool {
        let kind = gold.kind == Some(prediction.kind);
        let polarity = gold.polarity == Some(prediction.polarity);
        let tense = gold.tense == Some(prediction.tense);
        let certainty = gold.certainty == Some(prediction.certainty);

        self.total += 1;
        self.kind += usize::from(kind);
        self.polarity += usize::from(polarity);
        self.tense += usize::from(tense);
        self.certainty += usize::from(certainty);
        kind && polarity && tense && certainty
    }

    fn finish(&self) -> Metrics {
        let type_accuracy = ratio(self.kind, self.total);
        let polarity_accuracy = ratio(self.polarity, self.total);
        let tense_accuracy = ratio(self.tense, self.total);
        let certainty_accuracy = ratio(self.certainty, self.total);
        Metrics {
            sample_count: self.total,
            type_accuracy,
            polarity_accuracy,
            tense_accuracy,
            certainty_accuracy,
            macro_average: (type_accuracy + polarity_accuracy + tense_accuracy + certainty_accuracy)
                / 4.0,
        }
    }
}

fn ratio(hits: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        hits as f64 / total as f64
    }
}
