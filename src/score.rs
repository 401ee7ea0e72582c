use std::fmt;

use tracing::debug;

use crate::error::{check_batch, MetricsError};
use crate::ned::{calculate_ned, pair_ned};
use crate::utils::Sequence;
use crate::wra::{calculate_wra, exact_match};

/// Aggregate scores for one evaluated batch.
///
/// `character_accuracy` is exactly `1 - NED`; it is derived once here and
/// never recomputed independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub word_recognition_accuracy: f64,
    pub character_accuracy: f64,
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Word Recognition Accuracy (WRA): {:.4}",
            self.word_recognition_accuracy
        )?;
        write!(
            f,
            "Character-level Accuracy (1 - NED): {:.4}",
            self.character_accuracy
        )
    }
}

/// Computes WRA and character-level accuracy for index-aligned batches of
/// predicted and ground-truth strings.
pub fn evaluate_metrics(
    predicted: &[String],
    ground_truth: &[String],
) -> Result<Metrics, MetricsError> {
    let ned = calculate_ned(predicted, ground_truth)?;
    let wra = calculate_wra(predicted, ground_truth)?;
    debug!(
        pairs = predicted.len(),
        wra, ned, "evaluated recognition batch"
    );

    Ok(Metrics {
        word_recognition_accuracy: wra,
        character_accuracy: 1.0 - ned,
    })
}

/// Per-pair result from the batch scoring path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairOutcome {
    pub exact_match: bool,
    pub normalized_distance: f64,
}

pub struct EvalContext {
    pred: Sequence,
    gold: Sequence,
}

impl EvalContext {
    pub fn new(pred: Sequence, gold: Sequence) -> Self {
        EvalContext { pred, gold }
    }

    pub fn from_str(pred: String, gold: String) -> Self {
        EvalContext {
            pred: Sequence::new(pred.as_str()),
            gold: Sequence::new(gold.as_str()),
        }
    }

    pub fn outcome(&self) -> PairOutcome {
        PairOutcome {
            exact_match: exact_match(&self.pred, &self.gold),
            normalized_distance: pair_ned(&self.pred, &self.gold),
        }
    }
}

/// Scores every pair in the batch, one task per pair.
pub async fn pair_outcomes(
    pred_batch: Vec<String>,
    gold_batch: Vec<String>,
) -> Result<Vec<PairOutcome>, MetricsError> {
    check_batch(&pred_batch, &gold_batch)?;

    let mut contexts: Vec<EvalContext> = vec![];
    let zipped_contents = pred_batch.into_iter().zip(gold_batch.into_iter());
    for (pred, gold) in zipped_contents {
        contexts.push(EvalContext::from_str(pred, gold));
    }
    let tasks = contexts
        .into_iter()
        .map(|input| async move { input.outcome() });
    let outcomes = futures::future::join_all(tasks).await;
    debug!(pairs = outcomes.len(), "scored recognition pairs");
    Ok(outcomes)
}

impl Metrics {
    /// Aggregates per-pair outcomes into the same numbers
    /// `evaluate_metrics` produces for the same batch.
    pub fn from_outcomes(outcomes: &[PairOutcome]) -> Result<Self, MetricsError> {
        if outcomes.is_empty() {
            return Err(MetricsError::EmptyBatch);
        }

        let n = outcomes.len() as f64;
        let correct = outcomes.iter().filter(|o| o.exact_match).count() as f64;
        let total_distance: f64 = outcomes.iter().map(|o| o.normalized_distance).sum();
        Ok(Metrics {
            word_recognition_accuracy: correct / n,
            character_accuracy: 1.0 - total_distance / n,
        })
    }
}
