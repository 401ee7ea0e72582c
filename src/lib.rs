//! Quality metrics for text-recognition output.
//!
//! Compares a batch of predicted strings against index-aligned ground-truth
//! strings and reports Word Recognition Accuracy (the fraction of exact
//! matches) together with character-level accuracy, derived as `1 - NED`
//! where NED is the mean per-pair edit distance normalized by the longer
//! string's length.
//!
//! All pred and gold text here is presumed to be PRE-PROCESSED.
//! ie lowercased, trimmed, with whitespace normalized

mod distance;
mod error;
mod ned;
mod score;
mod utils;
mod wra;

pub use crate::distance::levenshtein_distance;
pub use crate::error::MetricsError;
pub use crate::ned::{calculate_ned, pair_ned};
pub use crate::score::{evaluate_metrics, pair_outcomes, EvalContext, Metrics, PairOutcome};
pub use crate::utils::Sequence;
pub use crate::wra::calculate_wra;

#[cfg(test)]
mod tests {
    use super::*;

    // Reproduces the numbers from the reference evaluation run
    #[test]
    fn reference_evaluation_run() {
        let predicted_texts: Vec<String> = ["hello", "world", "foo"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let ground_truth_texts: Vec<String> = ["helo", "world", "fooo"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let metrics = evaluate_metrics(&predicted_texts, &ground_truth_texts).unwrap();
        let rendered = format!("{}", metrics);
        assert!(rendered.contains("Word Recognition Accuracy (WRA): 0.3333"));
        assert!(rendered.contains("Character-level Accuracy (1 - NED): 0.8500"));
    }
}
