use crate::error::{check_batch, MetricsError};
use crate::utils::Sequence;

/// Character-for-character equality of one pair.
pub fn exact_match(pred: &Sequence, gold: &Sequence) -> bool {
    pred.text == gold.text
}

/// Fraction of index-aligned pairs where the prediction exactly matches
/// the ground truth.
pub fn calculate_wra(
    predicted: &[String],
    ground_truth: &[String],
) -> Result<f64, MetricsError> {
    check_batch(predicted, ground_truth)?;

    let correct_words = predicted
        .iter()
        .zip(ground_truth.iter())
        .filter(|(p, gt)| p == gt)
        .count();
    Ok(correct_words as f64 / predicted.len() as f64)
}
