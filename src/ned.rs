use crate::distance::edit_distance;
use crate::error::{check_batch, MetricsError};
use crate::utils::Sequence;

/// Edit distance between one pair, normalized by the longer string's
/// character count. Always lands in [0, 1] since the distance can never
/// exceed the longer length.
pub fn pair_ned(pred: &Sequence, gold: &Sequence) -> f64 {
    let mut normalizing_constant = pred.n_chars.max(gold.n_chars);
    if normalizing_constant == 0 {
        // Two empty strings are a perfect match; clamping the
        // denominator to 1 makes their pair distance 0/1 = 0.
        normalizing_constant = 1;
    }

    let distance = edit_distance(&pred.char_vector, &gold.char_vector) as f64;
    distance / normalizing_constant as f64
}

/// Mean normalized edit distance over index-aligned pairs.
pub fn calculate_ned(
    predicted: &[String],
    ground_truth: &[String],
) -> Result<f64, MetricsError> {
    check_batch(predicted, ground_truth)?;

    let mut total_distance = 0.0;
    for (p, gt) in predicted.iter().zip(ground_truth.iter()) {
        total_distance += pair_ned(&Sequence::new(p), &Sequence::new(gt));
    }
    Ok(total_distance / predicted.len() as f64)
}
