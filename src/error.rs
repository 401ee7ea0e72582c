use thiserror::Error;

/// Input-validation failures detected before aggregation begins.
/// None of these are recoverable internally; they surface straight
/// to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetricsError {
    /// Averaging over zero pairs is undefined.
    #[error("cannot compute metrics over an empty batch")]
    EmptyBatch,

    /// Pairing is index-aligned, so both batches must be the same length.
    #[error("predicted batch has {predicted} entries but ground truth has {ground_truth}")]
    LengthMismatch {
        predicted: usize,
        ground_truth: usize,
    },
}

/// Rejects batches the aggregators cannot give a well-defined answer for.
/// Length mismatch is checked first so that one empty side against a
/// non-empty side reads as a mismatch, not an empty batch.
pub(crate) fn check_batch(
    predicted: &[String],
    ground_truth: &[String],
) -> Result<(), MetricsError> {
    if predicted.len() != ground_truth.len() {
        return Err(MetricsError::LengthMismatch {
            predicted: predicted.len(),
            ground_truth: ground_truth.len(),
        });
    }
    if predicted.is_empty() {
        return Err(MetricsError::EmptyBatch);
    }
    Ok(())
}
