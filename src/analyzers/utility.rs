/// Computes the arithmetic mean of a slice of values.
///
/// An empty slice has no mean; the missing value propagates to the output
/// table rather than reading as zero.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
