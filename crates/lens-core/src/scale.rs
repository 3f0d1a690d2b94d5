//! Unit normalization for the price-per-area chart series.

/// A rescaled value series together with the factor that was applied.
///
/// Transient: used only while building one chart; never written back into a
/// listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleResult {
    pub scaled_values: Vec<f64>,
    pub scale_factor: f64,
}

/// Rescale a batch of price-per-sqm values reported in inconsistent units.
///
/// Upstream sources variously report dollars, thousands of dollars, or
/// millions of dollars per square metre. The thresholds assume AUD and
/// typical Australian per-sqm prices (roughly $300–$5000): a batch whose
/// maximum is below 0.02 is taken to be millions-per-sqm, below 20
/// thousands-per-sqm, anything else is left alone. The constants are a
/// locale assumption, not derived from the data.
///
/// Input must already be filtered to finite values. Output preserves order.
pub fn normalize_scale(values: &[f64]) -> ScaleResult {
    if values.is_empty() {
        return ScaleResult {
            scaled_values: Vec::new(),
            scale_factor: 1.0,
        };
    }

    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let scale_factor = if max > 0.0 && max < 0.02 {
        1_000_000.0
    } else if max > 0.0 && max < 20.0 {
        1_000.0
    } else {
        1.0
    };

    ScaleResult {
        scaled_values: values.iter().map(|v| v * scale_factor).collect(),
        scale_factor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_scales_by_one() {
        let result = normalize_scale(&[]);
        assert!(result.scaled_values.is_empty());
        assert_eq!(result.scale_factor, 1.0);
    }

    #[test]
    fn test_millions_per_sqm_detected() {
        let result = normalize_scale(&[0.005, 0.01]);
        assert_eq!(result.scale_factor, 1_000_000.0);
        assert_eq!(result.scaled_values, vec![5000.0, 10000.0]);
    }

    #[test]
    fn test_thousands_per_sqm_detected() {
        let result = normalize_scale(&[5.0, 10.0]);
        assert_eq!(result.scale_factor, 1_000.0);
        assert_eq!(result.scaled_values, vec![5000.0, 10000.0]);
    }

    #[test]
    fn test_plain_dollars_left_alone() {
        let result = normalize_scale(&[500.0, 800.0]);
        assert_eq!(result.scale_factor, 1.0);
        assert_eq!(result.scaled_values, vec![500.0, 800.0]);
    }

    #[test]
    fn test_boundary_at_twenty_is_not_scaled() {
        let result = normalize_scale(&[20.0]);
        assert_eq!(result.scale_factor, 1.0);
    }

    #[test]
    fn test_order_preserved() {
        let result = normalize_scale(&[10.0, 2.0, 7.0]);
        assert_eq!(result.scaled_values, vec![10000.0, 2000.0, 7000.0]);
    }

    #[test]
    fn test_all_zero_batch_is_not_scaled() {
        // max == 0 fails the `max > 0` guard on both thresholds.
        let result = normalize_scale(&[0.0, 0.0]);
        assert_eq!(result.scale_factor, 1.0);
    }
}
