//! Per-line pricing cascade
//!
//! Turns the four raw inputs of a budget line (unit value, quantity, utility
//! and tax percentages) into its derived monetary values.
//!
//! The two tax figures are intentionally computed on different bases:
//! `total` applies tax to the utility-loaded value while `gross_value`
//! applies it to the bare net value. Both are reported as-is.

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Tax percentage applied to a new line when nothing else is configured
pub const DEFAULT_TAX_PERCENT: f64 = 19.0;

/// Raw inputs of a priced budget line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingInput {
    pub unit_value: f64,
    pub quantity: f64,
    #[serde(default)]
    pub utility_percent: f64,
    #[serde(default = "default_tax_percent")]
    pub tax_percent: f64,
}

fn default_tax_percent() -> f64 {
    DEFAULT_TAX_PERCENT
}

impl Default for PricingInput {
    fn default() -> Self {
        Self {
            unit_value: 0.0,
            quantity: 0.0,
            utility_percent: 0.0,
            tax_percent: DEFAULT_TAX_PERCENT,
        }
    }
}

impl PricingInput {
    /// Create an input from its four raw values
    pub fn new(unit_value: f64, quantity: f64, utility_percent: f64, tax_percent: f64) -> Self {
        Self {
            unit_value,
            quantity,
            utility_percent,
            tax_percent,
        }
    }

    /// Copy of this input with every value passed through [`coerce_amount`]
    pub fn sanitized(&self) -> Self {
        Self {
            unit_value: coerce_amount(self.unit_value),
            quantity: coerce_amount(self.quantity),
            utility_percent: coerce_amount(self.utility_percent),
            tax_percent: coerce_amount(self.tax_percent),
        }
    }
}

/// Derived monetary values of a priced budget line
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinePricing {
    /// unit value × quantity
    pub net_value: f64,
    /// Net value with the utility margin applied
    pub utility_loaded: f64,
    /// Tax computed on the utility-loaded value
    pub tax_on_utility: f64,
    /// Net value plus tax on the net value (utility excluded)
    pub gross_value: f64,
    /// Utility-loaded value plus its tax
    pub total: f64,
}

/// Compute the pricing cascade for one line
///
/// Invalid inputs (NaN, infinite or negative) count as `0`. No rounding is
/// applied, so repeated calls with the same input return identical values.
pub fn compute_line_item(input: &PricingInput) -> LinePricing {
    let input = input.sanitized();

    let net_value = input.unit_value * input.quantity;
    let utility_loaded = net_value * (1.0 + input.utility_percent / 100.0);
    let tax_on_utility = utility_loaded * (input.tax_percent / 100.0);
    let total = utility_loaded + tax_on_utility;
    let gross_value = net_value + net_value * (input.tax_percent / 100.0);

    LinePricing {
        net_value,
        utility_loaded,
        tax_on_utility,
        gross_value,
        total,
    }
}

/// Coerce a raw amount into a usable non-negative number
pub fn coerce_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        if value != 0.0 {
            trace!(value, "coercing invalid amount to zero");
        }
        0.0
    }
}

/// Parse a possibly half-typed numeric field
///
/// Uses the longest numeric prefix of the trimmed text, so `"12.5 m2"` is
/// 12.5 and `"12."` is 12. Text without a numeric prefix and negative
/// numbers yield `0`.
pub fn parse_lenient(text: &str) -> f64 {
    let text = text.trim();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        end = frac_end;
    }

    if mantissa_digits == 0 {
        return 0.0;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    let mut number = text[..end].replace("-.", "-0.").replace("+.", "+0.");
    if number.starts_with('.') {
        number.insert(0, '0');
    }
    if let Some(stripped) = number.strip_suffix('.') {
        number = stripped.to_string();
    }
    let number = number.replace(".e", "e").replace(".E", "E");

    coerce_amount(number.parse::<f64>().unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_no_utility_scenario() {
        let pricing = compute_line_item(&PricingInput::new(1000.0, 2.0, 0.0, 19.0));

        assert_eq!(pricing.net_value, 2000.0);
        assert_close(pricing.utility_loaded, 2000.0);
        assert_close(pricing.gross_value, 2380.0);
        assert_close(pricing.total, 2380.0);
    }

    #[test]
    fn test_utility_scenario_keeps_gross_and_total_apart() {
        let pricing = compute_line_item(&PricingInput::new(1000.0, 1.0, 10.0, 19.0));

        assert_close(pricing.utility_loaded, 1100.0);
        assert_close(pricing.tax_on_utility, 209.0);
        assert_close(pricing.total, 1309.0);
        assert_close(pricing.gross_value, 1190.0);
        assert!(pricing.total != pricing.gross_value);
    }

    #[test]
    fn test_net_value_is_exact_product() {
        for (unit, qty) in [(0.1, 3.0), (1234.56, 7.25), (99_999.99, 0.5), (0.0, 10.0)] {
            let pricing = compute_line_item(&PricingInput::new(unit, qty, 15.0, 19.0));
            assert_eq!(pricing.net_value, unit * qty);
        }
    }

    #[test]
    fn test_total_never_below_gross() {
        for utility in [0.0, 0.5, 10.0, 35.0, 100.0] {
            let pricing = compute_line_item(&PricingInput::new(4500.0, 3.0, utility, 19.0));
            assert!(pricing.total >= pricing.gross_value, "utility {utility}");
        }
    }

    #[test]
    fn test_idempotent() {
        let input = PricingInput::new(1234.567, 3.3, 12.5, 19.0);
        let first = compute_line_item(&input);
        let second = compute_line_item(&input);

        assert_eq!(first.total.to_bits(), second.total.to_bits());
        assert_eq!(first.gross_value.to_bits(), second.gross_value.to_bits());
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_inputs_coerced_to_zero() {
        let pricing = compute_line_item(&PricingInput::new(f64::NAN, 2.0, 10.0, 19.0));
        assert_eq!(pricing, LinePricing::default());

        let pricing = compute_line_item(&PricingInput::new(-500.0, 2.0, 0.0, 19.0));
        assert_eq!(pricing.total, 0.0);

        // Negative tax counts as no tax
        let pricing = compute_line_item(&PricingInput::new(100.0, 1.0, 0.0, -19.0));
        assert_eq!(pricing.total, 100.0);
        assert_eq!(pricing.gross_value, 100.0);

        let pricing = compute_line_item(&PricingInput::new(100.0, f64::INFINITY, 0.0, 19.0));
        assert_eq!(pricing.net_value, 0.0);
    }

    #[test]
    fn test_all_values_non_negative() {
        let pricing = compute_line_item(&PricingInput::new(10.0, 4.0, 20.0, 19.0));
        for value in [
            pricing.net_value,
            pricing.utility_loaded,
            pricing.tax_on_utility,
            pricing.gross_value,
            pricing.total,
        ] {
            assert!(value >= 0.0);
        }
    }

    #[test]
    fn test_default_input_uses_standard_tax() {
        let input = PricingInput::default();
        assert_eq!(input.tax_percent, 19.0);
        assert_eq!(input.utility_percent, 0.0);
    }

    #[test]
    fn test_input_deserialize_defaults() {
        let input: PricingInput =
            serde_json::from_str(r#"{"unitValue": 1500, "quantity": 2}"#).unwrap();
        assert_eq!(input.tax_percent, 19.0);
        assert_eq!(input.utility_percent, 0.0);
    }

    #[test]
    fn test_parse_lenient() {
        assert_eq!(parse_lenient("1500"), 1500.0);
        assert_eq!(parse_lenient("  12.5  "), 12.5);
        assert_eq!(parse_lenient("12."), 12.0);
        assert_eq!(parse_lenient(".5"), 0.5);
        assert_eq!(parse_lenient("12.5 m2"), 12.5);
        assert_eq!(parse_lenient("3e2"), 300.0);
        assert_eq!(parse_lenient("3e"), 3.0);
        assert_eq!(parse_lenient("12,5"), 12.0);
    }

    #[test]
    fn test_parse_lenient_degenerate_text() {
        assert_eq!(parse_lenient(""), 0.0);
        assert_eq!(parse_lenient("-"), 0.0);
        assert_eq!(parse_lenient("."), 0.0);
        assert_eq!(parse_lenient("abc"), 0.0);
        assert_eq!(parse_lenient("-40"), 0.0);
    }
}
