//! Flat-tax comparison.
//!
//! This module computes the hypothetical 20% flat tax on gross income so
//! every calculation can report how the progressive result compares.

use rust_decimal::Decimal;

/// The flat comparison rate as a fraction (0.20).
pub fn flat_tax_rate() -> Decimal {
    Decimal::new(20, 2)
}

/// The result of comparing the progressive tax against the flat alternative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatTaxComparison {
    /// 20% of gross income, rounded to cents.
    pub flat_tax_amount: Decimal,
    /// The flat effective rate, always exactly 20.00.
    pub flat_effective_rate: Decimal,
    /// Flat tax minus progressive tax. Positive when the flat system would
    /// cost this profile more; negative when it would cost less.
    pub flat_difference: Decimal,
}

/// Compares the progressive tax against a 20% flat tax on gross income.
///
/// The flat tax applies to gross income with no deductions or exemptions,
/// so its effective rate is always exactly 20.00. The sign of
/// `flat_difference` is preserved as `flat - progressive`.
///
/// # Examples
///
/// ```
/// use tax_engine::calculation::compare_flat_tax;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let comparison = compare_flat_tax(
///     Decimal::from(60000),
///     Decimal::from_str("6262.00").unwrap(),
/// );
/// assert_eq!(comparison.flat_tax_amount, Decimal::from_str("12000.00").unwrap());
/// assert_eq!(comparison.flat_difference, Decimal::from_str("5738.00").unwrap());
/// ```
pub fn compare_flat_tax(gross_income: Decimal, progressive_tax: Decimal) -> FlatTaxComparison {
    let flat_tax_amount = (gross_income * flat_tax_rate()).round_dp(2);

    FlatTaxComparison {
        flat_tax_amount,
        flat_effective_rate: Decimal::new(2000, 2),
        flat_difference: flat_tax_amount - progressive_tax,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_flat_tax_is_twenty_percent_of_gross() {
        let comparison = compare_flat_tax(dec("60000"), dec("6262.00"));

        assert_eq!(comparison.flat_tax_amount, dec("12000.00"));
        assert_eq!(comparison.flat_effective_rate, dec("20.00"));
    }

    #[test]
    fn test_difference_positive_when_flat_costs_more() {
        let comparison = compare_flat_tax(dec("60000"), dec("6262.00"));

        assert_eq!(comparison.flat_difference, dec("5738.00"));
    }

    #[test]
    fn test_difference_negative_when_progressive_costs_more() {
        // High progressive burden relative to a small gross income, as with
        // a year whose rules data provides no shield.
        let comparison = compare_flat_tax(dec("10000"), dec("3500.00"));

        assert_eq!(comparison.flat_tax_amount, dec("2000.00"));
        assert_eq!(comparison.flat_difference, dec("-1500.00"));
    }

    #[test]
    fn test_zero_gross_income() {
        let comparison = compare_flat_tax(Decimal::ZERO, Decimal::ZERO);

        assert_eq!(comparison.flat_tax_amount, Decimal::ZERO);
        assert_eq!(comparison.flat_difference, Decimal::ZERO);
        assert_eq!(comparison.flat_effective_rate, dec("20.00"));
    }

    #[test]
    fn test_flat_amount_rounds_to_cents() {
        let comparison = compare_flat_tax(dec("333.33"), Decimal::ZERO);

        // 333.33 * 0.20 = 66.666
        assert_eq!(comparison.flat_tax_amount, dec("66.67"));
    }

    #[test]
    fn test_rate_constant() {
        assert_eq!(flat_tax_rate(), dec("0.20"));
    }
}
