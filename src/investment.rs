use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::decimal::{Money, Rate};
use crate::errors::{Result, ScenarioError};

/// growth factor (1 + g)^(months / 12) for annual rate g
///
/// The exponent is expressed in years, so month counts that are not a
/// multiple of twelve compound for the exact fractional period.
pub fn growth_factor(annual_return: Rate, months: u32) -> Result<Decimal> {
    let years = Decimal::from(months) / dec!(12);
    annual_return
        .growth_base()
        .checked_powd(years)
        .ok_or_else(|| ScenarioError::CalculationError {
            message: format!(
                "growth factor out of range for {} months at {}",
                months, annual_return
            ),
        })
}

/// future value of a lump sum invested for the given number of months
pub fn lump_sum_future_value(amount: Money, annual_return: Rate, months: u32) -> Result<Money> {
    let factor = growth_factor(annual_return, months)?;
    Ok(Money::from_decimal(amount.as_decimal() * factor))
}

/// future value of investing one EMI a month until the end of tenure
///
/// The payment forgone in month i compounds for the months - i - 1 months
/// that follow it, so the earliest payment compounds longest and the final
/// one not at all.
pub fn emi_stream_future_value(emi: Money, annual_return: Rate, months: u32) -> Result<Money> {
    if months == 0 {
        return Ok(Money::ZERO);
    }

    // one fractional power for the monthly factor, then iterate
    let monthly_factor = growth_factor(annual_return, 1)?;

    let mut factor = Decimal::ONE;
    let mut total = Decimal::ZERO;
    for _ in 0..months {
        total += emi.as_decimal() * factor;
        factor *= monthly_factor;
    }

    Ok(Money::from_decimal(total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_factor_whole_years() {
        let factor = growth_factor(Rate::from_percent(dec!(8)), 24).unwrap();

        // 1.08^2 = 1.1664
        assert!((factor - dec!(1.1664)).abs() < dec!(0.0001));
    }

    #[test]
    fn test_growth_factor_fractional_year() {
        let factor = growth_factor(Rate::from_percent(dec!(8)), 6).unwrap();

        // 1.08^0.5 = 1.03923...
        assert!(factor > dec!(1.0392));
        assert!(factor < dec!(1.0393));
    }

    #[test]
    fn test_growth_factor_zero_months_is_identity() {
        let factor = growth_factor(Rate::from_percent(dec!(8)), 0).unwrap();
        assert_eq!(factor, Decimal::ONE);
    }

    #[test]
    fn test_growth_factor_zero_rate_is_identity() {
        let factor = growth_factor(Rate::ZERO, 36).unwrap();
        assert_eq!(factor, Decimal::ONE);
    }

    #[test]
    fn test_lump_sum_future_value() {
        let fv = lump_sum_future_value(Money::from_major(1_000), Rate::from_percent(dec!(8)), 24)
            .unwrap();

        // 1000 * 1.08^2 = 1166.40
        assert!(fv > Money::from_str_exact("1166.39").unwrap());
        assert!(fv < Money::from_str_exact("1166.41").unwrap());
    }

    #[test]
    fn test_lump_sum_zero_rate_keeps_value() {
        let amount = Money::from_major(5_000);
        let fv = lump_sum_future_value(amount, Rate::ZERO, 24).unwrap();
        assert_eq!(fv, amount);
    }

    #[test]
    fn test_stream_zero_months_is_zero() {
        let fv =
            emi_stream_future_value(Money::from_major(25_000), Rate::from_percent(dec!(8)), 0)
                .unwrap();
        assert_eq!(fv, Money::ZERO);
    }

    #[test]
    fn test_stream_single_month_has_no_growth() {
        let emi = Money::from_major(25_000);
        let fv = emi_stream_future_value(emi, Rate::from_percent(dec!(8)), 1).unwrap();
        assert_eq!(fv, emi);
    }

    #[test]
    fn test_stream_zero_rate_is_plain_sum() {
        let fv = emi_stream_future_value(Money::from_major(10_000), Rate::ZERO, 24).unwrap();
        assert_eq!(fv, Money::from_major(240_000));
    }

    #[test]
    fn test_stream_matches_geometric_sum() {
        let fv = emi_stream_future_value(Money::from_major(100), Rate::from_percent(dec!(8)), 24)
            .unwrap();

        // 100 * (1.08^2 - 1) / (1.08^(1/12) - 1) = 2586.2...
        assert!(fv > Money::from_major(2_586));
        assert!(fv < Money::from_major(2_587));
    }

    #[test]
    fn test_stream_exceeds_undiscounted_sum_under_growth() {
        let emi = Money::from_major(100);
        let fv = emi_stream_future_value(emi, Rate::from_percent(dec!(8)), 24).unwrap();
        assert!(fv > Money::from_major(2_400));
    }

    #[test]
    fn test_longer_horizon_grows_more() {
        let amount = Money::from_major(1_000);
        let rate = Rate::from_percent(dec!(8));

        let one_year = lump_sum_future_value(amount, rate, 12).unwrap();
        let two_years = lump_sum_future_value(amount, rate, 24).unwrap();
        assert!(two_years > one_year);
    }
}
