use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{Result, ScenarioError};

/// loan terms and scenario assumptions
///
/// One immutable value per calculation. The presentation layer collects the
/// seven inputs, builds a fresh `LoanParameters`, and hands it to
/// [`calculate`](crate::scenario::calculate) whenever any of them changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanParameters {
    /// loan amount
    pub principal: Money,
    /// nominal annual interest rate
    pub annual_rate: Rate,
    /// total number of scheduled monthly payments
    pub tenure_months: u32,
    /// date the loan started
    pub start_date: NaiveDate,
    /// date at which pre-closure is being considered
    pub evaluation_date: NaiveDate,
    /// penalty on the outstanding balance at pre-closure
    pub preclosure_charge: Rate,
    /// assumed annual compounding return on invested cash
    pub investment_return: Rate,
}

impl LoanParameters {
    pub fn new(
        principal: Money,
        annual_rate: Rate,
        tenure_months: u32,
        start_date: NaiveDate,
        evaluation_date: NaiveDate,
        preclosure_charge: Rate,
        investment_return: Rate,
    ) -> Self {
        Self {
            principal,
            annual_rate,
            tenure_months,
            start_date,
            evaluation_date,
            preclosure_charge,
            investment_return,
        }
    }

    /// strict input screening
    ///
    /// The calculation core never fails on these inputs (it degenerates to an
    /// all-zero result instead); callers that prefer an error over the
    /// degenerate result can screen here first.
    pub fn validate(&self) -> Result<()> {
        if !self.principal.is_positive() {
            return Err(ScenarioError::InvalidPrincipal {
                amount: self.principal,
            });
        }
        if self.tenure_months == 0 {
            return Err(ScenarioError::InvalidTenure {
                months: self.tenure_months,
            });
        }
        if self.annual_rate.is_negative() {
            return Err(ScenarioError::InvalidRate {
                rate: self.annual_rate,
            });
        }
        if self.preclosure_charge.is_negative() {
            return Err(ScenarioError::InvalidRate {
                rate: self.preclosure_charge,
            });
        }
        if self.investment_return.is_negative() {
            return Err(ScenarioError::InvalidRate {
                rate: self.investment_return,
            });
        }
        Ok(())
    }

    /// whether the calculation collapses to the all-zero result
    pub(crate) fn is_degenerate(&self) -> bool {
        self.validate().is_err()
    }

    /// whole months between start and evaluation date
    ///
    /// Calendar month/year only; day-of-month is ignored. Negative when the
    /// evaluation date is before the start date.
    pub fn elapsed_months(&self) -> i32 {
        let years = self.evaluation_date.year() - self.start_date.year();
        let months = self.evaluation_date.month() as i32 - self.start_date.month() as i32;
        years * 12 + months
    }

    /// number of EMIs paid as of the evaluation date, clamped at zero
    pub fn paid_emis(&self) -> u32 {
        self.elapsed_months().max(0) as u32
    }

    /// number of EMIs left as of the evaluation date
    ///
    /// Negative means the evaluation date is past the end of the tenure and
    /// the loan is already fully amortized.
    pub fn remaining_emis(&self) -> i32 {
        self.tenure_months as i32 - self.paid_emis() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn params(start: NaiveDate, eval: NaiveDate) -> LoanParameters {
        LoanParameters::new(
            Money::from_major(800_000),
            Rate::from_percent(dec!(12)),
            36,
            start,
            eval,
            Rate::from_percent(dec!(4)),
            Rate::from_percent(dec!(8)),
        )
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_elapsed_months_one_year() {
        let p = params(date(2024, 4, 1), date(2025, 4, 1));
        assert_eq!(p.elapsed_months(), 12);
        assert_eq!(p.paid_emis(), 12);
        assert_eq!(p.remaining_emis(), 24);
    }

    #[test]
    fn test_elapsed_months_ignores_day_of_month() {
        let p = params(date(2024, 4, 28), date(2024, 5, 1));
        assert_eq!(p.elapsed_months(), 1);
    }

    #[test]
    fn test_elapsed_months_year_boundary() {
        let p = params(date(2023, 11, 1), date(2024, 2, 1));
        assert_eq!(p.elapsed_months(), 3);
    }

    #[test]
    fn test_evaluation_before_start_clamps_to_zero() {
        let p = params(date(2024, 4, 1), date(2023, 10, 1));
        assert_eq!(p.elapsed_months(), -6);
        assert_eq!(p.paid_emis(), 0);
        assert_eq!(p.remaining_emis(), 36);
    }

    #[test]
    fn test_evaluation_past_maturity_goes_negative() {
        let p = params(date(2024, 4, 1), date(2028, 4, 1));
        assert_eq!(p.paid_emis(), 48);
        assert_eq!(p.remaining_emis(), -12);
    }

    #[test]
    fn test_validate_accepts_canonical_inputs() {
        let p = params(date(2024, 4, 1), date(2025, 4, 1));
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_principal() {
        let mut p = params(date(2024, 4, 1), date(2025, 4, 1));
        p.principal = Money::ZERO;
        assert!(matches!(
            p.validate(),
            Err(ScenarioError::InvalidPrincipal { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_tenure() {
        let mut p = params(date(2024, 4, 1), date(2025, 4, 1));
        p.tenure_months = 0;
        assert!(matches!(
            p.validate(),
            Err(ScenarioError::InvalidTenure { months: 0 })
        ));
    }

    #[test]
    fn test_validate_rejects_negative_rates() {
        let mut p = params(date(2024, 4, 1), date(2025, 4, 1));
        p.investment_return = Rate::from_percent(dec!(-3));
        assert!(matches!(p.validate(), Err(ScenarioError::InvalidRate { .. })));
    }

    #[test]
    fn test_zero_rates_are_valid() {
        let mut p = params(date(2024, 4, 1), date(2025, 4, 1));
        p.annual_rate = Rate::ZERO;
        p.preclosure_charge = Rate::ZERO;
        p.investment_return = Rate::ZERO;
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_serde_round_trip() {
        let p = params(date(2024, 4, 1), date(2025, 4, 1));
        let json = serde_json::to_string(&p).unwrap();
        let back: LoanParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
