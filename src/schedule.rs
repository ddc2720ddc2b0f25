use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{Result, ScenarioError};

/// one scheduled month of the loan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// 1-based month number
    pub month: u32,
    pub payment_date: NaiveDate,
    pub payment_amount: Money,
    pub principal_portion: Money,
    pub interest_portion: Money,
    /// balance after this payment, floored at zero
    pub remaining_principal: Money,
    /// EMI times month number
    pub cumulative_paid: Money,
}

/// full amortization schedule for a loan
///
/// Materialized up front: the pre-closure snapshot needs random access by
/// month number, and the presentation layer renders the table from the same
/// entries without recomputing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub principal: Money,
    pub annual_rate: Rate,
    pub tenure_months: u32,
    pub start_date: NaiveDate,
    pub monthly_payment: Money,
    pub entries: Vec<ScheduleEntry>,
    pub total_interest: Money,
    pub total_payment: Money,
}

impl AmortizationSchedule {
    /// generate the month-by-month schedule
    pub fn generate(
        principal: Money,
        annual_rate: Rate,
        tenure_months: u32,
        start_date: NaiveDate,
    ) -> Result<Self> {
        let monthly_rate = annual_rate.monthly().as_decimal();
        let emi = calculate_emi(principal, annual_rate, tenure_months);

        let mut entries = Vec::with_capacity(tenure_months as usize);
        let mut balance = principal;

        for month in 1..=tenure_months {
            let payment_date = add_months(start_date, month)?;
            let interest_portion = Money::from_decimal(balance.as_decimal() * monthly_rate);
            let principal_portion = emi - interest_portion;
            // an EMI undersized against accruing interest must not push the balance negative
            let ending_balance = (balance - principal_portion).max(Money::ZERO);

            entries.push(ScheduleEntry {
                month,
                payment_date,
                payment_amount: emi,
                principal_portion,
                interest_portion,
                remaining_principal: ending_balance,
                cumulative_paid: emi * Decimal::from(month),
            });

            balance = ending_balance;
        }

        // fold sub-unit rounding residue into the final payment
        if let Some(last) = entries.last_mut() {
            if last.remaining_principal > Money::ZERO && last.remaining_principal < Money::ONE {
                last.principal_portion += last.remaining_principal;
                last.payment_amount += last.remaining_principal;
                last.remaining_principal = Money::ZERO;
            }
        }

        let total_interest = entries
            .iter()
            .map(|e| e.interest_portion)
            .fold(Money::ZERO, |acc, x| acc + x);

        let total_payment = entries
            .iter()
            .map(|e| e.payment_amount)
            .fold(Money::ZERO, |acc, x| acc + x);

        Ok(Self {
            principal,
            annual_rate,
            tenure_months,
            start_date,
            monthly_payment: emi,
            entries,
            total_interest,
            total_payment,
        })
    }

    /// get entry for a specific month (1-based)
    pub fn entry(&self, month: u32) -> Option<&ScheduleEntry> {
        if month == 0 {
            return None;
        }
        self.entries.get((month - 1) as usize)
    }

    /// last scheduled entry
    pub fn last_entry(&self) -> Option<&ScheduleEntry> {
        self.entries.last()
    }

    /// remaining balance after a given number of payments
    pub fn balance_after(&self, months_paid: u32) -> Money {
        if months_paid == 0 {
            return self.principal;
        }
        self.entry(months_paid)
            .map(|e| e.remaining_principal)
            .unwrap_or(Money::ZERO)
    }
}

/// calculate the equated monthly installment
///
/// EMI = P * r * (1+r)^n / ((1+r)^n - 1) for monthly rate r > 0. The zero
/// rate case reduces to straight-line principal, which the closed formula
/// cannot express (it divides by zero).
pub fn calculate_emi(principal: Money, annual_rate: Rate, months: u32) -> Money {
    if months == 0 {
        return Money::ZERO;
    }

    let monthly_rate = annual_rate.monthly().as_decimal();

    if monthly_rate.is_zero() {
        return principal / Decimal::from(months);
    }

    let mut compound = Decimal::ONE;
    let base = Decimal::ONE + monthly_rate;
    for _ in 0..months {
        compound *= base;
    }

    let numerator = principal.as_decimal() * monthly_rate * compound;
    let denominator = compound - Decimal::ONE;

    Money::from_decimal(numerator / denominator)
}

/// add whole months to a calendar date, clamping the day where needed
fn add_months(date: NaiveDate, months: u32) -> Result<NaiveDate> {
    date.checked_add_months(Months::new(months))
        .ok_or_else(|| ScenarioError::InvalidDate {
            message: format!("cannot add {} months to {}", months, date),
        })
}
