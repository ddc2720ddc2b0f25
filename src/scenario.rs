use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::LoanParameters;
use crate::decimal::Money;
use crate::errors::Result;
use crate::investment::{emi_stream_future_value, lump_sum_future_value};
use crate::schedule::AmortizationSchedule;
use crate::types::Recommendation;

/// as-of view of the loan at the evaluation date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreclosureSnapshot {
    pub remaining_principal: Money,
    pub cumulative_paid: Money,
}

impl PreclosureSnapshot {
    /// snapshot after the given number of paid EMIs
    ///
    /// Zero payments yields a synthetic full-principal entry; a paid count
    /// past the end of the schedule clamps to the last entry.
    pub fn at(schedule: &AmortizationSchedule, paid_emis: u32) -> Self {
        if paid_emis == 0 {
            return Self {
                remaining_principal: schedule.principal,
                cumulative_paid: Money::ZERO,
            };
        }

        match schedule.entry(paid_emis).or_else(|| schedule.last_entry()) {
            Some(e) => Self {
                remaining_principal: e.remaining_principal,
                cumulative_paid: e.cumulative_paid,
            },
            // empty schedule: nothing paid, everything outstanding
            None => Self {
                remaining_principal: schedule.principal,
                cumulative_paid: Money::ZERO,
            },
        }
    }

    /// principal retired so far
    pub fn principal_paid(&self, original_principal: Money) -> Money {
        original_principal - self.remaining_principal
    }

    /// interest paid so far
    pub fn interest_paid(&self, original_principal: Money) -> Money {
        self.cumulative_paid - self.principal_paid(original_principal)
    }
}

/// complete output of one scenario calculation
///
/// Replaced wholesale on every recalculation; no field is ever mutated in
/// place. The schedule rides along so the caller can render the
/// amortization table without asking for it separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub monthly_payment: Money,
    pub paid_emis: u32,
    /// negative when the evaluation date is past the end of the tenure
    pub remaining_emis: i32,
    pub interest_paid: Money,
    pub principal_paid: Money,
    /// outstanding balance plus the pre-closure charge
    pub preclosure_amount: Money,
    pub total_cost_preclose: Money,
    pub total_cost_emi: Money,
    pub future_value_of_preclosure: Money,
    pub future_value_of_emis: Money,
    pub net_benefit_of_continuing: Money,
    pub schedule: AmortizationSchedule,
}

impl CalculationResult {
    /// degenerate all-zero result for inputs that cannot be amortized
    pub fn zeroed(params: &LoanParameters) -> Self {
        Self {
            monthly_payment: Money::ZERO,
            paid_emis: 0,
            remaining_emis: 0,
            interest_paid: Money::ZERO,
            principal_paid: Money::ZERO,
            preclosure_amount: Money::ZERO,
            total_cost_preclose: Money::ZERO,
            total_cost_emi: Money::ZERO,
            future_value_of_preclosure: Money::ZERO,
            future_value_of_emis: Money::ZERO,
            net_benefit_of_continuing: Money::ZERO,
            schedule: AmortizationSchedule {
                principal: params.principal,
                annual_rate: params.annual_rate,
                tenure_months: params.tenure_months,
                start_date: params.start_date,
                monthly_payment: Money::ZERO,
                entries: Vec::new(),
                total_interest: Money::ZERO,
                total_payment: Money::ZERO,
            },
        }
    }

    /// which strategy comes out ahead
    ///
    /// Derived from the sign of the net benefit on every read; a tie goes
    /// to pre-closing.
    pub fn recommendation(&self) -> Recommendation {
        if self.net_benefit_of_continuing.is_positive() {
            Recommendation::ContinueEmi
        } else {
            Recommendation::Preclose
        }
    }
}

/// run the full amortization and strategy comparison
///
/// Total over its input domain: inputs that cannot be amortized (zero
/// tenure, non-positive principal, negative rates) and any internal
/// arithmetic failure collapse to the all-zero degenerate result rather
/// than an error or a partially populated result.
pub fn calculate(params: &LoanParameters) -> CalculationResult {
    evaluate(params).unwrap_or_else(|_| CalculationResult::zeroed(params))
}

fn evaluate(params: &LoanParameters) -> Result<CalculationResult> {
    if params.is_degenerate() {
        return Ok(CalculationResult::zeroed(params));
    }

    let schedule = AmortizationSchedule::generate(
        params.principal,
        params.annual_rate,
        params.tenure_months,
        params.start_date,
    )?;
    let emi = schedule.monthly_payment;

    let paid_emis = params.paid_emis();
    let remaining_emis = params.remaining_emis();
    // past maturity there is nothing left to project
    let projection_months = remaining_emis.max(0) as u32;

    let snapshot = PreclosureSnapshot::at(&schedule, paid_emis);
    let principal_paid = snapshot.principal_paid(params.principal);
    let interest_paid = snapshot.interest_paid(params.principal);

    let preclosure_amount = Money::from_decimal(
        snapshot.remaining_principal.as_decimal() * params.preclosure_charge.growth_base(),
    );
    let total_cost_preclose = snapshot.cumulative_paid + preclosure_amount;
    let total_cost_emi = emi * Decimal::from(params.tenure_months);

    let future_value_of_preclosure =
        lump_sum_future_value(preclosure_amount, params.investment_return, projection_months)?;
    let future_value_of_emis =
        emi_stream_future_value(emi, params.investment_return, projection_months)?;
    let net_benefit_of_continuing = future_value_of_emis - future_value_of_preclosure;

    Ok(CalculationResult {
        monthly_payment: emi,
        paid_emis,
        remaining_emis,
        interest_paid,
        principal_paid,
        preclosure_amount,
        total_cost_preclose,
        total_cost_emi,
        future_value_of_preclosure,
        future_value_of_emis,
        net_benefit_of_continuing,
        schedule,
    })
}
