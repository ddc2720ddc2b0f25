/// amortization table - render the full month-by-month schedule
use loan_preclosure_rs::chrono::NaiveDate;
use loan_preclosure_rs::{AmortizationSchedule, Money, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let schedule = AmortizationSchedule::generate(
        Money::from_major(800_000),
        Rate::from_percent(dec!(12)),
        36,
        NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
    )?;

    println!(
        "EMI {} over {} months, total interest {}",
        schedule.monthly_payment.round_dp(2),
        schedule.tenure_months,
        schedule.total_interest.round_dp(2)
    );
    println!();
    println!(
        "{:>5}  {:>10}  {:>12}  {:>12}  {:>12}  {:>12}  {:>12}",
        "month", "date", "emi", "principal", "interest", "balance", "total paid"
    );

    for entry in &schedule.entries {
        println!(
            "{:>5}  {:>10}  {:>12}  {:>12}  {:>12}  {:>12}  {:>12}",
            entry.month,
            entry.payment_date,
            entry.payment_amount.round_dp(2),
            entry.principal_portion.round_dp(2),
            entry.interest_portion.round_dp(2),
            entry.remaining_principal.round_dp(2),
            entry.cumulative_paid.round_dp(2),
        );
    }

    Ok(())
}
