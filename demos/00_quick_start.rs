/// quick start - minimal example to get started
use loan_preclosure_rs::chrono::NaiveDate;
use loan_preclosure_rs::{calculate, LoanParameters, Money, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // a 800,000 loan at 12% over 36 months, one year in
    let params = LoanParameters::new(
        Money::from_major(800_000),
        Rate::from_percent(dec!(12)),
        36,
        NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
        Rate::from_percent(dec!(4)),
        Rate::from_percent(dec!(8)),
    );

    let result = calculate(&params);

    println!("monthly EMI:              {}", result.monthly_payment.round_dp(2));
    println!("EMIs paid/remaining:      {}/{}", result.paid_emis, result.remaining_emis);
    println!("interest paid so far:     {}", result.interest_paid.round_dp(2));
    println!("principal paid so far:    {}", result.principal_paid.round_dp(2));
    println!("pre-closure amount:       {}", result.preclosure_amount.round_dp(2));
    println!("cost if pre-closing:      {}", result.total_cost_preclose.round_dp(2));
    println!("cost if continuing:       {}", result.total_cost_emi.round_dp(2));
    println!();
    println!("future value of payoff if invested:   {}", result.future_value_of_preclosure.round_dp(2));
    println!("future value of EMI stream invested:  {}", result.future_value_of_emis.round_dp(2));
    println!("net benefit of continuing:            {}", result.net_benefit_of_continuing.round_dp(2));
    println!();
    println!("recommendation: {}", result.recommendation());

    Ok(())
}
