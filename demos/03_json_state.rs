/// json state - serialization for debugging and monitoring
use loan_preclosure_rs::chrono::NaiveDate;
use loan_preclosure_rs::{LoanParameters, Money, PreclosureAnalyzer, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== json state serialization ===\n");

    let params = LoanParameters::new(
        Money::from_major(800_000),
        Rate::from_percent(dec!(12)),
        36,
        NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
        Rate::from_percent(dec!(4)),
        Rate::from_percent(dec!(8)),
    );

    let mut analyzer = PreclosureAnalyzer::new(params);

    println!("stage 1: canonical scenario");
    println!("---------------------------");
    println!("{}\n", analyzer.to_json_pretty()?);

    // a better investment return flips the comparison
    analyzer.update(|p| p.investment_return = Rate::from_percent(dec!(30)));
    println!("stage 2: after raising the assumed return to 30%");
    println!("------------------------------------------------");
    println!("{}\n", analyzer.to_json_pretty()?);

    // moving the evaluation date two years in shrinks what is left
    analyzer.evaluate_at(NaiveDate::from_ymd_opt(2026, 4, 1).unwrap());
    println!("stage 3: evaluated two years into the tenure");
    println!("--------------------------------------------");
    println!("{}\n", analyzer.to_json_pretty()?);

    Ok(())
}
