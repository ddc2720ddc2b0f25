/// evaluate now - drive the evaluation date from a time provider
use loan_preclosure_rs::chrono::{Duration, NaiveDate, TimeZone, Utc};
use loan_preclosure_rs::{
    LoanParameters, Money, PreclosureAnalyzer, Rate, SafeTimeProvider, TimeSource,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap(),
    ));
    let controller = time.test_control().unwrap();

    let params = LoanParameters::new(
        Money::from_major(800_000),
        Rate::from_percent(dec!(12)),
        36,
        NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        Rate::from_percent(dec!(4)),
        Rate::from_percent(dec!(8)),
    );

    let mut analyzer = PreclosureAnalyzer::new(params);

    // one year into the loan
    analyzer.evaluate_now(&time);
    print_outcome("as of 2025-04-01", &analyzer);

    // another year later the balance is much smaller
    controller.advance(Duration::days(365));
    analyzer.evaluate_now(&time);
    print_outcome("as of 2026-04-01", &analyzer);

    Ok(())
}

fn print_outcome(label: &str, analyzer: &PreclosureAnalyzer) {
    let result = analyzer.result();
    println!("{label}");
    println!("  EMIs paid/remaining:  {}/{}", result.paid_emis, result.remaining_emis);
    println!("  pre-closure amount:   {}", result.preclosure_amount.round_dp(2));
    println!("  net benefit:          {}", result.net_benefit_of_continuing.round_dp(2));
    println!("  recommendation:       {}", result.recommendation());
    println!();
}
