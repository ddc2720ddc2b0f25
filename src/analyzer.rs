use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;
use serde::Serialize;

use crate::config::LoanParameters;
use crate::scenario::{calculate, CalculationResult};
use crate::schedule::AmortizationSchedule;
use crate::types::Recommendation;

/// controller pairing the latest parameters with their calculation
///
/// The intended host is an interactive form: it owns one analyzer, pushes
/// every edit through [`set_params`](Self::set_params) or
/// [`update`](Self::update), and rerenders from [`result`](Self::result).
/// The result is replaced wholesale on each change; the previous one is
/// dropped, never patched.
pub struct PreclosureAnalyzer {
    params: LoanParameters,
    result: CalculationResult,
}

impl PreclosureAnalyzer {
    /// build the analyzer and run the first calculation
    pub fn new(params: LoanParameters) -> Self {
        let result = calculate(&params);
        Self { params, result }
    }

    pub fn params(&self) -> &LoanParameters {
        &self.params
    }

    pub fn result(&self) -> &CalculationResult {
        &self.result
    }

    pub fn schedule(&self) -> &AmortizationSchedule {
        &self.result.schedule
    }

    pub fn recommendation(&self) -> Recommendation {
        self.result.recommendation()
    }

    /// replace the parameters and recompute
    pub fn set_params(&mut self, params: LoanParameters) {
        self.params = params;
        self.result = calculate(&self.params);
    }

    /// edit the current parameters in place, then recompute
    pub fn update(&mut self, edit: impl FnOnce(&mut LoanParameters)) {
        edit(&mut self.params);
        self.result = calculate(&self.params);
    }

    /// move the evaluation date and recompute
    pub fn evaluate_at(&mut self, evaluation_date: NaiveDate) {
        self.update(|p| p.evaluation_date = evaluation_date);
    }

    /// evaluate as of the time provider's current date
    pub fn evaluate_now(&mut self, time: &SafeTimeProvider) {
        self.evaluate_at(time.now().date_naive());
    }

    /// pretty-printed json view for debugging and monitoring
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&AnalysisView::from_analyzer(self))
    }
}

/// serializable view of an analyzer's parameters and outcome
#[derive(Debug, Serialize)]
pub struct AnalysisView<'a> {
    pub parameters: &'a LoanParameters,
    pub result: &'a CalculationResult,
    pub recommendation: Recommendation,
}

impl<'a> AnalysisView<'a> {
    pub fn from_analyzer(analyzer: &'a PreclosureAnalyzer) -> Self {
        Self {
            parameters: &analyzer.params,
            result: &analyzer.result,
            recommendation: analyzer.result.recommendation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::{Money, Rate};
    use chrono::{TimeZone, Utc};
    use hourglass_rs::TimeSource;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn canonical_params() -> LoanParameters {
        LoanParameters::new(
            Money::from_major(800_000),
            Rate::from_percent(dec!(12)),
            36,
            date(2024, 4, 1),
            date(2025, 4, 1),
            Rate::from_percent(dec!(4)),
            Rate::from_percent(dec!(8)),
        )
    }

    #[test]
    fn test_new_runs_initial_calculation() {
        let analyzer = PreclosureAnalyzer::new(canonical_params());

        assert_eq!(analyzer.result().paid_emis, 12);
        assert_eq!(analyzer.schedule().entries.len(), 36);
    }

    #[test]
    fn test_set_params_replaces_result_wholesale() {
        let mut analyzer = PreclosureAnalyzer::new(canonical_params());
        let old_emi = analyzer.result().monthly_payment;

        let mut params = canonical_params();
        params.principal = Money::from_major(400_000);
        analyzer.set_params(params.clone());

        assert!(analyzer.result().monthly_payment < old_emi);
        assert_eq!(*analyzer.result(), calculate(&params));
    }

    #[test]
    fn test_update_recomputes() {
        let mut analyzer = PreclosureAnalyzer::new(canonical_params());
        assert_eq!(analyzer.recommendation(), Recommendation::ContinueEmi);

        analyzer.update(|p| p.investment_return = Rate::from_percent(dec!(30)));
        assert_eq!(analyzer.recommendation(), Recommendation::Preclose);
    }

    #[test]
    fn test_evaluate_at_moves_the_snapshot() {
        let mut analyzer = PreclosureAnalyzer::new(canonical_params());

        analyzer.evaluate_at(date(2026, 4, 1));
        assert_eq!(analyzer.result().paid_emis, 24);
        assert_eq!(analyzer.result().remaining_emis, 12);
    }

    #[test]
    fn test_evaluate_now_uses_time_provider() {
        let time = SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2025, 4, 1, 9, 30, 0).unwrap(),
        ));

        let mut analyzer = PreclosureAnalyzer::new(canonical_params());
        analyzer.update(|p| p.evaluation_date = date(2024, 4, 1));
        assert_eq!(analyzer.result().paid_emis, 0);

        analyzer.evaluate_now(&time);
        assert_eq!(analyzer.params().evaluation_date, date(2025, 4, 1));
        assert_eq!(analyzer.result().paid_emis, 12);
    }

    #[test]
    fn test_json_view_exposes_recommendation() {
        let analyzer = PreclosureAnalyzer::new(canonical_params());
        let json = analyzer.to_json_pretty().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["recommendation"], "ContinueEmi");
        assert!(value["result"]["monthly_payment"].is_string());
        assert_eq!(value["result"]["paid_emis"], 12);
    }
}
