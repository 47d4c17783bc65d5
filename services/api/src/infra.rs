use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use passport_renewal::clock::ReferenceClock;
use passport_renewal::config::EligibilityConfig;
use passport_renewal::error::AppError;
use passport_renewal::workflows::passport_renewal::{RenewalEligibilityService, RenewalIntake};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Service bound to the configured reference timezone.
pub(crate) fn reference_service(
    config: &EligibilityConfig,
) -> RenewalEligibilityService<ReferenceClock> {
    RenewalEligibilityService::new(Arc::new(ReferenceClock::from_config(config)))
}

pub(crate) fn load_intake(path: &Path) -> Result<RenewalIntake, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let intake = serde_json::from_str(&raw)?;
    Ok(intake)
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use passport_renewal::workflows::passport_renewal::PassportHoldings;
    use std::io::Write;

    #[test]
    fn parse_date_accepts_iso_dates() {
        assert_eq!(
            parse_date(" 2025-06-15 "),
            Ok(NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date"))
        );
        assert!(parse_date("06/15/2025").is_err());
    }

    #[test]
    fn load_intake_reads_json_case_files() {
        let path = std::env::temp_dir().join(format!(
            "passport-renewal-intake-{}.json",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).expect("create case file");
        file.write_all(
            br#"{"date_of_birth":"03/01/1990","has_passport_card_or_book":"none"}"#,
        )
        .expect("write case file");

        let intake = load_intake(&path).expect("case file parses");
        std::fs::remove_file(&path).ok();

        assert_eq!(intake.has_passport_card_or_book, PassportHoldings::None);
        assert!(intake.passport_book.is_none());
    }

    #[test]
    fn load_intake_reports_malformed_json() {
        let path = std::env::temp_dir().join(format!(
            "passport-renewal-malformed-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, b"{ not json").expect("write case file");

        let result = load_intake(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(AppError::CaseFile(_))));
    }
}
