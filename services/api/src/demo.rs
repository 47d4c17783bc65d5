use crate::infra::{load_intake, reference_service};
use chrono::NaiveDate;
use clap::Args;
use passport_renewal::clock::Clock;
use passport_renewal::config::AppConfig;
use passport_renewal::error::AppError;
use passport_renewal::workflows::passport_renewal::eligibility::shift_years;
use passport_renewal::workflows::passport_renewal::{
    check_issue_date, parse_form_date, ApplicantProfile, DisclosureOutcome, DocumentStatus,
    IntakeError, PassportRecord, RenewalCase, RenewalEligibilityService, RenewalFormPlan, YesNo,
};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the evaluation date (YYYY-MM-DD). Defaults to today in the reference timezone.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct QuestionsArgs {
    /// Applicant date of birth (MM/DD/YYYY)
    #[arg(long, value_parser = parse_form_date)]
    pub(crate) dob: NaiveDate,
    /// Issue date of the previous document (MM/DD/YYYY)
    #[arg(long, value_parser = parse_form_date)]
    pub(crate) issue_date: NaiveDate,
    /// The previous passport book was lost or stolen
    #[arg(long)]
    pub(crate) lost: bool,
    /// Evaluation date (YYYY-MM-DD). Defaults to today in the reference timezone.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// JSON file holding a renewal form submission
    #[arg(long = "case")]
    pub(crate) case_file: PathBuf,
    /// Evaluation date (YYYY-MM-DD). Defaults to today in the reference timezone.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_questions(args: QuestionsArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = reference_service(&config.eligibility);
    let (today, outcome) = question_disclosure(&service, &args)?;

    println!("Question disclosure (evaluated {today})");
    render_disclosure(&outcome, "");
    Ok(())
}

fn question_disclosure<C: Clock + 'static>(
    service: &RenewalEligibilityService<C>,
    args: &QuestionsArgs,
) -> Result<(NaiveDate, DisclosureOutcome), IntakeError> {
    let today = args.today.unwrap_or_else(|| service.today());
    if args.dob > today {
        return Err(IntakeError::DateInFuture { field: "dob" });
    }
    check_issue_date("issue_date", args.dob, args.issue_date, today)?;

    let outcome = service.disclosure(args.dob, args.issue_date, args.lost, Some(today));
    Ok((today, outcome))
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = reference_service(&config.eligibility);
    let intake = load_intake(&args.case_file)?;
    let plan = service.evaluate_intake(intake, args.today)?;

    println!("Renewal form plan for {}", args.case_file.display());
    render_plan(&plan);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = reference_service(&config.eligibility);
    let today = args.today.unwrap_or_else(|| service.today());

    println!("Passport renewal eligibility demo (evaluated {today})");
    for (title, case) in demo_cases(today) {
        println!("\n== {title}");
        let plan = service.plan(&case, Some(today));
        render_plan(&plan);
    }

    Ok(())
}

/// Representative cases positioned relative to `today` so every rule fires.
fn demo_cases(today: NaiveDate) -> Vec<(&'static str, RenewalCase)> {
    let years_ago = |years: i32| shift_years(today, -years);
    let applicant = |age: i32| ApplicantProfile {
        date_of_birth: years_ago(age),
    };

    vec![
        (
            "Adult with a valid book in hand",
            RenewalCase {
                applicant: applicant(35),
                book: Some(PassportRecord::in_hand(years_ago(3))),
                card: None,
            },
        ),
        (
            "Recently issued book reported lost",
            RenewalCase {
                applicant: applicant(30),
                book: Some(PassportRecord {
                    status: DocumentStatus::Lost,
                    issue_date: Some(years_ago(1)),
                    has_reported_lost_or_stolen: false,
                    is_older_than_15_years: Some(YesNo::No),
                }),
                card: None,
            },
        ),
        (
            "Adult book expired within the grace window",
            RenewalCase {
                applicant: applicant(40),
                book: Some(PassportRecord::in_hand(years_ago(12))),
                card: Some(PassportRecord::in_hand(years_ago(12))),
            },
        ),
        (
            "Child passport that has lapsed",
            RenewalCase {
                applicant: applicant(12),
                book: Some(PassportRecord::in_hand(years_ago(7))),
                card: None,
            },
        ),
        (
            "Stolen card and a lost book without an issue date",
            RenewalCase {
                applicant: applicant(28),
                book: Some(PassportRecord {
                    status: DocumentStatus::Lost,
                    issue_date: None,
                    has_reported_lost_or_stolen: false,
                    is_older_than_15_years: Some(YesNo::No),
                }),
                card: Some(PassportRecord {
                    status: DocumentStatus::Stolen,
                    issue_date: Some(years_ago(4)),
                    has_reported_lost_or_stolen: true,
                    is_older_than_15_years: None,
                }),
            },
        ),
        (
            "No previous passport",
            RenewalCase {
                applicant: applicant(22),
                book: None,
                card: None,
            },
        ),
    ]
}

fn render_plan(plan: &RenewalFormPlan) {
    println!("Evaluated: {}", plan.today);
    println!("Documents held: {:?}", plan.holdings);

    for assessment in &plan.documents {
        println!(
            "- {} (status {})",
            assessment.kind.label(),
            assessment.status.label()
        );
        match &assessment.disclosure {
            Some(outcome) => render_disclosure(outcome, "  "),
            None => println!("  no issue date provided"),
        }
    }

    if plan.questions.is_empty() {
        println!("Follow-up questions: none");
    } else {
        println!("Follow-up questions ({})", plan.question_count);
        for question in &plan.questions {
            println!("- {}", question.label());
        }
    }

    println!("Form sections: {}", plan.sections_label());
}

fn render_disclosure(outcome: &DisclosureOutcome, indent: &str) {
    println!(
        "{indent}age at issue {}, valid {} years, expires {}, grace ends {}",
        outcome.age_at_issue,
        outcome.validity.years(),
        outcome.expiration_date,
        outcome.grace_ends_on
    );
    println!(
        "{indent}rule {} -> {} question(s)",
        outcome.rule, outcome.question_count
    );
}
