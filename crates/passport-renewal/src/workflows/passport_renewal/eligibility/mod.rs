//! Date rules deciding which renewal questions and sections the form shows.

pub mod calendar;
pub mod disclosure;
pub mod predicates;
pub mod validity;

pub use calendar::{age_at_issue, normalize_date, reference_today, shift_years, CalendarDay};
pub use disclosure::{
    determine_questions, evaluate_disclosure, DisclosureDecision, DisclosureOutcome,
    DisclosureRule, FollowUpQuestion, DISCLOSURE_RULES,
};
pub use predicates::{
    should_show_lost_stolen_info, should_show_name_change_info, should_show_parent_info,
};
pub use validity::{expiration_date, ValidityWindow, MINOR_AGE_THRESHOLD};
