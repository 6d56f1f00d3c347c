use chrono::NaiveDate;
use fiscal_periods::core::calendar::FiscalYear;
use fiscal_periods::core::current::{
    find_current_monthly, find_current_quarterly, find_current_weekly, find_current_yearly,
};
use fiscal_periods::core::types::{ActualsSummary, Target, TargetPeriod};
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn target(id: &str, period: TargetPeriod) -> Target {
    Target {
        id: id.to_owned(),
        name: format!("{id} quota"),
        target_amount: dec!(1000),
        target_period: period,
        fiscal_year: None,
        week_start_date: None,
        week_end_date: None,
        week_number: None,
        month: None,
        quarter: None,
        actuals_summary: ActualsSummary::default(),
        buckets: vec![],
    }
}

fn weekly_target(id: &str, start: NaiveDate, end: NaiveDate) -> Target {
    let mut t = target(id, TargetPeriod::Weekly);
    t.week_start_date = Some(start);
    t.week_end_date = Some(end);
    t
}

#[test]
fn weekly_selection_is_inclusive_on_both_ends() {
    let targets = vec![
        weekly_target("w1", date(2025, 6, 1), date(2025, 6, 7)),
        weekly_target("w2", date(2025, 6, 8), date(2025, 6, 14)),
    ];

    let on_start = find_current_weekly(&targets, date(2025, 6, 8)).expect("start day");
    assert_eq!(on_start.id, "w2");
    let on_end = find_current_weekly(&targets, date(2025, 6, 14)).expect("end day");
    assert_eq!(on_end.id, "w2");
    assert!(find_current_weekly(&targets, date(2025, 6, 15)).is_none());
}

#[test]
fn monthly_selection_matches_the_english_month_name() {
    let mut june = target("m-june", TargetPeriod::Monthly);
    june.month = Some("June".to_owned());
    let mut july = target("m-july", TargetPeriod::Monthly);
    july.month = Some("July".to_owned());
    let targets = vec![july, june];

    let found = find_current_monthly(&targets, date(2025, 6, 15)).expect("june target");
    assert_eq!(found.id, "m-june");
    assert!(find_current_monthly(&targets, date(2025, 8, 1)).is_none());
}

#[test]
fn quarterly_selection_uses_the_fiscal_quarter_of_today() {
    let mut q1 = target("q1", TargetPeriod::Quarterly);
    q1.quarter = Some("Q1 (Apr-Jun)".to_owned());
    let mut q4 = target("q4", TargetPeriod::Quarterly);
    q4.quarter = Some("Q4 (Jan-Mar)".to_owned());
    let targets = vec![q1, q4];

    let spring = find_current_quarterly(&targets, date(2025, 5, 1)).expect("spring");
    assert_eq!(spring.id, "q1");
    let winter = find_current_quarterly(&targets, date(2026, 2, 10)).expect("winter");
    assert_eq!(winter.id, "q4");
}

#[test]
fn yearly_selection_pivots_on_april_first() {
    let mut fy2025 = target("y2025", TargetPeriod::Yearly);
    fy2025.fiscal_year = Some(FiscalYear::new(2025).expect("fy"));
    let mut fy2024 = target("y2024", TargetPeriod::Yearly);
    fy2024.fiscal_year = Some(FiscalYear::new(2024).expect("fy"));
    let targets = vec![fy2025, fy2024];

    let after_april = find_current_yearly(&targets, date(2025, 5, 1)).expect("fy2025");
    assert_eq!(after_april.id, "y2025");
    let before_april = find_current_yearly(&targets, date(2025, 2, 1)).expect("fy2024");
    assert_eq!(before_april.id, "y2024");
}

#[test]
fn absence_of_a_match_is_none_not_an_error() {
    let targets: Vec<Target> = vec![];
    assert!(find_current_weekly(&targets, date(2025, 6, 10)).is_none());
    assert!(find_current_monthly(&targets, date(2025, 6, 10)).is_none());
    assert!(find_current_quarterly(&targets, date(2025, 6, 10)).is_none());
    assert!(find_current_yearly(&targets, date(2025, 6, 10)).is_none());
}
