use chrono::{Datelike, Duration, NaiveDate, Weekday};
use fiscal_periods::core::calendar::{FiscalYear, Quarter, start_of_week};
use proptest::prelude::*;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // ~60 years around the fiscal years the dashboard actually displays.
    (2000i32..2060, 0u32..365).prop_map(|(year, offset)| {
        NaiveDate::from_ymd_opt(year, 1, 1).expect("valid date") + Duration::days(i64::from(offset))
    })
}

proptest! {
    #[test]
    fn every_date_belongs_to_exactly_one_fiscal_year(date in any_date()) {
        let fy = FiscalYear::containing(date);
        prop_assert!(fy.date_range().contains(date));

        let previous = FiscalYear::new(fy.year() - 1).expect("fy");
        let next = FiscalYear::new(fy.year() + 1).expect("fy");
        prop_assert!(!previous.date_range().contains(date));
        prop_assert!(!next.date_range().contains(date));
    }

    #[test]
    fn every_date_falls_inside_its_own_quarter_range(date in any_date()) {
        let fy = FiscalYear::containing(date);
        let quarter = Quarter::containing(date);
        prop_assert!(quarter.date_range(fy).contains(date));
    }

    #[test]
    fn quarter_ranges_tile_the_fiscal_year(year in 2000i32..2060) {
        let fy = FiscalYear::new(year).expect("fy");
        let mut cursor = fy.date_range().start;
        for quarter in Quarter::ALL {
            let range = quarter.date_range(fy);
            prop_assert_eq!(range.start, cursor);
            cursor = range.end + Duration::days(1);
        }
        prop_assert_eq!(cursor, fy.date_range().end + Duration::days(1));
    }

    #[test]
    fn start_of_week_is_a_sunday_at_most_six_days_back(date in any_date()) {
        let start = start_of_week(date);
        prop_assert_eq!(start.weekday(), Weekday::Sun);
        prop_assert!(start <= date);
        prop_assert!(date - start <= Duration::days(6));
    }

    #[test]
    fn quarter_tokens_survive_surrounding_noise(
        quarter_index in 0usize..4,
        prefix in "[a-p ]{0,8}",
        suffix in "[a-p ]{0,8}",
    ) {
        let quarter = Quarter::ALL[quarter_index];
        let noisy = format!("{prefix}{}{suffix}", quarter.token());
        prop_assert_eq!(Quarter::from_token(&noisy).expect("parse"), quarter);
    }
}
