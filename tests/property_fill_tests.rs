use chrono::{Duration, NaiveDate};
use fiscal_periods::core::Quarter;
use fiscal_periods::core::fill::{WEEKDAY_LABELS, fill_quarterly, fill_weekly, fill_yearly};
use fiscal_periods::core::types::{Bucket, PeriodKind};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn daily_bucket(name: String, amount: i64, count: u64) -> Bucket {
    Bucket {
        bucket_name: name,
        bucket_type: PeriodKind::Daily,
        record_count: count,
        total_amount: Decimal::from(amount),
        label: None,
        id_list: vec![format!("rec-{count}")],
    }
}

fn week_subset_strategy() -> impl Strategy<Value = Vec<Bucket>> {
    // Any subset of the week of 2025-06-08 (a Sunday), in any order.
    let sunday = NaiveDate::from_ymd_opt(2025, 6, 8).expect("valid date");
    let days: Vec<NaiveDate> = (0..7).map(|d| sunday + Duration::days(d)).collect();
    proptest::sample::subsequence(days, 0..=7)
        .prop_shuffle()
        .prop_map(|days| {
            days.into_iter()
                .enumerate()
                .map(|(i, day)| daily_bucket(day.to_string(), 100 + i as i64, i as u64 + 1))
                .collect()
        })
}

proptest! {
    #[test]
    fn weekly_fill_shape_is_invariant(buckets in week_subset_strategy()) {
        let filled = fill_weekly(&buckets);

        prop_assert_eq!(filled.len(), 7);
        for (slot, label) in filled.iter().zip(WEEKDAY_LABELS) {
            prop_assert_eq!(slot.label.as_deref(), Some(label));
        }
    }

    #[test]
    fn weekly_fill_never_alters_matched_buckets(buckets in week_subset_strategy()) {
        let filled = fill_weekly(&buckets);

        for input in &buckets {
            let slot = filled
                .iter()
                .find(|b| b.bucket_name == input.bucket_name)
                .expect("every parsable input bucket occupies a slot");
            prop_assert_eq!(slot.record_count, input.record_count);
            prop_assert_eq!(slot.total_amount, input.total_amount);
            prop_assert_eq!(&slot.id_list, &input.id_list);
        }
    }

    #[test]
    fn yearly_fill_order_is_invariant(present in proptest::sample::subsequence(vec![0usize, 1, 2, 3], 0..=4)) {
        let buckets: Vec<Bucket> = present
            .iter()
            .map(|&i| Bucket {
                bucket_name: Quarter::ALL[i].token().to_owned(),
                bucket_type: PeriodKind::Quarterly,
                record_count: i as u64,
                total_amount: Decimal::from(i as i64 * 10),
                label: None,
                id_list: vec![],
            })
            .collect();

        let filled = fill_yearly(&buckets);
        prop_assert_eq!(filled.len(), 4);
        for (slot, quarter) in filled.iter().zip(Quarter::ALL) {
            prop_assert_eq!(slot.bucket_name.as_str(), quarter.token());
        }
    }

    #[test]
    fn quarterly_fill_names_are_the_canonical_months(which in 0usize..4) {
        let quarter = Quarter::ALL[which];
        let filled = fill_quarterly(&[], quarter);

        prop_assert_eq!(filled.len(), 3);
        for (slot, month) in filled.iter().zip(quarter.months()) {
            prop_assert_eq!(slot.bucket_name.as_str(), month);
            prop_assert_eq!(slot.record_count, 0);
        }
    }
}
