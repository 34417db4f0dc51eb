#[cfg(test)]
mod tests {
    use crate::models::time::{
        days_in_month, month_ordinal, months_between, year_bounds, DateWindow, DayIndex,
    };
    use chrono::{Datelike, NaiveDate};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_index_roundtrip() {
        let d = date(2025, 6, 30);
        let idx = DayIndex::from_date(d);
        assert_eq!(idx.to_date(), Some(d));
    }

    #[test]
    fn test_day_index_succ_crosses_month() {
        let idx = DayIndex::from_date(date(2025, 6, 30)).succ();
        assert_eq!(idx.to_date(), Some(date(2025, 7, 1)));
    }

    #[test]
    fn test_day_index_ordering() {
        let a = DayIndex::from(date(2025, 1, 1));
        let b = DayIndex::from(date(2025, 1, 2));
        assert!(a < b);
        assert_eq!(a.days_until(b), 1);
        assert_eq!(b.days_until(a), -1);
    }

    #[test]
    fn test_day_index_out_of_range_has_no_date() {
        assert_eq!(DayIndex::new(i64::MAX).to_date(), None);
        assert_eq!(DayIndex::from_date(NaiveDate::MAX).succ().to_date(), None);
        assert_eq!(DayIndex::from_date(NaiveDate::MAX).to_date(), Some(NaiveDate::MAX));
    }

    #[test]
    fn test_february_non_leap() {
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
    }

    #[test]
    fn test_february_leap() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2000, 2), 29);
    }

    #[test]
    fn test_month_lengths() {
        let lengths: Vec<u32> = (1..=12).map(|m| days_in_month(2025, m)).collect();
        assert_eq!(lengths, vec![31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]);
    }

    #[test]
    fn test_last_representable_month() {
        let last = NaiveDate::MAX;
        assert_eq!(days_in_month(last.year(), last.month()), 31);
    }

    #[test]
    fn test_invalid_month_has_no_days() {
        assert_eq!(days_in_month(2025, 0), 0);
        assert_eq!(days_in_month(2025, 13), 0);
    }

    #[test]
    fn test_months_between_across_year() {
        assert_eq!(months_between(date(2024, 11, 15), date(2025, 2, 1)), 3);
        assert_eq!(month_ordinal(date(2025, 1, 31)) + 1, month_ordinal(date(2025, 2, 1)));
    }

    #[test]
    fn test_year_bounds() {
        let (first, last) = year_bounds(2025).unwrap();
        assert_eq!(first, date(2025, 1, 1));
        assert_eq!(last, date(2025, 12, 31));
    }

    #[test]
    fn test_window_rejects_reversed_dates() {
        assert!(DateWindow::new(date(2025, 2, 1), date(2025, 1, 1)).is_err());
        assert!(DateWindow::new(date(2025, 1, 1), date(2025, 1, 1)).is_ok());
    }

    #[test]
    fn test_window_span_first_half() {
        let window = DateWindow::new(date(2025, 1, 1), date(2025, 6, 30)).unwrap();
        assert_eq!(window.span_days(), 181);
        assert_eq!(window.month_count(), 6);

        let leap = DateWindow::new(date(2024, 1, 1), date(2024, 6, 30)).unwrap();
        assert_eq!(leap.span_days(), 182);
    }

    #[test]
    fn test_window_month_labels() {
        let window = DateWindow::new(date(2025, 7, 1), date(2025, 12, 31)).unwrap();
        assert_eq!(
            window.month_labels(),
            vec!["2025-07", "2025-08", "2025-09", "2025-10", "2025-11", "2025-12"]
        );
    }

    #[test]
    fn test_window_partial_months() {
        let window = DateWindow::new(date(2025, 6, 16), date(2025, 8, 3)).unwrap();
        assert_eq!(window.month_count(), 3);
        assert_eq!(window.month_starts()[0], date(2025, 6, 1));
    }

    #[test]
    fn test_window_deserialize_validates_order() {
        let window: DateWindow =
            serde_json::from_str(r#"{"start":"2025-01-01","end":"2025-06-30"}"#).unwrap();
        assert_eq!(window.start(), date(2025, 1, 1));
        assert_eq!(window.end(), date(2025, 6, 30));

        let reversed = serde_json::from_str::<DateWindow>(r#"{"start":"2025-06-30","end":"2025-01-01"}"#);
        assert!(reversed.is_err());
    }

    #[test]
    fn test_window_covers() {
        let window = DateWindow::new(date(2025, 1, 1), date(2025, 6, 30)).unwrap();
        assert!(window.covers(date(2025, 3, 1), date(2025, 6, 30)));
        assert!(!window.covers(date(2025, 6, 20), date(2025, 7, 10)));
        assert_eq!(
            window.end_exclusive(),
            DayIndex::from_date(date(2025, 7, 1))
        );
    }
}
