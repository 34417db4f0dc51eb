mod support;

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use planner_timeline::api::{
    assign_lanes, build_group_layout, CampaignId, Interval, LayoutResult, ScaleMode,
    ScheduledCampaign,
};
use support::{campaign, date, max_overlap, mid_year};

const EPS: f64 = 1e-9;

fn campaigns_strategy() -> impl Strategy<Value = Vec<ScheduledCampaign>> {
    prop::collection::vec((0i64..365, 0i64..90, 0usize..3), 0..40).prop_map(|specs| {
        let year_end = date(2025, 12, 31);
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (offset, len, group))| {
                let start = date(2025, 1, 1) + Duration::days(offset);
                let end = (start + Duration::days(len)).min(year_end);
                campaign(&format!("c{}", i), &format!("p{}", group), start, end)
            })
            .collect()
    })
}

/// Any last-day-of-H1 in 2025 except December 31, month-aligned or not.
fn boundary_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..364).prop_map(|offset| date(2025, 1, 1) + Duration::days(offset))
}

fn mode_strategy() -> impl Strategy<Value = ScaleMode> {
    prop_oneof![Just(ScaleMode::Equal), Just(ScaleMode::Proportional)]
}

fn bucket_intervals(layout: &LayoutResult) -> Vec<Vec<(Interval, usize)>> {
    layout
        .buckets
        .values()
        .map(|bucket| {
            bucket
                .entries
                .iter()
                .map(|e| {
                    let iv = Interval::from_dates(e.campaign_id.clone(), e.start_date, e.end_date)
                        .expect("laid-out entries are well formed");
                    (iv, e.lane)
                })
                .collect()
        })
        .collect()
}

proptest! {
    #[test]
    fn lanes_never_hold_overlapping_campaigns(campaigns in campaigns_strategy()) {
        let layout = build_group_layout(&campaigns, mid_year(2025), ScaleMode::Equal).unwrap();
        for bucket in bucket_intervals(&layout) {
            for (i, (a, lane_a)) in bucket.iter().enumerate() {
                for (b, lane_b) in bucket.iter().skip(i + 1) {
                    if lane_a == lane_b {
                        prop_assert!(!a.overlaps(b), "{} and {} share lane {}", a.owner_id(), b.owner_id(), lane_a);
                    }
                }
            }
        }
    }

    #[test]
    fn lane_count_matches_peak_overlap(campaigns in campaigns_strategy()) {
        let layout = build_group_layout(&campaigns, mid_year(2025), ScaleMode::Equal).unwrap();
        for (bucket, entries) in layout.buckets.values().zip(bucket_intervals(&layout)) {
            let intervals: Vec<Interval> = entries.into_iter().map(|(iv, _)| iv).collect();
            prop_assert_eq!(bucket.lane_count(), max_overlap(&intervals));
        }
    }

    #[test]
    fn lane_count_ignores_input_order(campaigns in campaigns_strategy()) {
        let intervals: Vec<Interval> = campaigns
            .iter()
            .map(|c| Interval::from_dates(c.id.clone(), c.start_date, c.end_date).unwrap())
            .collect();
        let mut reversed = intervals.clone();
        reversed.reverse();
        prop_assert_eq!(assign_lanes(&intervals).lane_count, assign_lanes(&reversed).lane_count);
    }

    #[test]
    fn positions_stay_inside_the_panel(
        campaigns in campaigns_strategy(),
        boundary in boundary_strategy(),
        mode in mode_strategy(),
    ) {
        let layout = build_group_layout(&campaigns, Some(boundary), mode).unwrap();
        for bucket in layout.buckets.values() {
            for pos in &bucket.positions {
                prop_assert!(pos.left_fraction >= 0.0);
                prop_assert!(pos.width_fraction > 0.0);
                prop_assert!(pos.left_fraction + pos.width_fraction <= 1.0 + EPS);
            }
        }
    }

    #[test]
    fn split_parts_reassemble_original(
        campaigns in campaigns_strategy(),
        boundary in boundary_strategy(),
    ) {
        let layout = build_group_layout(&campaigns, Some(boundary), ScaleMode::Equal).unwrap();
        for original in &campaigns {
            let mut parts: Vec<_> = layout
                .buckets
                .values()
                .flat_map(|b| b.entries.iter())
                .filter(|e| e.campaign_id == original.id)
                .collect();
            parts.sort_by_key(|e| e.start_date);

            prop_assert!(!parts.is_empty() && parts.len() <= 2);
            prop_assert_eq!(parts[0].start_date, original.start_date);
            prop_assert_eq!(parts[parts.len() - 1].end_date, original.end_date);
            if parts.len() == 2 {
                prop_assert_eq!(parts[0].end_date, boundary);
                prop_assert_eq!(parts[1].start_date, boundary + Duration::days(1));
            }
            let days: i64 = parts
                .iter()
                .map(|e| (e.end_date - e.start_date).num_days() + 1)
                .sum();
            prop_assert_eq!(days, original.duration_days());
        }
    }

    #[test]
    fn split_halves_meet_at_panel_edges(boundary in boundary_strategy(), mode in mode_strategy()) {
        let start = boundary - Duration::days(3).min(boundary - date(2025, 1, 1));
        let end = (boundary + Duration::days(4)).min(date(2025, 12, 31));
        let campaigns = vec![campaign("edge", "p", start, end)];
        let layout = build_group_layout(&campaigns, Some(boundary), mode).unwrap();

        let entries: Vec<_> = layout.buckets.values().flat_map(|b| b.entries.iter()).collect();
        prop_assert_eq!(entries.len(), 2);
        prop_assert!((entries[0].left_fraction + entries[0].width_fraction - 1.0).abs() < EPS);
        prop_assert_eq!(entries[1].left_fraction, 0.0);
    }

    #[test]
    fn layout_is_idempotent(campaigns in campaigns_strategy(), mode in mode_strategy()) {
        let first = build_group_layout(&campaigns, mid_year(2025), mode).unwrap();
        let second = build_group_layout(&campaigns, mid_year(2025), mode).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn full_month_is_one_cell_wide_in_equal_mode(month in 1u32..=12, year in 2020i32..2030) {
        let start = date(year, month, 1);
        let end = planner_timeline::models::days_in_month(year, month);
        let campaigns = vec![campaign("m", "p", start, date(year, month, end))];
        let layout = build_group_layout(&campaigns, mid_year(year), ScaleMode::Equal).unwrap();
        let bucket = layout.buckets.values().next().unwrap();
        let pos = bucket.position_of(&CampaignId::new("m")).unwrap();
        prop_assert!((pos.width_fraction - 1.0 / 6.0).abs() < 1e-12);
    }
}
