//! Greedy interval partitioning into visual lanes.
//!
//! Intervals are taken in `(start, end_exclusive)` order and each goes to the
//! lowest-numbered lane that is already free at its start. Sorting by start makes
//! the greedy optimal for interval graphs: the lane count equals the largest
//! number of intervals active on any single day.
//!
//! A plain first-fit scan costs O(n·L). Here busy lanes sit in a min-heap keyed
//! by their last end and released lanes in an ordered set, which gives the same
//! placements in O(n log n).

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};

use log::trace;
use serde::{Deserialize, Serialize};

use super::interval::Interval;
use crate::models::{DayIndex, LaneAssignment};

/// One horizontal track: pairwise non-overlapping intervals sorted by start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lane {
    pub index: usize,
    pub intervals: Vec<Interval>,
}

impl Lane {
    /// Exclusive end of the last interval in the lane.
    pub fn last_end(&self) -> Option<DayIndex> {
        self.intervals.last().map(Interval::end_exclusive)
    }
}

/// Input order after the `(start asc, end_exclusive asc)` sort.
///
/// Shorter intervals go first among equal starts so they release their lane
/// sooner. The sort is stable, so fully tied intervals keep input order.
pub fn placement_order(intervals: &[Interval]) -> Vec<&Interval> {
    let mut order: Vec<&Interval> = intervals.iter().collect();
    order.sort_by_key(|iv| (iv.start(), iv.end_exclusive()));
    order
}

/// Assign every interval to a lane.
///
/// Owner ids are expected to be unique within `intervals`; a repeated id keeps
/// the lane of its last placement.
pub fn assign_lanes(intervals: &[Interval]) -> LaneAssignment {
    let mut busy: BinaryHeap<Reverse<(DayIndex, usize)>> = BinaryHeap::new();
    let mut free: BTreeSet<usize> = BTreeSet::new();
    let mut lanes = BTreeMap::new();
    let mut lane_count = 0usize;

    for iv in placement_order(intervals) {
        while let Some(&Reverse((end, lane))) = busy.peek() {
            if end > iv.start() {
                break;
            }
            busy.pop();
            free.insert(lane);
        }

        let lane = match free.pop_first() {
            Some(lane) => lane,
            None => {
                lane_count += 1;
                lane_count - 1
            }
        };

        trace!(
            "lane {} <- {} [{}, {})",
            lane,
            iv.owner_id(),
            iv.start().value(),
            iv.end_exclusive().value()
        );
        busy.push(Reverse((iv.end_exclusive(), lane)));
        lanes.insert(iv.owner_id().clone(), lane);
    }

    LaneAssignment { lanes, lane_count }
}

/// Materialize the lanes of an assignment, each sorted by start.
pub fn collect_lanes(intervals: &[Interval], assignment: &LaneAssignment) -> Vec<Lane> {
    let mut lanes: Vec<Lane> = (0..assignment.lane_count)
        .map(|index| Lane {
            index,
            intervals: Vec::new(),
        })
        .collect();

    for iv in placement_order(intervals) {
        if let Some(lane) = assignment
            .lane_of(iv.owner_id())
            .and_then(|index| lanes.get_mut(index))
        {
            lane.intervals.push(iv.clone());
        }
    }

    lanes
}
