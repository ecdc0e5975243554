//! Side-by-side column layout for overlapping shifts.
//!
//! Shifts are grouped into clusters by scanning in start order: a shift
//! joins the first cluster holding any shift it overlaps, otherwise it opens
//! a new one. Membership is by connection through any member, so two shifts
//! that never overlap can still share a cluster through a third one and get
//! narrower columns than strictly needed. Existing schedules depend on that
//! width, so it is kept.
//!
//! The layout is recomputed from scratch on every call.

use serde::Serialize;

use crate::models::settings::GridConfig;
use crate::models::shift::{Shift, ShiftId};
use crate::services::grid::GridGeometry;
use crate::services::overlap::overlaps;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnAssignment {
    pub column: usize,
    pub total_columns: usize,
}

impl ColumnAssignment {
    pub const FULL_WIDTH: ColumnAssignment = ColumnAssignment {
        column: 0,
        total_columns: 1,
    };
}

/// Render annotations for one shift.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftLayout {
    pub shift_id: ShiftId,
    pub column: usize,
    pub total_columns: usize,
    /// Pixels from the top of the day window
    pub top: f32,
    pub height: f32,
}

impl ShiftLayout {
    /// Share of the day column's width, `1 / total_columns`.
    pub fn width_fraction(&self) -> f32 {
        1.0 / self.total_columns as f32
    }

    pub fn left_fraction(&self) -> f32 {
        self.column as f32 * self.width_fraction()
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Cluster membership as indices into `shifts`, each cluster in arrival order.
pub fn overlap_clusters(shifts: &[Shift]) -> Vec<Vec<usize>> {
    let mut order: Vec<usize> = (0..shifts.len()).collect();
    // stable: equal starts keep input order
    order.sort_by_key(|&i| shifts[i].start_time);

    let mut clusters: Vec<Vec<usize>> = Vec::new();
    for idx in order {
        let shift = &shifts[idx];
        let home = clusters.iter_mut().find(|cluster| {
            cluster.iter().any(|&member| {
                let other = &shifts[member];
                other.date == shift.date && overlaps(other, shift)
            })
        });
        match home {
            Some(cluster) => cluster.push(idx),
            None => clusters.push(vec![idx]),
        }
    }
    clusters
}

/// Column and cluster width per shift, in the same order as `shifts`.
pub fn assign_columns(shifts: &[Shift]) -> Vec<ColumnAssignment> {
    let mut assignments = vec![ColumnAssignment::FULL_WIDTH; shifts.len()];
    for cluster in overlap_clusters(shifts) {
        let total_columns = cluster.len();
        for (column, idx) in cluster.into_iter().enumerate() {
            assignments[idx] = ColumnAssignment {
                column,
                total_columns,
            };
        }
    }
    assignments
}

/// Full render annotations for a day, in the same order as `shifts`.
pub fn layout_day(shifts: &[Shift], config: &GridConfig) -> Vec<ShiftLayout> {
    let grid = GridGeometry::from_config(config);
    let day_start = config.day_start_minutes();

    shifts
        .iter()
        .zip(assign_columns(shifts))
        .map(|(shift, assignment)| ShiftLayout {
            shift_id: shift.id.clone(),
            column: assignment.column,
            total_columns: assignment.total_columns,
            top: grid.time_to_pixels(shift.start_time, day_start),
            height: grid.minutes_to_pixels(shift.duration_minutes()),
        })
        .collect()
}
