//! Render View-Models
//!
//! Pure computation from a [`Snapshot`] to what the dashboard displays:
//! sorted zone boxes, both chart models, and the alert line. Nothing here
//! touches the DOM, so every rendering rule is unit-testable on the host.
//!
//! [`Snapshot`]: crate::state::global::Snapshot

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::state::global::Snapshot;

pub mod alerts;

/// Colors for one palette slot. `fill` is the stroke hue at reduced opacity
/// for the area under a line; `bubble` is the denser variant used by the
/// density chart.
#[derive(Debug, PartialEq)]
pub struct ZoneColor {
    pub css_class: &'static str,
    pub stroke: &'static str,
    pub fill: &'static str,
    pub bubble: &'static str,
}

/// Four-color palette, assigned to zones by sorted position modulo 4.
pub const PALETTE: [ZoneColor; 4] = [
    ZoneColor {
        css_class: "zone1",
        stroke: "#007bff",
        fill: "#007bff40",
        bubble: "#007bffcc",
    },
    ZoneColor {
        css_class: "zone2",
        stroke: "#fd7e14",
        fill: "#fd7e1440",
        bubble: "#fd7e14cc",
    },
    ZoneColor {
        css_class: "zone3",
        stroke: "#28a745",
        fill: "#28a74540",
        bubble: "#28a745cc",
    },
    ZoneColor {
        css_class: "zone4",
        stroke: "#6f42c1",
        fill: "#6f42c140",
        bubble: "#6f42c1cc",
    },
];

/// Palette slot for the zone at sorted position `rank`
pub fn zone_color(rank: usize) -> &'static ZoneColor {
    &PALETTE[rank % PALETTE.len()]
}

/// Compare zone ids numerically when both parse as integers. Numeric ids
/// sort before non-numeric ones; non-numeric ids fall back to lexicographic
/// order.
pub fn cmp_zone_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// Zone ids in display order, independent of the backend's key order
pub fn zone_order(zones: &HashMap<String, u32>) -> Vec<String> {
    let mut ids: Vec<String> = zones.keys().cloned().collect();
    ids.sort_by(|a, b| cmp_zone_ids(a, b));
    ids
}

/// Occupancy count padded to at least two digits
pub fn pad_count(count: u32) -> String {
    format!("{:02}", count)
}

/// One zone occupancy box.
#[derive(Debug, PartialEq)]
pub struct ZoneBox {
    pub id: String,
    pub count: u32,
    pub color: &'static ZoneColor,
}

/// Zone boxes in display order, rebuilt in full from each snapshot
pub fn zone_boxes(snapshot: &Snapshot) -> Vec<ZoneBox> {
    zone_order(&snapshot.zones)
        .into_iter()
        .enumerate()
        .map(|(rank, id)| {
            let count = snapshot.zones.get(&id).copied().unwrap_or(0);
            ZoneBox {
                id,
                count,
                color: zone_color(rank),
            }
        })
        .collect()
}

/// Time-series model: one x label per history entry, one series per zone.
#[derive(Debug, Default, PartialEq)]
pub struct LineChartModel {
    pub labels: Vec<String>,
    pub series: Vec<LineSeries>,
}

/// A single zone's line on the time-series chart.
#[derive(Debug, PartialEq)]
pub struct LineSeries {
    pub label: String,
    pub color: &'static ZoneColor,
    /// One value per label; a zone missing from a history entry counts as 0
    pub points: Vec<u32>,
}

/// Build the time-series model. Labels keep the history's own order; series
/// follow the current snapshot's sorted zone set, so a zone with no history
/// yet draws as a flat zero line.
pub fn line_chart_model(snapshot: &Snapshot) -> LineChartModel {
    let labels = snapshot
        .history
        .iter()
        .map(|entry| entry.time.clone())
        .collect();
    let series = zone_order(&snapshot.zones)
        .into_iter()
        .enumerate()
        .map(|(rank, id)| {
            let points = snapshot
                .history
                .iter()
                .map(|entry| entry.zones.get(&id).copied().unwrap_or(0))
                .collect();
            LineSeries {
                label: format!("Zone {}", id),
                color: zone_color(rank),
                points,
            }
        })
        .collect();
    LineChartModel { labels, series }
}

/// Radius floor so zero-occupancy zones stay visible
pub const BUBBLE_RADIUS_FLOOR: f64 = 15.0;
/// Radius gain per person
pub const BUBBLE_RADIUS_SCALE: f64 = 4.0;

/// Bubble radius: monotonic in the count, never below the floor
pub fn bubble_radius(count: u32) -> f64 {
    (f64::from(count) * BUBBLE_RADIUS_SCALE).max(BUBBLE_RADIUS_FLOOR)
}

/// Density model: one bubble per zone at its sorted rank.
#[derive(Debug, Default, PartialEq)]
pub struct BubbleChartModel {
    pub bubbles: Vec<Bubble>,
}

#[derive(Debug, PartialEq)]
pub struct Bubble {
    pub label: String,
    pub color: &'static ZoneColor,
    /// 0-based position in the sorted zone order
    pub rank: usize,
    pub count: u32,
    pub radius: f64,
}

pub fn bubble_chart_model(snapshot: &Snapshot) -> BubbleChartModel {
    let bubbles = zone_order(&snapshot.zones)
        .into_iter()
        .enumerate()
        .map(|(rank, id)| {
            let count = snapshot.zones.get(&id).copied().unwrap_or(0);
            Bubble {
                label: format!("Zone {}", id),
                color: zone_color(rank),
                rank,
                count,
                radius: bubble_radius(count),
            }
        })
        .collect();
    BubbleChartModel { bubbles }
}

/// Banner text for the zones currently over threshold, in display order
pub fn alert_line(alerts: &[String]) -> String {
    let mut ids: Vec<&String> = alerts.iter().collect();
    ids.sort_by(|a, b| cmp_zone_ids(a, b));
    ids.iter()
        .map(|id| format!("Zone {}", id))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::global::HistoryEntry;

    fn snapshot_with_zones(zones: &[(&str, u32)]) -> Snapshot {
        Snapshot {
            zones: zones
                .iter()
                .map(|(id, count)| (id.to_string(), *count))
                .collect(),
            ..Snapshot::default()
        }
    }

    fn history_entry(time: &str, zones: &[(&str, u32)]) -> HistoryEntry {
        HistoryEntry {
            time: time.to_string(),
            zones: zones
                .iter()
                .map(|(id, count)| (id.to_string(), *count))
                .collect(),
        }
    }

    #[test]
    fn test_zone_order_is_numeric_ascending() {
        let snapshot = snapshot_with_zones(&[("10", 1), ("2", 2), ("1", 3)]);
        assert_eq!(zone_order(&snapshot.zones), vec!["1", "2", "10"]);
    }

    #[test]
    fn test_non_numeric_ids_sort_after_numeric() {
        let snapshot = snapshot_with_zones(&[("lobby", 1), ("3", 2), ("atrium", 0), ("1", 4)]);
        assert_eq!(zone_order(&snapshot.zones), vec!["1", "3", "atrium", "lobby"]);
    }

    #[test]
    fn test_pad_count_keeps_two_digits_minimum() {
        assert_eq!(pad_count(0), "00");
        assert_eq!(pad_count(3), "03");
        assert_eq!(pad_count(12), "12");
        assert_eq!(pad_count(123), "123");
    }

    #[test]
    fn test_palette_cycles_modulo_four() {
        assert_eq!(zone_color(0).css_class, "zone1");
        assert_eq!(zone_color(3).css_class, "zone4");
        assert_eq!(zone_color(4), zone_color(0));
        assert_eq!(zone_color(7), zone_color(3));
    }

    #[test]
    fn test_zone_boxes_are_sorted_and_colored_by_rank() {
        let snapshot = snapshot_with_zones(&[("3", 7), ("1", 12), ("2", 0), ("10", 4), ("4", 9)]);
        let boxes = zone_boxes(&snapshot);
        let ids: Vec<&str> = boxes.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "10"]);
        assert_eq!(boxes[0].color.css_class, "zone1");
        // fifth zone wraps back to the first palette slot
        assert_eq!(boxes[4].color.css_class, "zone1");
        assert_eq!(boxes[1].count, 0);
    }

    #[test]
    fn test_line_model_keeps_history_order_for_labels() {
        let mut snapshot = snapshot_with_zones(&[("1", 2)]);
        snapshot.history = vec![
            history_entry("10:00:05", &[("1", 1)]),
            history_entry("10:00:02", &[("1", 2)]),
        ];
        let model = line_chart_model(&snapshot);
        assert_eq!(model.labels, vec!["10:00:05", "10:00:02"]);
    }

    #[test]
    fn test_line_model_fills_missing_zones_with_zero() {
        let mut snapshot = snapshot_with_zones(&[("1", 2), ("2", 5)]);
        snapshot.history = vec![
            history_entry("10:00:01", &[("1", 1)]),
            history_entry("10:00:02", &[("1", 2), ("2", 5)]),
        ];
        let model = line_chart_model(&snapshot);
        assert_eq!(model.series.len(), 2);
        assert_eq!(model.series[0].label, "Zone 1");
        assert_eq!(model.series[0].points, vec![1, 2]);
        assert_eq!(model.series[1].label, "Zone 2");
        assert_eq!(model.series[1].points, vec![0, 5]);
    }

    #[test]
    fn test_line_model_is_deterministic_for_equal_snapshots() {
        let mut snapshot = snapshot_with_zones(&[("2", 5), ("1", 2)]);
        snapshot.history = vec![history_entry("10:00:01", &[("1", 1), ("2", 4)])];
        assert_eq!(line_chart_model(&snapshot), line_chart_model(&snapshot.clone()));
        assert_eq!(zone_boxes(&snapshot), zone_boxes(&snapshot.clone()));
    }

    #[test]
    fn test_bubble_radius_has_floor_and_linear_growth() {
        assert_eq!(bubble_radius(0), 15.0);
        // small counts sit on the floor until the scale overtakes it
        assert_eq!(bubble_radius(3), 15.0);
        assert_eq!(bubble_radius(4), 16.0);
        assert_eq!(bubble_radius(10), 40.0);
        assert!(bubble_radius(11) > bubble_radius(10));
    }

    #[test]
    fn test_bubble_model_ranks_follow_sorted_order() {
        let snapshot = snapshot_with_zones(&[("2", 8), ("1", 0)]);
        let model = bubble_chart_model(&snapshot);
        assert_eq!(model.bubbles.len(), 2);
        assert_eq!(model.bubbles[0].label, "Zone 1");
        assert_eq!(model.bubbles[0].rank, 0);
        assert_eq!(model.bubbles[0].radius, 15.0);
        assert_eq!(model.bubbles[1].label, "Zone 2");
        assert_eq!(model.bubbles[1].rank, 1);
        assert_eq!(model.bubbles[1].radius, 32.0);
    }

    #[test]
    fn test_alert_line_sorts_and_joins() {
        let alerts = vec!["2".to_string(), "10".to_string(), "1".to_string()];
        assert_eq!(alert_line(&alerts), "Zone 1, Zone 2, Zone 10");
        assert_eq!(alert_line(&[]), "");
    }
}
