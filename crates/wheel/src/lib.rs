//! Radial wheel layout: N equal sectors on a circle, arcs that may cross
//! the top of the dial, and angle hit-testing for hover interactions.
//!
//! Slots are 1-based and angles are degrees clockwise from the top of the
//! wheel. Sector `s` spans `[(s-1), s) * 360/N`, so angles come out of the
//! same division everywhere and slot `N` ends at exactly 360.

use serde::{Deserialize, Serialize};

use foundation::{FULL_TURN_DEG, normalize_deg};

/// An item to place on the wheel, spanning whole slots inclusively. An arc
/// wraps when `end_slot < start_slot` (a November-to-February span on a
/// twelve-slot wheel crosses the top). `end_slot == start_slot - 1` is the
/// degenerate full turn and keeps the wrap flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelItem {
    pub id: String,
    pub start_slot: u32,
    pub end_slot: u32,
}

/// A laid-out arc. `start_angle` is in `[0, 360)`; `end_angle` is in
/// `(0, 360]` and is less than `start_angle` only when the arc wraps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelSlot {
    pub id: String,
    pub start_angle: f64,
    pub end_angle: f64,
    pub wraps: bool,
}

impl WheelSlot {
    /// Width of the arc in degrees, in `(0, 360]`.
    pub fn angular_span(&self) -> f64 {
        if self.wraps {
            FULL_TURN_DEG - self.start_angle + self.end_angle
        } else {
            self.end_angle - self.start_angle
        }
    }

    /// Angle of the arc's midpoint, normalized to `[0, 360)`.
    pub fn mid_angle(&self) -> f64 {
        normalize_deg(self.start_angle + self.angular_span() / 2.0)
    }

    /// Whether `angle` falls inside the arc. Arcs are half-open: the start
    /// boundary belongs to the arc, the end boundary does not.
    pub fn contains_angle(&self, angle: f64) -> bool {
        let a = normalize_deg(angle);
        if self.wraps {
            a >= self.start_angle || a < self.end_angle
        } else {
            a >= self.start_angle && a < self.end_angle
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WheelError {
    /// A wheel needs at least one slot.
    NoSlots,
    /// An item references a slot outside 1..=total.
    SlotOutOfRange { id: String, slot: u32, total: u32 },
}

impl std::fmt::Display for WheelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WheelError::NoSlots => write!(f, "wheel has no slots"),
            WheelError::SlotOutOfRange { id, slot, total } => {
                write!(f, "item {id:?}: slot {slot} is outside 1..={total}")
            }
        }
    }
}

impl std::error::Error for WheelError {}

fn slot_angle(slot: u32, total: u32) -> f64 {
    slot as f64 * FULL_TURN_DEG / total as f64
}

fn check_slot(id: &str, slot: u32, total: u32) -> Result<(), WheelError> {
    if slot < 1 || slot > total {
        return Err(WheelError::SlotOutOfRange {
            id: id.to_owned(),
            slot,
            total,
        });
    }
    Ok(())
}

/// Place every item on a wheel of `total_slots` equal sectors, preserving
/// input order.
pub fn layout_wheel(items: &[WheelItem], total_slots: u32) -> Result<Vec<WheelSlot>, WheelError> {
    if total_slots == 0 {
        return Err(WheelError::NoSlots);
    }
    let mut slots = Vec::with_capacity(items.len());
    for item in items {
        check_slot(&item.id, item.start_slot, total_slots)?;
        check_slot(&item.id, item.end_slot, total_slots)?;
        slots.push(WheelSlot {
            id: item.id.clone(),
            start_angle: slot_angle(item.start_slot - 1, total_slots),
            end_angle: slot_angle(item.end_slot, total_slots),
            wraps: item.end_slot < item.start_slot,
        });
    }
    Ok(slots)
}

/// Start angle of each sector, in slot order. The first boundary is the top
/// of the wheel; the end of the last sector coincides with it.
pub fn sector_boundaries(total_slots: u32) -> Result<Vec<f64>, WheelError> {
    if total_slots == 0 {
        return Err(WheelError::NoSlots);
    }
    Ok((0..total_slots).map(|s| slot_angle(s, total_slots)).collect())
}

/// All arcs containing `angle`, in input order. Overlapping arcs are all
/// reported; an empty result means the angle fell in a gap.
pub fn slots_at_angle<'a>(slots: &'a [WheelSlot], angle: f64) -> Vec<&'a WheelSlot> {
    slots.iter().filter(|s| s.contains_angle(angle)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(id: &str, start: u32, end: u32) -> WheelItem {
        WheelItem {
            id: id.to_owned(),
            start_slot: start,
            end_slot: end,
        }
    }

    #[test]
    fn single_slot_on_a_twelve_wheel() {
        let slots = layout_wheel(&[item("muharram", 1, 1)], 12).unwrap();
        assert_eq!(
            slots,
            vec![WheelSlot {
                id: "muharram".to_owned(),
                start_angle: 0.0,
                end_angle: 30.0,
                wraps: false,
            }]
        );
        assert_eq!(slots[0].angular_span(), 30.0);
        assert_eq!(slots[0].mid_angle(), 15.0);
    }

    #[test]
    fn november_to_february_wraps_across_the_top() {
        let slots = layout_wheel(&[item("winter", 11, 2)], 12).unwrap();
        let arc = &slots[0];
        assert_eq!(arc.start_angle, 300.0);
        assert_eq!(arc.end_angle, 60.0);
        assert!(arc.wraps);
        assert_eq!(arc.angular_span(), 120.0);
        assert_eq!(arc.mid_angle(), 0.0);
        assert!(arc.contains_angle(300.0));
        assert!(arc.contains_angle(359.5));
        assert!(arc.contains_angle(0.0));
        assert!(arc.contains_angle(59.9));
        assert!(!arc.contains_angle(60.0));
        assert!(!arc.contains_angle(180.0));
    }

    #[test]
    fn last_slot_ends_at_exactly_full_turn() {
        for total in [7u32, 12, 33, 360] {
            let slots = layout_wheel(&[item("tail", total, total)], total).unwrap();
            assert_eq!(slots[0].end_angle, 360.0);
            assert!(!slots[0].wraps);
        }
    }

    #[test]
    fn arc_ending_at_the_top_excludes_the_seam() {
        let slots = layout_wheel(&[item("q4", 10, 12)], 12).unwrap();
        let arc = &slots[0];
        assert_eq!(arc.end_angle, 360.0);
        assert!(arc.contains_angle(359.999));
        assert!(!arc.contains_angle(0.0));
        assert!(arc.contains_angle(270.0));
    }

    #[test]
    fn start_boundary_is_inside_end_boundary_is_not() {
        let slots = layout_wheel(&[item("safar", 2, 2)], 12).unwrap();
        let arc = &slots[0];
        assert!(arc.contains_angle(30.0));
        assert!(arc.contains_angle(59.999));
        assert!(!arc.contains_angle(60.0));
        assert!(!arc.contains_angle(29.999));
    }

    #[test]
    fn full_turn_arc_covers_every_angle() {
        let slots = layout_wheel(&[item("year", 5, 4)], 12).unwrap();
        let arc = &slots[0];
        assert!(arc.wraps);
        assert_eq!(arc.angular_span(), 360.0);
        for angle in [0.0, 90.0, 119.999, 120.0, 250.0, 359.9] {
            assert!(arc.contains_angle(angle), "missing {angle}");
        }
    }

    #[test]
    fn hit_testing_keeps_input_order() {
        let slots = layout_wheel(
            &[item("ring", 1, 12), item("winter", 11, 2), item("summer", 5, 8)],
            12,
        )
        .unwrap();
        let hits: Vec<&str> = slots_at_angle(&slots, 315.0)
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(hits, vec!["ring", "winter"]);
        assert!(slots_at_angle(&slots, 100.0).len() == 1);
    }

    #[test]
    fn boundaries_divide_the_circle_evenly() {
        assert_eq!(sector_boundaries(4).unwrap(), vec![0.0, 90.0, 180.0, 270.0]);
        let thirds = sector_boundaries(3).unwrap();
        assert_eq!(thirds.len(), 3);
        assert!((thirds[1] - 120.0).abs() < 1e-12);
    }

    #[test]
    fn zero_slots_is_an_error() {
        assert_eq!(layout_wheel(&[], 0), Err(WheelError::NoSlots));
        assert_eq!(sector_boundaries(0), Err(WheelError::NoSlots));
    }

    #[test]
    fn out_of_range_slots_are_rejected() {
        let err = layout_wheel(&[item("late", 1, 13)], 12).unwrap_err();
        assert_eq!(
            err,
            WheelError::SlotOutOfRange {
                id: "late".to_owned(),
                slot: 13,
                total: 12,
            }
        );
        assert!(layout_wheel(&[item("zero", 0, 3)], 12).is_err());
    }

    #[test]
    fn layout_serializes_for_the_renderer() {
        let slots = layout_wheel(&[item("winter", 11, 2)], 12).unwrap();
        let json = serde_json::to_value(&slots).unwrap();
        assert_eq!(json[0]["start_angle"], 300.0);
        assert_eq!(json[0]["wraps"], true);
    }
}
