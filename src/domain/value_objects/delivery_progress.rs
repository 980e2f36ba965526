use serde::Serialize;

use crate::domain::value_objects::enums::delivery_statuses::DeliveryStatus;

/// Ordered progression a shipment walks through. `cancelled` sits outside
/// the progression and never maps to a step.
pub const STATUS_STEPS: [DeliveryStatus; 5] = [
    DeliveryStatus::Pending,
    DeliveryStatus::Confirmed,
    DeliveryStatus::InTransit,
    DeliveryStatus::OutForDelivery,
    DeliveryStatus::Delivered,
];

pub const STEP_LABELS: [&str; 5] = [
    "Order Pending",
    "Confirmed",
    "In Transit",
    "Out for Delivery",
    "Delivered",
];

/// Progress shown on the tracking view. Total over any input string so the
/// server and a client rendering raw stored statuses never disagree.
pub fn progress_percent(status: &str) -> u8 {
    match status {
        "pending" => 20,
        "confirmed" => 40,
        "in-transit" => 60,
        "out-for-delivery" => 80,
        "delivered" => 100,
        _ => 0,
    }
}

/// Index of the status in [`STATUS_STEPS`], -1 for cancelled or anything
/// not in the progression.
pub fn active_step_index(status: &str) -> i32 {
    STATUS_STEPS
        .iter()
        .position(|step| step.to_string() == status)
        .map(|position| position as i32)
        .unwrap_or(-1)
}

pub fn is_step_active(step_index: usize, status: &str) -> bool {
    step_index as i32 <= active_step_index(status)
}

/// Guard used when strict transitions are enabled. Permissive deployments
/// never call this: any status may overwrite any other, as in the original
/// dashboard.
pub fn transition_allowed(from: DeliveryStatus, to: DeliveryStatus) -> bool {
    if from == to {
        return true;
    }
    if from == DeliveryStatus::Delivered || from == DeliveryStatus::Cancelled {
        return false;
    }
    if to == DeliveryStatus::Cancelled {
        return true;
    }
    active_step_index(&to.to_string()) > active_step_index(&from.to_string())
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrackingStep {
    pub key: String,
    pub label: String,
    pub active: bool,
}

/// The five labelled steps with per-step active flags for the given status.
pub fn tracking_steps(status: &str) -> Vec<TrackingStep> {
    STATUS_STEPS
        .iter()
        .zip(STEP_LABELS.iter())
        .enumerate()
        .map(|(step_index, (step, label))| TrackingStep {
            key: step.to_string(),
            label: (*label).to_string(),
            active: is_step_active(step_index, status),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_matches_status_table() {
        assert_eq!(progress_percent("pending"), 20);
        assert_eq!(progress_percent("confirmed"), 40);
        assert_eq!(progress_percent("in-transit"), 60);
        assert_eq!(progress_percent("out-for-delivery"), 80);
        assert_eq!(progress_percent("delivered"), 100);
        assert_eq!(progress_percent("cancelled"), 0);
        assert_eq!(progress_percent("no-such-status"), 0);
    }

    #[test]
    fn step_index_follows_progression_order() {
        assert_eq!(active_step_index("pending"), 0);
        assert_eq!(active_step_index("confirmed"), 1);
        assert_eq!(active_step_index("in-transit"), 2);
        assert_eq!(active_step_index("out-for-delivery"), 3);
        assert_eq!(active_step_index("delivered"), 4);
        assert_eq!(active_step_index("cancelled"), -1);
        assert_eq!(active_step_index("no-such-status"), -1);
    }

    #[test]
    fn step_activity_is_monotonic() {
        for status in STATUS_STEPS {
            let status = status.to_string();
            let active_index = active_step_index(&status);
            for step_index in 0..STATUS_STEPS.len() {
                assert_eq!(
                    is_step_active(step_index, &status),
                    step_index as i32 <= active_index,
                );
            }
        }
    }

    #[test]
    fn cancelled_activates_no_step() {
        for step_index in 0..STATUS_STEPS.len() {
            assert!(!is_step_active(step_index, "cancelled"));
        }
    }

    #[test]
    fn strict_transitions_move_forward_only() {
        use DeliveryStatus::*;

        assert!(transition_allowed(Pending, Confirmed));
        assert!(transition_allowed(Pending, Delivered));
        assert!(transition_allowed(InTransit, OutForDelivery));
        assert!(transition_allowed(InTransit, InTransit));

        assert!(!transition_allowed(Confirmed, Pending));
        assert!(!transition_allowed(OutForDelivery, InTransit));
    }

    #[test]
    fn cancellation_is_terminal_and_reachable_from_undelivered() {
        use DeliveryStatus::*;

        assert!(transition_allowed(Pending, Cancelled));
        assert!(transition_allowed(OutForDelivery, Cancelled));
        assert!(!transition_allowed(Delivered, Cancelled));
        assert!(!transition_allowed(Cancelled, Pending));
        assert!(!transition_allowed(Delivered, Pending));
    }

    #[test]
    fn tracking_steps_for_out_for_delivery() {
        let steps = tracking_steps("out-for-delivery");
        assert_eq!(steps.len(), 5);
        assert_eq!(steps[0].label, "Order Pending");
        assert!(steps[0].active);
        assert!(steps[3].active);
        assert!(!steps[4].active);
    }
}
