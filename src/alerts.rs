use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Alert classification for a single inventory item.
///
/// `red` is the highest severity (out of stock and past its expiry date) and
/// always suppresses `blue` (running low or expiring soon). `days_left` is
/// the whole-day distance to the expiry date, negative once it has passed,
/// and absent for items without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AlertStatus {
    pub is_red: bool,
    pub is_blue: bool,
    pub days_left: Option<i64>,
}

fn days_left(expiry_date: Option<NaiveDate>, today: NaiveDate) -> Option<i64> {
    expiry_date.map(|expiry| (expiry - today).num_days())
}

/// Classify one item into an alert tier.
///
/// Rules:
/// - red: expiry date present, quantity is zero, and the expiry date is
///   strictly before `today`. Items without an expiry date are never red.
/// - blue: not red, and either quantity <= `quantity_threshold` or
///   `days_left` <= `expiry_days`.
/// - A missing threshold disables that sub-condition; missing configuration
///   never produces an error.
///
/// `today` is always supplied by the caller. This function never reads the
/// clock, so results are deterministic and timezone handling stays at the
/// edge of the system.
pub fn evaluate_alert(
    quantity: i32,
    expiry_date: Option<NaiveDate>,
    today: NaiveDate,
    quantity_threshold: Option<i32>,
    expiry_days: Option<i32>,
) -> AlertStatus {
    let days_left = days_left(expiry_date, today);

    let is_red = match expiry_date {
        Some(expiry) => quantity == 0 && expiry < today,
        None => false,
    };

    let is_low_stock = quantity_threshold.is_some_and(|threshold| quantity <= threshold);

    let is_expiring_soon = match (expiry_days, days_left) {
        (Some(window), Some(left)) => left <= i64::from(window),
        _ => false,
    };

    let is_blue = !is_red && (is_low_stock || is_expiring_soon);

    AlertStatus {
        is_red,
        is_blue,
        days_left,
    }
}
