use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::category::{Category, GoalUnit};
use crate::models::item::InventoryItem;

/// One dashboard row: a category's stocked amount measured against its goal.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BalanceRow {
    pub category_id: Uuid,
    pub name: String,
    pub color: String,
    pub goal_amount: f64,
    pub goal_unit: GoalUnit,
    pub current_amount: f64,
    /// current / goal * 100, or 0 when the goal is unset or zero.
    pub achievement_percent: f64,
    /// current / total * 100, or 0 when nothing is stocked at all.
    pub share_percent: f64,
}

/// Aggregated stock-vs-goal view for a household.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BalanceSummary {
    /// Sorted ascending by achievement: what needs attention comes first.
    pub rows: Vec<BalanceRow>,
    pub total: f64,
}

/// Aggregate per-category current amounts against category goals.
///
/// Current amount is `content_amount * quantity` summed per category. Every
/// category gets a row, itemless ones with zeroes. Items without a category
/// (or whose category is not in `categories`) contribute to no row and are
/// excluded from `total`, keeping `total` equal to the sum over rows.
///
/// Household filtering is the caller's job; this only applies the optional
/// storage-location filter. Zero goals and an empty item set degrade to zero
/// percentages, never to an error.
pub fn aggregate_balance(
    items: &[InventoryItem],
    categories: &[Category],
    storage_location_id: Option<Uuid>,
) -> BalanceSummary {
    let mut current_by_category: HashMap<Uuid, f64> = HashMap::new();
    for item in items {
        if let Some(filter) = storage_location_id {
            if item.storage_location_id != Some(filter) {
                continue;
            }
        }
        let Some(category_id) = item.category_id else {
            continue;
        };
        *current_by_category.entry(category_id).or_insert(0.0) +=
            item.content_amount * f64::from(item.quantity);
    }

    // First pass: per-category amounts and achievement. Share needs the
    // grand total, so it is filled in afterwards.
    let mut total = 0.0;
    let mut rows: Vec<BalanceRow> = categories
        .iter()
        .map(|category| {
            let current_amount = current_by_category
                .get(&category.id)
                .copied()
                .unwrap_or(0.0);
            total += current_amount;

            let achievement_percent = if category.goal_amount <= 0.0 {
                0.0
            } else {
                current_amount * 100.0 / category.goal_amount
            };

            BalanceRow {
                category_id: category.id,
                name: category.name.clone(),
                color: category.color.clone(),
                goal_amount: category.goal_amount,
                goal_unit: category.goal_unit.clone(),
                current_amount,
                achievement_percent,
                share_percent: 0.0,
            }
        })
        .collect();

    if total > 0.0 {
        for row in &mut rows {
            row.share_percent = row.current_amount * 100.0 / total;
        }
    }

    rows.sort_by(|a, b| {
        a.achievement_percent
            .partial_cmp(&b.achievement_percent)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    BalanceSummary { rows, total }
}
