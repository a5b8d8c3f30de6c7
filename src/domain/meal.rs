use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A meal logged by a user. `user_id` is the opaque identity token the
/// caller asserted at creation time, not a verified reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Meal {
    pub id: String,
    pub name: String,
    pub description: String,
    pub datetime: String,
    pub inside_diet: bool,
    pub created_at: DateTime<Utc>,
    pub user_id: String,
}

impl Meal {
    pub fn new(
        name: String,
        description: String,
        datetime: String,
        inside_diet: bool,
        user_id: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            description,
            datetime,
            inside_diet,
            created_at: Utc::now(),
            user_id,
        }
    }
}

/// Full replacement of a meal's mutable fields. The owner is re-asserted
/// from the caller's identity on every update, matching the recorded
/// contract (a no-op in practice since the caller must already own the row).
#[derive(Debug, Clone)]
pub struct MealChanges {
    pub name: String,
    pub description: String,
    pub datetime: String,
    pub inside_diet: bool,
    pub user_id: String,
}

/// Aggregates for the metrics endpoint. `total_meals` is the sum of the
/// two per-flag counts.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MealMetrics {
    #[serde(rename = "totalMeals")]
    pub total_meals: i64,
    pub inside_diet: i64,
    pub outside_diet: i64,
}
