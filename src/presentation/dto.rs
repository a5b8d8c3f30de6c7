use serde::{Deserialize, Serialize};

use crate::domain::meal::{Meal, MealMetrics};
use crate::domain::user::User;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

/// Body for both meal creation and update; updates replace every mutable
/// field rather than merging.
#[derive(Debug, Deserialize)]
pub struct MealPayload {
    pub name: String,
    pub description: String,
    pub datetime: String,
    #[serde(rename = "insideDiet")]
    pub inside_diet: bool,
}

// ======================= Response envelopes =======================

#[derive(Debug, Serialize)]
pub struct UsersEnvelope {
    pub users: Vec<User>,
}

/// Absent user is omitted from the body entirely, keeping the historical
/// "status 200, no `user` key" shape instead of a 404.
#[derive(Debug, Serialize)]
pub struct UserEnvelope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

#[derive(Debug, Serialize)]
pub struct MealsEnvelope {
    pub meals: Vec<Meal>,
}

#[derive(Debug, Serialize)]
pub struct MealEnvelope {
    pub meal: Meal,
}

#[derive(Debug, Serialize)]
pub struct MetricsEnvelope {
    pub metrics: MealMetrics,
}
