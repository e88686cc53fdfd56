use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub expiry_date: DateTime<Utc>,
    pub percent_complete: i32,
    pub is_done: bool,
}

/// Body for POST /todo and PUT /todo/{id}. Any client-supplied id is
/// ignored; storage assigns ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub expiry_date: DateTime<Utc>,
    #[serde(default)]
    pub percent_complete: i32,
    #[serde(default)]
    pub is_done: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoPeriod {
    Today,
    NextDay,
    CurrentWeek,
}

impl TodoPeriod {
    /// Accepts the period name or its numeric wire value. Anything else
    /// maps to `None`, which callers treat as "no filter".
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Today" | "0" => Some(Self::Today),
            "NextDay" | "1" => Some(Self::NextDay),
            "CurrentWeek" | "2" => Some(Self::CurrentWeek),
            _ => None,
        }
    }
}
