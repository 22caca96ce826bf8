//! Chore domain model.
//!
//! # Responsibility
//! - Define the chore record and its schedule semantics.
//! - Derive the effective due instant used by the ranking policy.
//!
//! # Invariants
//! - `id` is stable and never reused for another chore.
//! - A chore with `is_today == true` has no calendar deadline; its
//!   `created_at` stands in as the effective due instant.
//! - `effective_due_instant` never fails, even on partial records.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a chore record.
pub type ChoreId = Uuid;

/// Closed set of category icons supported by the chore cards.
///
/// Wire names keep the identifiers the external schema already stores, so
/// records written by older clients deserialize unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChoreIcon {
    #[serde(rename = "Utensils")]
    Kitchen,
    #[serde(rename = "Shirt")]
    Laundry,
    #[serde(rename = "Car")]
    Vehicle,
    #[serde(rename = "Flower2")]
    Garden,
    #[serde(rename = "Brush")]
    Cleaning,
    #[serde(rename = "Droplets")]
    Water,
    #[serde(rename = "Home")]
    General,
    #[serde(rename = "ShoppingBag")]
    Shopping,
}

impl ChoreIcon {
    /// All icons in picker order.
    pub const ALL: [ChoreIcon; 8] = [
        ChoreIcon::Kitchen,
        ChoreIcon::Laundry,
        ChoreIcon::Vehicle,
        ChoreIcon::Garden,
        ChoreIcon::Cleaning,
        ChoreIcon::Water,
        ChoreIcon::General,
        ChoreIcon::Shopping,
    ];

    /// Identifier stored by the external schema.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Kitchen => "Utensils",
            Self::Laundry => "Shirt",
            Self::Vehicle => "Car",
            Self::Garden => "Flower2",
            Self::Cleaning => "Brush",
            Self::Water => "Droplets",
            Self::General => "Home",
            Self::Shopping => "ShoppingBag",
        }
    }

    /// Human-readable category label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Kitchen => "Kitchen",
            Self::Laundry => "Laundry",
            Self::Vehicle => "Vehicle",
            Self::Garden => "Garden",
            Self::Cleaning => "Cleaning",
            Self::Water => "Water",
            Self::General => "General",
            Self::Shopping => "Shopping",
        }
    }

    /// Parses a stored identifier, returning `None` for unknown values.
    pub fn from_wire_name(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|icon| icon.wire_name() == value)
    }
}

impl Default for ChoreIcon {
    fn default() -> Self {
        Self::General
    }
}

/// Validation error raised before a chore write is committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoreValidationError {
    /// `title` is empty or whitespace-only.
    EmptyTitle,
    /// `due_date` is missing on a chore that is not a today-item.
    MissingDueDate,
}

impl Display for ChoreValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "chore title must not be empty"),
            Self::MissingDueDate => {
                write!(f, "chore without is_today requires a due date")
            }
        }
    }
}

impl Error for ChoreValidationError {}

/// Chore record as persisted by the hosted sync service.
///
/// The serde shape matches the external entity: camelCase field names with
/// the historical `user_id` exception.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chore {
    /// Stable record id.
    pub id: ChoreId,
    /// Owning account id.
    #[serde(rename = "user_id")]
    pub user_id: String,
    pub title: String,
    pub icon: ChoreIcon,
    /// True for "do today" items with no specific calendar date.
    pub is_today: bool,
    /// Calendar date; required when `is_today` is false.
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Time-of-day in `HH:MM` form; absent records fall back to `00:00`.
    #[serde(default, with = "hhmm")]
    pub due_time: Option<NaiveTime>,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Chore {
    /// Creates a chore owned by `user_id`, created at `created_at`.
    ///
    /// The caller supplies the creation instant so that record construction
    /// stays clock-free and testable.
    pub fn new(
        user_id: impl Into<String>,
        title: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            title: title.into(),
            icon: ChoreIcon::default(),
            is_today: true,
            due_date: None,
            due_time: None,
            is_completed: false,
            created_at,
        }
    }

    /// Checks write-time invariants.
    pub fn validate(&self) -> Result<(), ChoreValidationError> {
        if self.title.trim().is_empty() {
            return Err(ChoreValidationError::EmptyTitle);
        }
        if !self.is_today && self.due_date.is_none() {
            return Err(ChoreValidationError::MissingDueDate);
        }
        Ok(())
    }

    /// The single point in time used for sorting and overdue comparison.
    ///
    /// Today-items compare against `created_at`. Dated items combine
    /// `due_date` with `due_time` (missing time means `00:00`, interpreted
    /// in the same wall-clock frame as `created_at`). A dated record that
    /// lost its `due_date` degrades to `created_at` instead of failing.
    pub fn effective_due_instant(&self) -> DateTime<Utc> {
        if self.is_today {
            return self.created_at;
        }
        match self.due_date {
            Some(date) => {
                let time = self.due_time.unwrap_or(NaiveTime::MIN);
                date.and_time(time).and_utc()
            }
            None => self.created_at,
        }
    }
}

/// Serde adapter for the `HH:MM` wire form of `due_time`.
///
/// Accepts `HH:MM:SS` on read for records written before the seconds were
/// dropped from the picker.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(time) => serializer.serialize_str(&time.format("%H:%M").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                NaiveTime::parse_from_str(trimmed, "%H:%M")
                    .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
                    .map(Some)
                    .map_err(|_| {
                        de::Error::custom(format!("invalid due_time value `{trimmed}`"))
                    })
            }
        }
    }
}
