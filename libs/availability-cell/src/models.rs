use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A bookable interval as the backend publishes it. The client holds read-only
/// cached copies; any mutation happens server-side and reaches us through
/// invalidation and refetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: SlotStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub practitioner_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Available,
    Booked,
    Blocked,
}

/// Optional narrowing applied to a slot query. Every set field becomes part of
/// the request and of the cache key; unset fields leave both untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlotFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl SlotFilters {
    pub fn is_empty(&self) -> bool {
        self.appointment_type.is_none()
            && self.duration_minutes.is_none()
            && self.search.is_none()
            && self.page.is_none()
    }

    /// Params segment for the cache key. `None` when nothing is set, so an
    /// absent filter object and an all-default one derive the same key.
    pub fn as_params(&self) -> Option<Value> {
        if self.is_empty() {
            None
        } else {
            serde_json::to_value(self).ok()
        }
    }
}

/// One fetched page of slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotPage {
    pub slots: Vec<AvailabilitySlot>,
    pub has_more: bool,
    /// Set when this empty page is a fetch-failure artifact rather than a true
    /// empty result. Failure pages are never cached.
    #[serde(skip)]
    pub fetch_failed: bool,
}

impl SlotPage {
    pub fn empty() -> Self {
        Self {
            slots: Vec::new(),
            has_more: false,
            fetch_failed: false,
        }
    }

    pub fn failed() -> Self {
        Self {
            fetch_failed: true,
            ..Self::empty()
        }
    }
}

/// Presentation-ready reduction of a slot for the booking picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotOption {
    pub value: String,
    pub label: String,
}
