use uuid::Uuid;

use calendar_cell::models::TimeWindow;
use shared_cache::QueryKey;

use crate::models::SlotFilters;

pub const AVAILABILITY_SCOPE: &str = "availability";

/// Every cached query for one practitioner's calendar lives under this key,
/// so invalidating it never evicts another practitioner's data.
pub fn practitioner(practitioner_id: Uuid) -> QueryKey {
    QueryKey::scope(AVAILABILITY_SCOPE).id(practitioner_id)
}

/// Slot listing for one practitioner over one absolute window, with whatever
/// filters the view applied. Same inputs always derive the same key; any
/// differing filter value derives a different one.
pub fn slots(practitioner_id: Uuid, window: &TimeWindow, filters: &SlotFilters) -> QueryKey {
    practitioner(practitioner_id)
        .text(window.start.to_rfc3339())
        .text(window.end.to_rfc3339())
        .maybe_params(filters.as_params().as_ref())
}
