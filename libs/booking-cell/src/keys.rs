use shared_cache::QueryKey;

pub const BOOKING_SCOPE: &str = "booking";

/// Every cached query scoped to one requester's identity. Invalidated as a
/// whole after that requester books, so no view keeps serving their stale
/// appointment data. Contact is normalized so casing differences in the form
/// never split the scope.
pub fn requester(contact: &str) -> QueryKey {
    QueryKey::scope(BOOKING_SCOPE).text(contact.trim().to_lowercase())
}
