use std::sync::Arc;

use reqwest::Method;
use tracing::{debug, warn};
use uuid::Uuid;

use calendar_cell::models::TimeWindow;
use shared_api::ApiClient;
use shared_cache::QueryCache;
use shared_config::AppConfig;
use shared_models::actor::{Actor, ActorRole};

use crate::keys;
use crate::models::{AvailabilitySlot, SlotFilters, SlotPage};

const PAGE_SIZE: usize = 50;

/// Holds the practitioner's fetched slots (through the shared query cache) and
/// the booking actor's current selection.
pub struct SlotStore {
    api: ApiClient,
    cache: Arc<QueryCache>,
    selected: Option<AvailabilitySlot>,
}

impl SlotStore {
    pub fn new(config: &AppConfig, cache: Arc<QueryCache>) -> Self {
        Self {
            api: ApiClient::new(config),
            cache,
            selected: None,
        }
    }

    /// Which practitioner's calendar this actor may scope a view to.
    /// Practitioners always see their own; admins and clients see whichever
    /// calendar the view asked for.
    pub fn practitioner_scope(actor: &Actor, requested: Option<Uuid>) -> Option<Uuid> {
        match actor.role {
            ActorRole::Practitioner => actor.id.parse().ok(),
            ActorRole::Admin | ActorRole::Client => requested,
        }
    }

    /// Fetch one page of available slots for a practitioner over a window.
    ///
    /// With no practitioner chosen yet this resolves to an empty page without
    /// issuing a request. A transport failure is logged and collapsed to an
    /// empty page with `fetch_failed` set; failure pages are never cached, so
    /// the next call retries the backend.
    pub async fn fetch_slots(
        &self,
        practitioner_id: Option<Uuid>,
        window: &TimeWindow,
        filters: &SlotFilters,
        auth_token: Option<&str>,
    ) -> SlotPage {
        let Some(practitioner_id) = practitioner_id else {
            debug!("No practitioner selected, skipping slot fetch");
            return SlotPage::empty();
        };

        let key = keys::slots(practitioner_id, window, filters);
        if let Some(cached) = self.cache.get(&key).await {
            match serde_json::from_value::<SlotPage>(cached) {
                Ok(page) => {
                    debug!("Slot cache hit for {}", key);
                    return page;
                }
                Err(e) => warn!("Discarding undecodable cached slots for {}: {}", key, e),
            }
        }

        let path = self.slots_path(practitioner_id, window, filters);
        let result: Result<Vec<AvailabilitySlot>, _> =
            self.api.request(Method::GET, &path, auth_token, None).await;

        match result {
            Ok(slots) => {
                debug!("Fetched {} slots for practitioner {}", slots.len(), practitioner_id);
                let page = SlotPage {
                    has_more: slots.len() == PAGE_SIZE,
                    slots,
                    fetch_failed: false,
                };
                match serde_json::to_value(&page) {
                    Ok(snapshot) => self.cache.put(key, snapshot).await,
                    Err(e) => warn!("Failed to cache slot page for {}: {}", practitioner_id, e),
                }
                page
            }
            Err(e) => {
                warn!("Slot fetch failed for practitioner {}: {}", practitioner_id, e);
                SlotPage::failed()
            }
        }
    }

    fn slots_path(
        &self,
        practitioner_id: Uuid,
        window: &TimeWindow,
        filters: &SlotFilters,
    ) -> String {
        let mut path = format!(
            "/rest/v1/availability_slots?practitioner_id=eq.{}&start_time=gte.{}&end_time=lte.{}&order=start_time.asc",
            practitioner_id,
            urlencoding::encode(&window.start.to_rfc3339()),
            urlencoding::encode(&window.end.to_rfc3339()),
        );

        if let Some(ref appointment_type) = filters.appointment_type {
            path.push_str(&format!(
                "&appointment_type=eq.{}",
                urlencoding::encode(appointment_type)
            ));
        }
        if let Some(duration) = filters.duration_minutes {
            path.push_str(&format!("&duration_minutes=eq.{}", duration));
        }
        if let Some(ref search) = filters.search {
            path.push_str(&format!(
                "&practitioner_name=ilike.*{}*",
                urlencoding::encode(search)
            ));
        }

        let page = filters.page.unwrap_or(0) as usize;
        path.push_str(&format!("&limit={}&offset={}", PAGE_SIZE, page * PAGE_SIZE));

        path
    }

    /// Replace any prior selection with `slot`. At most one slot is selected
    /// at a time.
    pub fn select_slot(&mut self, slot: AvailabilitySlot) {
        debug!("Selected slot {}", slot.id);
        self.selected = Some(slot);
    }

    /// Drop the current selection, e.g. on booking success or cancel.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_slot(&self) -> Option<&AvailabilitySlot> {
        self.selected.as_ref()
    }
}
