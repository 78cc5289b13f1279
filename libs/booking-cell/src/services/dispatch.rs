use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;
use tracing::{debug, info, warn};

use availability_cell::keys as availability_keys;
use shared_api::ApiClient;
use shared_cache::QueryCache;
use shared_config::AppConfig;
use shared_models::error::SchedulingError;

use crate::keys;
use crate::models::{BookingRequest, BookingResult};

/// Submits slot-request mutations and keeps the query cache honest afterwards.
///
/// Stateless per call: concurrent identical payloads are not deduplicated
/// here. Preventing double-submission is the caller's job (disable the submit
/// control while a request is in flight).
pub struct BookingDispatcher {
    api: ApiClient,
    cache: Arc<QueryCache>,
}

impl BookingDispatcher {
    pub fn new(config: &AppConfig, cache: Arc<QueryCache>) -> Self {
        Self {
            api: ApiClient::new(config),
            cache,
        }
    }

    /// Public, unauthenticated variant used by the demo booking page.
    pub async fn submit_demo(
        &self,
        request: &BookingRequest,
    ) -> Result<BookingResult, SchedulingError> {
        self.dispatch("/rest/v1/booking_requests_demo", request, None).await
    }

    /// Authenticated variant. Same client-side semantics as `submit_demo`;
    /// only the endpoint differs.
    pub async fn submit(
        &self,
        request: &BookingRequest,
        auth_token: &str,
    ) -> Result<BookingResult, SchedulingError> {
        self.dispatch("/rest/v1/booking_requests", request, Some(auth_token)).await
    }

    async fn dispatch(
        &self,
        path: &str,
        request: &BookingRequest,
        auth_token: Option<&str>,
    ) -> Result<BookingResult, SchedulingError> {
        validate_request(request)?;
        debug!("Submitting booking request for slot {}", request.slot_id);

        let payload = serde_json::to_value(request)
            .map_err(|e| SchedulingError::Validation(format!("Unserializable booking request: {}", e)))?;

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            "Prefer",
            reqwest::header::HeaderValue::from_static("return=representation"),
        );

        let result: Vec<Value> = self
            .api
            .request_with_headers(Method::POST, path, auth_token, Some(payload), Some(headers))
            .await
            .map_err(|e| {
                warn!("Booking submission failed for slot {}: {}", request.slot_id, e);
                SchedulingError::Transport(e.to_string())
            })?;

        let Some(row) = result.first() else {
            return Err(SchedulingError::Transport(
                "Booking submission returned no representation".to_string(),
            ));
        };
        let booking: BookingResult = serde_json::from_value(row.clone())
            .map_err(|e| SchedulingError::Transport(format!("Failed to parse booking result: {}", e)))?;

        // Invalidation sequences strictly after the acknowledged success, so a
        // failed submission never evicts valid cached data.
        let mut touched = self.cache.invalidate(&keys::requester(&request.requester_contact)).await;
        if let Some(practitioner_id) = request.practitioner_id {
            touched += self
                .cache
                .invalidate(&availability_keys::practitioner(practitioner_id))
                .await;
        }

        info!(
            "Booking {} accepted for slot {}, invalidated {} cached queries",
            booking.id, booking.slot_id, touched
        );
        Ok(booking)
    }
}

fn validate_request(request: &BookingRequest) -> Result<(), SchedulingError> {
    let contact = request.requester_contact.trim();
    if contact.is_empty() {
        return Err(SchedulingError::Validation(
            "Requester contact must not be empty".to_string(),
        ));
    }
    if !contact.contains('@') {
        return Err(SchedulingError::Validation(format!(
            "Requester contact '{}' is not an email address",
            contact
        )));
    }

    Ok(())
}
