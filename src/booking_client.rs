use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{error, info};
use std::sync::Arc;

use crate::booking::BookingRequest;
use crate::config::BookingConfig;
use crate::error::BookingError;

/// Creates appointments on the booking backend.
#[async_trait]
pub trait BookingBackend: Send + Sync {
    async fn book_appointment(&self, request: &BookingRequest) -> Result<(), BookingError>;
}

/// Backend that POSTs the request as JSON to a fixed endpoint.
///
/// One attempt per call, no retries, transport default timeouts.
pub struct HttpBookingClient {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpBookingClient {
    pub fn new(config: &BookingConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl BookingBackend for HttpBookingClient {
    async fn book_appointment(&self, request: &BookingRequest) -> Result<(), BookingError> {
        info!(
            "Booking slot {} for {} ({})",
            request.time_slot_id,
            request.name,
            request.service_type.as_str()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            info!("Slot {} booked ({})", request.time_slot_id, status);
            return Ok(());
        }

        // Only used for diagnostics
        let body = response.text().await.unwrap_or_default();
        error!("Booking endpoint returned {}: {}", status, body);
        Err(BookingError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

/// Sends one request in its own task so it finishes even if the waiting
/// side is dropped.
pub async fn run_booking(
    backend: Arc<dyn BookingBackend>,
    request: BookingRequest,
) -> Result<(), BookingError> {
    tokio::spawn(async move { backend.book_appointment(&request).await })
        .await
        .unwrap_or_else(|e| Err(BookingError::Interrupted(e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::tests::asha;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};
    use std::sync::Mutex;

    type Received = Arc<Mutex<Vec<Value>>>;

    async fn spawn_backend(status: StatusCode) -> (BookingConfig, Received) {
        let received: Received = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new().route(
            "/api/book_appointment/",
            post({
                let received = received.clone();
                move |Json(body): Json<Value>| {
                    let received = received.clone();
                    async move {
                        received.lock().unwrap().push(body);
                        (status, "slot already booked")
                    }
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let config = BookingConfig {
            endpoint: format!("http://{addr}/api/book_appointment/"),
            ..BookingConfig::default()
        };
        (config, received)
    }

    #[tokio::test]
    async fn posts_one_json_body_per_booking() {
        let (config, received) = spawn_backend(StatusCode::CREATED).await;
        let client = HttpBookingClient::new(&config).unwrap();
        let request = asha().to_request(Some("slot-42")).unwrap();

        tokio_test::assert_ok!(client.book_appointment(&request).await);

        let received = received.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(
            received[0],
            json!({
                "name": "Asha",
                "email": "a@x.com",
                "phone": "+911234567890",
                "query": "interested in 2BHK",
                "time_slot_id": "slot-42",
                "service_type": "buy",
                "location": "Gurgaon",
            })
        );
    }

    #[tokio::test]
    async fn non_success_status_is_rejected_with_body() {
        let (config, received) = spawn_backend(StatusCode::CONFLICT).await;
        let client = HttpBookingClient::new(&config).unwrap();
        let request = asha().to_request(Some("slot-42")).unwrap();

        let err = client.book_appointment(&request).await.unwrap_err();
        match err {
            BookingError::Rejected { status, body } => {
                assert_eq!(status, 409);
                assert_eq!(body, "slot already booked");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(received.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = BookingConfig {
            endpoint: format!("http://{addr}/api/book_appointment/"),
            ..BookingConfig::default()
        };
        let client = HttpBookingClient::new(&config).unwrap();
        let request = asha().to_request(Some("slot-42")).unwrap();

        let err = client.book_appointment(&request).await.unwrap_err();
        assert!(matches!(err, BookingError::Network(_)));
    }

    struct PanickingBackend;

    #[async_trait]
    impl BookingBackend for PanickingBackend {
        async fn book_appointment(&self, _request: &BookingRequest) -> Result<(), BookingError> {
            panic!("backend crashed");
        }
    }

    #[tokio::test]
    async fn crashed_request_task_is_interrupted() {
        let request = asha().to_request(Some("slot-42")).unwrap();
        let err = run_booking(Arc::new(PanickingBackend), request).await.unwrap_err();
        assert!(matches!(err, BookingError::Interrupted(_)));
    }

    #[tokio::test]
    async fn run_booking_passes_through_the_backend_result() {
        let (config, received) = spawn_backend(StatusCode::OK).await;
        let client = HttpBookingClient::new(&config).unwrap();
        let request = asha().to_request(Some("slot-42")).unwrap();

        tokio_test::assert_ok!(run_booking(Arc::new(client), request).await);
        assert_eq!(received.lock().unwrap().len(), 1);
    }
}
