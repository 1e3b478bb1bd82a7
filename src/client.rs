use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

use crate::data::{DoctorRecord, DoctorsEnvelopeJson};

/// Default backend location, matching the original deployment
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// The one message shown to the user for any fetch failure; the
/// underlying cause is only logged.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch doctor availability. Please try again.";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to initialize HTTP client: {0}")]
    ClientInit(#[from] reqwest::Error),

    #[error("Request to {0} failed: {1}")]
    RequestFailed(String, reqwest::Error),

    #[error("Request to {0} failed: HTTP status {1}")]
    InvalidStatusCode(String, StatusCode),

    #[error("Malformed availability response: {0}")]
    MalformedResponse(String),
}

/// Client for the doctor-availability prediction backend.
///
/// One request per `fetch_availability` call: no caching, no retry,
/// no backoff. The time value is forwarded verbatim as the `time`
/// query parameter.
pub struct AvailabilityClient {
    client: Client,
    base_url: String,
    limit: Option<u32>,
}

impl AvailabilityClient {
    pub fn new(base_url: &str, timeout: Duration, limit: Option<u32>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(10)))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            limit,
        })
    }

    /// Fetch the doctors predicted to be available at the given time.
    /// Returns the records in backend order.
    pub async fn fetch_availability(&self, time: &str) -> Result<Vec<DoctorRecord>, FetchError> {
        let url = format!("{}/get_doctors", self.base_url);

        let mut request = self.client.get(&url).query(&[("time", time)]);
        if let Some(limit) = self.limit {
            request = request.query(&[("limit", &limit.to_string())]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::RequestFailed(url.clone(), e))?;

        if !response.status().is_success() {
            return Err(FetchError::InvalidStatusCode(url, response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::RequestFailed(url, e))?;

        parse_response(&body)
    }

    /// Probe the backend's `/health` endpoint. Used for diagnostics
    /// only; a failed probe never blocks a query.
    pub async fn health(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!("Health probe failed: {}", e);
                false
            }
        }
    }
}

/// Parse a `/get_doctors` response body into domain records.
///
/// A body that is not JSON, lacks the `doctors` field, or holds records
/// with unusable field types is a `MalformedResponse` - surfaced like
/// any other fetch failure rather than crashing the view.
pub fn parse_response(body: &str) -> Result<Vec<DoctorRecord>, FetchError> {
    let envelope: DoctorsEnvelopeJson =
        serde_json::from_str(body).map_err(|e| FetchError::MalformedResponse(e.to_string()))?;

    if let Some(message) = &envelope.message {
        debug!("Backend message: {}", message);
    }

    Ok(envelope.doctors.into_iter().map(DoctorRecord::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn doctors_body() -> serde_json::Value {
        json!({
            "message": "Doctors found.",
            "doctors": [
                {
                    "NPI": "1111111111",
                    "login_hour": "08",
                    "logout_hour": "16",
                    "session_duration": 480.0,
                    "Count of Survey Attempts": 5,
                    "prediction_prob": 0.85
                },
                {
                    "NPI": "2222222222",
                    "login_hour": "10",
                    "logout_hour": "14",
                    "session_duration": 240.7,
                    "Count of Survey Attempts": 2
                }
            ]
        })
    }

    fn test_client(base_url: &str) -> AvailabilityClient {
        AvailabilityClient::new(base_url, Duration::from_secs(5), None).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_returns_mapped_records_in_order() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/get_doctors"))
            .and(query_param("time", "09:00"))
            .respond_with(ResponseTemplate::new(200).set_body_json(doctors_body()))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let records = client.fetch_availability("09:00").await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "1111111111");
        assert_eq!(records[0].match_probability, Some(0.85));
        assert_eq!(records[1].id, "2222222222");
        assert_eq!(records[1].match_probability, None);
        assert_eq!(records[1].session_duration_minutes, 240.7);
    }

    #[tokio::test]
    async fn test_fetch_forwards_time_verbatim() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/get_doctors"))
            .and(query_param("time", "12:00"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"doctors": []})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let records = client.fetch_availability("12:00").await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_forwards_limit_when_configured() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/get_doctors"))
            .and(query_param("time", "15:00"))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"doctors": []})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client =
            AvailabilityClient::new(&mock_server.uri(), Duration::from_secs(5), Some(5)).unwrap();
        client.fetch_availability("15:00").await.unwrap();
    }

    #[tokio::test]
    async fn test_fetch_handles_http_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/get_doctors"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let result = client.fetch_availability("09:00").await;

        assert!(matches!(result, Err(FetchError::InvalidStatusCode(_, _))));
    }

    #[tokio::test]
    async fn test_fetch_handles_transport_error() {
        // Nothing is listening here
        let client = test_client("http://127.0.0.1:1");
        let result = client.fetch_availability("09:00").await;

        assert!(matches!(result, Err(FetchError::RequestFailed(_, _))));
    }

    #[tokio::test]
    async fn test_missing_doctors_field_is_malformed() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/get_doctors"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let result = client.fetch_availability("09:00").await;

        assert!(matches!(result, Err(FetchError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_non_json_body_is_malformed() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/get_doctors"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let result = client.fetch_availability("09:00").await;

        assert!(matches!(result, Err(FetchError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_health_probe() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "healthy"})))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        assert!(client.health().await);

        let down = test_client("http://127.0.0.1:1");
        assert!(!down.health().await);
    }
}
