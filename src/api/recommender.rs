use crate::api::models::*;
use crate::config::ClientConfig;
use crate::error::RequestError;
use once_cell::sync::Lazy;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Client for the remote recommendation service.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendClient {
    pub endpoint: String,
}

impl RecommendClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            endpoint: config.endpoint_url(),
        }
    }

    /// Sends one request and waits for it to finish. No timeout, no retry.
    pub async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationResponse, RequestError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            songs = request.songs.len(),
            mode = request.mode.as_str(),
            "Sending recommendation request"
        );

        let response = HTTP_CLIENT
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Recommendation request failed");
                RequestError::Transport
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            tracing::error!(status, error = %e, "Could not read recommendation response");
            RequestError::Transport
        })?;

        interpret_response(status, &body)
    }
}

/// Maps a status code and raw body onto the typed payload or a `RequestError`.
pub fn interpret_response(status: u16, body: &str) -> Result<RecommendationResponse, RequestError> {
    if (200..300).contains(&status) {
        return serde_json::from_str::<RecommendationResponse>(body).map_err(|e| {
            tracing::error!(status, error = %e, "Malformed recommendation payload");
            RequestError::Transport
        });
    }

    // The body is read before the status is checked, so a body that is not
    // JSON at all is a transport failure rather than a rejection.
    let error_body = serde_json::from_str::<serde_json::Value>(body).map_err(|e| {
        tracing::error!(status, error = %e, "Malformed error payload");
        RequestError::Transport
    })?;
    tracing::warn!(
        status,
        error_code = ?error_body.get("error_code"),
        "Recommendation service rejected the request"
    );

    match error_body.get("error").and_then(|error| error.as_str()) {
        Some(message) if !message.is_empty() => Err(RequestError::Server(message.to_string())),
        _ => Err(RequestError::Rejected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_is_decoded() {
        let body = r#"{"quick":{"success":true,"data":[{"name":"Song A","year":2000,"artists":["X","Y"]}]}}"#;
        let response = interpret_response(200, body).unwrap();
        let quick = response.quick.unwrap();
        assert!(quick.success);
        assert_eq!(quick.data.len(), 1);
        assert_eq!(quick.data[0].artists.display(), "X, Y");
        assert!(response.advanced.is_none());
    }

    #[test]
    fn server_message_is_used_verbatim() {
        let body = r#"{"success":false,"error":"No songs provided","error_code":400}"#;
        assert_eq!(
            interpret_response(400, body),
            Err(RequestError::Server("No songs provided".to_string()))
        );
    }

    #[test]
    fn missing_server_message_falls_back() {
        let err = interpret_response(500, "{}").unwrap_err();
        assert_eq!(err, RequestError::Rejected);
        assert_eq!(err.to_string(), "Failed to get recommendations");
    }

    #[test]
    fn unusual_error_codes_keep_the_server_message() {
        for body in [
            r#"{"error":"Dataset missing","error_code":"E_DATA"}"#,
            r#"{"error":"Dataset missing","error_code":-1}"#,
            r#"{"error":"Dataset missing","error_code":70000}"#,
        ] {
            assert_eq!(
                interpret_response(500, body),
                Err(RequestError::Server("Dataset missing".to_string())),
                "{body}"
            );
        }
    }

    #[test]
    fn json_error_bodies_without_a_message_are_rejections() {
        for body in ["[]", r#""oops""#, "null", r#"{"error":""}"#, r#"{"error":42}"#] {
            assert_eq!(
                interpret_response(503, body),
                Err(RequestError::Rejected),
                "{body}"
            );
        }
    }

    #[test]
    fn malformed_bodies_are_transport_failures() {
        let err = interpret_response(200, "<html>").unwrap_err();
        assert_eq!(
            err.to_string(),
            "An error occurred while fetching recommendations"
        );
        assert_eq!(
            interpret_response(502, "Bad Gateway"),
            Err(RequestError::Transport)
        );
    }
}
