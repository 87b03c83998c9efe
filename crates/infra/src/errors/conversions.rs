//! Conversions from external errors into adapter and domain errors.

use ghostpress_domain::GhostPressError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;

use super::PublishError;

/* -------------------------------------------------------------------------- */
/* reqwest::Error → PublishError */
/* -------------------------------------------------------------------------- */

/// Error class name for a reqwest failure.
pub fn http_error_name(err: &HttpError) -> &'static str {
    if err.is_timeout() {
        return "TimeoutError";
    }

    #[cfg(not(target_arch = "wasm32"))]
    if err.is_connect() {
        return "ConnectError";
    }

    if err.is_decode() {
        "DecodeError"
    } else if err.is_body() {
        "BodyError"
    } else if err.is_builder() {
        "BuilderError"
    } else if err.is_request() {
        "RequestError"
    } else {
        "HttpError"
    }
}

impl From<HttpError> for PublishError {
    fn from(err: HttpError) -> Self {
        PublishError::transport(http_error_name(&err), err.to_string())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → PublishError */
/* -------------------------------------------------------------------------- */

impl From<JsonError> for PublishError {
    fn from(err: JsonError) -> Self {
        let name = match err.classify() {
            serde_json::error::Category::Io => "IoError",
            serde_json::error::Category::Syntax | serde_json::error::Category::Eof => {
                "JsonParseError"
            }
            serde_json::error::Category::Data => "JsonDataError",
        };
        PublishError::transport(name, err.to_string())
    }
}

/* -------------------------------------------------------------------------- */
/* PublishError → GhostPressError */
/* -------------------------------------------------------------------------- */

impl From<PublishError> for GhostPressError {
    fn from(err: PublishError) -> Self {
        match err {
            PublishError::Auth(auth) => auth.into(),
            PublishError::Transport { name, message } => {
                GhostPressError::Network(format!("{name}: {message}"))
            }
            PublishError::Config(message) => GhostPressError::Config(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;
    use std::time::Duration;

    use ghostpress_core::AuthError;
    use reqwest::Client;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[test]
    fn invalid_json_maps_to_parse_error() {
        let err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        match PublishError::from(err) {
            PublishError::Transport { name, .. } => assert_eq!(name, "JsonParseError"),
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    #[test]
    fn truncated_json_maps_to_parse_error() {
        let err = serde_json::from_str::<serde_json::Value>("{\"posts\": [").unwrap_err();
        assert!(matches!(
            PublishError::from(err),
            PublishError::Transport { ref name, .. } if name == "JsonParseError"
        ));
    }

    #[test]
    fn domain_mapping() {
        let auth: GhostPressError = PublishError::from(AuthError::InvalidKeyFormat).into();
        assert!(matches!(auth, GhostPressError::Auth(_)));

        let network: GhostPressError = PublishError::transport("ConnectError", "refused").into();
        match network {
            GhostPressError::Network(msg) => assert_eq!(msg, "ConnectError: refused"),
            other => panic!("expected network error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn connection_refused_maps_to_connect_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = Client::builder().no_proxy().build().unwrap();
        let err = client.get(format!("http://{addr}")).send().await.unwrap_err();

        assert_eq!(http_error_name(&err), "ConnectError");
    }

    #[tokio::test]
    async fn slow_server_maps_to_timeout_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let client =
            Client::builder().no_proxy().timeout(Duration::from_millis(50)).build().unwrap();
        let err = client.get(server.uri()).send().await.unwrap_err();

        assert_eq!(http_error_name(&err), "TimeoutError");
    }
}
