#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use ghostpress_domain::PublishConfig;
use ghostpress_infra::{GhostAdminClient, HttpClient};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockBuilder};

pub const KEY_ID: &str = "64f0c0ffee0000000000abcd";
pub const SECRET_HEX: &str = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";
pub const POSTS_PATH: &str = "/ghost/api/v4/admin/posts/";

pub fn admin_key() -> String {
    format!("{KEY_ID}:{SECRET_HEX}")
}

/// Config pointing at a mock server.
pub fn config_for(uri: &str) -> PublishConfig {
    PublishConfig::new(uri, admin_key())
}

/// Client that talks to the local mock server directly, ignoring any proxy
/// configured in the environment.
pub fn client() -> GhostAdminClient {
    GhostAdminClient::with_http_client(HttpClient::builder().no_proxy().build().unwrap())
}

/// Matcher for the create-post request.
pub fn create_post() -> MockBuilder {
    Mock::given(method("POST")).and(path(POSTS_PATH)).and(query_param("source", "html"))
}

/// Install a test subscriber once so `tracing` output shows up under `--nocapture`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// In-memory log sink for a scoped `tracing` subscriber.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Subscriber writing `directives` (an `EnvFilter` string) into this buffer.
    pub fn subscriber(&self, directives: &str) -> impl tracing::Subscriber + Send + Sync {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(directives))
            .with_writer(self.clone())
            .with_ansi(false)
            .finish()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
