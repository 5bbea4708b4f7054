//! Daemon client for Docker-compatible API communication.
//!
//! Provides an HTTP client for talking to a container daemon via Unix
//! socket. Each request opens a short-lived HTTP/1 connection; the daemon
//! keeps no per-client session state.

use anyhow::{Context, Result};
use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper::{Method, Request};
use hyper_util::rt::TokioIo;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tokio::net::UnixStream;

/// Default socket path for the container daemon.
pub const DEFAULT_SOCKET_PATH: &str = "/var/run/docker.sock";

/// Engine API version prefix used on all versioned endpoints.
const API_VERSION: &str = "v1.43";

/// Client for a Docker-compatible daemon API.
#[derive(Debug)]
pub struct DaemonClient {
    socket_path: PathBuf,
}

impl DaemonClient {
    /// Creates a new daemon client, resolving the socket path from the
    /// environment (`DOCKMATE_SOCKET`, then `DOCKER_HOST`, then the
    /// default path).
    pub fn new() -> Self {
        Self {
            socket_path: resolve_socket_path(),
        }
    }

    /// Creates a new daemon client with a custom socket path.
    pub fn with_socket(path: impl AsRef<Path>) -> Self {
        Self {
            socket_path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the socket path.
    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    /// Checks if the daemon is reachable.
    pub async fn is_running(&self) -> bool {
        self.ping().await.is_ok()
    }

    /// Pings the daemon.
    pub async fn ping(&self) -> Result<()> {
        self.request(Method::GET, "/_ping").await?;
        Ok(())
    }

    /// Lists containers. With `all` set, stopped containers are included.
    pub async fn list_containers(&self, all: bool) -> Result<Vec<ContainerSummary>> {
        self.get(&format!("/{API_VERSION}/containers/json?all={all}"))
            .await
    }

    /// Lists images. With `all` set, intermediate layers are included.
    pub async fn list_images(&self, all: bool) -> Result<Vec<ImageSummary>> {
        self.get(&format!("/{API_VERSION}/images/json?all={all}"))
            .await
    }

    /// Requests a graceful stop of a container.
    ///
    /// No timeout parameter is sent; the daemon's default grace period
    /// applies.
    pub async fn stop_container(&self, container: &str) -> Result<()> {
        self.post_empty(&format!("/{API_VERSION}/containers/{container}/stop"))
            .await
    }

    /// Starts a stopped container.
    pub async fn start_container(&self, container: &str) -> Result<()> {
        self.post_empty(&format!("/{API_VERSION}/containers/{container}/start"))
            .await
    }

    /// Removes a container.
    pub async fn remove_container(&self, container: &str) -> Result<()> {
        self.delete(&format!("/{API_VERSION}/containers/{container}"))
            .await
    }

    /// Removes an image by ID or reference.
    pub async fn remove_image(&self, image: &str) -> Result<()> {
        let encoded = url_encode_image_ref(image);
        self.delete(&format!("/{API_VERSION}/images/{encoded}")).await
    }

    /// Performs a GET request and parses the JSON response.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self.request(Method::GET, path).await?;
        serde_json::from_slice(&body).context("failed to parse response")
    }

    /// Performs a POST request without a body.
    async fn post_empty(&self, path: &str) -> Result<()> {
        self.request(Method::POST, path).await?;
        Ok(())
    }

    /// Performs a DELETE request.
    async fn delete(&self, path: &str) -> Result<()> {
        self.request(Method::DELETE, path).await?;
        Ok(())
    }

    /// Performs an HTTP request to the daemon.
    async fn request(&self, method: Method, path: &str) -> Result<Bytes> {
        // Connect to Unix socket
        let stream = UnixStream::connect(&self.socket_path)
            .await
            .with_context(|| {
                format!(
                    "failed to connect to daemon at {}",
                    self.socket_path.display()
                )
            })?;

        let io = TokioIo::new(stream);

        // Create HTTP connection
        let (mut sender, conn) = hyper::client::conn::http1::handshake(io)
            .await
            .context("HTTP handshake failed")?;

        // Spawn connection handler
        tokio::spawn(async move {
            if let Err(e) = conn.await {
                tracing::debug!("Connection closed: {}", e);
            }
        });

        // Build request
        let request = Request::builder()
            .method(method)
            .uri(format!("http://localhost{}", path))
            .header("Host", "localhost")
            .body(Empty::<Bytes>::new())
            .context("failed to build request")?;

        // Send request
        let response = sender
            .send_request(request)
            .await
            .context("failed to send request")?;

        let status = response.status();

        // Read response body
        let body = response
            .into_body()
            .collect()
            .await
            .context("failed to read response")?
            .to_bytes();

        // Check status
        if !status.is_success() {
            let error_msg = String::from_utf8_lossy(&body);
            anyhow::bail!("daemon returned error {}: {}", status, error_msg.trim());
        }

        Ok(body)
    }
}

impl Default for DaemonClient {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Docker API Types
// =============================================================================

/// Container summary from list containers.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerSummary {
    pub id: String,
    #[serde(default)]
    pub names: Vec<String>,
    pub image: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub status: String,
}

/// Image summary from list images.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageSummary {
    pub id: String,
    #[serde(default)]
    pub repo_tags: Vec<String>,
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Connects to the daemon, verifying it is reachable before handing the
/// client to the caller.
pub async fn connect(socket: Option<PathBuf>) -> Result<DaemonClient> {
    let client = match socket {
        Some(path) => DaemonClient::with_socket(path),
        None => DaemonClient::new(),
    };

    client.ping().await.with_context(|| {
        format!(
            "cannot connect to container daemon at {}\n\
             Is the daemon running?",
            client.socket_path().display()
        )
    })?;

    Ok(client)
}

/// Resolves the daemon socket path from the environment.
fn resolve_socket_path() -> PathBuf {
    if let Ok(socket) = std::env::var("DOCKMATE_SOCKET") {
        if !socket.is_empty() {
            return PathBuf::from(socket);
        }
    }

    if let Ok(host) = std::env::var("DOCKER_HOST") {
        if let Some(path) = host.strip_prefix("unix://") {
            return PathBuf::from(path);
        }
    }

    PathBuf::from(DEFAULT_SOCKET_PATH)
}

/// Formats an ID for display (first 12 characters, sha256: prefix stripped).
pub fn short_id(id: &str) -> &str {
    let s = id.strip_prefix("sha256:").unwrap_or(id);
    if s.len() > 12 {
        &s[..12]
    } else {
        s
    }
}

/// Percent-encodes an image reference for use in a URL path.
///
/// References can contain `/` and `:` (registry/repo:tag), which would
/// otherwise be taken as path structure.
fn url_encode_image_ref(image: &str) -> String {
    image
        .replace('%', "%25")
        .replace('/', "%2F")
        .replace(':', "%3A")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("abc123def456789"), "abc123def456");
        assert_eq!(short_id("short"), "short");
        assert_eq!(short_id("sha256:abc123def456789"), "abc123def456");
    }

    #[test]
    fn test_url_encode_image_ref() {
        assert_eq!(url_encode_image_ref("alpine"), "alpine");
        assert_eq!(
            url_encode_image_ref("registry.io/team/app:1.2"),
            "registry.io%2Fteam%2Fapp%3A1.2"
        );
        assert_eq!(url_encode_image_ref("a%b"), "a%25b");
    }

    #[test]
    fn test_with_socket() {
        let client = DaemonClient::with_socket("/tmp/test.sock");
        assert_eq!(client.socket_path(), Path::new("/tmp/test.sock"));
    }
}
