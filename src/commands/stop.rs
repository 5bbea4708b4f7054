//! Stop container operation.

use std::io::{self, Write};

use crate::client::DaemonClient;

/// Requests a graceful stop of a container.
pub async fn execute<W: Write>(
    daemon: &DaemonClient,
    container: &str,
    out: &mut W,
) -> io::Result<()> {
    match daemon.stop_container(container).await {
        Ok(()) => writeln!(out, "Stopped container {container} successfuly"),
        Err(e) => {
            writeln!(out, "Error stopping container {container}")?;
            writeln!(out, "Error: {e:#}")
        }
    }
}
