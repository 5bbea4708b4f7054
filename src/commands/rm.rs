//! Rm (remove container) operation.

use std::io::{self, Write};

use crate::client::DaemonClient;

/// Removes a container.
pub async fn execute<W: Write>(
    daemon: &DaemonClient,
    container: &str,
    out: &mut W,
) -> io::Result<()> {
    match daemon.remove_container(container).await {
        Ok(()) => writeln!(out, "Container {container} removed successfuly"),
        Err(e) => {
            writeln!(out, "Error removing container {container}")?;
            writeln!(out, "Error: {e:#}")
        }
    }
}
