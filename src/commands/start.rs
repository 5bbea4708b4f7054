//! Start container operation.

use std::io::{self, Write};

use crate::client::DaemonClient;

/// Starts a stopped container.
pub async fn execute<W: Write>(
    daemon: &DaemonClient,
    container: &str,
    out: &mut W,
) -> io::Result<()> {
    match daemon.start_container(container).await {
        Ok(()) => writeln!(out, "Started container {container} successfuly"),
        Err(e) => {
            writeln!(out, "Error starting container {container}")?;
            writeln!(out, "Error: {e:#}")
        }
    }
}
