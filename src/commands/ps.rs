//! Ps (list containers) operation.

use std::io::{self, Write};

use crate::client::{short_id, DaemonClient};

/// Lists all containers, including stopped ones.
pub async fn execute<W: Write>(daemon: &DaemonClient, out: &mut W) -> io::Result<()> {
    let containers = match daemon.list_containers(true).await {
        Ok(containers) => containers,
        Err(e) => {
            tracing::debug!("container listing failed: {e:#}");
            writeln!(out, "Error looking for containers")?;
            return Ok(());
        }
    };

    if containers.is_empty() {
        writeln!(out, "There are no containers running!")?;
        return Ok(());
    }

    for container in &containers {
        writeln!(
            out,
            "{} {} (status: {})",
            short_id(&container.id),
            container.image,
            container.status
        )?;
    }

    Ok(())
}
