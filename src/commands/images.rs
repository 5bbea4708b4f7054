//! Images (list) and rmi (remove image) operations.

use std::io::{self, Write};

use crate::client::{short_id, DaemonClient};

/// Lists all images, including intermediate layers.
pub async fn execute<W: Write>(daemon: &DaemonClient, out: &mut W) -> io::Result<()> {
    let images = match daemon.list_images(true).await {
        Ok(images) => images,
        Err(e) => {
            tracing::debug!("image listing failed: {e:#}");
            writeln!(out, "Error looking for images")?;
            return Ok(());
        }
    };

    if images.is_empty() {
        writeln!(out, "There are no images in this machine!")?;
        return Ok(());
    }

    for image in &images {
        let tags = if image.repo_tags.is_empty() {
            "<none>".to_string()
        } else {
            image.repo_tags.join(", ")
        };
        writeln!(out, "ID {} with tags {}", short_id(&image.id), tags)?;
    }

    Ok(())
}

/// Removes an image by ID or reference.
pub async fn execute_rmi<W: Write>(
    daemon: &DaemonClient,
    image: &str,
    out: &mut W,
) -> io::Result<()> {
    match daemon.remove_image(image).await {
        Ok(()) => writeln!(out, "Image {image} removed"),
        Err(e) => {
            writeln!(out, "Error removing image {image}")?;
            writeln!(out, "Error: {e:#}")
        }
    }
}
