//! Route map output for the static-export driver.

use crate::domain::entities::RouteMap;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::io::AsyncWriteExt;

/// Serializes a route map as a JSON object in route order.
///
/// The output ends with a newline; identical maps give identical bytes.
pub fn render_route_map(route_map: &RouteMap, pretty: bool) -> Result<String> {
    let mut json = if pretty {
        serde_json::to_string_pretty(route_map)
    } else {
        serde_json::to_string(route_map)
    }
    .context("Failed to serialize route map")?;
    json.push('\n');
    Ok(json)
}

/// Writes the route map to `path`, or to stdout when `path` is `None`.
///
/// Parent directories of `path` are created as needed.
pub async fn write_route_map(route_map: &RouteMap, path: Option<&Path>, pretty: bool) -> Result<()> {
    let json = render_route_map(route_map, pretty)?;

    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            tokio::fs::write(path, json)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Route map written to {}", path.display());
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout
                .write_all(json.as_bytes())
                .await
                .context("Failed to write route map to stdout")?;
            stdout.flush().await?;
        }
    }

    Ok(())
}
