//! Fetch command.

use std::path::{Path, PathBuf};

use anyhow::Context;

use foodsafety::config::Settings;
use foodsafety::search::fetch_inspection_page;
use foodsafety::storage::save_page;

use crate::cli::helpers::{build_client, build_query, SearchArgs};
use crate::cli::icons::{dim_arrow, success};

/// Run a search and save the results page. Returns the path written.
pub async fn fetch_to_file(
    settings: &Settings,
    search: &SearchArgs,
    output: Option<&Path>,
) -> anyhow::Result<PathBuf> {
    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| settings.page_file.clone());
    let query = build_query(settings, search);
    let client = build_client(settings)?;

    let page = fetch_inspection_page(&client, &settings.endpoint, &query)
        .await
        .context("Inspection search failed")?;
    save_page(&path, &page.text)
        .await
        .with_context(|| format!("Failed to save page to {}", path.display()))?;

    eprintln!(
        "{} Saved results page to {}",
        success(),
        path.display()
    );
    if let Some(ref encoding) = page.encoding {
        eprintln!("  {} Encoding: {}", dim_arrow(), encoding);
    }
    Ok(path)
}

pub async fn cmd_fetch(
    settings: &Settings,
    search: &SearchArgs,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    fetch_to_file(settings, search, output).await?;
    Ok(())
}
