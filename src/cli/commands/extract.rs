//! Extract command.

use std::path::PathBuf;

use anyhow::Context;
use tracing::warn;

use foodsafety::config::Settings;
use foodsafety::extract::extract_records_with;
use foodsafety::storage::load_document;

use super::fetch::fetch_to_file;
use crate::cli::helpers::SearchArgs;
use crate::cli::icons::{success, warn as warn_icon};

pub struct ExtractOptions {
    pub file: Option<PathBuf>,
    pub fetch: bool,
    pub search: SearchArgs,
    pub skip_errors: bool,
    pub limit: usize,
    pub pretty: bool,
}

/// Print one JSON record per listing on stdout.
pub async fn cmd_extract(settings: &Settings, options: ExtractOptions) -> anyhow::Result<()> {
    let path = if options.fetch {
        fetch_to_file(settings, &options.search, options.file.as_deref()).await?
    } else {
        options
            .file
            .clone()
            .unwrap_or_else(|| settings.page_file.clone())
    };

    let document = load_document(&path)
        .await
        .with_context(|| format!("Failed to read results page {}", path.display()))?;

    let mut emitted = 0usize;
    let mut skipped = 0usize;

    for result in extract_records_with(&document, &settings.listing) {
        match result {
            Ok(record) => {
                let line = if options.pretty {
                    serde_json::to_string_pretty(&record)?
                } else {
                    serde_json::to_string(&record)?
                };
                println!("{}", line);

                emitted += 1;
                if options.limit > 0 && emitted >= options.limit {
                    break;
                }
            }
            Err(e) if options.skip_errors => {
                warn!("Skipping listing: {}", e);
                skipped += 1;
            }
            Err(e) => {
                return Err(e).context(format!("Extraction stopped in {}", path.display()));
            }
        }
    }

    eprintln!("{} Extracted {} records", success(), emitted);
    if skipped > 0 {
        eprintln!("{} Skipped {} listings", warn_icon(), skipped);
    }

    Ok(())
}
