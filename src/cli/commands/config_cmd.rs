//! Configuration management commands.

use foodsafety::config::{Config, Settings};

use crate::cli::helpers::{build_query, SearchArgs};
use crate::cli::icons::dim_arrow;

/// Show the loaded config file and the settings resolved from it.
pub fn cmd_config_show(settings: &Settings, config: &Config) -> anyhow::Result<()> {
    match config.source_path {
        Some(ref path) => println!("# Config file: {}", path.display()),
        None => println!("# No config file found, using defaults"),
    }

    let rendered = toml::to_string_pretty(config)?;
    if !rendered.trim().is_empty() {
        println!("{}", rendered.trim_end());
    }

    let query = build_query(settings, &SearchArgs::default());
    let pattern = &settings.listing;

    println!();
    println!("# Resolved settings");
    println!("{} endpoint: {}", dim_arrow(), settings.endpoint);
    println!("{} page file: {}", dim_arrow(), settings.page_file.display());
    println!(
        "{} timeout: {}s, user agent: {}",
        dim_arrow(),
        settings.request_timeout,
        settings.user_agent
    );
    println!(
        "{} listings: id {}...{}{}",
        dim_arrow(),
        pattern.prefix,
        pattern.suffix,
        pattern
            .tag
            .as_ref()
            .map(|tag| format!(" on <{}>", tag))
            .unwrap_or_default()
    );
    println!(
        "{} default query: {}",
        dim_arrow(),
        query.to_url(&settings.endpoint)?
    );

    Ok(())
}
