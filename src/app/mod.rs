// Application layer: runs a parsed CLI command against the core components.

use crate::config::{cli::parse_tokens, Command};
use crate::core::fizzbuzz::{classify_all, classify_each};
use crate::core::Storage;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use crate::{LocalStorage, OutlineConfig};
use std::io::Write;

/// Runs one subcommand, writing its stdout output to `out`.
pub fn run_command<W: Write>(command: Command, out: &mut W) -> Result<()> {
    match command {
        Command::Count { tokens, json } => {
            let values = parse_tokens(&tokens)?;
            tracing::info!("🔢 Counting {} values", values.len());

            if json {
                let labels: Vec<String> = classify_each(values)
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                writeln!(out, "{}", serde_json::to_string(&labels)?)?;
            } else {
                writeln!(out, "{}", classify_all(values))?;
            }
        }
        Command::Render { outline, output } => {
            tracing::info!("📁 Loading outline from: {}", outline);
            let outline = OutlineConfig::from_file(&outline)?;

            // 驗證大綱
            outline.validate()?;
            let summary = outline.summary();
            tracing::info!(
                "📋 {}: {} sections, {} item groups, {} items",
                outline.walkthrough.name,
                summary.sections,
                summary.item_groups,
                summary.items
            );

            let markup = outline.to_node().to_string();

            match output {
                Some(path) => {
                    validate_path("output", &path)?;
                    LocalStorage::new(".".to_string()).write_file(&path, markup.as_bytes())?;
                    tracing::info!("✅ Markup saved to: {}", path);
                }
                None => writeln!(out, "{}", markup)?,
            }
        }
    }

    Ok(())
}
