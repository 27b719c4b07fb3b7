use anyhow::Context;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const TOP_COINS_CSV: &str = "top_coins.csv";
pub const TOP_COINS_JSON: &str = "top_coins.json";
pub const HISTORICAL_PRICES_CSV: &str = "historical_prices.csv";
pub const HISTORICAL_PRICES_JSON: &str = "historical_prices.json";

/// Writes `rows` under `columns`, truncating any existing file. The header is
/// written even when there are no rows.
pub fn write_csv<T: Serialize>(path: &Path, columns: &[&str], rows: &[T]) -> anyhow::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    writer.write_record(columns)?;
    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("Failed to write a row to {}", path.display()))?;
    }
    writer.flush()?;

    Ok(())
}

/// Writes `rows` as a pretty-printed JSON array, truncating any existing file.
pub fn write_json<T: Serialize>(path: &Path, rows: &[T]) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, rows)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    writer.flush()?;

    Ok(())
}
