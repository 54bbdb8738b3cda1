//! Container list export to CSV
//!
//! One row per container in list order. The spreadsheet dialect writes
//! tab-separated values behind a UTF-8 byte order mark so that Excel picks
//! the encoding up without an import wizard.

use crate::app::models::Container;
use crate::{Error, Result};
use csv::WriterBuilder;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

pub const EXPORT_HEADERS: [&str; 10] = [
    "No",
    "Container",
    "Type",
    "Weight (KG)",
    "Bay",
    "Origin",
    "Destination",
    "Cargo",
    "Temp (C)",
    "Status",
];

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Output flavour for [`write_containers_as`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportDialect {
    /// Comma separated, no byte order mark
    #[default]
    Csv,
    /// Tab separated with a UTF-8 byte order mark
    Spreadsheet,
}

impl ExportDialect {
    fn delimiter(self) -> u8 {
        match self {
            ExportDialect::Csv => b',',
            ExportDialect::Spreadsheet => b'\t',
        }
    }
}

/// Row values for one container; `number` is the 1-based row number
pub fn export_row(number: usize, container: &Container) -> [String; 10] {
    [
        number.to_string(),
        container.container_number.clone(),
        container.container_type.clone(),
        container.weight.map(|w| w.to_string()).unwrap_or_default(),
        container.position.raw.clone(),
        container.port_origin.clone(),
        container.port_destination.clone(),
        container.cargo_type.clone(),
        container
            .temperature
            .map(|t| format!("{:.1}", t))
            .unwrap_or_default(),
        container.status.to_string(),
    ]
}

/// Write the header and one row per container as comma-separated values
pub fn write_containers<W: Write>(writer: W, containers: &[Container]) -> Result<()> {
    write_containers_as(writer, containers, ExportDialect::Csv)
}

pub fn write_containers_as<W: Write>(
    mut writer: W,
    containers: &[Container],
    dialect: ExportDialect,
) -> Result<()> {
    if dialect == ExportDialect::Spreadsheet {
        writer
            .write_all(UTF8_BOM)
            .map_err(|e| Error::io("Failed to write byte order mark", e))?;
    }

    let mut csv_writer = WriterBuilder::new()
        .delimiter(dialect.delimiter())
        .from_writer(writer);

    csv_writer
        .write_record(EXPORT_HEADERS)
        .map_err(|e| Error::export("Failed to write header row", e))?;

    for (index, container) in containers.iter().enumerate() {
        csv_writer
            .write_record(export_row(index + 1, container))
            .map_err(|e| {
                Error::export(
                    format!("Failed to write row for {}", container.container_number),
                    e,
                )
            })?;
    }

    csv_writer
        .flush()
        .map_err(|e| Error::io("Failed to flush export", e))?;
    debug!("Wrote {} export rows", containers.len());
    Ok(())
}

/// Export containers to a file, returning the number of rows written
pub fn export_to_path(
    path: &Path,
    containers: &[Container],
    dialect: ExportDialect,
) -> Result<usize> {
    let file = File::create(path)
        .map_err(|e| Error::io(format!("Failed to create {}", path.display()), e))?;

    write_containers_as(BufWriter::new(file), containers, dialect)?;

    info!(
        "Exported {} containers to {}",
        containers.len(),
        path.display()
    );
    Ok(containers.len())
}
