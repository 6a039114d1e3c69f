use std::{fs::File, io::prelude::*};

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tabled::{Table, Tabled, settings::Style};

use crate::types::ClusterMetadata;

#[derive(Clone, Copy, Debug, Default, ValueEnum, Serialize, Deserialize)]
pub enum Format {
  /// JSON format used for indexing or writing to a *.json file
  #[default]
  Json,
  /// Text format used for writing to stdout
  Text,
}

#[derive(Debug, Tabled)]
#[tabled(rename_all = "UpperCase")]
struct Field {
  field: String,
  value: String,
}

/// Render one row per populated field, keyed by its JSON name
pub fn to_stdout_table(metadata: &ClusterMetadata) -> Result<String> {
  let value = serde_json::to_value(metadata)?;
  let fields: Vec<Field> = value
    .as_object()
    .into_iter()
    .flatten()
    .map(|(field, value)| Field {
      field: field.to_owned(),
      value: match value {
        serde_json::Value::String(s) => s.to_owned(),
        other => other.to_string(),
      },
    })
    .collect();

  if fields.is_empty() {
    return Ok(String::new());
  }

  let mut table = Table::new(fields);
  table.with(Style::sharp());

  Ok(format!("{table}\n"))
}

pub fn render(metadata: &ClusterMetadata, format: &Format) -> Result<String> {
  let output = match format {
    Format::Json => serde_json::to_string_pretty(metadata)?,
    Format::Text => to_stdout_table(metadata)?,
  };

  Ok(output)
}

pub(crate) fn output(metadata: &ClusterMetadata, format: &Format, filename: &Option<String>) -> Result<()> {
  let output = render(metadata, format)?;

  match filename {
    Some(filename) => {
      let mut file = File::create(filename)?;
      file.write_all(output.as_bytes())?;
    }
    None => {
      println!("{output}");
    }
  }

  Ok(())
}
