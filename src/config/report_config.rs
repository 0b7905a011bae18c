use std::fs;
use std::path::{Path, PathBuf};

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};

use super::Protocol;
use crate::error::{ReportError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Independent variable column (`Flow`, `Trial`, ...).
    pub x_column: String,
    /// Axis description; defaults to `x_column`.
    #[serde(default)]
    pub x_label: Option<String>,
    pub inputs: Vec<InputSpec>,
    pub metrics: Vec<MetricSpec>,
    /// Single ASCII character; anything else is rejected when the config is read.
    #[serde(default = "default_delimiter", deserialize_with = "ascii_delimiter")]
    pub delimiter: char,
    /// Sort every table by `x_column` after loading.
    #[serde(default)]
    pub sort_by_x: bool,
    /// Label every point of log-scale metrics with its value.
    #[serde(default)]
    pub annotate_log_scale: bool,
    #[serde(default)]
    pub on_missing: MissingPolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputSpec {
    pub path: PathBuf,
    /// Defaults to the file stem of `path`.
    #[serde(default)]
    pub protocol: Option<Protocol>,
}

impl InputSpec {
    pub fn new(path: impl Into<PathBuf>, protocol: &str) -> Self {
        Self {
            path: path.into(),
            protocol: Some(Protocol::new(protocol)),
        }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            protocol: None,
        }
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
            .clone()
            .unwrap_or_else(|| Protocol::from_path(&self.path))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricSpec {
    /// Column name in the input file.
    pub column: String,
    /// Axis/legend text, e.g. `Average Delay (ms)`.
    pub label: String,
    /// File-name fragment; defaults to `column` with spaces replaced by `_`.
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub log_scale: bool,
    /// Values may be serialized with a trailing `%`.
    #[serde(default)]
    pub percent: bool,
}

impl MetricSpec {
    pub fn new(column: &str, label: &str) -> Self {
        Self {
            column: column.to_string(),
            label: label.to_string(),
            slug: None,
            log_scale: false,
            percent: false,
        }
    }

    pub fn log_scale(mut self) -> Self {
        self.log_scale = true;
        self
    }

    pub fn percent(mut self) -> Self {
        self.percent = true;
        self
    }

    pub fn slug(&self) -> String {
        self.slug
            .clone()
            .unwrap_or_else(|| self.column.replace(' ', "_"))
    }
}

/// What to do when a configured input file does not exist.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MissingPolicy {
    #[default]
    Abort,
    Skip,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("plots")
}

fn default_delimiter() -> char {
    ','
}

fn ascii_delimiter<'de, D: Deserializer<'de>>(de: D) -> std::result::Result<char, D::Error> {
    let c = char::deserialize(de)?;
    if c.is_ascii() {
        Ok(c)
    } else {
        Err(de::Error::custom(format!(
            "delimiter `{c}` is not a single ASCII character"
        )))
    }
}

impl ReportConfig {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ReportError::MissingFile {
                path: path.to_path_buf(),
            });
        }
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Per-flow results of AODV, OLSR and DSDV, one CSV each.
    pub fn flow_study() -> Self {
        Self {
            output_dir: default_output_dir(),
            x_column: "Flow".to_string(),
            x_label: Some("Number of Vehicles".to_string()),
            inputs: vec![
                InputSpec::from_path("aodv.csv"),
                InputSpec::from_path("olsr.csv"),
                InputSpec::from_path("dsdv.csv"),
            ],
            metrics: vec![
                MetricSpec::new("Packet Delivery Ratio", "Packet Delivery Ratio (%)").percent(),
                MetricSpec::new("Average Delay", "Average Delay (ms)"),
                MetricSpec::new("Throughput", "Throughput (Kbps)").log_scale(),
            ],
            delimiter: default_delimiter(),
            sort_by_x: false,
            annotate_log_scale: false,
            on_missing: MissingPolicy::Abort,
        }
    }

    /// Per-trial results of AODV and DSDV.
    pub fn trial_study() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            x_column: "Trial".to_string(),
            x_label: None,
            inputs: vec![
                InputSpec::new("aodv.txt", "AODV"),
                InputSpec::new("dsdv.txt", "DSDV"),
            ],
            metrics: vec![
                MetricSpec::new("Total_Throughput_Kbps", "Total Throughput (Kbps)").log_scale(),
                MetricSpec::new("Average_Delay_ms", "Average Delay (ms)"),
                MetricSpec::new("Packet_Delivery_Ratio", "Packet Delivery Ratio (%)").percent(),
            ],
            delimiter: default_delimiter(),
            sort_by_x: true,
            annotate_log_scale: true,
            on_missing: MissingPolicy::Abort,
        }
    }

    /// Replaces the input list, keeping everything else.
    pub fn with_inputs(mut self, inputs: Vec<InputSpec>) -> Self {
        if !inputs.is_empty() {
            self.inputs = inputs;
        }
        self
    }

    pub fn x_label(&self) -> &str {
        self.x_label.as_deref().unwrap_or(&self.x_column)
    }

    pub fn metric_columns(&self) -> Vec<&str> {
        self.metrics.iter().map(|m| m.column.as_str()).collect()
    }

    /// Delimiter as a single byte. Only ASCII characters encode to one byte in UTF-8.
    pub fn delimiter_byte(&self) -> Result<u8> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(ReportError::InvalidDelimiter {
                delimiter: self.delimiter,
            })
        }
    }
}
