use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{ReportError, Result};

pub const TRACE_HEADER: [&str; 4] = ["NodeId", "Time", "PosX", "PosY"];

/// One flattened position sample. Fields are the literal attribute text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceRow {
    #[serde(rename = "NodeId")]
    pub node_id: String,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "PosX")]
    pub x: String,
    #[serde(rename = "PosY")]
    pub y: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceStats {
    pub vehicles: usize,
    pub rows: usize,
}

/// Streams `input` and writes the header plus one row per `position` of every `vehicle` that is a
/// direct child of the root element.
///
/// Only the id of the vehicle currently open is remembered. Absent attributes become empty fields.
pub fn convert_trace<R: BufRead, W: Write>(input: R, output: W) -> Result<TraceStats> {
    let mut reader = Reader::from_reader(input);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);
    writer.write_record(TRACE_HEADER)?;

    let mut stats = TraceStats::default();
    let mut buf = Vec::new();
    // Number of currently open elements; the root sits at depth 1.
    let mut depth = 0usize;
    let mut seen_root = false;
    let mut vehicle: Option<String> = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                if depth == 0 && seen_root {
                    return Err(malformed("more than one root element"));
                }
                seen_root = true;
                on_element(&e, depth, &mut vehicle, &mut stats, &mut writer)?;
                depth += 1;
            }
            Event::Empty(e) => {
                if depth == 0 && seen_root {
                    return Err(malformed("more than one root element"));
                }
                seen_root = true;
                on_element(&e, depth, &mut vehicle, &mut stats, &mut writer)?;
                // A self-closing vehicle has no samples.
                if depth == 1 {
                    vehicle = None;
                }
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                if depth == 1 {
                    vehicle = None;
                }
            }
            Event::Text(t) if depth == 0 && !t.iter().all(u8::is_ascii_whitespace) => {
                return Err(malformed("text outside the root element"));
            }
            Event::CData(_) if depth == 0 => {
                return Err(malformed("text outside the root element"));
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !seen_root {
        return Err(malformed("no root element"));
    }
    if depth != 0 {
        return Err(malformed("document ended inside an open element"));
    }

    writer.flush()?;
    Ok(stats)
}

fn on_element<W: Write>(
    e: &BytesStart<'_>,
    depth: usize,
    vehicle: &mut Option<String>,
    stats: &mut TraceStats,
    writer: &mut csv::Writer<W>,
) -> Result<()> {
    match (depth, e.name().as_ref()) {
        (1, b"vehicle") => {
            *vehicle = Some(attr(e, "id")?);
            stats.vehicles += 1;
        }
        (2, b"position") => {
            if let Some(node_id) = vehicle.as_ref() {
                let row = TraceRow {
                    node_id: node_id.clone(),
                    time: attr(e, "time")?,
                    x: attr(e, "x")?,
                    y: attr(e, "y")?,
                };
                writer.serialize(&row)?;
                stats.rows += 1;
            }
        }
        _ => {}
    }
    Ok(())
}

fn attr(e: &BytesStart<'_>, name: &str) -> Result<String> {
    match e.try_get_attribute(name)? {
        Some(a) => Ok(a.unescape_value()?.into_owned()),
        None => {
            warn!(
                element = %String::from_utf8_lossy(e.name().as_ref()),
                attribute = name,
                "missing attribute, writing empty field"
            );
            Ok(String::new())
        }
    }
}

fn malformed(reason: &str) -> ReportError {
    ReportError::MalformedTrace {
        reason: reason.to_string(),
    }
}

/// File front-end of [`convert_trace`]. The input must exist.
///
/// Rows are streamed into `<output>.part`, which is renamed to `output` only once the whole
/// document parsed; a malformed trace leaves no output file behind.
#[tracing::instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
pub fn convert_trace_file(input: &Path, output: &Path) -> Result<TraceStats> {
    if !input.exists() {
        return Err(ReportError::MissingFile {
            path: input.to_path_buf(),
        });
    }
    let reader = BufReader::new(File::open(input)?);

    let partial = partial_path(output);
    let converted = File::create(&partial)
        .map_err(ReportError::from)
        .and_then(|file| convert_trace(reader, BufWriter::new(file)));
    let stats = match converted {
        Ok(stats) => stats,
        Err(e) => {
            let _ = fs::remove_file(&partial);
            return Err(e);
        }
    };
    fs::rename(&partial, output)?;

    info!(
        vehicles = stats.vehicles,
        rows = stats.rows,
        "trace converted"
    );
    Ok(stats)
}

fn partial_path(output: &Path) -> PathBuf {
    let mut name = output
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(".part");
    output.with_file_name(name)
}
