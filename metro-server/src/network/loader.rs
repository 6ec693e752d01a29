//! Line data loading from a directory of JSON files.
//!
//! Each `<line>.json` file holds an array of loosely shaped station records.
//! Records are not uniform across files, so the station name is taken from
//! the first field that looks like one (see [`extract_name`]).

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{info, warn};

use crate::domain::Station;

use super::error::{LineFileError, LoadError};
use super::registry::Line;

/// File name prefix for files in the data directory that are not lines.
pub const EXCLUDED_PREFIX: &str = "station_entity";

const LINE_FILE_EXTENSION: &str = ".json";

/// First code point of each run of ten decimal digits outside ASCII.
const DECIMAL_DIGIT_ZEROS: &[u32] = &[
    0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66, 0x0CE6,
    0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946, 0x19D0,
    0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0, 0xA9F0,
    0xAA50, 0xABF0, 0xFF10,
];

/// Superscript, subscript, circled and similar digits.
const DIGIT_RANGES: &[(u32, u32)] = &[
    (0x00B2, 0x00B3),
    (0x00B9, 0x00B9),
    (0x1369, 0x1371),
    (0x19DA, 0x19DA),
    (0x2070, 0x2070),
    (0x2074, 0x2079),
    (0x2080, 0x2089),
    (0x2460, 0x2468),
    (0x2474, 0x247C),
    (0x2488, 0x2490),
    (0x24EA, 0x24EA),
    (0x24F5, 0x24FD),
    (0x24FF, 0x24FF),
    (0x2776, 0x277E),
    (0x2780, 0x2788),
    (0x278A, 0x2792),
];

/// Whether `c` is a digit: a decimal digit in any Basic Multilingual Plane
/// script, or a positional digit form such as `²` or `①`.
///
/// Fractions (`½`) and letter numerals (`Ⅻ`) are not digits.
fn is_digit(c: char) -> bool {
    let code = u32::from(c);
    c.is_ascii_digit()
        || DECIMAL_DIGIT_ZEROS
            .iter()
            .any(|&zero| (zero..zero + 10).contains(&code))
        || DIGIT_RANGES
            .iter()
            .any(|&(lo, hi)| (lo..=hi).contains(&code))
}

/// Extract a station name from a raw record.
///
/// The name is the first field, in file order, whose value is a string that
/// is non-empty after trimming and is not made up entirely of digits. The returned name is trimmed. Returns `None` for records that
/// are not objects or have no such field.
///
/// # Examples
///
/// ```
/// use metro_server::network::extract_name;
/// use serde_json::json;
///
/// let record = json!({"id": "12", "Station Names": " Kashmere Gate ", "code": "KG"});
/// assert_eq!(extract_name(&record).as_deref(), Some("Kashmere Gate"));
///
/// assert_eq!(extract_name(&json!({"id": 4, "seq": "7"})), None);
/// ```
pub fn extract_name(record: &Value) -> Option<String> {
    let fields = record.as_object()?;
    fields.values().find_map(|value| {
        let text = value.as_str()?;
        let trimmed = text.trim();
        if trimmed.is_empty() || text.chars().all(is_digit) {
            return None;
        }
        Some(trimmed.to_string())
    })
}

/// Parse the contents of one line file.
///
/// A station's `index` is the position of its record in the array, so
/// skipped records leave gaps.
pub fn parse_line(line_name: &str, contents: &str) -> Result<Line, LineFileError> {
    let value: Value = serde_json::from_str(contents)?;
    let Value::Array(records) = value else {
        return Err(LineFileError::NotAnArray);
    };

    let stations = records
        .iter()
        .enumerate()
        .filter_map(|(idx, record)| {
            extract_name(record).map(|name| Station::new(name, line_name, idx))
        })
        .collect();

    Ok(Line::new(line_name, stations))
}

/// Read and parse one line file.
pub fn load_line_file(line_name: &str, path: &Path) -> Result<Line, LineFileError> {
    let contents = std::fs::read_to_string(path)?;
    parse_line(line_name, &contents)
}

/// List the line files in `dir` as `(line name, path)`, sorted by file name.
///
/// Only `*.json` files count; names starting with `excluded_prefix` are
/// left out.
pub fn line_files(dir: &Path, excluded_prefix: &str) -> Result<Vec<(String, PathBuf)>, LoadError> {
    if !dir.exists() {
        return Err(LoadError::MissingDirectory {
            path: dir.to_path_buf(),
        });
    }

    let read_dir_error = |source| LoadError::ReadDirectory {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            warn!(file = ?entry.file_name(), "skipping file with non UTF-8 name");
            continue;
        };
        if file_name.starts_with(excluded_prefix) {
            continue;
        }
        let Some(line_name) = file_name.strip_suffix(LINE_FILE_EXTENSION) else {
            continue;
        };
        files.push((line_name.to_string(), entry.path()));
    }

    files.sort_by(|a, b| a.1.cmp(&b.1));
    Ok(files)
}

/// Load every line in `dir`.
///
/// Files that fail to load are logged and skipped. Only a missing or
/// unreadable directory is an error.
pub fn load_lines(dir: &Path, excluded_prefix: &str) -> Result<Vec<Line>, LoadError> {
    info!(dir = %dir.display(), "loading line data");

    let mut lines = Vec::new();
    for (line_name, path) in line_files(dir, excluded_prefix)? {
        match load_line_file(&line_name, &path) {
            Ok(line) => {
                info!(line = %line_name, stations = line.stations.len(), "loaded line");
                lines.push(line);
            }
            Err(e) => {
                warn!(file = %path.display(), error = %e, "skipping line file");
            }
        }
    }

    Ok(lines)
}
