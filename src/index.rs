use crate::error::{BootstrapError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexEntry {
    pub unit_id: String,
    pub length: u64,
}

/// The units available for resampling, in index order. Only units whose data
/// file exists are kept.
#[derive(Clone, Debug, Default)]
pub struct IndexSet {
    entries: Vec<IndexEntry>,
    total_length: u64,
}

impl IndexSet {
    /// The total length saturates at `u64::MAX`. `from_reader` rejects such indexes instead.
    pub fn new(entries: Vec<IndexEntry>) -> Self {
        let total_length = entries
            .iter()
            .fold(0_u64, |acc, e| acc.saturating_add(e.length));
        IndexSet {
            entries,
            total_length,
        }
    }

    /// Reads the index at `index_path` and keeps the units for which `data_file`
    /// names an existing file. Missing data files are not an error.
    pub fn load(index_path: &Path, data_file: impl Fn(&str) -> PathBuf) -> Result<Self> {
        let file = File::open(index_path).map_err(|e| BootstrapError::io(index_path, e))?;
        let reader = BufReader::new(file);

        let mut n_skipped = 0_usize;
        let set = Self::from_reader(reader, index_path, |unit_id| {
            let path = data_file(unit_id);
            let exists = path.is_file();
            if !exists {
                log::debug!("Skipping unit {}: no data file at {}", unit_id, path.display());
                n_skipped += 1;
            }
            exists
        })?;

        log::info!(
            "Loaded {} units with total length {} from {} ({} without data)",
            set.len(),
            set.total_length(),
            index_path.display(),
            n_skipped
        );
        Ok(set)
    }

    /// Parses index rows from `reader`. `keep` decides per unit id whether the row
    /// is retained. `source` is only used in error messages.
    pub fn from_reader(
        reader: impl BufRead,
        source: &Path,
        mut keep: impl FnMut(&str) -> bool,
    ) -> Result<Self> {
        let parse_error = |line_idx: usize, message: String| BootstrapError::Parse {
            path: source.to_path_buf(),
            line: line_idx + 1,
            message,
        };

        let mut entries = Vec::new();
        let mut total_length = 0_u64;
        for (line_idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| BootstrapError::io(source, e))?;
            let entry = parse_row(&line).map_err(|message| parse_error(line_idx, message))?;
            if keep(&entry.unit_id) {
                total_length = total_length.checked_add(entry.length).ok_or_else(|| {
                    let message =
                        format!("total length overflows u64 at unit {}", entry.unit_id);
                    parse_error(line_idx, message)
                })?;
                entries.push(entry);
            }
        }
        Ok(IndexSet {
            entries,
            total_length,
        })
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn get(&self, i: usize) -> &IndexEntry {
        &self.entries[i]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_length(&self) -> u64 {
        self.total_length
    }
}

// Column 1 is the unit id, column 2 its length. Further columns (as in a .fai) are ignored.
fn parse_row(line: &str) -> std::result::Result<IndexEntry, String> {
    let mut fields = line.trim().split('\t');
    let unit_id = fields.next().unwrap_or_default();
    let length = match fields.next() {
        Some(x) => x,
        None => return Err(format!("expected at least 2 tab-separated fields, got {:?}", line)),
    };
    let length: u64 = length.trim().parse().map_err(|_| {
        format!("length of unit {} is not a non-negative integer: {:?}", unit_id, length)
    })?;

    Ok(IndexEntry {
        unit_id: unit_id.to_owned(),
        length,
    })
}
