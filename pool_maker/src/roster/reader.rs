//! CSV roster reader.
//!
//! Rows carry `last, first, club, rating` and an optional fifth legacy
//! column that is ignored. There is no header row. Malformed rows are
//! skipped and reported; they never abort a load. That includes rows whose
//! fields are not valid UTF-8.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::errors::{FormatError, RosterResult};
use super::models::{ClubTally, Competitor, DEFAULT_UNRATED_CLASS};

/// Row that failed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRow {
    /// 1-based line number in the source
    pub line: u64,
    /// Why the row was rejected
    pub reason: String,
}

/// Validated roster ready for a draw
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    /// Competitors in file order
    pub competitors: Vec<Competitor>,
    /// Club populations over the valid rows
    pub clubs: ClubTally,
    /// Rows that were rejected
    pub skipped: Vec<SkippedRow>,
    /// Non-empty rows read, valid or not
    pub line_count: usize,
}

impl Roster {
    /// Build a roster from already validated competitors
    pub fn from_competitors(competitors: Vec<Competitor>) -> Self {
        let clubs = competitors.iter().collect();
        Self {
            line_count: competitors.len(),
            competitors,
            clubs,
            skipped: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.competitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.competitors.is_empty()
    }
}

/// Reads rosters from CSV sources
#[derive(Debug, Clone, Copy)]
pub struct RosterReader {
    unrated_class: char,
}

impl Default for RosterReader {
    fn default() -> Self {
        Self::new(DEFAULT_UNRATED_CLASS)
    }
}

impl RosterReader {
    /// Create a reader treating `unrated_class` as the unrated grade
    pub fn new(unrated_class: char) -> Self {
        Self { unrated_class }
    }

    /// Load a roster from a file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or is not valid CSV.
    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> RosterResult<Roster> {
        let path = path.as_ref();
        let roster = self.read(File::open(path)?)?;
        info!(
            "Completed processing of {}: {} lines, {} competitors",
            path.display(),
            roster.line_count,
            roster.len()
        );
        Ok(roster)
    }

    /// Load a roster from any reader
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure or undecodable CSV. Malformed rows
    /// are not errors; they end up in [`Roster::skipped`].
    pub fn read<R: Read>(&self, source: R) -> RosterResult<Roster> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(source);

        let mut roster = Roster::default();

        for record in reader.byte_records() {
            let record = record?;
            if record.iter().all(<[u8]>::is_empty) {
                continue;
            }

            roster.line_count += 1;
            let line = record.position().map_or(0, |pos| pos.line());

            match self.parse_record(&record) {
                Ok(competitor) => {
                    roster.clubs.record(&competitor.club);
                    roster.competitors.push(competitor);
                }
                Err(e) => {
                    warn!("Line {line} does not match format: {e}");
                    roster.skipped.push(SkippedRow {
                        line,
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(roster)
    }

    fn parse_record(&self, record: &csv::ByteRecord) -> Result<Competitor, FormatError> {
        if !(4..=5).contains(&record.len()) {
            return Err(FormatError::FieldCount(record.len()));
        }
        let field = |i: usize| {
            std::str::from_utf8(&record[i]).map_err(|_| FormatError::Encoding(i + 1))
        };
        Competitor::parse(
            field(0)?,
            field(1)?,
            field(2)?,
            field(3)?,
            self.unrated_class,
        )
    }
}
