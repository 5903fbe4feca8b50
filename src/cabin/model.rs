use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::cabin::class::SeatClass;
use crate::foundation::error::{SeatMapError, SeatMapResult};

/// One seat within a row.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Seat {
    /// Seat category, which fixes its size and spacing.
    #[serde(default)]
    pub class: SeatClass,
    /// Extra vertical offset applied before this seat, relative to the previous one.
    #[serde(default)]
    pub y_offset: f64,
}

/// An ordered group of seats sharing one front-to-back position.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Row {
    /// Horizontal offset relative to the previous row.
    #[serde(default)]
    pub x_offset: f64,
    /// Vertical offset applied once before the first seat.
    #[serde(default)]
    pub y_offset: f64,
    /// Seats, top to bottom.
    #[serde(default)]
    pub seats: Vec<Seat>,
}

impl Row {
    /// Highest-ranked class present in the row; `Economy` when the row is empty.
    pub fn dominant_class(&self) -> SeatClass {
        self.seats
            .iter()
            .map(|s| s.class)
            .fold(SeatClass::Economy, |best, c| {
                if c.rank() > best.rank() { c } else { best }
            })
    }
}

/// A contiguous cabin zone.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Section {
    /// Rows, front to back.
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl Section {
    /// Number of seats across all rows, which is the minimum occupancy bit count.
    pub fn seat_count(&self) -> usize {
        self.rows.iter().map(|r| r.seats.len()).sum()
    }
}

/// Full structural description of a cabin.
///
/// Supplied by the caller and treated as read-only for a render cycle.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CabinMap {
    /// Sections in layout order.
    pub sections: Vec<Section>,
}

impl CabinMap {
    /// Build a cabin from sections.
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Parse a cabin from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> SeatMapResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| SeatMapError::serde(format!("parse cabin JSON: {e}")))
    }

    /// Parse a cabin from a JSON string.
    pub fn from_json_str(s: &str) -> SeatMapResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| SeatMapError::serde(format!("parse cabin JSON: {e}")))
    }

    /// Parse a cabin from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SeatMapResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SeatMapError::validation(format!("open cabin JSON '{}': {e}", path.display()))
        })?;
        serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            SeatMapError::serde(format!("parse cabin JSON '{}': {e}", path.display()))
        })
    }

    /// Seats in section `section`, or `None` when the index is out of range.
    pub fn seat_count(&self, section: usize) -> Option<usize> {
        self.sections.get(section).map(Section::seat_count)
    }

    /// Seats across the whole cabin.
    pub fn total_seats(&self) -> usize {
        self.sections.iter().map(Section::seat_count).sum()
    }

    /// Reject offsets that would poison the layout fold.
    pub fn validate(&self) -> SeatMapResult<()> {
        for (si, section) in self.sections.iter().enumerate() {
            for (ri, row) in section.rows.iter().enumerate() {
                if !row.x_offset.is_finite() || !row.y_offset.is_finite() {
                    return Err(SeatMapError::validation(format!(
                        "section {si} row {ri}: offsets must be finite"
                    )));
                }
                for (ki, seat) in row.seats.iter().enumerate() {
                    if !seat.y_offset.is_finite() {
                        return Err(SeatMapError::validation(format!(
                            "section {si} row {ri} seat {ki}: y_offset must be finite"
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cabin/model.rs"]
mod tests;
