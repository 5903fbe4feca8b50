use crate::cabin::class::SeatClass;
use crate::cabin::model::{CabinMap, Row};
use crate::foundation::core::{Point, Rect, Size};
use crate::foundation::error::{SeatMapError, SeatMapResult};

/// Absolute placement of one seat sprite, in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SeatPlacement {
    /// Section index.
    pub section: usize,
    /// Row index within the section.
    pub row: usize,
    /// Seat index within the row.
    pub seat: usize,
    /// Occupancy bit index within the section (row-major).
    pub seat_id: usize,
    /// Seat class.
    pub class: SeatClass,
    /// Top-left corner of the sprite.
    pub origin: Point,
    /// Drawn sprite size.
    pub size: Size,
}

impl SeatPlacement {
    /// Sprite rectangle.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }
}

/// Flattened layout of a whole cabin in traversal order (section, row, seat).
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct CabinLayout {
    placements: Vec<SeatPlacement>,
}

impl CabinLayout {
    /// Placements in traversal order.
    pub fn placements(&self) -> &[SeatPlacement] {
        &self.placements
    }

    /// Number of placed seats.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Return `true` when no seats were placed.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Union of all sprite rectangles.
    pub fn bounds(&self) -> Option<Rect> {
        let mut it = self.placements.iter().map(SeatPlacement::rect);
        let first = it.next()?;
        Some(it.fold(first, |acc, r| acc.union(r)))
    }

    /// First placement whose sprite contains `p`.
    pub fn seat_at(&self, p: Point) -> Option<&SeatPlacement> {
        self.placements.iter().find(|s| s.rect().contains(p))
    }
}

/// Carries the shared horizontal coordinate across rows and sections.
///
/// Each row after the first advances by the previous row's dominant-class `pad_x + length`, so a
/// row clears the one before it.
#[derive(Debug, Default)]
struct RowCursor {
    x: f64,
    prev_dominant: Option<SeatClass>,
}

impl RowCursor {
    /// Step onto `row` and return its x.
    fn enter(&mut self, row: &Row) -> f64 {
        if let Some(prev) = self.prev_dominant {
            self.x += prev.row_advance();
        }
        self.x += row.x_offset;
        self.prev_dominant = Some(row.dominant_class());
        self.x
    }
}

/// Vertical fold within one row.
struct SeatCursor {
    y: f64,
    index: usize,
}

impl SeatCursor {
    fn new(row: &Row) -> Self {
        Self {
            y: row.y_offset,
            index: 0,
        }
    }

    fn advance(&mut self, row: &Row) -> Option<(SeatClass, f64)> {
        let seat = row.seats.get(self.index)?;
        self.y += seat.y_offset;
        if self.index != 0 {
            self.y += seat.class.seat_advance();
        }
        self.index += 1;
        Some((seat.class, self.y))
    }
}

/// Lay out every seat of `cabin` in one pass.
#[tracing::instrument(skip(cabin), fields(sections = cabin.sections.len()))]
pub fn layout_cabin(cabin: &CabinMap) -> CabinLayout {
    let mut placements = Vec::with_capacity(cabin.total_seats());
    let mut rows = RowCursor::default();

    for (si, section) in cabin.sections.iter().enumerate() {
        let mut seat_id = 0usize;
        for (ri, row) in section.rows.iter().enumerate() {
            let x = rows.enter(row);
            let mut seats = SeatCursor::new(row);
            let mut ki = 0usize;
            while let Some((class, y)) = seats.advance(row) {
                placements.push(SeatPlacement {
                    section: si,
                    row: ri,
                    seat: ki,
                    seat_id,
                    class,
                    origin: Point::new(x, y),
                    size: class.sprite_size(),
                });
                ki += 1;
                seat_id += 1;
            }
        }
    }

    tracing::trace!(seats = placements.len(), "cabin laid out");
    CabinLayout { placements }
}

/// Origin of a single seat, folding only the rows and seats that precede it.
///
/// Agrees exactly with the matching entry of [`layout_cabin`].
pub fn compute_origin(
    cabin: &CabinMap,
    section: usize,
    row: usize,
    seat: usize,
) -> SeatMapResult<Point> {
    let target_section = cabin.sections.get(section).ok_or_else(|| {
        SeatMapError::validation(format!(
            "section {section} out of range ({} sections)",
            cabin.sections.len()
        ))
    })?;
    let target_row = target_section.rows.get(row).ok_or_else(|| {
        SeatMapError::validation(format!(
            "section {section}: row {row} out of range ({} rows)",
            target_section.rows.len()
        ))
    })?;
    if seat >= target_row.seats.len() {
        return Err(SeatMapError::validation(format!(
            "section {section} row {row}: seat {seat} out of range ({} seats)",
            target_row.seats.len()
        )));
    }

    let mut rows = RowCursor::default();
    for s in &cabin.sections[..section] {
        for r in &s.rows {
            rows.enter(r);
        }
    }
    for r in &target_section.rows[..row] {
        rows.enter(r);
    }
    let x = rows.enter(target_row);

    let mut seats = SeatCursor::new(target_row);
    let mut y = 0.0;
    for _ in 0..=seat {
        // Bounds were checked above.
        if let Some((_, sy)) = seats.advance(target_row) {
            y = sy;
        }
    }

    Ok(Point::new(x, y))
}

#[cfg(test)]
#[path = "../../tests/unit/layout/engine.rs"]
mod tests;
