/// Seat category. Declaration order is rank order: later variants outrank earlier ones when
/// picking a row's dominant class.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SeatClass {
    /// Standard economy seat.
    #[default]
    Economy,
    /// Economy seat on an emergency exit row (extra legroom).
    EconomyEmergency,
    /// Premium economy seat.
    PremiumEconomy,
    /// Business class seat.
    Business,
}

/// Static sizing for one seat class, in logical pixels.
///
/// `width` is the seat's extent across the aisle (y axis), `length` its extent along the cabin
/// (x axis).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ClassMetrics {
    /// Seat extent along y.
    pub width: f64,
    /// Seat extent along x.
    pub length: f64,
    /// Gap after a row of this class before the next row.
    pub pad_x: f64,
    /// Gap between consecutive seats of this class within a row.
    pub pad_y: f64,
    /// Drawn sprite width.
    pub sprite_width: f64,
    /// Drawn sprite height.
    pub sprite_height: f64,
}

const ECONOMY: ClassMetrics = ClassMetrics {
    width: 18.0,
    length: 18.0,
    pad_x: 2.0,
    pad_y: 1.0,
    sprite_width: 18.0,
    sprite_height: 18.0,
};

const ECONOMY_EMERGENCY: ClassMetrics = ClassMetrics {
    width: 18.0,
    length: 18.0,
    pad_x: 12.0,
    pad_y: 1.0,
    sprite_width: 18.0,
    sprite_height: 18.0,
};

const PREMIUM_ECONOMY: ClassMetrics = ClassMetrics {
    width: 22.0,
    length: 24.0,
    pad_x: 4.0,
    pad_y: 2.0,
    sprite_width: 24.0,
    sprite_height: 22.0,
};

const BUSINESS: ClassMetrics = ClassMetrics {
    width: 28.0,
    length: 32.0,
    pad_x: 6.0,
    pad_y: 4.0,
    sprite_width: 32.0,
    sprite_height: 28.0,
};

impl SeatClass {
    /// Every class, lowest rank first.
    pub const ALL: [SeatClass; 4] = [
        SeatClass::Economy,
        SeatClass::EconomyEmergency,
        SeatClass::PremiumEconomy,
        SeatClass::Business,
    ];

    /// Sizing constants for this class.
    pub const fn metrics(self) -> &'static ClassMetrics {
        match self {
            SeatClass::Economy => &ECONOMY,
            SeatClass::EconomyEmergency => &ECONOMY_EMERGENCY,
            SeatClass::PremiumEconomy => &PREMIUM_ECONOMY,
            SeatClass::Business => &BUSINESS,
        }
    }

    /// Rank used for dominant-class selection (higher wins).
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Horizontal advance contributed by a row whose dominant class is `self`.
    pub fn row_advance(self) -> f64 {
        let m = self.metrics();
        m.pad_x + m.length
    }

    /// Vertical advance before a non-first seat of this class.
    pub fn seat_advance(self) -> f64 {
        let m = self.metrics();
        m.pad_y + m.width
    }

    /// Drawn sprite size.
    pub fn sprite_size(self) -> crate::foundation::core::Size {
        let m = self.metrics();
        crate::foundation::core::Size::new(m.sprite_width, m.sprite_height)
    }
}

/// Largest sprite extent across all classes, used to size the shared raster.
pub(crate) fn max_sprite_extent() -> f64 {
    SeatClass::ALL
        .iter()
        .map(|c| {
            let m = c.metrics();
            m.sprite_width.max(m.sprite_height)
        })
        .fold(0.0, f64::max)
}

#[cfg(test)]
#[path = "../../tests/unit/cabin/class.rs"]
mod tests;
