use crate::cabin::model::CabinMap;
use crate::foundation::error::{SeatMapError, SeatMapResult};

const WORD_BITS: usize = 32;

/// Growable per-section bitset. Bit `i` is seat `i` of the section's row-major enumeration.
///
/// Bits past the end read as unset. `len_bits` tracks the declared width, which is what the
/// seat-count contract is checked against.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeatFlags {
    words: Vec<u32>,
    len_bits: usize,
}

impl SeatFlags {
    /// All-clear flags wide enough for `bits` seats.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            words: vec![0; bits.div_ceil(WORD_BITS)],
            len_bits: bits,
        }
    }

    /// Flags from raw 32-bit words, least significant bit first.
    pub fn from_words(words: Vec<u32>) -> Self {
        let len_bits = words.len() * WORD_BITS;
        Self { words, len_bits }
    }

    /// Parse a bit string where the leftmost digit is seat 0.
    ///
    /// An optional `0b` prefix and `_` separators are accepted, so `"0b010000"` marks seat 1.
    pub fn from_bit_str(s: &str) -> SeatMapResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix("0b").unwrap_or(s);
        let mut out = Self::default();
        let mut i = 0usize;
        for ch in s.chars() {
            match ch {
                '0' => {}
                '1' => out.set(i, true),
                '_' => continue,
                other => {
                    return Err(SeatMapError::validation(format!(
                        "invalid occupancy digit '{other}' (expected 0 or 1)"
                    )));
                }
            }
            i += 1;
        }
        out.len_bits = i;
        out.words.resize(i.div_ceil(WORD_BITS), 0);
        Ok(out)
    }

    /// Declared bit width.
    pub fn capacity_bits(&self) -> usize {
        self.len_bits
    }

    /// Raw words, least significant bit first.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Whether bit `i` is set.
    pub fn get(&self, i: usize) -> bool {
        self.words
            .get(i / WORD_BITS)
            .is_some_and(|w| (w >> (i % WORD_BITS)) & 1 == 1)
    }

    /// Set or clear bit `i`, growing the bitset when needed.
    pub fn set(&mut self, i: usize, value: bool) {
        let wi = i / WORD_BITS;
        if wi >= self.words.len() {
            self.words.resize(wi + 1, 0);
        }
        self.len_bits = self.len_bits.max(i + 1);
        let mask = 1u32 << (i % WORD_BITS);
        if value {
            self.words[wi] |= mask;
        } else {
            self.words[wi] &= !mask;
        }
    }

    /// Flip bit `i` and return its new value.
    pub fn toggle(&mut self, i: usize) -> bool {
        let v = !self.get(i);
        self.set(i, v);
        v
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}

impl serde::Serialize for SeatFlags {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let bits: String = (0..self.len_bits)
            .map(|i| if self.get(i) { '1' } else { '0' })
            .collect();
        serializer.serialize_str(&bits)
    }
}

impl<'de> serde::Deserialize<'de> for SeatFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Bits(String),
            Words(Vec<u32>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Bits(s) => Self::from_bit_str(&s).map_err(serde::de::Error::custom),
            Repr::Words(w) => Ok(Self::from_words(w)),
        }
    }
}

/// Occupancy for a whole cabin: one [`SeatFlags`] per section.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OccupancyState {
    /// Per-section flags, in cabin section order.
    pub sections: Vec<SeatFlags>,
}

impl OccupancyState {
    /// Build from per-section flags.
    pub fn new(sections: Vec<SeatFlags>) -> Self {
        Self { sections }
    }

    /// All-empty occupancy sized exactly to `cabin`.
    pub fn empty_for(cabin: &CabinMap) -> Self {
        Self {
            sections: cabin
                .sections
                .iter()
                .map(|s| SeatFlags::with_capacity(s.seat_count()))
                .collect(),
        }
    }

    /// Parse occupancy from a JSON string.
    pub fn from_json_str(s: &str) -> SeatMapResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| SeatMapError::serde(format!("parse occupancy JSON: {e}")))
    }

    /// Parse occupancy from a JSON file on disk.
    pub fn from_path(path: impl AsRef<std::path::Path>) -> SeatMapResult<Self> {
        let path = path.as_ref();
        let f = std::fs::File::open(path).map_err(|e| {
            SeatMapError::validation(format!("open occupancy JSON '{}': {e}", path.display()))
        })?;
        serde_json::from_reader(std::io::BufReader::new(f)).map_err(|e| {
            SeatMapError::serde(format!("parse occupancy JSON '{}': {e}", path.display()))
        })
    }

    /// Whether seat `seat_id` of `section` is occupied. Missing sections read as empty.
    pub fn is_occupied(&self, section: usize, seat_id: usize) -> bool {
        self.sections.get(section).is_some_and(|f| f.get(seat_id))
    }

    /// Mutable flags for `section`, if present.
    pub fn section_mut(&mut self, section: usize) -> Option<&mut SeatFlags> {
        self.sections.get_mut(section)
    }

    /// Check the per-section width contract against `cabin`.
    pub fn validate_against(&self, cabin: &CabinMap) -> SeatMapResult<()> {
        if self.sections.len() < cabin.sections.len() {
            return Err(SeatMapError::validation(format!(
                "occupancy has {} section bitsets, cabin has {} sections",
                self.sections.len(),
                cabin.sections.len()
            )));
        }
        for (i, (flags, section)) in self.sections.iter().zip(&cabin.sections).enumerate() {
            let need = section.seat_count();
            if flags.capacity_bits() < need {
                return Err(SeatMapError::validation(format!(
                    "section {i}: occupancy has {} bits, section has {need} seats",
                    flags.capacity_bits()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cabin/occupancy.rs"]
mod tests;
