use super::*;
use crate::cabin::class::SeatClass;
use crate::cabin::model::{Row, Seat, Section};

fn cabin_with(counts: &[usize]) -> CabinMap {
    CabinMap::new(
        counts
            .iter()
            .map(|&n| Section {
                rows: vec![Row {
                    seats: vec![
                        Seat {
                            class: SeatClass::Economy,
                            y_offset: 0.0,
                        };
                        n
                    ],
                    ..Row::default()
                }],
            })
            .collect(),
    )
}

#[test]
fn bit_string_is_read_left_to_right() {
    let f = SeatFlags::from_bit_str("0b010000").unwrap();
    assert_eq!(f.capacity_bits(), 6);
    assert!(!f.get(0));
    assert!(f.get(1));
    assert!(!f.get(4));
    assert_eq!(f.count_ones(), 1);
}

#[test]
fn bit_string_accepts_separators_and_rejects_junk() {
    let f = SeatFlags::from_bit_str("1111_0000_1").unwrap();
    assert_eq!(f.capacity_bits(), 9);
    assert_eq!(f.count_ones(), 5);
    assert!(f.get(8));
    assert!(SeatFlags::from_bit_str("0102").is_err());
}

#[test]
fn set_toggle_and_grow_across_words() {
    let mut f = SeatFlags::with_capacity(4);
    assert_eq!(f.words().len(), 1);
    f.set(40, true);
    assert_eq!(f.capacity_bits(), 41);
    assert_eq!(f.words().len(), 2);
    assert!(f.get(40));
    assert!(!f.toggle(40));
    assert!(f.toggle(3));
    assert_eq!(f.count_ones(), 1);
    assert!(!f.get(1000));
}

#[test]
fn words_are_lsb_first() {
    let f = SeatFlags::from_words(vec![0b101]);
    assert_eq!(f.capacity_bits(), 32);
    assert!(f.get(0));
    assert!(!f.get(1));
    assert!(f.get(2));
}

#[test]
fn occupancy_json_accepts_strings_and_words() {
    let occ = OccupancyState::from_json_str(r#"{"sections":["0b010000",[5]]}"#).unwrap();
    assert!(occ.is_occupied(0, 1));
    assert!(occ.is_occupied(1, 0));
    assert!(occ.is_occupied(1, 2));
    assert!(!occ.is_occupied(2, 0));

    let text = serde_json::to_string(&OccupancyState::new(vec![
        SeatFlags::from_bit_str("0110").unwrap(),
    ]))
    .unwrap();
    assert_eq!(text, r#"{"sections":["0110"]}"#);
}

#[test]
fn malformed_occupancy_json_is_a_parse_error() {
    let err = OccupancyState::from_json_str(r#"{"sections":["01x0"]}"#).unwrap_err();
    assert!(matches!(err, SeatMapError::Serde(_)), "{err}");
    let err = OccupancyState::from_json_str("{").unwrap_err();
    assert!(matches!(err, SeatMapError::Serde(_)));
}

#[test]
fn validate_against_checks_width_and_section_count() {
    let cabin = cabin_with(&[6, 3]);
    let ok = OccupancyState::empty_for(&cabin);
    assert!(ok.validate_against(&cabin).is_ok());

    let short = OccupancyState::new(vec![
        SeatFlags::from_bit_str("000000").unwrap(),
        SeatFlags::from_bit_str("00").unwrap(),
    ]);
    assert!(short.validate_against(&cabin).is_err());

    let missing = OccupancyState::new(vec![SeatFlags::with_capacity(6)]);
    assert!(missing.validate_against(&cabin).is_err());
}
