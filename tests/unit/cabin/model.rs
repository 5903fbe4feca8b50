use super::*;

fn seat(class: SeatClass) -> Seat {
    Seat {
        class,
        y_offset: 0.0,
    }
}

#[test]
fn dominant_class_picks_highest_rank() {
    let row = Row {
        seats: vec![
            seat(SeatClass::Economy),
            seat(SeatClass::PremiumEconomy),
            seat(SeatClass::EconomyEmergency),
        ],
        ..Row::default()
    };
    assert_eq!(row.dominant_class(), SeatClass::PremiumEconomy);
}

#[test]
fn empty_row_is_economy() {
    assert_eq!(Row::default().dominant_class(), SeatClass::Economy);
}

#[test]
fn seat_counts_per_section_and_total() {
    let cabin = CabinMap::new(vec![
        Section {
            rows: vec![
                Row {
                    seats: vec![seat(SeatClass::Business); 2],
                    ..Row::default()
                },
                Row::default(),
            ],
        },
        Section {
            rows: vec![Row {
                seats: vec![seat(SeatClass::Economy); 6],
                ..Row::default()
            }],
        },
    ]);
    assert_eq!(cabin.seat_count(0), Some(2));
    assert_eq!(cabin.seat_count(1), Some(6));
    assert_eq!(cabin.seat_count(2), None);
    assert_eq!(cabin.total_seats(), 8);
}

#[test]
fn json_defaults_fill_missing_fields() {
    let cabin = CabinMap::from_json_str(
        r#"{"sections":[{"rows":[{"x_offset":3,"seats":[{},{"class":"business","y_offset":2}]}]}]}"#,
    )
    .unwrap();
    let row = &cabin.sections[0].rows[0];
    assert_eq!(row.x_offset, 3.0);
    assert_eq!(row.y_offset, 0.0);
    assert_eq!(row.seats[0], seat(SeatClass::Economy));
    assert_eq!(row.seats[1].class, SeatClass::Business);
    assert_eq!(row.seats[1].y_offset, 2.0);
}

#[test]
fn unknown_class_is_a_parse_error() {
    let err = CabinMap::from_json_str(r#"{"sections":[{"rows":[{"seats":[{"class":"first"}]}]}]}"#)
        .unwrap_err();
    assert!(matches!(err, SeatMapError::Serde(_)));
}

#[test]
fn validate_rejects_non_finite_offsets() {
    let mut cabin = CabinMap::new(vec![Section {
        rows: vec![Row {
            seats: vec![seat(SeatClass::Economy)],
            ..Row::default()
        }],
    }]);
    assert!(cabin.validate().is_ok());
    cabin.sections[0].rows[0].seats[0].y_offset = f64::INFINITY;
    assert!(cabin.validate().is_err());
}
