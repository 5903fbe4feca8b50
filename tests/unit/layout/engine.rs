use super::*;
use crate::cabin::model::{Seat, Section};

fn seat(class: SeatClass, y_offset: f64) -> Seat {
    Seat { class, y_offset }
}

fn row(x_offset: f64, y_offset: f64, seats: Vec<Seat>) -> Row {
    Row {
        x_offset,
        y_offset,
        seats,
    }
}

fn eco_row(x_offset: f64, y_offset: f64, n: usize) -> Row {
    row(x_offset, y_offset, vec![seat(SeatClass::Economy, 0.0); n])
}

fn mixed_cabin() -> CabinMap {
    CabinMap::new(vec![
        Section {
            rows: vec![
                row(
                    5.0,
                    3.0,
                    vec![
                        seat(SeatClass::Business, 0.0),
                        seat(SeatClass::Business, 10.0),
                    ],
                ),
                row(0.0, 0.0, vec![]),
                row(
                    1.0,
                    2.0,
                    vec![
                        seat(SeatClass::PremiumEconomy, 0.0),
                        seat(SeatClass::Economy, 1.5),
                    ],
                ),
            ],
        },
        Section { rows: vec![] },
        Section {
            rows: vec![eco_row(7.0, 0.0, 3), eco_row(0.0, 50.0, 3)],
        },
    ])
}

#[test]
fn single_seat_origin_is_its_own_offsets() {
    let cabin = CabinMap::new(vec![Section {
        rows: vec![row(12.0, 4.0, vec![seat(SeatClass::Business, 2.5)])],
    }]);
    assert_eq!(
        compute_origin(&cabin, 0, 0, 0).unwrap(),
        Point::new(12.0, 6.5)
    );
}

#[test]
fn same_class_seats_step_by_pad_plus_width() {
    let cabin = CabinMap::new(vec![Section {
        rows: vec![eco_row(0.0, 0.0, 5)],
    }]);
    let step = SeatClass::Economy.metrics().pad_y + SeatClass::Economy.metrics().width;
    let ys: Vec<f64> = (0..5)
        .map(|k| compute_origin(&cabin, 0, 0, k).unwrap().y)
        .collect();
    for pair in ys.windows(2) {
        assert_eq!(pair[1] - pair[0], step);
    }
}

#[test]
fn consecutive_rows_step_by_previous_dominant_class() {
    let cabin = CabinMap::new(vec![Section {
        rows: vec![
            row(
                0.0,
                0.0,
                vec![
                    seat(SeatClass::Economy, 0.0),
                    seat(SeatClass::Business, 0.0),
                ],
            ),
            eco_row(0.0, 0.0, 1),
        ],
    }]);
    let a = compute_origin(&cabin, 0, 0, 0).unwrap();
    let b = compute_origin(&cabin, 0, 1, 0).unwrap();
    let m = SeatClass::Business.metrics();
    assert_eq!(b.x - a.x, m.pad_x + m.length);
}

#[test]
fn rows_carry_x_across_sections() {
    let cabin = CabinMap::new(vec![
        Section {
            rows: vec![eco_row(0.0, 0.0, 2)],
        },
        Section {
            rows: vec![eco_row(4.0, 0.0, 2)],
        },
    ]);
    let first = compute_origin(&cabin, 0, 0, 0).unwrap();
    let second = compute_origin(&cabin, 1, 0, 0).unwrap();
    assert_eq!(first.x, 0.0);
    assert_eq!(second.x, 4.0 + SeatClass::Economy.row_advance());
}

#[test]
fn row_y_offset_is_applied_once() {
    let cabin = CabinMap::new(vec![Section {
        rows: vec![eco_row(0.0, 50.0, 3)],
    }]);
    let step = SeatClass::Economy.seat_advance();
    assert_eq!(compute_origin(&cabin, 0, 0, 0).unwrap().y, 50.0);
    assert_eq!(compute_origin(&cabin, 0, 0, 1).unwrap().y, 50.0 + step);
    assert_eq!(compute_origin(&cabin, 0, 0, 2).unwrap().y, 50.0 + 2.0 * step);
}

#[test]
fn empty_row_contributes_offset_and_economy_advance() {
    let cabin = mixed_cabin();
    let business_row = compute_origin(&cabin, 0, 0, 0).unwrap().x;
    let after_empty = compute_origin(&cabin, 0, 2, 0).unwrap().x;
    assert_eq!(business_row, 5.0);
    assert_eq!(
        after_empty,
        5.0 + SeatClass::Business.row_advance() + SeatClass::Economy.row_advance() + 1.0
    );
}

#[test]
fn mixed_row_uses_each_seats_own_class_for_spacing() {
    let cabin = mixed_cabin();
    let first = compute_origin(&cabin, 0, 2, 0).unwrap();
    let second = compute_origin(&cabin, 0, 2, 1).unwrap();
    assert_eq!(first.y, 2.0);
    assert_eq!(second.y, 2.0 + 1.5 + SeatClass::Economy.seat_advance());
}

#[test]
fn layout_matches_point_queries_and_is_deterministic() {
    let cabin = mixed_cabin();
    let a = layout_cabin(&cabin);
    let b = layout_cabin(&cabin);
    assert_eq!(a, b);
    assert_eq!(a.len(), cabin.total_seats());
    for p in a.placements() {
        let o = compute_origin(&cabin, p.section, p.row, p.seat).unwrap();
        assert_eq!(o, p.origin, "{p:?}");
        assert_eq!(p.size, p.class.sprite_size());
    }
}

#[test]
fn seat_ids_restart_per_section_and_run_row_major() {
    let layout = layout_cabin(&mixed_cabin());
    let ids: Vec<(usize, usize)> = layout
        .placements()
        .iter()
        .map(|p| (p.section, p.seat_id))
        .collect();
    assert_eq!(
        ids,
        vec![
            (0, 0),
            (0, 1),
            (0, 2),
            (0, 3),
            (2, 0),
            (2, 1),
            (2, 2),
            (2, 3),
            (2, 4),
            (2, 5),
        ]
    );
}

#[test]
fn two_row_scenario_coordinates() {
    let cabin = CabinMap::new(vec![Section {
        rows: vec![eco_row(0.0, 0.0, 3), eco_row(0.0, 50.0, 3)],
    }]);
    let origins: Vec<Point> = layout_cabin(&cabin)
        .placements()
        .iter()
        .map(|p| p.origin)
        .collect();
    assert_eq!(
        origins,
        vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 19.0),
            Point::new(0.0, 38.0),
            Point::new(20.0, 50.0),
            Point::new(20.0, 69.0),
            Point::new(20.0, 88.0),
        ]
    );
}

#[test]
fn out_of_range_indices_are_rejected() {
    let cabin = mixed_cabin();
    assert!(compute_origin(&cabin, 9, 0, 0).is_err());
    assert!(compute_origin(&cabin, 0, 9, 0).is_err());
    assert!(compute_origin(&cabin, 0, 1, 0).is_err());
    assert!(compute_origin(&cabin, 1, 0, 0).is_err());
}

#[test]
fn bounds_and_hit_testing() {
    let cabin = CabinMap::new(vec![Section {
        rows: vec![eco_row(0.0, 0.0, 2)],
    }]);
    let layout = layout_cabin(&cabin);
    assert_eq!(layout.bounds(), Some(Rect::new(0.0, 0.0, 18.0, 37.0)));
    assert_eq!(layout.seat_at(Point::new(9.0, 25.0)).map(|p| p.seat), Some(1));
    assert!(layout.seat_at(Point::new(30.0, 5.0)).is_none());
    assert!(layout_cabin(&CabinMap::default()).bounds().is_none());
}
