use super::*;

#[test]
fn rank_follows_declaration_order() {
    let ranks: Vec<u8> = SeatClass::ALL.iter().map(|c| c.rank()).collect();
    assert_eq!(ranks, vec![0, 1, 2, 3]);
    assert!(SeatClass::Business > SeatClass::Economy);
}

#[test]
fn every_class_has_positive_metrics() {
    for class in SeatClass::ALL {
        let m = class.metrics();
        assert!(m.width > 0.0 && m.length > 0.0, "{class:?}");
        assert!(m.sprite_width > 0.0 && m.sprite_height > 0.0, "{class:?}");
        assert!(m.pad_x >= 0.0 && m.pad_y >= 0.0, "{class:?}");
    }
}

#[test]
fn advances_combine_padding_and_extent() {
    assert_eq!(SeatClass::Economy.seat_advance(), 19.0);
    assert_eq!(SeatClass::Economy.row_advance(), 20.0);
    assert_eq!(SeatClass::Business.row_advance(), 38.0);
    assert_eq!(max_sprite_extent(), 32.0);
}

#[test]
fn class_names_are_snake_case_in_json() {
    let c: SeatClass = serde_json::from_str("\"premium_economy\"").unwrap();
    assert_eq!(c, SeatClass::PremiumEconomy);
    assert_eq!(
        serde_json::to_string(&SeatClass::EconomyEmergency).unwrap(),
        "\"economy_emergency\""
    );
}
