use super::*;

#[test]
fn physical_size_scales_and_rounds_up() {
    let c = Canvas {
        width: 1000,
        height: 150,
    };
    assert_eq!(c.physical_size(1.0).unwrap(), (1000, 150));
    assert_eq!(c.physical_size(2.0).unwrap(), (2000, 300));
    assert_eq!(c.physical_size(1.25).unwrap(), (1250, 188));
}

#[test]
fn physical_size_rejects_bad_ratio_and_overflow() {
    let c = Canvas {
        width: 100,
        height: 10,
    };
    assert!(c.physical_size(0.0).is_err());
    assert!(c.physical_size(f64::NAN).is_err());
    assert!(c.physical_size(1000.0).is_err());

    let empty = Canvas {
        width: 0,
        height: 10,
    };
    assert!(empty.physical_size(1.0).is_err());
}

