use super::*;
use pretty_assertions::assert_eq;

#[test]
fn floor_table() {
    assert_eq!(floor(&Variant::double(2.7)), 2.0);
    assert_eq!(floor(&Variant::double(-2.1)), -3.0);
    assert_eq!(floor(&Variant::long(5)), 5.0);
    assert_eq!(floor(&Variant::string("3.9")), 3.0);
    assert_eq!(floor(&Variant::null()), 0.0);
    assert_eq!(floor(&Variant::array(vec![Variant::long(1)])), 0.0);
}

#[test]
fn ceil_table() {
    assert_eq!(ceil(&Variant::double(2.1)), Variant::double(3.0));
    assert_eq!(ceil(&Variant::double(-2.7)), Variant::double(-2.0));
    assert_eq!(ceil(&Variant::long(5)), Variant::double(5.0));
    assert_eq!(ceil(&Variant::string("3.1")), Variant::double(4.0));
    assert_eq!(ceil(&Variant::array(vec![])), Variant::bool_val(false));
    assert_eq!(ceil(&Variant::object(1)), Variant::bool_val(false));
}

#[test]
fn round_defaults_to_half_up_zero_places() {
    assert_eq!(round(&Variant::double(2.5), None, None), Variant::double(3.0));
    assert_eq!(
        round(&Variant::double(-2.5), None, None),
        Variant::double(-3.0)
    );
    assert_eq!(round(&Variant::double(2.4), None, None), Variant::double(2.0));
}

#[test]
fn round_with_places_and_mode() {
    assert_eq!(
        round(&Variant::double(2.375), Some(&Variant::long(2)), None),
        Variant::double(2.38)
    );
    assert_eq!(
        round(
            &Variant::double(2.5),
            Some(&Variant::long(0)),
            Some(&Variant::long(3))
        ),
        Variant::double(2.0)
    );
    // Negative places round an integer operand to tens.
    assert_eq!(
        round(&Variant::long(1250), Some(&Variant::long(-2)), None),
        Variant::double(1300.0)
    );
}

#[test]
fn round_integer_operand_is_exact() {
    assert_eq!(round(&Variant::long(7), None, None), Variant::double(7.0));
    assert_eq!(
        round(&Variant::long(7), Some(&Variant::long(3)), None),
        Variant::double(7.0)
    );
}

#[test]
fn round_non_coercible_yields_false() {
    assert_eq!(
        round(&Variant::array(vec![]), None, None),
        Variant::bool_val(false)
    );
}

#[test]
fn integer_power_is_exact_up_to_the_edge() {
    assert_eq!(
        pow_function(&Variant::long(2), &Variant::long(62)),
        Variant::long(1 << 62)
    );
    assert_eq!(
        pow_function(&Variant::long(3), &Variant::long(4)),
        Variant::long(81)
    );
    assert_eq!(
        pow_function(&Variant::long(-2), &Variant::long(3)),
        Variant::long(-8)
    );
    assert_eq!(
        pow_function(&Variant::long(7), &Variant::long(0)),
        Variant::long(1)
    );
    assert_eq!(
        pow_function(&Variant::long(0), &Variant::long(5)),
        Variant::long(0)
    );
}

#[test]
fn integer_power_overflow_promotes_seamlessly() {
    let promoted = pow_function(&Variant::long(2), &Variant::long(100));
    assert_eq!(promoted.as_double(), Some(2f64.powi(100)));
}

#[test]
fn non_integer_paths_use_powf() {
    assert_eq!(
        pow_function(&Variant::double(2.0), &Variant::double(0.5)),
        Variant::double(2f64.sqrt())
    );
    assert_eq!(
        pow_function(&Variant::long(2), &Variant::long(-2)),
        Variant::double(0.25)
    );
    assert_eq!(
        pow_function(&Variant::string("2"), &Variant::string("3")),
        Variant::long(8)
    );
}
