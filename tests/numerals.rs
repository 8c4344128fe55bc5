use romanus::interpreter::{
    classifier::{NumeralSystem, Operand},
    numeral::{int_to_roman, roman_to_int},
    parser::tokenize,
};

#[test]
fn every_value_survives_encoding_and_decoding() {
    for n in 1..=3999 {
        let roman = int_to_roman(n);
        assert_eq!(roman_to_int(&roman), Some(n), "round trip failed for {n} ({roman})");
    }
}

/// Builds every canonical numeral from 1 to 3999 digit by digit, without going
/// through the encoder.
fn canonical_numerals() -> Vec<String> {
    const THOUSANDS: [&str; 4] = ["", "M", "MM", "MMM"];
    const HUNDREDS: [&str; 10] = ["", "C", "CC", "CCC", "CD", "D", "DC", "DCC", "DCCC", "CM"];
    const TENS: [&str; 10] = ["", "X", "XX", "XXX", "XL", "L", "LX", "LXX", "LXXX", "XC"];
    const ONES: [&str; 10] = ["", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"];

    let mut numerals = Vec::new();
    for thousands in THOUSANDS {
        for hundreds in HUNDREDS {
            for tens in TENS {
                for ones in ONES {
                    numerals.push(format!("{thousands}{hundreds}{tens}{ones}"));
                }
            }
        }
    }
    numerals.retain(|numeral| !numeral.is_empty());

    numerals
}

#[test]
fn canonical_numerals_are_reproduced() {
    let numerals = canonical_numerals();
    assert_eq!(numerals.len(), 3999);

    for roman in numerals {
        let value = roman_to_int(&roman).unwrap_or_else(|| panic!("{roman} did not decode"));
        assert_eq!(int_to_roman(value), roman);
        assert_eq!(Operand::classify(&roman).system(), Some(NumeralSystem::Roman), "{roman}");
    }
}

#[test]
fn encoded_numerals_are_classified_as_roman() {
    for n in 1..=3999 {
        let roman = int_to_roman(n);
        assert_eq!(Operand::classify(&roman).system(), Some(NumeralSystem::Roman), "{roman}");
    }
}

#[test]
fn zero_and_empty_map_to_each_other() {
    assert_eq!(int_to_roman(0), "");
    assert_eq!(roman_to_int(""), Some(0));
}

#[test]
fn unknown_symbols_are_rejected() {
    assert_eq!(roman_to_int("XZ"), None);
    assert_eq!(roman_to_int("x"), None);
}

#[test]
fn classifier_tags_operands() {
    assert_eq!(Operand::classify("7"), Operand::Decimal("7"));
    assert_eq!(Operand::classify("007"), Operand::Decimal("007"));
    assert_eq!(Operand::classify("VII"), Operand::Roman("VII"));
    assert_eq!(Operand::classify("VX"), Operand::Invalid("VX"));
    assert_eq!(Operand::classify("7I"), Operand::Invalid("7I"));
    assert_eq!(Operand::classify("").system(), None);
}

#[test]
fn tokenizer_collects_every_operator() {
    let raw = tokenize("X*-II");
    assert_eq!(raw.left, "X");
    assert_eq!(raw.operator, "*-");
    assert_eq!(raw.right, "II");

    let raw = tokenize("34");
    assert_eq!(raw.left, "34");
    assert!(raw.operator.is_empty());
    assert!(raw.right.is_empty());

    let raw = tokenize("/8");
    assert!(raw.left.is_empty());
    assert_eq!(raw.operator, "/");
    assert_eq!(raw.right, "8");
}
