/// Roman symbols paired with their values, largest first, including the
/// subtractive pairs.
const ROMAN_TABLE: [(u32, &str); 13] = [(1000, "M"),
                                        (900, "CM"),
                                        (500, "D"),
                                        (400, "CD"),
                                        (100, "C"),
                                        (90, "XC"),
                                        (50, "L"),
                                        (40, "XL"),
                                        (10, "X"),
                                        (9, "IX"),
                                        (5, "V"),
                                        (4, "IV"),
                                        (1, "I")];

/// Returns the face value of a single Roman symbol.
const fn symbol_value(symbol: char) -> Option<u32> {
    match symbol {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Decodes a Roman numeral.
///
/// Symbols are read from right to left. A symbol worth strictly less than the
/// one to its right is subtracted; any other symbol is added. The empty string
/// decodes to zero.
///
/// # Returns
/// - `Some(u32)`: The decoded value.
/// - `None`: If the input contains a character that is not a Roman symbol.
///
/// # Example
/// ```
/// use romanus::interpreter::numeral::roman_to_int;
///
/// assert_eq!(roman_to_int("XIV"), Some(14));
/// assert_eq!(roman_to_int("MCMXCIV"), Some(1994));
/// assert_eq!(roman_to_int(""), Some(0));
/// assert_eq!(roman_to_int("X1"), None);
/// ```
#[must_use]
pub fn roman_to_int(roman: &str) -> Option<u32> {
    let mut total: u32 = 0;
    let mut previous = 0;

    for symbol in roman.chars().rev() {
        let value = symbol_value(symbol)?;
        if value < previous {
            total = total.checked_sub(value)?;
        } else {
            total = total.checked_add(value)?;
        }
        previous = value;
    }

    Some(total)
}

/// Encodes a number as a Roman numeral.
///
/// Greedily takes the largest table entry that still fits. Exact for 1 through
/// 3999; zero encodes to the empty string.
///
/// # Example
/// ```
/// use romanus::interpreter::numeral::int_to_roman;
///
/// assert_eq!(int_to_roman(14), "XIV");
/// assert_eq!(int_to_roman(3999), "MMMCMXCIX");
/// assert_eq!(int_to_roman(0), "");
/// ```
#[must_use]
pub fn int_to_roman(mut value: u32) -> String {
    let mut roman = String::new();

    for (step, symbols) in ROMAN_TABLE {
        while value >= step {
            value -= step;
            roman.push_str(symbols);
        }
    }

    roman
}
