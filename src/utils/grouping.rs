//! Digit grouping and decimal marks
//!
//! Inputs are plain non-negative decimal text with `.` as the decimal point
//! (as produced by `format!("{:.2}", x)` or integer `to_string()`). Callers
//! strip the sign before grouping and round before grouping; extra fraction
//! digits are truncated, never rounded.

/// Grouping and decimal characters for one locale convention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Separators {
    pub grouping: char,
    pub decimal: char,
}

impl Separators {
    /// `1,234,567.89`
    pub const STANDARD: Separators = Separators {
        grouping: ',',
        decimal: '.',
    };

    /// `1.234.567,89`
    pub const SWAPPED: Separators = Separators {
        grouping: '.',
        decimal: ',',
    };

    pub fn for_swap(separator_swap: bool) -> Self {
        if separator_swap {
            Self::SWAPPED
        } else {
            Self::STANDARD
        }
    }
}

/// Group with `,` and keep up to `max_decimals` fraction digits after `.`
///
/// # Examples
/// ```
/// use wallet_units::utils::grouping::group;
///
/// assert_eq!(group("1234567", 0), "1,234,567");
/// assert_eq!(group("1234.5678", 2), "1,234.56");
/// assert_eq!(group("904233", 3), "904,233");
/// ```
pub fn group(number: &str, max_decimals: usize) -> String {
    group_with(number, max_decimals, Separators::STANDARD)
}

/// Group with `.` and use `,` as the decimal mark
///
/// # Examples
/// ```
/// use wallet_units::utils::grouping::group_swapped;
///
/// assert_eq!(group_swapped("1234567.89", 2), "1.234.567,89");
/// ```
pub fn group_swapped(number: &str, max_decimals: usize) -> String {
    group_with(number, max_decimals, Separators::SWAPPED)
}

/// Group the integer part every three digits from the right and append the
/// (truncated) fraction with the given decimal mark.
pub fn group_with(number: &str, max_decimals: usize, separators: Separators) -> String {
    let (integer, fraction) = match number.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (number, ""),
    };

    let chars: Vec<char> = integer.chars().collect();
    let mut result = String::with_capacity(number.len() + chars.len() / 3 + 1);
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(separators.grouping);
        }
        result.push(*c);
    }
    if result.is_empty() {
        result.push('0');
    }

    let kept: String = fraction.chars().take(max_decimals).collect();
    if !kept.is_empty() {
        result.push(separators.decimal);
        result.push_str(&kept);
    }

    result
}
