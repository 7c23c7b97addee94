/// The type of value an option takes on the Cli.
///
/// An option without a `ValueType` is a boolean flag (it takes no value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Any text, taken verbatim.
    String,
    /// Unsigned decimal digits only (ex: `42`).
    Integer,
    /// Digits, a single dot, digits (ex: `3.14`).
    Decimal,
}

impl ValueType {
    /// The lowercase name of this type, as used in messages.
    pub fn name(&self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Integer => "integer",
            ValueType::Decimal => "decimal",
        }
    }

    pub(crate) fn article(&self) -> &'static str {
        match self {
            ValueType::Integer => "an",
            ValueType::String | ValueType::Decimal => "a",
        }
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An unsigned integer of any size, as given on the Cli.
///
/// Held as its decimal digits, without leading zeros, so no digit string is ever out of range.
///
/// ### Example
/// ```
/// # use flagparse_builder as flagparse;
/// use flagparse::Integer;
///
/// let small = Integer::from(42u64);
/// assert_eq!(small.digits(), "42");
/// assert_eq!(small.to_u64(), Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Integer(String);

impl Integer {
    /// Build from text which is known to match `^[0-9]+$`.
    pub(crate) fn from_digits(digits: &str) -> Self {
        debug_assert!(!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()));
        let trimmed = digits.trim_start_matches('0');

        if trimmed.is_empty() {
            Integer("0".to_string())
        } else {
            Integer(trimmed.to_string())
        }
    }

    /// The decimal digits (ex: `"007"` is held as `"7"`).
    pub fn digits(&self) -> &str {
        &self.0
    }

    /// The integer as a `u64`.
    /// `None` when it does not fit.
    pub fn to_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Integer(value.to_string())
    }
}

impl std::fmt::Display for Integer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A converted value, as delivered to an option's callback.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The value of a boolean flag.
    /// Always `true` once the flag has been seen.
    Switch(bool),
    /// The value of a [`ValueType::String`] option.
    Text(String),
    /// The value of a [`ValueType::Integer`] option.
    Integer(Integer),
    /// The value of a [`ValueType::Decimal`] option.
    Decimal(f64),
}

impl Value {
    /// The boolean, if this is a `Switch`.
    pub fn as_switch(&self) -> Option<bool> {
        match self {
            Value::Switch(b) => Some(*b),
            _ => None,
        }
    }

    /// The text, if this is a `Text`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// The integer, if this is an `Integer`.
    pub fn as_integer(&self) -> Option<&Integer> {
        match self {
            Value::Integer(i) => Some(i),
            _ => None,
        }
    }

    /// The integer as a `u64`, if this is an `Integer` which fits.
    pub fn as_u64(&self) -> Option<u64> {
        self.as_integer().and_then(Integer::to_u64)
    }

    /// The decimal, if this is a `Decimal`.
    pub fn as_decimal(&self) -> Option<f64> {
        match self {
            Value::Decimal(d) => Some(*d),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Switch(b) => write!(f, "{b}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Decimal(d) => write!(f, "{d}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ValueType::String, "string", "a")]
    #[case(ValueType::Integer, "integer", "an")]
    #[case(ValueType::Decimal, "decimal", "a")]
    fn value_type_names(
        #[case] value_type: ValueType,
        #[case] name: &str,
        #[case] article: &str,
    ) {
        assert_eq!(value_type.name(), name);
        assert_eq!(value_type.to_string(), name);
        assert_eq!(value_type.article(), article);
    }

    #[test]
    fn value_accessors() {
        assert_eq!(Value::Switch(true).as_switch(), Some(true));
        assert_eq!(Value::Switch(true).as_str(), None);
        assert_eq!(Value::Text("abc".to_string()).as_str(), Some("abc"));
        assert_eq!(Value::Integer(Integer::from(7u64)).as_integer(), Some(&Integer::from(7u64)));
        assert_eq!(Value::Integer(Integer::from(7u64)).as_u64(), Some(7));
        assert_eq!(Value::Integer(Integer::from(7u64)).as_decimal(), None);
        assert_eq!(Value::Text("7".to_string()).as_u64(), None);
        assert_eq!(Value::Decimal(1.5).as_decimal(), Some(1.5));
    }

    #[rstest]
    #[case("0", "0", Some(0))]
    #[case("000", "0", Some(0))]
    #[case("007", "7", Some(7))]
    #[case("18446744073709551615", "18446744073709551615", Some(u64::MAX))]
    #[case("18446744073709551616", "18446744073709551616", None)]
    #[case("00099999999999999999999999", "99999999999999999999999", None)]
    fn integer_from_digits(#[case] raw: &str, #[case] digits: &str, #[case] expected: Option<u64>) {
        let integer = Integer::from_digits(raw);
        assert_eq!(integer.digits(), digits);
        assert_eq!(integer.to_string(), digits);
        assert_eq!(integer.to_u64(), expected);
    }

    #[test]
    fn integer_from_u64_matches_digits() {
        assert_eq!(Integer::from(0u64), Integer::from_digits("0"));
        assert_eq!(Integer::from(12u64), Integer::from_digits("0012"));
        assert_eq!(Integer::from(u64::MAX), Integer::from_digits(&u64::MAX.to_string()));
    }

    #[rstest]
    #[case(Value::Switch(true), "true")]
    #[case(Value::Text("v1.0.0".to_string()), "v1.0.0")]
    #[case(Value::Integer(Integer::from(12u64)), "12")]
    #[case(Value::Decimal(0.25), "0.25")]
    fn value_display(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }
}
