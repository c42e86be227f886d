//! Text conversion for console values
//!
//! Each supported value kind has exactly one canonical, locale-independent
//! text form. Conversion is pure: the same value always renders the same
//! text, and nothing here touches the boundary.

use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use core::fmt;

/// Lower bound (inclusive) of the plain decimal range for floats
const DECIMAL_MIN: f64 = 1e-3;

/// Upper bound (exclusive) of the plain decimal range for floats
const DECIMAL_MAX: f64 = 1e7;

/// A value handed to the console, tagged with its kind
///
/// The kind is fixed when the value is built, so the writer never has to
/// guess how to render it.
#[derive(Clone, Copy)]
pub enum Value<'a> {
    Bool(bool),
    Char(char),
    Chars(&'a [char]),
    Str(&'a str),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    /// Rendered through the value's own `Display`; `None` is an absent value
    Opaque(Option<&'a dyn fmt::Display>),
}

impl<'a> Value<'a> {
    /// The absent opaque value
    pub const ABSENT: Value<'a> = Value::Opaque(None);

    /// Wrap any displayable value as an opaque value
    pub fn display<T: fmt::Display>(value: &'a T) -> Self {
        Value::Opaque(Some(value))
    }

    /// Kind name, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Char(_) => "char",
            Value::Chars(_) => "chars",
            Value::Str(_) => "str",
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::Float(_) => "float",
            Value::Double(_) => "double",
            Value::Opaque(_) => "opaque",
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = canonical_text(self, crate::config::DEFAULT_ABSENT_TEXT);
        write!(f, "{}({:?})", self.kind(), text)
    }
}

impl From<bool> for Value<'_> {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<char> for Value<'_> {
    fn from(v: char) -> Self {
        Value::Char(v)
    }
}

impl<'a> From<&'a [char]> for Value<'a> {
    fn from(v: &'a [char]) -> Self {
        Value::Chars(v)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(v: &'a str) -> Self {
        Value::Str(v)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(v: &'a String) -> Self {
        Value::Str(v.as_str())
    }
}

// Narrow integers widen to int, like the host runtime's own promotion
impl From<i8> for Value<'_> {
    fn from(v: i8) -> Self {
        Value::Int(v.into())
    }
}

impl From<u8> for Value<'_> {
    fn from(v: u8) -> Self {
        Value::Int(v.into())
    }
}

impl From<i16> for Value<'_> {
    fn from(v: i16) -> Self {
        Value::Int(v.into())
    }
}

impl From<u16> for Value<'_> {
    fn from(v: u16) -> Self {
        Value::Int(v.into())
    }
}

impl From<i32> for Value<'_> {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<u32> for Value<'_> {
    fn from(v: u32) -> Self {
        Value::Long(v.into())
    }
}

impl From<i64> for Value<'_> {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<f32> for Value<'_> {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<f64> for Value<'_> {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

/// Canonical text of `value`
///
/// # Arguments
/// * `value` - Value to render
/// * `absent_text` - Text used for an absent opaque value
pub fn canonical_text<'a>(value: &Value<'a>, absent_text: &'static str) -> Cow<'a, str> {
    match *value {
        Value::Bool(v) => Cow::Borrowed(bool_text(v)),
        Value::Char(v) => Cow::Owned(v.to_string()),
        Value::Chars(v) => Cow::Owned(v.iter().collect()),
        Value::Str(v) => Cow::Borrowed(v),
        Value::Int(v) => Cow::Owned(v.to_string()),
        Value::Long(v) => Cow::Owned(v.to_string()),
        Value::Float(v) => Cow::Owned(float_text(v)),
        Value::Double(v) => Cow::Owned(double_text(v)),
        Value::Opaque(Some(v)) => Cow::Owned(v.to_string()),
        Value::Opaque(None) => Cow::Borrowed(absent_text),
    }
}

pub fn bool_text(v: bool) -> &'static str {
    if v {
        "true"
    } else {
        "false"
    }
}

/// Text of a narrow float
///
/// Plain decimal for magnitudes in `[1e-3, 1e7)` and for zero, otherwise
/// `<mantissa>E<exponent>`. The mantissa always carries a fraction.
pub fn float_text(v: f32) -> String {
    if let Some(special) = special_text(v.is_nan(), v.is_infinite(), v.is_sign_negative()) {
        return special.to_string();
    }

    let magnitude = f64::from(v.abs());
    if magnitude == 0.0 || (DECIMAL_MIN..DECIMAL_MAX).contains(&magnitude) {
        alloc::format!("{:?}", v)
    } else {
        scientific(&alloc::format!("{:e}", v))
    }
}

/// Text of a wide float, same rules as [`float_text`]
pub fn double_text(v: f64) -> String {
    if let Some(special) = special_text(v.is_nan(), v.is_infinite(), v.is_sign_negative()) {
        return special.to_string();
    }

    let magnitude = v.abs();
    if magnitude == 0.0 || (DECIMAL_MIN..DECIMAL_MAX).contains(&magnitude) {
        alloc::format!("{:?}", v)
    } else {
        scientific(&alloc::format!("{:e}", v))
    }
}

fn special_text(nan: bool, infinite: bool, negative: bool) -> Option<&'static str> {
    match (nan, infinite, negative) {
        (true, _, _) => Some("NaN"),
        (false, true, false) => Some("Infinity"),
        (false, true, true) => Some("-Infinity"),
        _ => None,
    }
}

/// Rewrite Rust's shortest `LowerExp` output (`1.5e-5`) as `1.5E-5`
fn scientific(lower_exp: &str) -> String {
    let (mantissa, exponent) = lower_exp.split_once('e').unwrap_or((lower_exp, "0"));

    let mut text = String::with_capacity(lower_exp.len() + 3);
    text.push_str(mantissa);
    if !mantissa.contains('.') {
        text.push_str(".0");
    }
    text.push('E');
    text.push_str(exponent);
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: Value<'_>) -> String {
        canonical_text(&value, "null").into_owned()
    }

    #[test]
    fn test_bool_and_char() {
        assert_eq!(text(true.into()), "true");
        assert_eq!(text(false.into()), "false");
        assert_eq!(text('A'.into()), "A");
        assert_eq!(text('é'.into()), "é");
    }

    #[test]
    fn test_sequences() {
        let chars = ['h', 'i', '!'];
        assert_eq!(text(Value::from(&chars[..])), "hi!");
        let empty: [char; 0] = [];
        assert_eq!(text(Value::from(&empty[..])), "");
        assert_eq!(text("as-is \t text".into()), "as-is \t text");

        let owned = String::from("owned");
        assert_eq!(text((&owned).into()), "owned");
    }

    #[test]
    fn test_integers() {
        assert_eq!(text(0i32.into()), "0");
        assert_eq!(text(42i32.into()), "42");
        assert_eq!(text((-7i32).into()), "-7");
        assert_eq!(text(i32::MIN.into()), "-2147483648");
        assert_eq!(text(i64::MAX.into()), "9223372036854775807");
        assert_eq!(text(i64::MIN.into()), "-9223372036854775808");
    }

    #[test]
    fn test_narrow_integers_widen() {
        assert!(matches!(Value::from(-3i8), Value::Int(-3)));
        assert!(matches!(Value::from(200u8), Value::Int(200)));
        assert!(matches!(Value::from(u32::MAX), Value::Long(4294967295)));
    }

    #[test]
    fn test_double_decimal_range() {
        assert_eq!(double_text(1.0), "1.0");
        assert_eq!(double_text(-2.5), "-2.5");
        assert_eq!(double_text(0.001), "0.001");
        assert_eq!(double_text(1234567.0), "1234567.0");
        assert_eq!(double_text(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_double_exponential_range() {
        assert_eq!(double_text(1e7), "1.0E7");
        assert_eq!(double_text(-2.5e10), "-2.5E10");
        assert_eq!(double_text(1.5e-5), "1.5E-5");
        assert_eq!(double_text(0.0001), "1.0E-4");
    }

    #[test]
    fn test_double_special_values() {
        assert_eq!(double_text(0.0), "0.0");
        assert_eq!(double_text(-0.0), "-0.0");
        assert_eq!(double_text(f64::NAN), "NaN");
        assert_eq!(double_text(f64::INFINITY), "Infinity");
        assert_eq!(double_text(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_float_uses_narrow_precision() {
        assert_eq!(float_text(0.1), "0.1");
        assert_eq!(float_text(3.25), "3.25");
        assert_eq!(float_text(1e10), "1.0E10");
        assert_eq!(float_text(f32::NAN), "NaN");
        assert_eq!(float_text(-0.0), "-0.0");
    }

    #[test]
    fn test_float_rendering_is_deterministic() {
        for v in [1.0e-9, 3.0e-3, 12.5, 9_999_999.0, 6.02e23] {
            assert_eq!(double_text(v), double_text(v));
        }
    }

    #[test]
    fn test_opaque_values() {
        struct Point(i32, i32);

        impl fmt::Display for Point {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "({}, {})", self.0, self.1)
            }
        }

        let point = Point(3, -4);
        assert_eq!(text(Value::display(&point)), "(3, -4)");
        assert_eq!(text(Value::ABSENT), "null");
        assert_eq!(canonical_text(&Value::ABSENT, "<absent>"), "<absent>");
    }

    #[test]
    fn test_borrowed_where_possible() {
        assert!(matches!(canonical_text(&Value::Str("x"), "null"), Cow::Borrowed("x")));
        assert!(matches!(canonical_text(&Value::Bool(true), "null"), Cow::Borrowed("true")));
    }

    #[test]
    fn test_debug_shows_kind_and_text() {
        assert_eq!(alloc::format!("{:?}", Value::Long(-9)), "long(\"-9\")");
    }
}
