//! crates/logger/src/printf.rs
//! `%`-directive formatting for call sites that carry printf-style format strings.
//!
//! Native call sites use `format_args!` through the `*f` methods and the
//! [`debugf!`](crate::debugf!), [`logf!`](crate::logf!) and
//! [`errorf!`](crate::errorf!) macros. Format strings written for a printf
//! engine (stored in configuration, shared with other tools) go through
//! [`Printf`] instead, which renders lazily as a [`Display`](fmt::Display)
//! value:
//!
//! ```
//! use logger::{Logger, Stream, StreamConfig, sprintf};
//! use logger_sink::SharedSink;
//!
//! let logger = Logger::new();
//! let sink = SharedSink::new(Vec::new());
//! logger.set_log_output(sink.clone());
//! logger.set_stream_config(Stream::Log, StreamConfig::bare());
//!
//! logger.logf(format_args!("{}", sprintf!("%-6s|%05.1f|%x", "disk", 3.14159, 255)));
//! assert_eq!(sink.contents_lossy(), "disk  |003.1|ff\n");
//! ```
//!
//! # Directives
//!
//! `%[flags][width][.precision]verb`, with flags `-` (left-justify), `+`
//! (always sign), space (space for positive sign), `0` (zero padding for
//! numbers) and `#` (alternate form).
//!
//! | verb | integers | floats | strings | bools | chars |
//! |------|----------|--------|---------|-------|-------|
//! | `v` | decimal | `g` | as is | `true`/`false` | code point |
//! | `d` | decimal | | | | code point |
//! | `b` `o` `x` `X` | base 2/8/16 | | `x` `X`: hex bytes | | |
//! | `c` `q` `U` | as char / quoted char / `U+0041` | | `q`: quoted | | same |
//! | `f` `F` `e` `E` `g` `G` | | fixed / scientific / shortest | | | |
//! | `s` | | | as is | | |
//! | `t` | | | | `true`/`false` | |
//!
//! Chars are integers (code points) as far as the verbs are concerned.
//! `%q` escapes the way Go's `strconv.Quote` does for control characters:
//! `\n`-style escapes where one exists, `\x1b` for other ASCII controls and
//! `\u0085` for C1 controls; everything else is written as is.
//! `%g` and `%v` on floats use scientific notation when the exponent is below
//! -4 or at least the precision (6 when no precision is given).
//! `%%` writes a literal percent sign. Mismatches are reported inline rather
//! than as errors: `%!d(MISSING)` for a directive without an argument,
//! `%!z(int=5)` for an unsupported verb, `%!(NOVERB)` for a trailing `%` and
//! `%!(EXTRA int=1, string=x)` for unused arguments.

use std::fmt::{self, Write as _};
use std::iter::Peekable;
use std::str::Chars;

/// One argument of a printf-style format.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Arg<'a> {
    /// `true` or `false`.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    Uint(u64),
    /// Floating point number.
    Float(f64),
    /// Unicode scalar value.
    Char(char),
    /// Borrowed text.
    Str(&'a str),
}

macro_rules! arg_from {
    ($variant:ident, $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for Arg<'_> {
                fn from(value: $source) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

arg_from!(Int, i64: i8, i16, i32, i64);
arg_from!(Uint, u64: u8, u16, u32, u64);
arg_from!(Float, f64: f32, f64);
arg_from!(Bool, bool: bool);
arg_from!(Char, char: char);

impl From<isize> for Arg<'_> {
    fn from(value: isize) -> Self {
        Self::Int(value as i64)
    }
}

impl From<usize> for Arg<'_> {
    fn from(value: usize) -> Self {
        Self::Uint(value as u64)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(value: &'a str) -> Self {
        Self::Str(value)
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(value: &'a String) -> Self {
        Self::Str(value)
    }
}

impl Arg<'_> {
    const fn type_name(self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Uint(_) => "uint",
            Self::Float(_) => "float64",
            Self::Char(_) => "int32",
            Self::Str(_) => "string",
        }
    }

    fn render(self, verb: char, spec: &Spec) -> String {
        let rendered = match self {
            Self::Bool(value) => match verb {
                'v' | 't' => Some(spec.pad(if value { "true" } else { "false" })),
                _ => None,
            },
            Self::Int(value) => render_integer(value < 0, value.unsigned_abs(), verb, spec),
            Self::Uint(value) => render_integer(false, value, verb, spec),
            Self::Char(value) => render_integer(false, u64::from(u32::from(value)), verb, spec),
            Self::Float(value) => render_float(value, verb, spec),
            Self::Str(value) => render_str(value, verb, spec),
        };
        rendered.unwrap_or_else(|| format!("%!{verb}({}={})", self.type_name(), self.plain()))
    }

    fn plain(self) -> String {
        self.render('v', &Spec::default())
    }
}

/// Flags, width and precision of one directive.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
struct Spec {
    minus: bool,
    plus: bool,
    space: bool,
    zero: bool,
    sharp: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

impl Spec {
    fn parse(chars: &mut Peekable<Chars<'_>>) -> Self {
        let mut spec = Self::default();
        while let Some(&flag) = chars.peek() {
            match flag {
                '-' => spec.minus = true,
                '+' => spec.plus = true,
                ' ' => spec.space = true,
                '0' => spec.zero = true,
                '#' => spec.sharp = true,
                _ => break,
            }
            chars.next();
        }
        spec.width = parse_number(chars);
        if chars.next_if_eq(&'.').is_some() {
            spec.precision = Some(parse_number(chars).unwrap_or(0));
        }
        spec
    }

    /// Pads `body` with spaces to the field width.
    fn pad(&self, body: &str) -> String {
        let len = body.chars().count();
        let fill = self.width.unwrap_or(0).saturating_sub(len);
        let spaces = " ".repeat(fill);
        if self.minus {
            format!("{body}{spaces}")
        } else {
            format!("{spaces}{body}")
        }
    }

    /// Pads a number made of `sign`, `prefix` and `digits`; zero padding goes
    /// between the prefix and the digits.
    fn pad_number(&self, sign: &str, prefix: &str, digits: &str, zero_allowed: bool) -> String {
        if self.zero && !self.minus && zero_allowed {
            let used = sign.len() + prefix.len() + digits.len();
            let zeros = "0".repeat(self.width.unwrap_or(0).saturating_sub(used));
            format!("{sign}{prefix}{zeros}{digits}")
        } else {
            self.pad(&format!("{sign}{prefix}{digits}"))
        }
    }

    const fn sign(&self, negative: bool) -> &'static str {
        if negative {
            "-"
        } else if self.plus {
            "+"
        } else if self.space {
            " "
        } else {
            ""
        }
    }
}

fn parse_number(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        value = Some(
            value
                .unwrap_or(0)
                .saturating_mul(10)
                .saturating_add(digit as usize),
        );
    }
    value
}

fn render_integer(negative: bool, magnitude: u64, verb: char, spec: &Spec) -> Option<String> {
    let (mut digits, prefix) = match verb {
        'v' | 'd' => (magnitude.to_string(), ""),
        'b' => (format!("{magnitude:b}"), if spec.sharp { "0b" } else { "" }),
        'o' => (format!("{magnitude:o}"), if spec.sharp { "0" } else { "" }),
        'x' => (format!("{magnitude:x}"), if spec.sharp { "0x" } else { "" }),
        'X' => (format!("{magnitude:X}"), if spec.sharp { "0X" } else { "" }),
        'c' | 'q' | 'U' => return render_code_point(negative, magnitude, verb, spec),
        _ => return None,
    };
    if spec.precision == Some(0) && magnitude == 0 {
        return Some(spec.pad(""));
    }
    if let Some(precision) = spec.precision {
        if digits.len() < precision {
            digits.insert_str(0, &"0".repeat(precision - digits.len()));
        }
    }
    Some(spec.pad_number(
        spec.sign(negative),
        prefix,
        &digits,
        spec.precision.is_none(),
    ))
}

fn render_code_point(negative: bool, magnitude: u64, verb: char, spec: &Spec) -> Option<String> {
    let ch = if negative {
        char::REPLACEMENT_CHARACTER
    } else {
        u32::try_from(magnitude)
            .ok()
            .and_then(char::from_u32)
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    };
    let body = match verb {
        'c' => ch.to_string(),
        'q' => quote(std::iter::once(ch), '\''),
        _ => format!("U+{magnitude:04X}"),
    };
    Some(spec.pad(&body))
}

fn render_float(value: f64, verb: char, spec: &Spec) -> Option<String> {
    if value.is_nan() {
        return Some(spec.pad("NaN"));
    }
    if value.is_infinite() {
        let body = if value < 0.0 { "-Inf" } else { "+Inf" };
        return Some(spec.pad(body));
    }

    let magnitude = value.abs();
    let digits = match verb {
        'f' | 'F' => format!("{magnitude:.*}", spec.precision.unwrap_or(6)),
        'e' | 'E' => {
            let text = scientific(magnitude, spec.precision.unwrap_or(6));
            if verb == 'E' { text.to_uppercase() } else { text }
        }
        'v' | 'g' | 'G' => {
            let text = general(magnitude, spec.precision);
            if verb == 'G' { text.to_uppercase() } else { text }
        }
        _ => return None,
    };
    Some(spec.pad_number(spec.sign(value.is_sign_negative()), "", &digits, true))
}

/// Scientific notation with a signed, at least two-digit exponent: `4.2e+01`.
fn scientific(magnitude: f64, precision: usize) -> String {
    let raw = format!("{magnitude:.precision$e}");
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        return raw;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}

/// `%g`: scientific notation when the decimal exponent is below -4 or at
/// least the precision, fixed notation otherwise, trailing zeros dropped.
///
/// Without a precision the digits are the shortest that round-trip and the
/// cut-over exponent is 6.
fn general(magnitude: f64, precision: Option<usize>) -> String {
    let (digits, point) = decimal_digits(magnitude, precision);
    let count = digits.len();

    let (mut precision, cutover) = match precision {
        // Trailing zeros dropped by rounding do not force scientific notation
        // while the digits still cover the integer part.
        Some(precision) if precision > count && count as isize >= point => (precision, count),
        Some(precision) => (precision.max(1), precision.max(1)),
        None => (count, 6),
    };

    let exponent = point - 1;
    if exponent < -4 || exponent >= cutover as isize {
        precision = precision.min(count);
        let mut mantissa = String::with_capacity(precision + 1);
        mantissa.push(char::from(digits.first().copied().unwrap_or(b'0')));
        if precision > 1 {
            mantissa.push('.');
            mantissa.extend(digits[1..precision].iter().map(|&d| char::from(d)));
        }
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs());
    }

    if precision as isize > point {
        precision = count;
    }
    let decimals = (precision as isize - point).max(0);
    let digit_at = |index: isize| {
        usize::try_from(index)
            .ok()
            .and_then(|index| digits.get(index))
            .map_or('0', |&d| char::from(d))
    };

    let mut text: String = if point > 0 {
        (0..point).map(digit_at).collect()
    } else {
        String::from("0")
    };
    if decimals > 0 {
        text.push('.');
        text.extend((0..decimals).map(|offset| digit_at(point + offset)));
    }
    text
}

/// Significant decimal digits of `magnitude` without trailing zeros, and the
/// position of the decimal point relative to the first digit.
///
/// `precision` rounds to that many significant digits; `None` keeps the
/// shortest digits that round-trip. Zero has no digits and point 0.
fn decimal_digits(magnitude: f64, precision: Option<usize>) -> (Vec<u8>, isize) {
    if magnitude == 0.0 {
        return (Vec::new(), 0);
    }
    let raw = match precision {
        Some(precision) => format!("{magnitude:.*e}", precision.max(1) - 1),
        None => format!("{magnitude:e}"),
    };
    let (mantissa, exponent) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
    let exponent: isize = exponent.parse().unwrap_or(0);
    let mut digits: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();
    while digits.len() > 1 && digits.last() == Some(&b'0') {
        digits.pop();
    }
    (digits, exponent + 1)
}

/// Quotes `text` between `delimiter`s with Go-style escapes: `\n`-style
/// escapes for the common controls, `\xXX` for other ASCII controls and
/// `\uXXXX` for the C1 controls.
fn quote(text: impl Iterator<Item = char>, delimiter: char) -> String {
    let mut out = String::new();
    out.push(delimiter);
    for ch in text {
        match ch {
            '\u{7}' => out.push_str("\\a"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{b}' => out.push_str("\\v"),
            '\\' => out.push_str("\\\\"),
            _ if ch == delimiter => {
                out.push('\\');
                out.push(ch);
            }
            _ if ch.is_ascii_control() => {
                let _ = write!(out, "\\x{:02x}", u32::from(ch));
            }
            _ if ch.is_control() => {
                let _ = write!(out, "\\u{:04x}", u32::from(ch));
            }
            _ => out.push(ch),
        }
    }
    out.push(delimiter);
    out
}

fn render_str(value: &str, verb: char, spec: &Spec) -> Option<String> {
    let body = match verb {
        'v' | 's' => match spec.precision {
            Some(precision) => value.chars().take(precision).collect(),
            None => value.to_owned(),
        },
        'q' => quote(value.chars(), '"'),
        'x' => value.bytes().map(|byte| format!("{byte:02x}")).collect(),
        'X' => value.bytes().map(|byte| format!("{byte:02X}")).collect(),
        _ => return None,
    };
    Some(spec.pad(&body))
}

/// A printf-style format string with its arguments, rendered on display.
///
/// Nothing is formatted until the value is displayed, so passing a `Printf`
/// to a disabled stream costs only its construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Printf<'a> {
    format: &'a str,
    args: Vec<Arg<'a>>,
}

impl<'a> Printf<'a> {
    /// Pairs a format string with its arguments.
    #[must_use]
    pub fn new(format: &'a str, args: Vec<Arg<'a>>) -> Self {
        Self { format, args }
    }
}

impl fmt::Display for Printf<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut args = self.args.iter().copied();
        let mut chars = self.format.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' {
                f.write_char(c)?;
                continue;
            }
            let spec = Spec::parse(&mut chars);
            let Some(verb) = chars.next() else {
                f.write_str("%!(NOVERB)")?;
                break;
            };
            if verb == '%' {
                f.write_char('%')?;
                continue;
            }
            match args.next() {
                Some(arg) => f.write_str(&arg.render(verb, &spec))?,
                None => write!(f, "%!{verb}(MISSING)")?,
            }
        }

        let mut extra = args.peekable();
        if extra.peek().is_some() {
            f.write_str("%!(EXTRA ")?;
            for (index, arg) in extra.enumerate() {
                if index > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}={}", arg.type_name(), arg.plain())?;
            }
            f.write_char(')')?;
        }
        Ok(())
    }
}

/// Formats `args` according to the printf-style `format`.
///
/// ```
/// use logger::printf::{Arg, sprintf};
///
/// assert_eq!(sprintf("n=%d", &[Arg::from(42)]), "n=42");
/// assert_eq!(sprintf("%q", &[Arg::from("a\"b")]), r#""a\"b""#);
/// ```
#[must_use]
pub fn sprintf(format: &str, args: &[Arg<'_>]) -> String {
    Printf::new(format, args.to_vec()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(format: &str, args: &[Arg<'_>]) -> String {
        sprintf(format, args)
    }

    #[test]
    fn literal_text_passes_through() {
        assert_eq!(fmt("plain text", &[]), "plain text");
        assert_eq!(fmt("100%%", &[]), "100%");
        assert_eq!(fmt("ünïcödé %s", &["ok".into()]), "ünïcödé ok");
    }

    #[test]
    fn integer_verbs() {
        assert_eq!(fmt("%d", &[Arg::from(-42)]), "-42");
        assert_eq!(fmt("%v", &[Arg::from(7_u8)]), "7");
        assert_eq!(fmt("%b", &[Arg::from(5)]), "101");
        assert_eq!(fmt("%o", &[Arg::from(8)]), "10");
        assert_eq!(fmt("%#o", &[Arg::from(8)]), "010");
        assert_eq!(fmt("%x", &[Arg::from(255)]), "ff");
        assert_eq!(fmt("%X", &[Arg::from(255)]), "FF");
        assert_eq!(fmt("%#x", &[Arg::from(255)]), "0xff");
        assert_eq!(fmt("%c", &[Arg::from(65)]), "A");
        assert_eq!(fmt("%q", &[Arg::from(65)]), "'A'");
        assert_eq!(fmt("%U", &[Arg::from(65)]), "U+0041");
        assert_eq!(fmt("%d", &[Arg::from(i64::MIN)]), "-9223372036854775808");
    }

    #[test]
    fn integer_width_and_flags() {
        assert_eq!(fmt("%5d|", &[Arg::from(42)]), "   42|");
        assert_eq!(fmt("%-5d|", &[Arg::from(42)]), "42   |");
        assert_eq!(fmt("%05d", &[Arg::from(-42)]), "-0042");
        assert_eq!(fmt("%+d", &[Arg::from(42)]), "+42");
        assert_eq!(fmt("% d", &[Arg::from(42)]), " 42");
        assert_eq!(fmt("%.3d", &[Arg::from(7)]), "007");
        assert_eq!(fmt("%08.3d", &[Arg::from(7)]), "     007");
        assert_eq!(fmt("%#08x", &[Arg::from(255)]), "0x0000ff");
        assert_eq!(fmt("%-05d|", &[Arg::from(3)]), "3    |");
        assert_eq!(fmt("[%.0d]", &[Arg::from(0)]), "[]");
        assert_eq!(fmt("[%3.0x]", &[Arg::from(0_u8)]), "[   ]");
        assert_eq!(fmt("[%.0d]", &[Arg::from(5)]), "[5]");
    }

    #[test]
    fn float_verbs() {
        assert_eq!(fmt("%f", &[Arg::from(3.5)]), "3.500000");
        assert_eq!(fmt("%.2f", &[Arg::from(3.14159)]), "3.14");
        assert_eq!(fmt("%8.3f|", &[Arg::from(-3.14159)]), "  -3.142|");
        assert_eq!(fmt("%08.3f", &[Arg::from(-3.14159)]), "-003.142");
        assert_eq!(fmt("%e", &[Arg::from(42.0)]), "4.200000e+01");
        assert_eq!(fmt("%.2E", &[Arg::from(0.00123)]), "1.23E-03");
        assert_eq!(fmt("%v", &[Arg::from(2.5)]), "2.5");
        assert_eq!(fmt("%v", &[Arg::from(42.0)]), "42");
        assert_eq!(fmt("%v", &[Arg::from(1e21)]), "1e+21");
        assert_eq!(fmt("%g", &[Arg::from(0.00001)]), "1e-05");
        assert_eq!(fmt("%+.1f", &[Arg::from(2.0_f32)]), "+2.0");
    }

    #[test]
    fn general_float_switches_notation_at_the_precision() {
        assert_eq!(fmt("%.3g", &[Arg::from(3.14159)]), "3.14");
        assert_eq!(fmt("%.3g", &[Arg::from(1000.0)]), "1e+03");
        assert_eq!(fmt("%.3g", &[Arg::from(100.0)]), "100");
        assert_eq!(fmt("%.2g", &[Arg::from(9.99)]), "10");
        assert_eq!(fmt("%.2g", &[Arg::from(0.000123)]), "0.00012");
        assert_eq!(fmt("%.0g", &[Arg::from(2.7)]), "3");
        assert_eq!(fmt("%.3G", &[Arg::from(1.5e-7)]), "1.5E-07");
        assert_eq!(fmt("%.3g", &[Arg::from(0.0)]), "0");
    }

    #[test]
    fn shortest_float_uses_exponent_from_six() {
        assert_eq!(fmt("%v", &[Arg::from(123456.0)]), "123456");
        assert_eq!(fmt("%v", &[Arg::from(1234567.0)]), "1.234567e+06");
        assert_eq!(fmt("%v", &[Arg::from(100000000.0)]), "1e+08");
        assert_eq!(fmt("%g", &[Arg::from(100000000.0)]), "1e+08");
        assert_eq!(fmt("%v", &[Arg::from(0.0001)]), "0.0001");
        assert_eq!(fmt("%v", &[Arg::from(0.0)]), "0");
        assert_eq!(fmt("%v", &[Arg::from(-0.5)]), "-0.5");
        assert_eq!(fmt("%8.2g|", &[Arg::from(31.4)]), "      31|");
    }

    #[test]
    fn float_specials() {
        assert_eq!(fmt("%f", &[Arg::from(f64::NAN)]), "NaN");
        assert_eq!(fmt("%v", &[Arg::from(f64::INFINITY)]), "+Inf");
        assert_eq!(fmt("%5.1f|", &[Arg::from(f64::NEG_INFINITY)]), " -Inf|");
    }

    #[test]
    fn string_verbs() {
        let name = String::from("disk");
        assert_eq!(fmt("%s", &[Arg::from(&name)]), "disk");
        assert_eq!(fmt("%v", &["x".into()]), "x");
        assert_eq!(fmt("%8s|", &["disk".into()]), "    disk|");
        assert_eq!(fmt("%-8s|", &["disk".into()]), "disk    |");
        assert_eq!(fmt("%.2s", &["disk".into()]), "di");
        assert_eq!(fmt("%q", &["tab\there".into()]), "\"tab\\there\"");
        assert_eq!(fmt("%q", &["esc\x1b[0m".into()]), "\"esc\\x1b[0m\"");
        assert_eq!(fmt("%q", &["nel\u{85}".into()]), "\"nel\\u0085\"");
        assert_eq!(fmt("%q", &["it's \"x\"".into()]), "\"it's \\\"x\\\"\"");
        assert_eq!(fmt("%q", &["\u{7}\u{b}".into()]), "\"\\a\\v\"");
        assert_eq!(fmt("%x", &["hi".into()]), "6869");
        assert_eq!(fmt("%X", &["hi".into()]), "6869");
    }

    #[test]
    fn bool_and_char_verbs() {
        assert_eq!(fmt("%t", &[true.into()]), "true");
        assert_eq!(fmt("%v", &[false.into()]), "false");
        assert_eq!(fmt("%c", &['é'.into()]), "é");
        assert_eq!(fmt("%v", &['a'.into()]), "97");
        assert_eq!(fmt("%q", &['\n'.into()]), "'\\n'");
        assert_eq!(fmt("%q", &['\''.into()]), "'\\''");
        assert_eq!(fmt("%q", &['"'.into()]), "'\"'");
        assert_eq!(fmt("%q", &['\u{1b}'.into()]), "'\\x1b'");
    }

    #[test]
    fn mismatches_are_reported_inline() {
        assert_eq!(fmt("%d %d", &[Arg::from(1)]), "1 %!d(MISSING)");
        assert_eq!(fmt("%z", &[Arg::from(5)]), "%!z(int=5)");
        assert_eq!(fmt("%d", &["x".into()]), "%!d(string=x)");
        assert_eq!(fmt("%s", &[true.into()]), "%!s(bool=true)");
        assert_eq!(fmt("trailing %", &[]), "trailing %!(NOVERB)");
        assert_eq!(
            fmt("%d", &[Arg::from(1), Arg::from(2), "x".into()]),
            "1%!(EXTRA int=2, string=x)"
        );
    }

    #[test]
    fn printf_macro_collects_arguments() {
        let host = String::from("db1");
        let rendered = crate::sprintf!("%s:%d", &host, 5432_u16).to_string();
        assert_eq!(rendered, "db1:5432");
        assert_eq!(crate::sprintf!("none").to_string(), "none");
    }
}
