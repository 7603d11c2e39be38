//! Other formats back to a canonical colour.
//!
//! Every decoder returns `None` when the input does not have the shape of its
//! format (wrong number of comma separated parts, or no number at all for the
//! packed integer). Once the shape matches, decoding cannot fail: components
//! are clamped into range and unparseable parts count as 0.

use super::Rgb;

/// Parse the leading integer of `token`, or return `default`.
///
/// Leading whitespace, an optional sign and an optional `0x` prefix are
/// accepted, anything after the digits is ignored: `"42px"` is 42, `"0x1F"`
/// is 31, `"px42"` is `default`. Saturates at the `i64` range.
pub fn parse_int_or(token: &str, default: i64) -> i64 {
    match int_prefix(token) {
        Some(prefix) => {
            let magnitude = prefix.digits().fold(0i64, |acc, d| {
                acc.saturating_mul(i64::from(prefix.radix))
                    .saturating_add(i64::from(d))
            });
            if prefix.negative {
                -magnitude
            } else {
                magnitude
            }
        }
        None => default,
    }
}

/// Parse the leading decimal number of `token`, or return `default`.
///
/// Accepts an optional sign, digits with an optional fraction, and an
/// optional exponent, or the literal `Infinity`. Trailing text is ignored:
/// `"50.4%"` is 50.4.
pub fn parse_float_or(token: &str, default: f64) -> f64 {
    float_prefix(token)
        .and_then(|number| number.parse().ok())
        .unwrap_or(default)
}

/// Packed `R*65536 + G*256 + B` integer.
///
/// The value wraps to 32 bits before the channels are extracted, so only the
/// low 24 bits matter. Returns `None` when `raw` does not start with a number.
pub fn decode_rgb_int(raw: &str) -> Option<Rgb> {
    let prefix = int_prefix(raw)?;
    let magnitude = prefix
        .digits()
        .fold(0u32, |acc, d| acc.wrapping_mul(prefix.radix).wrapping_add(d));
    let packed = if prefix.negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    };
    Some(Rgb::from_packed(packed))
}

/// `r,g,b` with integer channels, each clamped to 0-255.
pub fn decode_rgb_tuple(raw: &str) -> Option<Rgb> {
    let [r, g, b] = split_exact::<3>(raw)?;
    let channel = |token: &str| parse_int_or(token, 0).clamp(0, 255) as u8;
    Some(Rgb::new(channel(r), channel(g), channel(b)))
}

/// `h,s,v`, every component clamped to 0-100.
///
/// Saturation and value are percentages. The hue is in degrees but shares
/// the 0-100 clamp, so hues past 100 degrees saturate.
pub fn decode_hsv_tuple(raw: &str) -> Option<Rgb> {
    let [h, s, v] = split_exact::<3>(raw)?.map(percentage);
    Some(hsv_to_rgb(h, s / 100.0, v / 100.0))
}

/// `c,m,y,k` percentages, each clamped to 0-100.
pub fn decode_cmyk_tuple(raw: &str) -> Option<Rgb> {
    let [c, m, y, k] = split_exact::<4>(raw)?.map(percentage);
    let key = 1.0 - k / 100.0;
    let channel = |ink: f64| to_channel((1.0 - ink / 100.0) * key);
    Some(Rgb::new(channel(c), channel(m), channel(y)))
}

fn percentage(token: &str) -> f64 {
    parse_float_or(token, 0.0).clamp(0.0, 100.0)
}

/// Sector-based HSV to RGB; `hue` in degrees, `s` and `v` in 0..=1.
fn hsv_to_rgb(hue: f64, s: f64, v: f64) -> Rgb {
    let h = hue / 60.0;
    let c = v * s;
    let x = c * (1.0 - ((h % 2.0) - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h {
        h if h < 1.0 => (c, x, 0.0),
        h if h < 2.0 => (x, c, 0.0),
        h if h < 3.0 => (0.0, c, x),
        h if h < 4.0 => (0.0, x, c),
        h if h < 5.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb::new(to_channel(r + m), to_channel(g + m), to_channel(b + m))
}

#[inline]
fn to_channel(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

fn split_exact<const N: usize>(raw: &str) -> Option<[&str; N]> {
    let parts: Vec<&str> = raw.split(',').collect();
    parts.try_into().ok()
}

/// Sign, radix and digit run at the start of a token.
struct IntPrefix<'a> {
    negative: bool,
    radix: u32,
    digits: &'a str,
}

impl IntPrefix<'_> {
    fn digits(&self) -> impl Iterator<Item = u32> + '_ {
        self.digits
            .chars()
            .filter_map(move |c| c.to_digit(self.radix))
    }
}

/// Leading integer of `token` after whitespace. A `0x`/`0X` after the sign
/// switches to base 16; with no hex digits after it there is no number.
fn int_prefix(token: &str) -> Option<IntPrefix<'_>> {
    let token = token.trim_start();
    let (negative, rest) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };
    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };
    let end = rest
        .bytes()
        .position(|b| !(b as char).is_digit(radix))
        .unwrap_or(rest.len());
    (end > 0).then(|| IntPrefix {
        negative,
        radix,
        digits: &rest[..end],
    })
}

/// The longest prefix of `token` that reads as a decimal float.
fn float_prefix(token: &str) -> Option<&str> {
    const INFINITY: &str = "Infinity";

    let token = token.trim_start();
    let bytes = token.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'-' | b'+')));
    if token[sign..].starts_with(INFINITY) {
        return Some(&token[..sign + INFINITY.len()]);
    }

    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = sign;
    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'-' | b'+')) {
            exp_end += 1;
        }
        let exp_digits = digits_from(exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    Some(&token[..end])
}
