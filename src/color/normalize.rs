//! Loose hex input to a canonical colour.

use super::Rgb;

/// Turn arbitrary text into a 6-digit uppercase hex string.
///
/// Never fails. Non-hex characters are dropped, the rest is truncated to six
/// digits and expanded by length:
///
/// | digits | result |
/// |---|---|
/// | 0 | `000000` |
/// | 1 (`A`) | `AAAAAA` |
/// | 2 (`AB`) | `ABABAB` |
/// | 3 (`ABC`) | `AABBCC` |
/// | 4-5 | right-padded with `0` |
/// | 6 | as is |
pub fn normalize_hex(raw: &str) -> String {
    let raw = raw.strip_prefix('#').unwrap_or(raw);
    let digits: Vec<char> = raw
        .chars()
        .filter(char::is_ascii_hexdigit)
        .map(|c| c.to_ascii_uppercase())
        .take(6)
        .collect();

    match digits.len() {
        0 => "000000".to_string(),
        1 => digits[0].to_string().repeat(6),
        2 => digits.iter().collect::<String>().repeat(3),
        3 => digits.iter().flat_map(|&c| [c, c]).collect(),
        n => {
            let mut hex: String = digits.into_iter().collect();
            hex.extend(std::iter::repeat('0').take(6 - n));
            hex
        }
    }
}

/// [`normalize_hex`], decoded into channels.
pub fn normalize(raw: &str) -> Rgb {
    let hex = normalize_hex(raw);
    // normalize_hex only ever yields six hex digits
    Rgb::from_hex(&hex).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expansion_by_length() {
        assert_eq!(normalize_hex(""), "000000");
        assert_eq!(normalize_hex("A"), "AAAAAA");
        assert_eq!(normalize_hex("AB"), "ABABAB");
        assert_eq!(normalize_hex("ABC"), "AABBCC");
        assert_eq!(normalize_hex("ABCD"), "ABCD00");
        assert_eq!(normalize_hex("ABCDE"), "ABCDE0");
        assert_eq!(normalize_hex("ABCDEF"), "ABCDEF");
    }

    #[test]
    fn test_strips_leading_hash() {
        assert_eq!(normalize_hex("#72AEF5"), "72AEF5");
        assert_eq!(normalize_hex("#"), "000000");
    }

    #[test]
    fn test_lowercase_is_folded() {
        assert_eq!(normalize_hex("72aef5"), "72AEF5");
        assert_eq!(normalize_hex("f0a"), "FF00AA");
    }

    #[test]
    fn test_invalid_characters_dropped() {
        // two surviving digits repeat like any other 2-digit input
        assert_eq!(normalize_hex("zz!!72"), "727272");
        assert_eq!(normalize_hex("red"), "EDEDED");
        assert_eq!(normalize_hex("hello world"), "EDEDED");
    }

    #[test]
    fn test_truncates_after_filtering() {
        assert_eq!(normalize_hex("1234567890"), "123456");
        assert_eq!(normalize_hex("x1x2x3x4x5x6x7"), "123456");
    }

    #[test]
    fn test_non_ascii_input() {
        assert_eq!(normalize_hex("ÄBC"), "BCBCBC");
        assert_eq!(normalize_hex("🎨"), "000000");
    }

    #[test]
    fn test_output_is_always_six_hex_digits() {
        let inputs = [
            "", "#", "##", "#ABC", "  f  ", "0x1F", "rgb(1,2,3)", "ffffffffff", "1.5", "é",
        ];
        for input in inputs {
            let hex = normalize_hex(input);
            assert_eq!(hex.len(), 6, "{input:?} -> {hex:?}");
            assert!(
                hex.chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)),
                "{input:?} -> {hex:?}"
            );
        }
    }

    #[test]
    fn test_only_one_hash_is_stripped() {
        // the second '#' is simply filtered out like any other symbol
        assert_eq!(normalize_hex("##ABC"), "AABBCC");
    }

    #[test]
    fn test_normalize_decodes_channels() {
        assert_eq!(normalize("#F27878"), Rgb::new(242, 120, 120));
        assert_eq!(normalize(""), Rgb::BLACK);
        assert_eq!(normalize("f"), Rgb::WHITE);
    }
}
