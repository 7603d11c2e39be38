//! Canonical colour to every supported representation.

use serde::Serialize;
use utoipa::ToSchema;

use super::Rgb;

/// Brightness (scaled by 1000) above which overlaid text should be dark.
const DARK_TEXT_THRESHOLD: u32 = 125_000;

/// All representations of one colour.
///
/// Derived from an [`Rgb`] by [`to_formats`]; cheap to recompute, so callers
/// never keep one around longer than a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct ColorFormats {
    /// Canonical hex colour
    #[schema(value_type = String, example = "#F27878")]
    pub hex: Rgb,
    /// Red, green and blue channels (0-255)
    #[schema(value_type = Vec<u8>, example = json!([242, 120, 120]))]
    pub rgb: [u8; 3],
    /// `R*65536 + G*256 + B`
    #[schema(example = 15890552)]
    pub rgb_int: u32,
    /// Hue in degrees, saturation and value in percent
    #[schema(value_type = Vec<u16>, example = json!([0, 50, 95]))]
    pub hsv: [u16; 3],
    /// Cyan, magenta, yellow and key in percent
    #[schema(value_type = Vec<u8>, example = json!([0, 50, 50, 5]))]
    pub cmyk: [u8; 4],
    /// Black or white, whichever reads better on top of `hex`
    #[schema(value_type = String, example = "#000000")]
    pub foreground: Rgb,
}

/// One labelled line of the conversion list shown on a colour page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FormatRow {
    /// Stable identifier (`hex`, `rgb`, `rgbInt`, `hsv`, `cmyk`)
    pub key: &'static str,
    /// Human readable label
    pub label: &'static str,
    /// Value as copied to the clipboard
    pub value: String,
}

/// Expand a colour into every supported representation.
pub fn to_formats(colour: Rgb) -> ColorFormats {
    ColorFormats {
        hex: colour,
        rgb: colour.channels(),
        rgb_int: colour.packed(),
        hsv: rgb_to_hsv(colour),
        cmyk: rgb_to_cmyk(colour),
        foreground: foreground_for(colour),
    }
}

impl ColorFormats {
    pub fn hex_string(&self) -> String {
        self.hex.to_hex()
    }

    pub fn rgb_string(&self) -> String {
        let [r, g, b] = self.rgb;
        format!("({r}, {g}, {b})")
    }

    pub fn rgb_int_string(&self) -> String {
        self.rgb_int.to_string()
    }

    pub fn hsv_string(&self) -> String {
        let [h, s, v] = self.hsv;
        format!("({h}, {s}, {v})")
    }

    pub fn cmyk_string(&self) -> String {
        let [c, m, y, k] = self.cmyk;
        format!("({c}, {m}, {y}, {k})")
    }

    /// The display strings in page order.
    pub fn rows(&self) -> Vec<FormatRow> {
        vec![
            FormatRow {
                key: "hex",
                label: "HEX",
                value: self.hex_string(),
            },
            FormatRow {
                key: "rgb",
                label: "RGB",
                value: self.rgb_string(),
            },
            FormatRow {
                key: "rgbInt",
                label: "RGB Int",
                value: self.rgb_int_string(),
            },
            FormatRow {
                key: "hsv",
                label: "HSV",
                value: self.hsv_string(),
            },
            FormatRow {
                key: "cmyk",
                label: "CMYK",
                value: self.cmyk_string(),
            },
        ]
    }
}

#[inline]
fn unit_channels(colour: Rgb) -> (f64, f64, f64) {
    (
        f64::from(colour.r) / 255.0,
        f64::from(colour.g) / 255.0,
        f64::from(colour.b) / 255.0,
    )
}

#[inline]
fn percent(x: f64) -> f64 {
    (x * 100.0).round()
}

fn rgb_to_hsv(colour: Rgb) -> [u16; 3] {
    let (r, g, b) = unit_channels(colour);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let sector = if max == min {
        0.0
    } else if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    let saturation = if max == 0.0 { 0.0 } else { delta / max };

    [
        (sector * 60.0).round() as u16,
        percent(saturation) as u16,
        percent(max) as u16,
    ]
}

fn rgb_to_cmyk(colour: Rgb) -> [u8; 4] {
    let (r, g, b) = unit_channels(colour);
    let k = 1.0 - r.max(g).max(b);
    let ink = |channel: f64| {
        let denominator = 1.0 - k;
        // pure black: every ink is 0 rather than 0/0
        if denominator == 0.0 {
            0.0
        } else {
            (1.0 - channel - k) / denominator
        }
    };

    // `as u8` saturates, so a -0.0 from float noise lands on 0
    [
        percent(ink(r)) as u8,
        percent(ink(g)) as u8,
        percent(ink(b)) as u8,
        percent(k) as u8,
    ]
}

/// Black text on bright backgrounds, white text otherwise.
///
/// Uses the `0.299/0.587/0.114` perceived brightness weights with a strict
/// `> 125` threshold, computed in integer thousandths so the boundary is exact.
pub(crate) fn foreground_for(colour: Rgb) -> Rgb {
    let brightness =
        u32::from(colour.r) * 299 + u32::from(colour.g) * 587 + u32::from(colour.b) * 114;
    if brightness > DARK_TEXT_THRESHOLD {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    }
}
