//! Resolve `(format, raw value)` requests to a canonical colour.

use serde::Serialize;
use std::io;
use utoipa::ToSchema;

use crate::assets::AssetLoader;
use crate::color::{
    decode_cmyk_tuple, decode_hsv_tuple, decode_rgb_int, decode_rgb_tuple, normalize, NameTable,
    Rgb,
};
use crate::models::{AppConfig, ColourFormat};

/// Which rule produced a resolved colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ColourSource {
    /// Matched an entry in the colour name table
    Name,
    /// Normalized as a loose hex code
    Hex,
    RgbTuple,
    RgbInt,
    HsvTuple,
    CmykTuple,
    /// Nothing matched, the configured default colour was used
    Fallback,
}

/// A resolved colour and how it was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub colour: Rgb,
    pub source: ColourSource,
}

type Decoder = fn(&str) -> Option<Rgb>;

/// One format decoder in a format's matcher list
struct FormatMatcher {
    source: ColourSource,
    decode: Decoder,
}

/// Tuples take precedence over the packed integer: `"1,2,3"` would
/// otherwise read as the integer 1.
const RGB_MATCHERS: &[FormatMatcher] = &[
    FormatMatcher {
        source: ColourSource::RgbTuple,
        decode: decode_rgb_tuple,
    },
    FormatMatcher {
        source: ColourSource::RgbInt,
        decode: decode_rgb_int,
    },
];

const HSV_MATCHERS: &[FormatMatcher] = &[FormatMatcher {
    source: ColourSource::HsvTuple,
    decode: decode_hsv_tuple,
}];

const CMYK_MATCHERS: &[FormatMatcher] = &[FormatMatcher {
    source: ColourSource::CmykTuple,
    decode: decode_cmyk_tuple,
}];

/// Colour resolution with the name table and fallback colour
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug, Clone)]
pub struct ColourService {
    names: NameTable,
    fallback: Rgb,
}

impl ColourService {
    pub fn new(names: NameTable, fallback: Rgb) -> Self {
        Self { names, fallback }
    }

    /// Build the service from the configured name listing and default colour
    pub fn load(loader: &AssetLoader, config: &AppConfig) -> io::Result<Self> {
        let listing = loader.read_names_string()?;
        let names = NameTable::parse(&listing);
        let fallback = config.fallback_colour();
        if names.is_empty() {
            tracing::warn!("Colour name listing is empty, names will read as hex");
        }

        tracing::info!(
            names = names.len(),
            fallback = %fallback,
            "Colour service initialized"
        );

        Ok(Self::new(names, fallback))
    }

    pub fn names(&self) -> &NameTable {
        &self.names
    }

    pub fn fallback(&self) -> Rgb {
        self.fallback
    }

    /// Case-insensitive colour name lookup
    pub fn lookup_name(&self, name: &str) -> Option<Rgb> {
        self.names.lookup(name)
    }

    /// Resolve a raw value in the given format.
    ///
    /// Hex input never fails: names are tried first, then the value is
    /// normalized. The other formats try their matchers in order and fall
    /// back to the configured default colour when none accepts the value.
    pub fn resolve(&self, format: ColourFormat, raw: &str) -> Resolved {
        let matchers = match format {
            ColourFormat::Hex => return self.resolve_hex(raw),
            ColourFormat::Rgb => RGB_MATCHERS,
            ColourFormat::Hsv => HSV_MATCHERS,
            ColourFormat::Cmyk => CMYK_MATCHERS,
        };

        let resolved = matchers
            .iter()
            .find_map(|matcher| {
                (matcher.decode)(raw).map(|colour| Resolved {
                    colour,
                    source: matcher.source,
                })
            })
            .unwrap_or(Resolved {
                colour: self.fallback,
                source: ColourSource::Fallback,
            });

        tracing::debug!(
            %format,
            raw,
            colour = %resolved.colour,
            source = ?resolved.source,
            "Resolved colour"
        );

        resolved
    }

    fn resolve_hex(&self, raw: &str) -> Resolved {
        if let Some(colour) = self.names.lookup(raw) {
            return Resolved {
                colour,
                source: ColourSource::Name,
            };
        }
        Resolved {
            colour: normalize(raw),
            source: ColourSource::Hex,
        }
    }
}
