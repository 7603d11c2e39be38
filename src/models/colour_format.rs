use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Input format tag supplied with a raw colour value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ColourFormat {
    /// Loose hex code or colour name
    #[default]
    Hex,
    /// `r,g,b` tuple or packed integer
    Rgb,
    /// `h,s,v` tuple
    Hsv,
    /// `c,m,y,k` tuple
    Cmyk,
}

impl ColourFormat {
    pub const ALL: [ColourFormat; 4] = [Self::Hex, Self::Rgb, Self::Hsv, Self::Cmyk];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsv => "hsv",
            Self::Cmyk => "cmyk",
        }
    }
}

impl fmt::Display for ColourFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown colour format: {0}")]
pub struct UnknownFormat(pub String);

impl FromStr for ColourFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}
