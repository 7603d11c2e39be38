use crate::assets::AssetLoader;
use crate::color::{normalize, Rgb};
use serde::{Deserialize, Serialize};

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Name shown in page titles
    #[serde(default = "default_site_name")]
    pub site_name: String,

    /// Description meta tag for the index page
    #[serde(default = "default_description")]
    pub description: String,

    /// Colour shown when a value can't be read in its format
    #[serde(default = "default_colour")]
    pub default_colour: String,

    /// Values used when a format page is opened without a colour
    #[serde(default)]
    pub default_inputs: DefaultInputs,

    /// Swatches listed on the index page
    #[serde(default)]
    pub featured: Vec<FeaturedColour>,
}

fn default_site_name() -> String {
    "Pinea Colours".to_string()
}

fn default_description() -> String {
    "Shows a preview of a hex colour, and converts it".to_string()
}

fn default_colour() -> String {
    "F27878".to_string()
}

/// Fallback path values for `/rgb`, `/hsv` and `/cmyk`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DefaultInputs {
    #[serde(default = "default_rgb_input")]
    pub rgb: String,
    #[serde(default = "default_hsv_input")]
    pub hsv: String,
    #[serde(default = "default_cmyk_input")]
    pub cmyk: String,
}

fn default_rgb_input() -> String {
    "15890552".to_string()
}

fn default_hsv_input() -> String {
    "0,50.4,94.9".to_string()
}

fn default_cmyk_input() -> String {
    "0,50.4,50.4,5".to_string()
}

impl Default for DefaultInputs {
    fn default() -> Self {
        Self {
            rgb: default_rgb_input(),
            hsv: default_hsv_input(),
            cmyk: default_cmyk_input(),
        }
    }
}

/// A named swatch on the index page
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FeaturedColour {
    pub name: String,
    pub hex: String,
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    let config: Self = config;
                    tracing::info!(
                        default_colour = %config.fallback_colour(),
                        featured = config.featured.len(),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// The configured default colour, normalized like any other hex input
    pub fn fallback_colour(&self) -> Rgb {
        normalize(&self.default_colour)
    }

    /// Featured swatches with their hex normalized
    pub fn featured_normalized(&self) -> Vec<FeaturedColour> {
        self.featured
            .iter()
            .map(|f| FeaturedColour {
                name: f.name.clone(),
                hex: normalize(&f.hex).to_string(),
            })
            .collect()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            site_name: default_site_name(),
            description: default_description(),
            default_colour: default_colour(),
            default_inputs: DefaultInputs::default(),
            featured: Vec::new(),
        }
    }
}
