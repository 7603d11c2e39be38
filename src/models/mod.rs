pub mod colour_format;
pub mod config;

pub use colour_format::{ColourFormat, UnknownFormat};
pub use config::{AppConfig, DefaultInputs, FeaturedColour};
