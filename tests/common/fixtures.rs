//! Test fixtures and constants.

/// Colours used across the route tests
pub mod colours {
    /// Default colour, used when a value can't be read
    pub const DEFAULT_HEX: &str = "F27878";

    /// Default colour as a packed RGB integer
    pub const DEFAULT_RGB_INT: &str = "15890552";

    /// Sky blue used in the usage examples
    pub const SKY_HEX: &str = "72AEF5";
}

/// Minimal colour listing for name override tests
pub const CUSTOM_NAMES: &str = "\
  1   2   3\t\tmidnight ink
 10  20  30\t\tred
";

/// Config with a different default colour and site name
pub const CUSTOM_CONFIG: &str = "\
site_name: Test Swatches
default_colour: \"0a0\"
";
