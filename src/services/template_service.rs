use serde::Serialize;
use tera::{Context, Tera};

use crate::assets::AssetLoader;
use crate::color::{ColorFormats, FormatRow};
use crate::models::{AppConfig, ColourFormat, DefaultInputs, FeaturedColour};

const COLOUR_TEMPLATE: &str = "colour.html";
const INDEX_TEMPLATE: &str = "index.html";

/// Error type for template rendering
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Template error: {0}")]
    Tera(#[from] tera::Error),

    #[error("Failed to read template: {0}")]
    Io(#[from] std::io::Error),
}

/// Data for the colour preview page
#[derive(Debug, Serialize)]
pub struct ColourPage {
    pub site_name: String,
    /// Canonical hex without the leading `#`
    pub hex: String,
    /// Text colour as `#RRGGBB`
    pub foreground: String,
    pub rgb: String,
    pub hsv: String,
    pub cmyk: String,
    pub format: ColourFormat,
    pub rows: Vec<FormatRow>,
}

impl ColourPage {
    pub fn new(site_name: &str, format: ColourFormat, formats: &ColorFormats) -> Self {
        Self {
            site_name: site_name.to_string(),
            hex: formats.hex.to_string(),
            foreground: formats.foreground.to_hex(),
            rgb: formats.rgb_string(),
            hsv: formats.hsv_string(),
            cmyk: formats.cmyk_string(),
            format,
            rows: formats.rows(),
        }
    }
}

/// Data for the usage/about page
#[derive(Debug, Serialize)]
pub struct IndexPage {
    pub site_name: String,
    pub description: String,
    pub default_inputs: DefaultInputs,
    pub featured: Vec<FeaturedColour>,
    pub name_count: usize,
}

impl IndexPage {
    pub fn new(config: &AppConfig, name_count: usize) -> Self {
        Self {
            site_name: config.site_name.clone(),
            description: config.description.clone(),
            default_inputs: config.default_inputs.clone(),
            featured: config.featured_normalized(),
            name_count,
        }
    }
}

/// Service for rendering HTML pages with Tera
///
/// Templates are parsed once at startup; HTML autoescaping stays on since
/// page data includes user-supplied text.
pub struct TemplateService {
    tera: Tera,
}

impl TemplateService {
    /// Create a new template service
    pub fn new(loader: &AssetLoader) -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        for name in [COLOUR_TEMPLATE, INDEX_TEMPLATE] {
            let content = loader.read_template_string(name)?;
            tera.add_raw_template(name, &content)?;
        }

        tracing::info!(
            templates = tera.get_template_names().count(),
            "Template service initialized"
        );

        Ok(Self { tera })
    }

    /// Render the preview page for one colour
    pub fn render_colour(&self, page: &ColourPage) -> Result<String, TemplateError> {
        self.render(COLOUR_TEMPLATE, page)
    }

    /// Render the usage page
    pub fn render_index(&self, page: &IndexPage) -> Result<String, TemplateError> {
        self.render(INDEX_TEMPLATE, page)
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, TemplateError> {
        let context = Context::from_serialize(data)?;
        Ok(self.tera.render(name, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{to_formats, Rgb};

    fn service() -> TemplateService {
        TemplateService::new(&AssetLoader::default()).unwrap()
    }

    #[test]
    fn test_render_colour_page() {
        let formats = to_formats(Rgb::new(0xF2, 0x78, 0x78));
        let page = ColourPage::new("Pinea Colours", ColourFormat::Hex, &formats);
        let html = service().render_colour(&page).unwrap();

        assert!(html.contains("<title>#F27878 - Pinea Colours</title>"));
        assert!(html.contains(r##"<meta name="theme-color" content="#F27878">"##));
        assert!(html.contains("#F27878 | RGB: (242, 120, 120)"));
        assert!(html.contains("CMYK: (0, 50, 50, 5)"));
        assert!(html.contains("color: #000000"));
    }

    #[test]
    fn test_render_index_page() {
        let config = AppConfig::load_from_assets(&AssetLoader::default());
        let html = service().render_index(&IndexPage::new(&config, 148)).unwrap();

        assert!(html.contains("<title>Pinea Colours</title>"));
        assert!(html.contains("/rgb/15890552"));
        assert!(html.contains("148 colour names"));
        assert!(html.contains(r#"href="/65CC76""#));
    }

    #[test]
    fn test_site_name_is_escaped() {
        let formats = to_formats(Rgb::BLACK);
        let page = ColourPage::new("<b>x</b>", ColourFormat::Hex, &formats);
        let html = service().render_colour(&page).unwrap();
        assert!(html.contains("&lt;b&gt;x&lt;&#x2F;b&gt;"));
        assert!(!html.contains("<b>x</b>"));
    }

    #[test]
    fn test_missing_template_dir_falls_back_to_embedded() {
        let dir = tempfile::tempdir().unwrap();
        let loader = AssetLoader::new(None, None, Some(dir.path().to_path_buf()));
        assert!(TemplateService::new(&loader).is_ok());
    }

    #[test]
    fn test_broken_template_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("colour.html"), "{% for x in %}").unwrap();
        let loader = AssetLoader::new(None, None, Some(dir.path().to_path_buf()));
        assert!(matches!(
            TemplateService::new(&loader),
            Err(TemplateError::Tera(_))
        ));
    }
}
