//! HTML pages.
//!
//! `/{colour}` previews a hex code or colour name; `/rgb`, `/hsv` and
//! `/cmyk` read their path value in that format first. Every page renders
//! something: values that can't be read show the default colour.

use axum::{
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse},
};

use crate::assets::AssetLoader;
use crate::color::to_formats;
use crate::error::ApiError;
use crate::models::ColourFormat;
use crate::server::AppState;
use crate::services::{ColourPage, IndexPage};

const STYLESHEET: &str = "colours.css";

/// Usage page
pub async fn handle_index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let page = IndexPage::new(&state.config, state.colours.names().len());
    Ok(Html(state.templates.render_index(&page)?))
}

/// Hex code or colour name preview
pub async fn handle_hex_page(
    State(state): State<AppState>,
    Path(colour): Path<String>,
) -> Result<Html<String>, ApiError> {
    render_colour_page(&state, ColourFormat::Hex, &colour)
}

/// RGB tuple or packed integer preview
pub async fn handle_rgb_page(
    State(state): State<AppState>,
    colour: Option<Path<String>>,
) -> Result<Html<String>, ApiError> {
    let raw = path_or(colour, &state.config.default_inputs.rgb);
    render_colour_page(&state, ColourFormat::Rgb, &raw)
}

/// HSV tuple preview
pub async fn handle_hsv_page(
    State(state): State<AppState>,
    colour: Option<Path<String>>,
) -> Result<Html<String>, ApiError> {
    let raw = path_or(colour, &state.config.default_inputs.hsv);
    render_colour_page(&state, ColourFormat::Hsv, &raw)
}

/// CMYK tuple preview
pub async fn handle_cmyk_page(
    State(state): State<AppState>,
    colour: Option<Path<String>>,
) -> Result<Html<String>, ApiError> {
    let raw = path_or(colour, &state.config.default_inputs.cmyk);
    render_colour_page(&state, ColourFormat::Cmyk, &raw)
}

/// Page stylesheet
pub async fn handle_stylesheet() -> Result<impl IntoResponse, ApiError> {
    let css = AssetLoader::stylesheet(STYLESHEET)
        .ok_or_else(|| ApiError::Internal(format!("Embedded asset not found: {STYLESHEET}")))?;
    Ok(([(header::CONTENT_TYPE, "text/css")], css.into_owned()))
}

fn path_or(colour: Option<Path<String>>, default: &str) -> String {
    colour
        .map(|Path(raw)| raw)
        .unwrap_or_else(|| default.to_string())
}

fn render_colour_page(
    state: &AppState,
    format: ColourFormat,
    raw: &str,
) -> Result<Html<String>, ApiError> {
    let resolved = state.colours.resolve(format, raw);
    let formats = to_formats(resolved.colour);
    let page = ColourPage::new(&state.config.site_name, format, &formats);
    Ok(Html(state.templates.render_colour(&page)?))
}
