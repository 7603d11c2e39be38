//! Colour JSON API.

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use crate::color::{to_formats, ColorFormats, FormatRow, Rgb};
use crate::error::ApiError;
use crate::models::ColourFormat;
use crate::services::{ColourService, ColourSource};

/// Query parameters for /api/colour
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ColourQuery {
    /// Input format: hex (default), rgb, hsv or cmyk
    pub format: Option<String>,
}

/// Response from the /api/colour endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct ColourResponse {
    /// Raw value as received
    pub input: String,
    /// Format the value was read as
    pub format: ColourFormat,
    /// Which rule produced the colour
    pub source: ColourSource,
    /// All representations of the colour
    pub formats: ColorFormats,
    /// Display strings in page order
    pub display: Vec<FormatRow>,
}

/// Response from the /api/names endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct NameResponse {
    /// Name as looked up (lowercase)
    pub name: String,
    /// Colour for that name
    #[schema(value_type = String, example = "#FF0000")]
    pub hex: Rgb,
}

/// Convert a colour
///
/// Reads the value in the requested format and returns every other
/// representation. Values that don't fit the format resolve to the default
/// colour rather than failing.
#[utoipa::path(
    get,
    path = "/api/colour/{value}",
    responses(
        (status = 200, description = "Colour converted", body = ColourResponse),
        (status = 400, description = "Unknown format"),
    ),
    params(
        ("value" = String, Path, description = "Colour value, e.g. '72AEF5', 'red', '242,120,120'"),
        ColourQuery,
    ),
    tag = "Colour"
)]
pub async fn handle_colour(
    State(colours): State<Arc<ColourService>>,
    Path(value): Path<String>,
    Query(query): Query<ColourQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let format = match query.format.as_deref() {
        Some(tag) => tag.parse::<ColourFormat>()?,
        None => ColourFormat::default(),
    };

    let resolved = colours.resolve(format, &value);
    let formats = to_formats(resolved.colour);

    tracing::info!(
        %format,
        input = %value,
        colour = %resolved.colour,
        "Colour conversion requested"
    );

    Ok(Json(ColourResponse {
        input: value,
        format,
        source: resolved.source,
        display: formats.rows(),
        formats,
    }))
}

/// Look up a colour name
///
/// Case-insensitive exact match against the colour name table.
#[utoipa::path(
    get,
    path = "/api/names/{name}",
    responses(
        (status = 200, description = "Name found", body = NameResponse),
        (status = 404, description = "Unknown colour name"),
    ),
    params(
        ("name" = String, Path, description = "Colour name, e.g. 'AliceBlue'"),
    ),
    tag = "Colour"
)]
pub async fn handle_name(
    State(colours): State<Arc<ColourService>>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let hex = colours
        .lookup_name(&name)
        .ok_or_else(|| ApiError::NameNotFound(name.clone()))?;

    Ok(Json(NameResponse {
        name: name.to_lowercase(),
        hex,
    }))
}
