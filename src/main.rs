use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use pinea_colours::api;
use pinea_colours::assets::{AssetCategory, AssetLoader};
use pinea_colours::color::to_formats;
use pinea_colours::models::{AppConfig, ColourFormat};
use pinea_colours::server;
use pinea_colours::services::{ColourService, ColourSource};

#[derive(Parser)]
#[command(name = "pinea-colours")]
#[command(about = "Pinea Colours - preview a colour and convert it between formats")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Convert a colour and print every format
    Convert {
        /// Colour value, e.g. "72AEF5", "red", "242,120,120"
        value: String,

        /// Input format: hex, rgb, hsv or cmyk
        #[arg(short, long, default_value = "hex")]
        format: ColourFormat,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Extract embedded assets to filesystem for customization
    Init {
        /// Extract config.yaml
        #[arg(long)]
        config: bool,

        /// Extract the colour name listing (rgb.txt)
        #[arg(long)]
        names: bool,

        /// Extract page templates
        #[arg(long)]
        templates: bool,

        /// Extract all assets
        #[arg(long)]
        all: bool,

        /// Overwrite existing files
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pinea Colours API",
        description = "Colour preview and conversion between HEX, RGB, HSV and CMYK",
        version = "0.3.0",
        license(name = "MIT")
    ),
    paths(api::handle_colour, api::handle_name),
    components(schemas(
        api::ColourResponse,
        api::NameResponse,
        pinea_colours::color::ColorFormats,
        pinea_colours::color::FormatRow,
        ColourFormat,
        ColourSource,
    )),
    tags(
        (name = "Colour", description = "Colour conversion and name lookup")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert {
            value,
            format,
            json,
        }) => run_convert_command(&value, format, json),
        Some(Commands::Init {
            config,
            names,
            templates,
            all,
            force,
            list,
        }) => run_init_command(config, names, templates, all, force, list),
        Some(Commands::Serve) => run_server().await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn init_cli_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pinea_colours=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Resolve a colour and print it (no server needed)
fn run_convert_command(value: &str, format: ColourFormat, json: bool) -> anyhow::Result<()> {
    init_cli_tracing();

    let loader = AssetLoader::from_env();
    let config = AppConfig::load_from_assets(&loader);
    let colours = ColourService::load(&loader, &config)?;

    let resolved = colours.resolve(format, value);
    let formats = to_formats(resolved.colour);

    if json {
        let response = api::ColourResponse {
            input: value.to_string(),
            format,
            source: resolved.source,
            display: formats.rows(),
            formats,
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    if resolved.source == ColourSource::Fallback {
        eprintln!("'{value}' is not a valid {format} value, showing the default colour");
    }
    for row in formats.rows() {
        println!("{:<8} {}", row.label, row.value);
    }

    Ok(())
}

/// Extract embedded assets to filesystem
fn run_init_command(
    config: bool,
    names: bool,
    templates: bool,
    all: bool,
    force: bool,
    list: bool,
) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:\n");
        println!("Config:");
        for f in AssetLoader::list_embedded(AssetCategory::Config) {
            println!("  {f}");
        }
        println!("\nNames:");
        for f in AssetLoader::list_embedded(AssetCategory::Names) {
            println!("  {f}");
        }
        println!("\nTemplates:");
        for f in AssetLoader::list_embedded(AssetCategory::Templates) {
            println!("  {f}");
        }
        return Ok(());
    }

    let mut categories = Vec::new();
    if all || config {
        categories.push(AssetCategory::Config);
    }
    if all || names {
        categories.push(AssetCategory::Names);
    }
    if all || templates {
        categories.push(AssetCategory::Templates);
    }

    if categories.is_empty() {
        eprintln!("No categories specified. Use --all, --config, --names, or --templates");
        eprintln!("\nRun 'pinea-colours init --list' to see embedded assets.");
        std::process::exit(1);
    }

    let report = AssetLoader::from_env().init(&categories, force)?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }
    if !report.skipped.is_empty() {
        println!(
            "\nSkipped {} existing files (use --force to overwrite):",
            report.skipped.len()
        );
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    if report.written.is_empty() && report.skipped.is_empty() {
        println!("No files to extract.");
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let loader = AssetLoader::from_env();

    println!("Pinea Colours v{VERSION}");
    println!("Colour preview and conversion service\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR     = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    for (name, path) in [
        ("CONFIG_FILE  ", loader.config_file()),
        ("NAMES_FILE   ", loader.names_file()),
        ("TEMPLATES_DIR", loader.templates_dir()),
    ] {
        let value = path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not set)".to_string());
        println!("  {name} = {value}");
    }

    println!("\nAsset Sources:");
    println!("  Config:    {}", source_label(loader.config_file()));
    println!("  Names:     {}", source_label(loader.names_file()));
    println!("  Templates: {}", source_label(loader.templates_dir()));

    match loader.read_names_string() {
        Ok(listing) => {
            let count = pinea_colours::color::NameTable::parse(&listing).len();
            println!("  Colour names loaded: {count}");
        }
        Err(e) => println!("  Colour names unavailable: {e}"),
    }

    println!("\nCommands:");
    println!("  pinea-colours serve     Start the HTTP server");
    println!("  pinea-colours convert   Convert a colour and print every format");
    println!("  pinea-colours init      Extract embedded assets");
    println!("\nRun 'pinea-colours --help' for more details.");
}

fn source_label(path: Option<&std::path::Path>) -> String {
    match path {
        Some(p) if p.exists() => p.display().to_string(),
        Some(_) => "embedded (file not found)".to_string(),
        None => "embedded".to_string(),
    }
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pinea_colours=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let asset_loader = Arc::new(AssetLoader::from_env());

    let describe = |path: Option<&std::path::Path>| {
        path.map(|p| p.display().to_string())
            .unwrap_or_else(|| "embedded".to_string())
    };
    tracing::info!(
        config = %describe(asset_loader.config_file()),
        names = %describe(asset_loader.names_file()),
        templates = %describe(asset_loader.templates_dir()),
        "Asset sources configured"
    );

    let state = server::create_app_state(asset_loader)?;

    // OpenAPI documentation (production only)
    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Pinea Colours server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
