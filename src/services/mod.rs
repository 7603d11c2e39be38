pub mod colour_service;
pub mod template_service;

pub use colour_service::{ColourService, ColourSource, Resolved};
pub use template_service::{ColourPage, IndexPage, TemplateError, TemplateService};
