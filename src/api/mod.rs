pub mod colour;
pub mod pages;

pub use colour::{
    handle_colour, handle_name, ColourQuery, ColourResponse, NameResponse, __path_handle_colour,
    __path_handle_name,
};
pub use pages::{
    handle_cmyk_page, handle_hex_page, handle_hsv_page, handle_index, handle_rgb_page,
    handle_stylesheet,
};
