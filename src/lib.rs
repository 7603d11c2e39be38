//! Pinea Colours
//!
//! Colour preview and conversion service: reads a colour written as a hex
//! code, name, RGB, HSV or CMYK value and shows it in every other format.
//! This library exposes modules for integration testing.

pub mod api;
pub mod assets;
pub mod color;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
