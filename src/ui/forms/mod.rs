//! Form rendering module
//!
//! - `field_renderer`: single field rendering
//! - `address_form`: the address form and its action panel

mod address_form;
mod field_renderer;

pub use address_form::draw_address_form;
