//! Form rendering module
//!
//! - `field_renderer`: field and error annotation rendering
//! - `contact_form`: the contact form layout

mod contact_form;
mod field_renderer;

pub use contact_form::draw_contact_form;
