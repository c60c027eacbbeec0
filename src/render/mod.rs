//! Rendering module for document tree output surfaces.

mod json;
mod page;

pub use json::{to_json, JsonFormat};
pub use page::{
    render_page, render_page_with_options, RenderedPage, CONTENT_PLACEHOLDER, TITLE_PLACEHOLDER,
};
