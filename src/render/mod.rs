//! Report rendering.

pub mod html;

pub use html::render_html_chart;
