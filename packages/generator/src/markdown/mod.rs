//! Markdown output generation.

mod render;
mod text;
mod writer;

pub use render::{render_markdown, RenderOptions};
pub use text::wrap_text;
pub use writer::save_markdown;
