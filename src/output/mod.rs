// Home page rendering and writing

pub mod render;
pub mod writer;

pub use render::{page_content, plan_home_pages, render, render_page, HomePage};
pub use writer::HomeWriter;
