//! Helper functions shared by the content loader and the section builders

mod date;
mod html;
mod lookup;
mod text;

pub use date::*;
pub use html::*;
pub use lookup::*;
pub use text::*;
