//! HTML helpers: the tag locator and text flattening

mod locate;
mod text;

pub use locate::{attr, find_all, find_tag, AttrMatch, Attrs};
pub use text::{single_line_text, text_of, text_tokens};
