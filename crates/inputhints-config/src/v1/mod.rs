mod convert;
mod document;

use thiserror::Error;

pub(crate) use document::HintsV1;

#[derive(Error, Debug)]
pub enum Error {
    #[error("category {0} has an empty name")]
    EmptyCategoryName(usize),
    #[error("glyph {0} has an empty control path")]
    EmptyControlPath(usize),
    #[error("glyph for \"{0}\" has an empty glyph name")]
    EmptyGlyphName(String),
    #[error("action {0} has an empty name")]
    EmptyActionName(usize),
    #[error("action \"{0}\" has a binding with an empty path")]
    EmptyBindingPath(String),
}
