use crate::controllers::progressive::data::render_session::SessionToken;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderError {
    pub session: SessionToken,
    pub message: String,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "render session {} failed: {}", self.session, self.message)
    }
}

impl Error for RenderError {}
