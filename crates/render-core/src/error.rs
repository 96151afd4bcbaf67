use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Render delegate error: {0}")]
    Delegate(String),
}

impl From<&str> for RenderError {
    fn from(s: &str) -> Self {
        RenderError::Delegate(s.to_string())
    }
}
