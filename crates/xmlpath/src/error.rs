use thiserror::Error;

#[derive(Error, Debug)]
pub enum XmlPathError {
    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Path must be absolute: {0}")]
    NotAbsolute(String),

    #[error("Path parse error in '{0}': {1}")]
    PathParse(String, String),
}
