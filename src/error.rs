// src/error.rs
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// The row source file does not exist.
    MissingInput(PathBuf),
    /// A directory the tool needs to walk does not exist.
    MissingDir(PathBuf),
    /// Input was readable but not usable (no header row, wrong JSON shape, ...).
    Invalid(String),
    Io(std::io::Error),
    Csv(::csv::Error),
    Json(serde_json::Error),
    Http(reqwest::Error),
    Url(url::ParseError),
    Image(image::ImageError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingInput(p) => write!(f, "Input file not found: {}", p.display()),
            Error::MissingDir(p) => write!(f, "Directory not found: {}", p.display()),
            Error::Invalid(msg) => write!(f, "Invalid input: {}", msg),
            Error::Io(e) => write!(f, "IO error: {}", e),
            Error::Csv(e) => write!(f, "CSV error: {}", e),
            Error::Json(e) => write!(f, "JSON error: {}", e),
            Error::Http(e) => write!(f, "HTTP error: {}", e),
            Error::Url(e) => write!(f, "URL error: {}", e),
            Error::Image(e) => write!(f, "Image error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Csv(e) => Some(e),
            Error::Json(e) => Some(e),
            Error::Http(e) => Some(e),
            Error::Url(e) => Some(e),
            Error::Image(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self { Error::Io(err) }
}

impl From<::csv::Error> for Error {
    fn from(err: ::csv::Error) -> Self { Error::Csv(err) }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self { Error::Json(err) }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self { Error::Http(err) }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self { Error::Url(err) }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self { Error::Image(err) }
}

pub type Result<T> = std::result::Result<T, Error>;
