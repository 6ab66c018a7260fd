//! Defines the [`Parser`] and [`Error`] types: the logic for loading
//! [`Article`]s from the content directory.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::{article::Article, markdown};

/// The extension recognized as a markdown document. Matching is
/// case-sensitive.
pub const MARKDOWN_EXTENSION: &str = ".md";

/// How the publication date is rendered, e.g. `Jan 2, 2006`.
pub const DATE_FORMAT: &str = "%b %-d, %Y";

/// Parses [`Article`] objects from source files.
pub struct Parser {
    /// The formatted date stamped onto every article.
    date: String,
}

impl Parser {
    /// Constructs a new parser which dates every article with `date`.
    pub fn new(date: NaiveDate) -> Parser {
        Parser {
            date: date.format(DATE_FORMAT).to_string(),
        }
    }

    /// Walks `source_directory` recursively (in file name order) and returns
    /// one result per markdown file found. A failure to read one file does
    /// not stop the walk; it is returned in that file's slot so the caller
    /// can decide what to do with it. A missing `source_directory` yields a
    /// single error.
    pub fn parse_articles(&self, source_directory: &Path) -> Vec<Result<Article>> {
        WalkDir::new(source_directory)
            .sort_by(|a, b| a.file_name().cmp(b.file_name()))
            .into_iter()
            .filter_map(|result| match result {
                Err(err) => Some(Err(Error::WalkDir(err))),
                Ok(entry) => {
                    if entry.file_type().is_dir()
                        || !entry
                            .file_name()
                            .to_string_lossy()
                            .ends_with(MARKDOWN_EXTENSION)
                    {
                        return None;
                    }
                    Some(self.parse_article(entry.path()))
                }
            })
            .collect()
    }

    /// Reads and converts the markdown file at `path`.
    pub fn parse_article(&self, path: &Path) -> Result<Article> {
        let id = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.strip_suffix(MARKDOWN_EXTENSION))
            .filter(|id| !id.is_empty())
            .ok_or_else(|| Error::InvalidFileName(path.to_owned()))?;

        let bytes = std::fs::read(path).map_err(|err| Error::Io {
            path: path.to_owned(),
            err,
        })?;

        // Documents in a legacy encoding are still rendered; the bytes that
        // aren't UTF-8 become U+FFFD.
        let contents = String::from_utf8_lossy(&bytes);
        if let std::borrow::Cow::Owned(_) = &contents {
            warn!(
                path = %path.display(),
                "document is not valid UTF-8; invalid bytes were replaced"
            );
        }

        debug!(path = %path.display(), id, "parsed article");
        let body = markdown::to_html(&contents);
        Ok(Article::new(id, &self.date, &contents, body))
    }
}

/// Represents the result of an [`Article`]-parse operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error loading an [`Article`].
#[derive(Debug)]
pub enum Error {
    /// Returned when a directory entry couldn't be read during the walk
    /// (including a missing content directory).
    WalkDir(walkdir::Error),

    /// Returned when a source file couldn't be read.
    Io { path: PathBuf, err: std::io::Error },

    /// Returned when a file name isn't valid UTF-8 or has nothing before the
    /// extension, so no identifier can be derived from it.
    InvalidFileName(PathBuf),
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::WalkDir(err) => err.fmt(f),
            Error::Io { path, err } => {
                write!(f, "Reading document '{}': {}", path.display(), err)
            }
            Error::InvalidFileName(path) => {
                write!(f, "invalid file name: {:?}", path)
            }
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::WalkDir(err) => Some(err),
            Error::Io { path: _, err } => Some(err),
            Error::InvalidFileName(_) => None,
        }
    }
}

impl From<walkdir::Error> for Error {
    /// Converts a [`walkdir::Error`] into an [`Error`].
    fn from(err: walkdir::Error) -> Error {
        Error::WalkDir(err)
    }
}
