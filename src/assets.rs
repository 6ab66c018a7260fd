//! Publishes the site's static assets: the configured [`Asset`] images and
//! the stylesheet.

use crate::config::Asset;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The stylesheet shared by every page. It doesn't depend on the site data.
pub const STYLESHEET: &str = include_str!("../theme/style.css");

/// Copies each asset from `source_directory` into `output_directory`
/// unchanged, returning one result per asset in order. A missing or
/// unreadable source only fails that asset's slot.
pub fn copy_assets(
    assets: &[Asset],
    source_directory: &Path,
    output_directory: &Path,
) -> Vec<Result<PathBuf>> {
    assets
        .iter()
        .map(|asset| {
            copy_asset(
                &source_directory.join(&asset.source),
                &output_directory.join(&asset.destination),
            )
        })
        .collect()
}

fn copy_asset(source: &Path, destination: &Path) -> Result<PathBuf> {
    match std::fs::copy(source, destination) {
        Ok(bytes) => {
            debug!(
                source = %source.display(),
                destination = %destination.display(),
                bytes,
                "copied asset"
            );
            Ok(destination.to_owned())
        }
        Err(err) => Err(Error::Copy {
            source: source.to_owned(),
            destination: destination.to_owned(),
            err,
        }),
    }
}

/// Writes [`STYLESHEET`] to `{root_output_directory}/style.css`.
pub fn write_stylesheet(root_output_directory: &Path) -> Result<PathBuf> {
    let path = root_output_directory.join("style.css");
    match std::fs::write(&path, STYLESHEET) {
        Ok(()) => Ok(path),
        Err(err) => Err(Error::Write { path, err }),
    }
}

/// The result of a fallible asset operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error publishing an asset.
#[derive(Debug)]
pub enum Error {
    /// Returned when an image couldn't be copied, typically because the
    /// source file is missing.
    Copy {
        source: PathBuf,
        destination: PathBuf,
        err: io::Error,
    },

    /// Returned when the stylesheet couldn't be written.
    Write { path: PathBuf, err: io::Error },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Copy {
                source,
                destination,
                err,
            } => write!(
                f,
                "Copying '{}' to '{}': {}",
                source.display(),
                destination.display(),
                err
            ),
            Error::Write { path, err } => {
                write!(f, "Writing '{}': {}", path.display(), err)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Copy { err, .. } => Some(err),
            Error::Write { path: _, err } => Some(err),
        }
    }
}
