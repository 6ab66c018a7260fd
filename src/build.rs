//! Exports the [`build_site`] function which stitches together the high-level
//! steps of building the output static site: loading the articles
//! ([`crate::parser`]), rendering the index and article pages
//! ([`crate::write`]), and publishing the images and stylesheet
//! ([`crate::assets`]).

use crate::article::Article;
use crate::assets::{copy_assets, write_stylesheet, Error as AssetError};
use crate::config::Config;
use crate::parser::Parser;
use crate::write::{
    parse_template, Error as WriteError, Writer, ARTICLE_TEMPLATE, INDEX_TEMPLATE,
};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Counts of what a build produced.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Report {
    /// The number of article pages written.
    pub articles: usize,

    /// The number of markdown files which couldn't be loaded, or whose
    /// identifier was already taken by an earlier file.
    pub skipped_articles: usize,

    /// The number of images copied.
    pub assets: usize,

    /// The number of images which couldn't be copied.
    pub skipped_assets: usize,
}

/// Builds the site from a [`Config`] object. Documents and images which
/// can't be read are logged and skipped; failing to prepare the output
/// directories or to write a page or the stylesheet aborts the build.
pub fn build_site(config: &Config) -> Result<Report> {
    let mut report = Report::default();

    // collect all articles
    let parser = Parser::new(config.date);
    let mut articles: Vec<Article> = Vec::new();
    let results = if config.content_source_directory.is_dir() {
        parser.parse_articles(&config.content_source_directory)
    } else {
        warn!(
            directory = %config.content_source_directory.display(),
            "content directory not found; the index will list no articles"
        );
        Vec::new()
    };
    let mut seen_ids: HashSet<String> = HashSet::new();
    for result in results {
        match result {
            // Pages are keyed by file stem alone, so `a/notes.md` and
            // `b/notes.md` would both write `articles/notes.html`.
            Ok(article) if !seen_ids.insert(article.id.clone()) => {
                warn!(
                    id = %article.id,
                    "skipping document: an earlier document already uses this identifier"
                );
                report.skipped_articles += 1;
            }
            Ok(article) => articles.push(article),
            Err(err) => {
                warn!("skipping document: {}", err);
                report.skipped_articles += 1;
            }
        }
    }
    info!(
        articles = articles.len(),
        skipped = report.skipped_articles,
        directory = %config.content_source_directory.display(),
        "loaded articles"
    );

    // Parse the templates before touching the output tree.
    let index_template = parse_template(INDEX_TEMPLATE)?;
    let article_template = parse_template(ARTICLE_TEMPLATE)?;

    // Blow away the directories we own so articles and images whose sources
    // were removed don't linger. The root output directory is left alone in
    // case it holds anything else.
    rmdir(&config.articles_output_directory)?;
    rmdir(&config.images_output_directory)?;
    mkdir(&config.root_output_directory)?;
    mkdir(&config.articles_output_directory)?;

    // write the index and article pages
    let writer = Writer {
        index_template: &index_template,
        article_template: &article_template,
        profile: &config.profile,
        root_output_directory: &config.root_output_directory,
        articles_output_directory: &config.articles_output_directory,
    };
    let index = writer.write_index(&articles)?;
    info!(path = %index.display(), "wrote index page");
    for article in &articles {
        writer.write_article(article)?;
        report.articles += 1;
    }
    info!(
        articles = report.articles,
        directory = %config.articles_output_directory.display(),
        "wrote article pages"
    );

    // publish images and the stylesheet
    mkdir(&config.images_output_directory)?;
    for result in copy_assets(
        &config.profile.assets,
        &config.assets_source_directory,
        &config.images_output_directory,
    ) {
        match result {
            Ok(_) => report.assets += 1,
            Err(err) => {
                warn!("skipping asset: {}", err);
                report.skipped_assets += 1;
            }
        }
    }
    write_stylesheet(&config.root_output_directory)?;
    info!(
        assets = report.assets,
        skipped = report.skipped_assets,
        "published assets"
    );

    Ok(report)
}

fn rmdir(dir: &Path) -> Result<()> {
    match std::fs::remove_dir_all(dir) {
        Ok(x) => Ok(x),
        Err(e) => match e.kind() {
            std::io::ErrorKind::NotFound => Ok(()),
            _ => Err(Error::Clean {
                path: dir.to_owned(),
                err: e,
            }),
        },
    }
}

fn mkdir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|err| Error::CreateDirectory {
        path: dir.to_owned(),
        err,
    })
}

type Result<T> = std::result::Result<T, Error>;

/// The error type for building a site. Errors can be during writing pages,
/// cleaning or creating output directories, and publishing assets.
#[derive(Debug)]
pub enum Error {
    /// Returned for errors templating or writing pages to disk.
    Write(WriteError),

    /// Returned for errors writing the stylesheet.
    Asset(AssetError),

    /// Returned for I/O problems while cleaning output directories.
    Clean { path: PathBuf, err: std::io::Error },

    /// Returned for I/O problems while creating output directories.
    CreateDirectory { path: PathBuf, err: std::io::Error },
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Write(err) => err.fmt(f),
            Error::Asset(err) => err.fmt(f),
            Error::Clean { path, err } => {
                write!(f, "Cleaning directory '{}': {}", path.display(), err)
            }
            Error::CreateDirectory { path, err } => {
                write!(f, "Creating directory '{}': {}", path.display(), err)
            }
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Write(err) => Some(err),
            Error::Asset(err) => Some(err),
            Error::Clean { path: _, err } => Some(err),
            Error::CreateDirectory { path: _, err } => Some(err),
        }
    }
}

impl From<WriteError> for Error {
    /// Converts [`WriteError`]s into [`Error`]. This allows us to use the `?`
    /// operator.
    fn from(err: WriteError) -> Error {
        Error::Write(err)
    }
}

impl From<AssetError> for Error {
    /// Converts [`AssetError`]s into [`Error`]. This allows us to use the `?`
    /// operator.
    fn from(err: AssetError) -> Error {
        Error::Asset(err)
    }
}
