//! Defines the [`Config`] and [`Profile`] types. [`Config`] holds the
//! locations the generator reads from and writes to, while [`Profile`] holds
//! the static data about the site owner which is rendered onto the index
//! page. The profile is compiled into the binary from `site.yaml`.

use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use url::Url;

/// The profile document, embedded at compile time.
const PROFILE_YAML: &str = include_str!("site.yaml");

/// A link to one of the site owner's profiles elsewhere.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SocialLink {
    pub name: String,
    pub url: Url,
}

/// An image to publish. `source` is relative to
/// [`Config::assets_source_directory`] and `destination` is a file name
/// within [`Config::images_output_directory`].
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Asset {
    pub source: PathBuf,
    pub destination: String,
}

/// Static data describing the site owner.
#[derive(Deserialize, Clone, Debug)]
pub struct Profile {
    /// The `<title>` of the index page.
    pub title: String,
    pub name: String,
    pub headline: String,
    pub contact: String,
    pub copyright: String,

    /// Rendered in order in the skills section.
    #[serde(default)]
    pub skills: Vec<String>,

    /// Rendered in order in the footer.
    #[serde(default)]
    pub social_links: Vec<SocialLink>,

    #[serde(default)]
    pub assets: Vec<Asset>,
}

impl Profile {
    /// Parses the profile compiled into the binary.
    pub fn embedded() -> Result<Profile> {
        Profile::from_yaml(PROFILE_YAML)
    }

    pub fn from_yaml(input: &str) -> Result<Profile> {
        match serde_yaml::from_str(input) {
            Ok(profile) => Ok(profile),
            Err(e) => Err(anyhow!("Loading site profile: {}", e)),
        }
    }
}

pub struct Config {
    /// The directory searched (recursively) for markdown documents.
    pub content_source_directory: PathBuf,

    /// The directory in which the [`Asset`] source images are expected.
    pub assets_source_directory: PathBuf,

    /// The root of the generated site. `index.html` and `style.css` are
    /// written here. This directory is never cleaned.
    pub root_output_directory: PathBuf,

    /// One `<id>.html` file per document. Cleaned before each build.
    pub articles_output_directory: PathBuf,

    /// Published images. Cleaned before each build.
    pub images_output_directory: PathBuf,

    /// The date stamped onto every article.
    pub date: NaiveDate,

    pub profile: Profile,
}

impl Config {
    /// Builds the configuration for a project rooted at `root`: documents
    /// are read from `{root}/content`, images from `root` itself, and the
    /// site is written to `{root}/dist`. The article date is today's date.
    pub fn new(root: &Path) -> Result<Config> {
        let output_directory = root.join("dist");
        Ok(Config {
            content_source_directory: root.join("content"),
            assets_source_directory: root.to_owned(),
            articles_output_directory: output_directory.join("articles"),
            images_output_directory: output_directory.join("images"),
            root_output_directory: output_directory,
            date: Local::now().naive_local().date(),
            profile: Profile::embedded()?,
        })
    }
}
