//! The library code for the `portfolio` static site generator. It turns a
//! directory of markdown documents into a personal portfolio site: one index
//! page introducing the site owner and listing the articles, one page per
//! article, the owner's images, and a stylesheet.
//!
//! A build is a single pass with three steps:
//!
//! 1. Loading articles from markdown files on disk ([`crate::parser`])
//! 2. Rendering the index and article pages ([`crate::write`])
//! 3. Publishing the images and stylesheet ([`crate::assets`])
//!
//! [`crate::build::build_site`] sequences these steps. Documents and images
//! which can't be read are logged and left out; everything else that fails
//! stops the build.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod article;
pub mod assets;
pub mod build;
pub mod config;
pub mod markdown;
pub mod parser;
pub mod value;
pub mod write;
