use crate::article::Article;
use crate::config::Profile;
use crate::value::{article_value, index_value};
use gtmpl::{Context, Template};
use gtmpl_value::Value;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The template for the index (listing) page.
pub const INDEX_TEMPLATE: &str = include_str!("../theme/index.html");

/// The template for article (detail) pages.
pub const ARTICLE_TEMPLATE: &str = include_str!("../theme/article.html");

/// Parses template source into a [`Template`].
pub fn parse_template(contents: &str) -> Result<Template> {
    let mut template = Template::default();
    template.parse(contents).map_err(Error::ParseTemplate)?;
    Ok(template)
}

/// Responsible for templating and writing HTML pages to disk from
/// [`Article`]s and the site [`Profile`].
pub struct Writer<'a> {
    /// The template for the index page.
    pub index_template: &'a Template,

    /// The template for article pages.
    pub article_template: &'a Template,

    /// The static data rendered onto the index page and page footers.
    pub profile: &'a Profile,

    /// The directory in which `index.html` is written.
    pub root_output_directory: &'a Path,

    /// The directory in which `{id}.html` article pages are written. It
    /// must already exist.
    pub articles_output_directory: &'a Path,
}

impl Writer<'_> {
    /// Renders the index page listing `articles` in the given order.
    pub fn render_index(&self, articles: &[Article]) -> Result<String> {
        render(self.index_template, index_value(self.profile, articles))
    }

    /// Renders the page for a single article.
    pub fn render_article(&self, article: &Article) -> Result<String> {
        render(self.article_template, article_value(self.profile, article))
    }

    /// Renders the index page and writes it to
    /// `{root_output_directory}/index.html`.
    pub fn write_index(&self, articles: &[Article]) -> Result<PathBuf> {
        let file_path = self.root_output_directory.join("index.html");
        write_file(&file_path, &self.render_index(articles)?)?;
        Ok(file_path)
    }

    /// Renders an article page and writes it to
    /// `{articles_output_directory}/{id}.html`.
    pub fn write_article(&self, article: &Article) -> Result<PathBuf> {
        let file_path = self
            .articles_output_directory
            .join(format!("{}.html", article.id));
        write_file(&file_path, &self.render_article(article)?)?;
        Ok(file_path)
    }
}

fn render(template: &Template, value: Value) -> Result<String> {
    let context = Context::from(value).map_err(Error::Template)?;
    let mut out: Vec<u8> = Vec::new();
    template.execute(&mut out, &context)?;
    Ok(String::from_utf8(out)?)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|err| Error::Io {
        path: path.to_owned(),
        err,
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote page");
    Ok(())
}

/// The result of a fallible page-writing operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error in a page-writing operation.
#[derive(Debug)]
pub enum Error {
    /// An error parsing a template.
    ParseTemplate(String),

    /// An error during templating.
    Template(String),

    /// Returned when a template produced invalid UTF-8.
    Utf8(std::string::FromUtf8Error),

    /// An error writing an output file.
    Io { path: PathBuf, err: io::Error },
}

impl From<String> for Error {
    /// Converts a template error message ([`String`]) into an [`Error`]. This
    /// allows us to use the `?` operator for fallible template operations.
    fn from(err: String) -> Error {
        Error::Template(err)
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Error {
        Error::Utf8(err)
    }
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as presentable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::ParseTemplate(err) => write!(f, "Parsing template: {}", err),
            Error::Template(err) => err.fmt(f),
            Error::Utf8(err) => err.fmt(f),
            Error::Io { path, err } => {
                write!(f, "Writing '{}': {}", path.display(), err)
            }
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ParseTemplate(_) => None,
            Error::Template(_) => None,
            Error::Utf8(err) => Some(err),
            Error::Io { path: _, err } => Some(err),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    struct Fixture {
        index_template: Template,
        article_template: Template,
        profile: Profile,
        dir: tempfile::TempDir,
    }

    impl Fixture {
        fn new() -> Fixture {
            Fixture {
                index_template: parse_template(INDEX_TEMPLATE).expect("index template"),
                article_template: parse_template(ARTICLE_TEMPLATE)
                    .expect("article template"),
                profile: Profile::embedded().expect("profile"),
                dir: tempfile::tempdir().expect("tempdir"),
            }
        }

        fn writer(&self) -> Writer<'_> {
            Writer {
                index_template: &self.index_template,
                article_template: &self.article_template,
                profile: &self.profile,
                root_output_directory: self.dir.path(),
                articles_output_directory: self.dir.path(),
            }
        }
    }

    fn article(id: &str, source: &str) -> Article {
        Article::new(id, "Jan 2, 2006", source, crate::markdown::to_html(source))
    }

    #[test]
    fn test_render_index() -> Result<()> {
        let fixture = Fixture::new();
        let out = fixture.writer().render_index(&[
            article("first-post", "# First\n\nHello there."),
            article("second-post", "No heading."),
        ])?;

        assert!(out.contains("<title>Hemanth Kola</title>"));
        assert!(out.contains("<p>Go Engineer &amp; Backend Developer</p>"));
        assert!(out.contains("<h3>First Post</h3>"));
        assert!(out.contains(r#"<div class="date">Jan 2, 2006</div>"#));
        assert!(out.contains("<p>Hello there.</p>"));
        assert!(out.contains(r#"<a href="articles/first-post.html" class="btn">"#));
        assert!(out.contains(
            r#"<a href="https://github.com/HemanthKumarKola1" target="_blank">GitHub</a>"#
        ));

        let first = out.find("First Post").expect("first");
        let second = out.find("Second Post").expect("second");
        assert!(first < second);

        let go = out.find("<strong>Go/Golang</strong>").expect("go");
        let last = out.find("<strong>C/C++, Python</strong>").expect("last");
        assert!(go < last);
        Ok(())
    }

    #[test]
    fn test_render_index_without_articles() -> Result<()> {
        let fixture = Fixture::new();
        let out = fixture.writer().render_index(&[])?;
        assert!(!out.contains("article-card"));
        assert!(out.contains("Latest Articles"));
        assert!(out.contains("skill-card"));
        Ok(())
    }

    #[test]
    fn test_render_index_escapes_title() -> Result<()> {
        let fixture = Fixture::new();
        let out = fixture
            .writer()
            .render_index(&[article("<script>alert(1)</script>", "x")])?;
        assert!(!out.to_lowercase().contains("<script>alert"));
        assert!(out.contains("&lt;Script&gt;Alert(1)&lt;/Script&gt;"));
        Ok(())
    }

    #[test]
    fn test_render_article() -> Result<()> {
        let fixture = Fixture::new();
        let out = fixture
            .writer()
            .render_article(&article("hello-world", "# Hi\n\nSome *text*."))?;
        assert!(out.contains("<title>Hello World</title>"));
        assert!(out.contains(r#"href="../index.html""#));
        assert!(out.contains(r#"href="../style.css""#));
        assert!(out.contains("<h1>Hi</h1>\n<p>Some <em>text</em>.</p>"));
        assert!(out.contains("&copy; 2024 Hemanth Kumar Kola. Built with Rust."));
        Ok(())
    }

    #[test]
    fn test_write_pages() -> Result<()> {
        let fixture = Fixture::new();
        let writer = fixture.writer();
        let post = article("post", "Body.");

        let index = writer.write_index(std::slice::from_ref(&post))?;
        assert_eq!(fixture.dir.path().join("index.html"), index);
        assert!(index.is_file());

        let page = writer.write_article(&post)?;
        assert_eq!(fixture.dir.path().join("post.html"), page);
        let contents = std::fs::read_to_string(&page).expect("read page");
        assert!(contents.contains("<p>Body.</p>"));
        Ok(())
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let fixture = Fixture::new();
        let missing = fixture.dir.path().join("missing");
        let writer = Writer {
            articles_output_directory: &missing,
            ..fixture.writer()
        };
        assert!(matches!(
            writer.write_article(&article("post", "Body.")),
            Err(Error::Io { .. })
        ));
    }
}
