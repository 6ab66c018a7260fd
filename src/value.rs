//! Conversions from the site's data types into template [`Value`]s. Every
//! text field is HTML-escaped here, so the templates can print fields as-is;
//! the only field inserted verbatim is an article's converted `body`.

use crate::article::Article;
use crate::config::{Profile, SocialLink};
use gtmpl_value::Value;
use pulldown_cmark::escape::{escape_href, escape_html};
use std::collections::HashMap;

/// The directory (relative to the site root) holding article pages.
pub const ARTICLES_PATH: &str = "articles";

/// Escapes `s` for use as element text or a quoted attribute value.
pub fn html(s: &str) -> Value {
    let mut out = String::with_capacity(s.len());
    let _ = escape_html(&mut out, s);
    Value::String(out)
}

/// Escapes `s` for use in an `href` attribute.
pub fn href(s: &str) -> Value {
    let mut out = String::with_capacity(s.len());
    let _ = escape_href(&mut out, s);
    Value::String(out)
}

/// Converts an [`Article`] into a [`Value::Object`] with fields `id`,
/// `title`, `date`, `summary`, `url` and `body`. `url` is relative to the
/// site root.
impl From<&Article> for Value {
    fn from(a: &Article) -> Value {
        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("id".to_owned(), html(&a.id));
        m.insert("title".to_owned(), html(&a.title));
        m.insert("date".to_owned(), html(&a.date));
        m.insert("summary".to_owned(), html(&a.summary));
        m.insert(
            "url".to_owned(),
            href(&format!("{}/{}.html", ARTICLES_PATH, a.id)),
        );
        m.insert("body".to_owned(), Value::String(a.body.clone()));
        Value::Object(m)
    }
}

impl From<&SocialLink> for Value {
    fn from(l: &SocialLink) -> Value {
        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("name".to_owned(), html(&l.name));
        m.insert("url".to_owned(), href(l.url.as_str()));
        Value::Object(m)
    }
}

/// The fields of a [`Profile`] shared by every page: `title`, `name`,
/// `headline`, `contact` and `copyright`.
pub fn profile_fields(p: &Profile) -> HashMap<String, Value> {
    let mut m: HashMap<String, Value> = HashMap::new();
    m.insert("title".to_owned(), html(&p.title));
    m.insert("name".to_owned(), html(&p.name));
    m.insert("headline".to_owned(), html(&p.headline));
    m.insert("contact".to_owned(), html(&p.contact));
    m.insert("copyright".to_owned(), html(&p.copyright));
    m
}

/// Builds the context for the index page: the [`profile_fields`] plus
/// `skills`, `social_links` and `articles`, each in their given order.
pub fn index_value(profile: &Profile, articles: &[Article]) -> Value {
    let mut m = profile_fields(profile);
    m.insert(
        "skills".to_owned(),
        Value::Array(profile.skills.iter().map(|s| html(s)).collect()),
    );
    m.insert(
        "social_links".to_owned(),
        Value::Array(profile.social_links.iter().map(Value::from).collect()),
    );
    m.insert(
        "articles".to_owned(),
        Value::Array(articles.iter().map(Value::from).collect()),
    );
    Value::Object(m)
}

/// Builds the context for an article page: the article's own fields plus
/// the profile's `copyright` line for the footer.
pub fn article_value(profile: &Profile, article: &Article) -> Value {
    match Value::from(article) {
        Value::Object(mut m) => {
            m.insert("copyright".to_owned(), html(&profile.copyright));
            Value::Object(m)
        }
        other => other,
    }
}
