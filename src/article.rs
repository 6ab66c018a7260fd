//! Defines the [`Article`] type along with the rules for deriving an
//! article's title and summary from its source file. See
//! [`crate::parser`] for how articles are loaded from disk and
//! [`crate::value`] for how they are converted into template values.

/// The maximum number of characters kept from the summary line.
pub const SUMMARY_LENGTH: usize = 150;

/// Appended to summaries which were cut at [`SUMMARY_LENGTH`].
pub const ELLIPSIS: &str = "...";

/// The summary for documents which have no paragraph text at all.
pub const SUMMARY_FALLBACK: &str = "Read more...";

/// One rendered markdown document.
#[derive(Clone, Debug, PartialEq)]
pub struct Article {
    /// The source file name less its `.md` extension. It's used as the
    /// output file stem (`articles/{id}.html`).
    pub id: String,

    /// The human-readable title (see [`title_from_id`]).
    pub title: String,

    /// The formatted publication date.
    pub date: String,

    /// A plain-text preview (see [`summarize`]). Never empty.
    pub summary: String,

    /// The document converted to an HTML fragment.
    pub body: String,
}

impl Article {
    /// Builds an article from its identifier, formatted date, raw markdown
    /// source, and the HTML converted from that source.
    pub fn new(id: &str, date: &str, source: &str, body: String) -> Article {
        Article {
            id: id.to_owned(),
            title: title_from_id(id),
            date: date.to_owned(),
            summary: summarize(source),
            body,
        }
    }
}

/// Converts an identifier into a display title: dashes become spaces and the
/// first letter of each word is upper-cased. A word begins at the start of
/// the string or after a separator: an ASCII character which isn't
/// alphanumeric or `_`, or any whitespace. Other non-ASCII characters (such
/// as `’`) belong to the word. The remaining characters are left untouched.
pub fn title_from_id(id: &str) -> String {
    let mut title = String::with_capacity(id.len());
    let mut word_start = true;
    for c in id.chars() {
        let c = if c == '-' { ' ' } else { c };
        if word_start {
            title.extend(c.to_uppercase());
        } else {
            title.push(c);
        }
        word_start = is_separator(c);
    }
    title
}

fn is_separator(c: char) -> bool {
    if c.is_ascii() {
        !(c.is_ascii_alphanumeric() || c == '_')
    } else {
        c.is_whitespace()
    }
}

/// Returns the first line of `source` which is neither blank nor a heading,
/// trimmed. Lines longer than [`SUMMARY_LENGTH`] characters are cut and
/// suffixed with [`ELLIPSIS`]. If there is no such line, returns
/// [`SUMMARY_FALLBACK`].
pub fn summarize(source: &str) -> String {
    match source
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#'))
    {
        None => SUMMARY_FALLBACK.to_owned(),
        Some(line) => match line.char_indices().nth(SUMMARY_LENGTH) {
            None => line.to_owned(),
            Some((cut, _)) => format!("{}{}", &line[..cut], ELLIPSIS),
        },
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_summarize_skips_headings_and_blanks() {
        let source = "# Title\n\n   \n## Subtitle\n  First paragraph.  \nSecond.";
        assert_eq!("First paragraph.", summarize(source));
    }

    #[test]
    fn test_summarize_fallback() {
        assert_eq!(SUMMARY_FALLBACK, summarize(""));
        assert_eq!(SUMMARY_FALLBACK, summarize("# Only\n\n#Headings\n   \n"));
    }

    #[test]
    fn test_summarize_crlf() {
        assert_eq!("Body", summarize("# Title\r\n\r\nBody\r\n"));
    }

    #[test]
    fn test_summarize_truncation_boundary() {
        let exact = "a".repeat(SUMMARY_LENGTH);
        assert_eq!(exact, summarize(&exact));

        let long = "b".repeat(SUMMARY_LENGTH + 1);
        assert_eq!(
            format!("{}{}", "b".repeat(SUMMARY_LENGTH), ELLIPSIS),
            summarize(&long)
        );
    }

    #[test]
    fn test_summarize_counts_characters() {
        // 150 two-byte characters fit; one more is cut.
        let exact = "é".repeat(SUMMARY_LENGTH);
        assert_eq!(exact, summarize(&exact));

        let long = "é".repeat(SUMMARY_LENGTH + 5);
        assert_eq!(format!("{}...", exact), summarize(&long));
    }

    #[test]
    fn test_title_from_id() {
        assert_eq!("Hello World", title_from_id("hello-world"));
        assert_eq!("Already Spaced", title_from_id("already spaced"));
        assert_eq!("GRPC Vs REST", title_from_id("gRPC-vs-REST"));
        assert_eq!("Snake_case", title_from_id("snake_case"));
        assert_eq!("C++Tips", title_from_id("c++tips"));
        assert_eq!("2024 Review", title_from_id("2024-review"));
        assert_eq!("", title_from_id(""));
    }

    #[test]
    fn test_title_from_id_non_ascii() {
        assert_eq!("Don\u{2019}t Panic", title_from_id("don\u{2019}t-panic"));
        assert_eq!("Café Crème", title_from_id("café-crème"));
        assert_eq!("Über\u{3000}Alles", title_from_id("über\u{3000}alles"));
    }

    #[test]
    fn test_new_article() {
        let article = Article::new(
            "my-first-post",
            "Jan 2, 2006",
            "# Heading\nHello.",
            String::from("<h1>Heading</h1>\n<p>Hello.</p>\n"),
        );
        assert_eq!("my-first-post", article.id);
        assert_eq!("My First Post", article.title);
        assert_eq!("Jan 2, 2006", article.date);
        assert_eq!("Hello.", article.summary);
    }
}
