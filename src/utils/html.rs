//! Job descriptions arrive as HTML fragments; the terminal wants text.

use regex::Regex;
use std::sync::LazyLock;

static BREAKS: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>|</p>|</li>|</h[1-6]>|</div>").ok());
static BULLETS: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(?i)<li[^>]*>").ok());
static TAGS: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"<[^>]+>").ok());
static BLANKS: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\n\s*\n+").ok());

fn replace(re: &LazyLock<Option<Regex>>, s: &str, with: &str) -> String {
    match re.as_ref() {
        Some(re) => re.replace_all(s, with).into_owned(),
        None => s.to_string(),
    }
}

/// Tags removed, block ends turned into newlines, common entities decoded.
pub fn strip_html(html: &str) -> String {
    let text = replace(&BREAKS, html, "\n");
    let text = replace(&BULLETS, &text, "• ");
    let text = replace(&TAGS, &text, "");

    let text = text
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");

    replace(&BLANKS, text.trim(), "\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_markup_and_keeps_structure() {
        let html = "<p>Join <b>Acme</b> &amp; build.</p><ul><li>Rust</li><li>SQL</li></ul>";
        assert_eq!(strip_html(html), "Join Acme & build.\n• Rust\n• SQL");
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(strip_html("no markup"), "no markup");
    }
}
