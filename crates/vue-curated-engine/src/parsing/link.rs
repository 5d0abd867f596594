/// Delimiters of the `[label](url)` link form.
pub struct MdLink;

impl MdLink {
    pub const LABEL_OPEN: u8 = b'[';
    pub const LABEL_CLOSE: char = ']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: char = ')';
}

/// A `[label](url)` token matched at the start of a text fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownLink {
    pub label: String,
    pub url: String,
    /// Byte length of the consumed `[label](url)` prefix. Callers slice the
    /// fragment at this offset to continue parsing the remainder.
    pub len: usize,
}

/// Parses a markdown-style link at the very start of `s`.
///
/// The label ends at the first `]` and the url at the first `)`; there is no
/// nesting and no escaping. Both parts must be non-empty, and the url must
/// open immediately after the label closes. Returns `None` when `s` does not
/// begin with a well-formed link.
pub fn parse_markdown_link(s: &str) -> Option<MarkdownLink> {
    if s.as_bytes().first() != Some(&MdLink::LABEL_OPEN) {
        return None;
    }
    let label_end = s.find(MdLink::LABEL_CLOSE)?;
    let label = &s[1..label_end];

    let rest = &s[label_end + 1..];
    if rest.as_bytes().first() != Some(&MdLink::URL_OPEN) {
        return None;
    }
    let url_end = rest.find(MdLink::URL_CLOSE)?;
    let url = &rest[1..url_end];

    if label.is_empty() || url.is_empty() {
        return None;
    }

    Some(MarkdownLink {
        label: label.to_string(),
        url: url.to_string(),
        len: label_end + 1 + url_end + 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_link_at_start() {
        let link = parse_markdown_link("[VueRouter](https://github.com/vuejs/vue-router)").unwrap();
        assert_eq!(link.label, "VueRouter");
        assert_eq!(link.url, "https://github.com/vuejs/vue-router");
        assert_eq!(link.len, 48);
    }

    #[test]
    fn reports_consumed_length_with_trailing_text() {
        let s = "[Vuex](https://github.com/vuejs/vuex) vue:2 status:stable";
        let link = parse_markdown_link(s).unwrap();
        assert_eq!(&s[link.len..], " vue:2 status:stable");
    }

    #[test]
    fn rejects_fragment_not_starting_with_link() {
        assert_eq!(parse_markdown_link("see [docs](https://example.com)"), None);
    }

    #[test]
    fn rejects_unclosed_label_or_url() {
        assert_eq!(parse_markdown_link("[broken(https://example.com)"), None);
        assert_eq!(parse_markdown_link("[broken](https://example.com"), None);
    }

    #[test]
    fn rejects_missing_url_part() {
        assert_eq!(parse_markdown_link("[label] (https://example.com)"), None);
        assert_eq!(parse_markdown_link("[label]"), None);
    }

    #[test]
    fn rejects_empty_label_or_url() {
        assert_eq!(parse_markdown_link("[](https://example.com)"), None);
        assert_eq!(parse_markdown_link("[label]()"), None);
    }
}
