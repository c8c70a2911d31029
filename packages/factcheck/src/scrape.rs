//! Page content extraction - reduce a fetched page to a bounded
//! plain-text payload plus metadata.
//!
//! Main content is selected by trying article-like containers first and
//! generic content containers last, falling back to the whole body. Noise
//! subtrees (scripts, styles, navigation, chrome) are skipped during text
//! collection. Metadata fields are each independently best-effort: a
//! missing element yields an empty string, never a failure.

use scraper::{ElementRef, Html, Node, Selector};
use tracing::debug;
use url::Url;

use crate::error::{FetchError, FetchResult};
use crate::search::USER_AGENT;
use crate::types::PageContent;

/// Character cap applied to extracted content.
pub const MAX_CONTENT_CHARS: usize = 8000;

/// Timeout for page fetches.
const FETCH_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

/// Ordered content-region selectors, most specific first.
const CONTENT_SELECTORS: &[&str] = &[
    "article",
    "main",
    "[role=\"main\"]",
    ".content",
    "#content",
    ".post",
    ".article",
];

/// Subtrees dropped during text collection.
const SKIP_TAGS: &[&str] = &["script", "style", "nav", "footer", "header", "aside"];

/// Fetches pages and extracts analyzable text.
pub struct PageScraper {
    client: reqwest::Client,
}

impl Default for PageScraper {
    fn default() -> Self {
        Self::new()
    }
}

impl PageScraper {
    /// Create a scraper with browser-identifying headers.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .unwrap_or_default(),
        }
    }

    /// Use an existing HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Fetch a URL and extract its content and metadata.
    pub async fn fetch_and_extract(&self, url: &str) -> FetchResult<PageContent> {
        let domain = validate_url(url)?;
        let html = self.fetch_html(url).await?;
        let page = extract_page(url, &domain, &html, MAX_CONTENT_CHARS);
        debug!(url = %url, words = page.word_count, "page extracted");
        Ok(page)
    }

    /// Fetch a short plain-text preview of a page (for prompt enrichment).
    pub async fn fetch_preview(&self, url: &str, max_chars: usize) -> FetchResult<String> {
        validate_url(url)?;
        let html = self.fetch_html(url).await?;
        let page = extract_page(url, "", &html, max_chars);
        Ok(page.content)
    }

    async fn fetch_html(&self, url: &str) -> FetchResult<String> {
        let response = self
            .client
            .get(url)
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8")
            .header("Accept-Language", "en-US,en;q=0.5")
            .timeout(FETCH_TIMEOUT)
            .send()
            .await
            .map_err(|e| map_transport_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http(format!("HTTP {status}")));
        }

        response
            .text()
            .await
            .map_err(|e| map_transport_error(url, e))
    }
}

fn map_transport_error(url: &str, e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout { url: url.to_string() }
    } else {
        FetchError::Http(e.to_string())
    }
}

/// Require a scheme and a network location; return the host component.
fn validate_url(url: &str) -> FetchResult<String> {
    let parsed = Url::parse(url).map_err(|_| FetchError::InvalidUrl { url: url.to_string() })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(FetchError::InvalidUrl { url: url.to_string() });
    }
    match parsed.host_str() {
        Some(host) => Ok(host.to_string()),
        None => Err(FetchError::InvalidUrl { url: url.to_string() }),
    }
}

/// Parse HTML and assemble the page payload. Pure; callable on any markup.
pub(crate) fn extract_page(url: &str, domain: &str, html: &str, max_chars: usize) -> PageContent {
    let doc = Html::parse_document(html);

    let content = extract_content(&doc, max_chars);
    let word_count = content.split_whitespace().count();

    PageContent {
        url: url.to_string(),
        title: select_text(&doc, "title"),
        content,
        meta_description: select_attr(&doc, "meta[name=\"description\"]", "content"),
        publication_date: extract_publication_date(&doc),
        domain: domain.to_string(),
        word_count,
    }
}

/// Select the main content region and collapse its text.
fn extract_content(doc: &Html, max_chars: usize) -> String {
    for selector_str in CONTENT_SELECTORS {
        let selector = Selector::parse(selector_str).unwrap();
        if let Some(element) = doc.select(&selector).next() {
            let text = collapse(&collect_text(&element), max_chars);
            if !text.is_empty() {
                return text;
            }
        }
    }

    // Fall back to the whole body.
    let body_sel = Selector::parse("body").unwrap();
    match doc.select(&body_sel).next() {
        Some(body) => collapse(&collect_text(&body), max_chars),
        None => String::new(),
    }
}

/// Recursively gather text, dropping noise subtrees.
fn collect_text(element: &ElementRef<'_>) -> String {
    let mut buf = String::new();
    walk(element, &mut buf);
    buf
}

fn walk(element: &ElementRef<'_>, buf: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                buf.push_str(text);
                buf.push(' ');
            }
            Node::Element(el) => {
                if SKIP_TAGS.contains(&el.name()) {
                    continue;
                }
                if let Some(child_ref) = ElementRef::wrap(child) {
                    walk(&child_ref, buf);
                }
            }
            _ => {}
        }
    }
}

/// Collapse all whitespace runs to single spaces and cap at `max_chars`.
fn collapse(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        collapsed
    } else {
        collapsed.chars().take(max_chars).collect()
    }
}

fn select_text(doc: &Html, selector_str: &str) -> String {
    let selector = Selector::parse(selector_str).unwrap();
    doc.select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

fn select_attr(doc: &Html, selector_str: &str, attr: &str) -> String {
    let selector = Selector::parse(selector_str).unwrap();
    doc.select(&selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .unwrap_or_default()
        .to_string()
}

/// Best-effort publication date: ordered selectors, first hit wins; the
/// value comes from `content`, then `datetime`, then element text.
fn extract_publication_date(doc: &Html) -> String {
    const DATE_SELECTORS: &[&str] = &[
        "meta[property=\"article:published_time\"]",
        "meta[name=\"publish_date\"]",
        "time[datetime]",
        ".date",
        ".published",
    ];

    for selector_str in DATE_SELECTORS {
        let selector = Selector::parse(selector_str).unwrap();
        if let Some(element) = doc.select(&selector).next() {
            let value = element
                .value()
                .attr("content")
                .or_else(|| element.value().attr("datetime"))
                .map(|v| v.to_string())
                .unwrap_or_else(|| element.text().collect::<String>().trim().to_string());
            if !value.is_empty() {
                return value;
            }
        }
    }

    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLE_PAGE: &str = r#"
        <html>
          <head>
            <title>Moon Facts | Example</title>
            <meta name="description" content="Everything about the Moon.">
            <meta property="article:published_time" content="2024-03-01T10:00:00Z">
          </head>
          <body>
            <header>Site chrome that should vanish</header>
            <nav>Home About Contact</nav>
            <article>
              <h1>The Moon</h1>
              <script>var tracking = true;</script>
              <p>The Moon   is Earth's only
                 natural satellite.</p>
            </article>
            <footer>Copyright</footer>
          </body>
        </html>"#;

    #[test]
    fn article_container_wins_over_body() {
        let page = extract_page("https://example.com/moon", "example.com", ARTICLE_PAGE, 8000);
        assert!(page.content.contains("natural satellite"));
        assert!(!page.content.contains("Site chrome"));
        assert!(!page.content.contains("Copyright"));
    }

    #[test]
    fn scripts_are_stripped_and_whitespace_collapsed() {
        let page = extract_page("https://example.com/moon", "example.com", ARTICLE_PAGE, 8000);
        assert!(!page.content.contains("tracking"));
        assert!(page.content.contains("Moon is Earth's only natural satellite."));
    }

    #[test]
    fn metadata_is_extracted() {
        let page = extract_page("https://example.com/moon", "example.com", ARTICLE_PAGE, 8000);
        assert_eq!(page.title, "Moon Facts | Example");
        assert_eq!(page.meta_description, "Everything about the Moon.");
        assert_eq!(page.publication_date, "2024-03-01T10:00:00Z");
    }

    #[test]
    fn missing_metadata_is_empty_never_error() {
        let page = extract_page("https://a.com", "a.com", "<html><body><p>hi</p></body></html>", 8000);
        assert_eq!(page.title, "");
        assert_eq!(page.meta_description, "");
        assert_eq!(page.publication_date, "");
        assert_eq!(page.content, "hi");
    }

    #[test]
    fn body_fallback_when_no_container_matches() {
        let html = "<html><body><p>plain body text</p></body></html>";
        let page = extract_page("https://a.com", "a.com", html, 8000);
        assert_eq!(page.content, "plain body text");
    }

    #[test]
    fn content_is_capped_and_word_count_follows() {
        let long = format!(
            "<html><body><article>{}</article></body></html>",
            "word ".repeat(3000)
        );
        let page = extract_page("https://a.com", "a.com", &long, 8000);
        assert!(page.content.chars().count() <= 8000);
        assert_eq!(page.word_count, page.content.split_whitespace().count());
    }

    #[test]
    fn time_datetime_attribute_is_used() {
        let html = r#"<html><body><time datetime="2023-07-04">July 4</time></body></html>"#;
        let page = extract_page("https://a.com", "a.com", html, 8000);
        assert_eq!(page.publication_date, "2023-07-04");
    }

    #[test]
    fn url_without_host_is_invalid() {
        assert!(matches!(
            validate_url("data:image/png;base64,xyz"),
            Err(FetchError::InvalidUrl { .. })
        ));
        assert!(matches!(
            validate_url("not a url"),
            Err(FetchError::InvalidUrl { .. })
        ));
        assert!(validate_url("https://example.com/x").is_ok());
    }
}
