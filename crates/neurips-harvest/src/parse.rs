//! Listing and detail-page parsers.
//!
//! The proceedings site's markup has drifted across decades of pages, so
//! both parsers degrade instead of failing: a listing item missing its
//! expected sub-elements is skipped, and a detail page without the abstract
//! marker yields an empty abstract.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::models::PaperStub;

/// Heading text that marks the abstract block on a detail page.
const ABSTRACT_MARKER: &str = "Abstract";

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid static selector")
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Extract paper stubs from a year's listing page.
///
/// Each `<li>` under the listing container yields one stub: the first link
/// carries the title and detail-page href (resolved against `base`), the
/// first italic element carries the comma-separated author list. Items
/// missing either element are skipped; years are left unstamped.
#[must_use]
pub fn parse_listing(html: &str, base: &Url) -> Vec<PaperStub> {
    let document = Html::parse_document(html);
    let container = selector("div.container-fluid");
    let item = selector("li");
    let link = selector("a");
    let author_group = selector("i");

    let Some(listing) = document.select(&container).next() else {
        return Vec::new();
    };

    let mut stubs = Vec::new();
    for li in listing.select(&item) {
        let Some(anchor) = li.select(&link).next() else {
            continue;
        };
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let Ok(detail_url) = base.join(href) else {
            continue;
        };
        let Some(authors_element) = li.select(&author_group).next() else {
            continue;
        };

        let authors = text_of(authors_element)
            .split(',')
            .map(str::trim)
            .filter(|author| !author.is_empty())
            .map(ToString::to_string)
            .collect();

        stubs.push(PaperStub::new(text_of(anchor), authors, detail_url.as_str()));
    }

    stubs
}

/// Extract the abstract text from a paper's detail page.
///
/// Locates the `Abstract` heading and joins the run of following sibling
/// paragraphs with newlines. Returns an empty string when the marker is
/// absent, which is a normal outcome for legacy-era pages.
#[must_use]
pub fn parse_abstract(html: &str) -> String {
    let document = Html::parse_document(html);
    let heading = selector("h4");

    let Some(marker) = document.select(&heading).find(|h| text_of(*h) == ABSTRACT_MARKER) else {
        return String::new();
    };

    let paragraphs: Vec<String> = marker
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .take_while(|element| element.value().name() == "p")
        .map(text_of)
        .collect();

    paragraphs.join("\n").trim().to_string()
}
