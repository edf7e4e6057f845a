//! Paper entities.

use serde::{Deserialize, Serialize};

/// A paper entry parsed from a year's listing page, before its abstract
/// has been attached.
///
/// Produced by the listing parser with `year` unset; the harvester stamps
/// the year with [`PaperStub::with_year`] before any further use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperStub {
    /// Paper title.
    pub title: String,

    /// Authors in listing order, each trimmed.
    pub authors: Vec<String>,

    /// Absolute URL of the paper's detail page.
    pub url: String,

    /// Publication year.
    pub year: i32,
}

impl PaperStub {
    /// Create a stub with the year not yet stamped.
    #[must_use]
    pub fn new(title: impl Into<String>, authors: Vec<String>, url: impl Into<String>) -> Self {
        Self { title: title.into(), authors, url: url.into(), year: 0 }
    }

    /// Stamp the stub with its listing year.
    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }
}

/// A fully harvested paper.
///
/// `abstract` may be empty: legacy-era detail pages lack the expected
/// markup, and a failed detail fetch degrades to an empty abstract rather
/// than dropping the paper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    /// Paper title.
    pub title: String,

    /// Authors in listing order.
    #[serde(default)]
    pub authors: Vec<String>,

    /// Absolute URL of the paper's detail page.
    pub url: String,

    /// Publication year.
    pub year: i32,

    /// Abstract text, possibly empty.
    #[serde(default)]
    pub r#abstract: String,
}

impl Paper {
    /// Extend a stub with its computed abstract.
    #[must_use]
    pub fn from_stub(stub: PaperStub, abstract_text: String) -> Self {
        Self {
            title: stub.title,
            authors: stub.authors,
            url: stub.url,
            year: stub.year,
            r#abstract: abstract_text,
        }
    }

    /// Whether an abstract was found for this paper.
    #[must_use]
    pub fn has_abstract(&self) -> bool {
        !self.r#abstract.is_empty()
    }
}
