//! Year harvesting: listing fetch, stub parse, bounded detail-page fan-out.

use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{Datelike, Utc};
use tracing::{debug, info, warn};
use url::Url;

use crate::client::PageClient;
use crate::config::Config;
use crate::error::HarvestError;
use crate::executor::Executor;
use crate::models::{Paper, PaperStub, YearResult};
use crate::parse;

/// Harvests paper metadata one conference year at a time.
#[derive(Debug, Clone)]
pub struct Harvester {
    client: PageClient,
    base_url: Url,
    founding_year: i32,
    executor: Executor,
}

impl Harvester {
    /// Create a harvester over the given client and configuration.
    #[must_use]
    pub fn new(client: PageClient, config: &Config) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            founding_year: config.founding_year,
            executor: config.executor(),
        }
    }

    /// The listing URL for one conference year.
    ///
    /// # Errors
    ///
    /// Returns [`HarvestError::InvalidYear`] for years before the first
    /// conference.
    pub fn listing_url(&self, year: i32) -> Result<Url, HarvestError> {
        if year < self.founding_year {
            return Err(HarvestError::InvalidYear { year, founding: self.founding_year });
        }

        let mut url = self.base_url.clone();
        url.set_path(&format!("paper/{year}"));
        Ok(url)
    }

    /// Harvest one year: every paper from its listing page, each with its
    /// abstract attached, in listing order.
    ///
    /// A failed listing fetch skips the year with a warning and an empty
    /// result so a multi-year batch keeps going. A failed detail fetch
    /// keeps the paper with an empty abstract.
    ///
    /// # Errors
    ///
    /// Returns [`HarvestError::InvalidYear`] for years before the first
    /// conference; no partial output is produced.
    pub async fn harvest_year(&self, year: i32) -> Result<YearResult, HarvestError> {
        let url = self.listing_url(year)?;

        let body = match self.client.fetch(url.as_str()).await {
            Ok(body) => body,
            Err(err) => {
                warn!(year, error = %err, "listing page unavailable, skipping year");
                return Ok(Vec::new());
            }
        };

        let stubs: Vec<PaperStub> = parse::parse_listing(&body, &self.base_url)
            .into_iter()
            .map(|stub| stub.with_year(year))
            .collect();

        let total = stubs.len();
        info!(year, papers = total, "harvesting year");

        let completed = AtomicUsize::new(0);
        let papers = self
            .executor
            .run_ordered(stubs, |stub| {
                let completed = &completed;
                async move {
                    let paper = self.attach_abstract(stub).await;
                    let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                    debug!(year, done, total, "fetched paper detail");
                    paper
                }
            })
            .await;

        Ok(papers)
    }

    /// Harvest every year from the founding year through `last_year`,
    /// strictly sequentially, concatenated in year order.
    ///
    /// # Errors
    ///
    /// Returns [`HarvestError::InvalidYear`] if `last_year` predates the
    /// founding year.
    pub async fn harvest_all(&self, last_year: i32) -> Result<Vec<Paper>, HarvestError> {
        if last_year < self.founding_year {
            return Err(HarvestError::InvalidYear {
                year: last_year,
                founding: self.founding_year,
            });
        }

        let mut papers = Vec::new();
        for year in self.founding_year..=last_year {
            papers.extend(self.harvest_year(year).await?);
        }
        Ok(papers)
    }

    /// Fetch a stub's detail page and attach its abstract.
    async fn attach_abstract(&self, stub: PaperStub) -> Paper {
        match self.client.fetch(&stub.url).await {
            Ok(body) => {
                let abstract_text = parse::parse_abstract(&body);
                if abstract_text.is_empty() {
                    debug!(url = %stub.url, "no abstract found on detail page");
                }
                Paper::from_stub(stub, abstract_text)
            }
            Err(err) => {
                warn!(url = %stub.url, error = %err, "detail page failed, keeping paper without abstract");
                Paper::from_stub(stub, String::new())
            }
        }
    }
}

/// Default last year for a full harvest: the previous calendar year, since
/// the current year's proceedings are not published until the conference
/// has taken place.
#[must_use]
pub fn default_last_year() -> i32 {
    Utc::now().year() - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn harvester() -> Harvester {
        let config = Config::default();
        let client = PageClient::new(&config).unwrap();
        Harvester::new(client, &config)
    }

    #[test]
    fn test_listing_url_for_valid_year() {
        let url = harvester().listing_url(2019).unwrap();
        assert_eq!(url.as_str(), "https://papers.nips.cc/paper/2019");
    }

    #[test]
    fn test_listing_url_rejects_pre_founding_year() {
        let err = harvester().listing_url(1900).unwrap_err();
        assert!(matches!(err, HarvestError::InvalidYear { year: 1900, founding: 1987 }));
    }

    #[test]
    fn test_default_last_year_is_in_the_past() {
        assert!(default_last_year() < Utc::now().year());
    }
}
