//! Data models for harvested papers.

mod paper;

pub use paper::{Paper, PaperStub};

/// All papers harvested from one year's listing, in listing order.
pub type YearResult = Vec<Paper>;

/// The persisted collection of papers across all harvested years.
pub type Dataset = Vec<Paper>;
