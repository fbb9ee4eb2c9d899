mod filter;
mod sort;
mod tier;

pub use filter::{filter_location, filter_min_score, LeadFilter, DEFAULT_MIN_SCORE};
pub use sort::{rank, summarize, Summary, HOT_LEAD_THRESHOLD};
pub use tier::Tier;
