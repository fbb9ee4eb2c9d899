mod demo;
mod source;
pub mod types;

pub use demo::demo_leads;
pub use source::load_leads;
pub use types::{Lead, ScoredLead};
