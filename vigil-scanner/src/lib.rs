pub mod analyzer;
pub mod error;
pub mod fetcher;
pub mod result;
pub mod sampler;

pub use analyzer::analyze_page;
pub use error::AuditError;
pub use fetcher::PageFetcher;
pub use result::{FetchResult, LinkCheckResult, PageSignals};
pub use sampler::{LinkSampler, LINK_SAMPLE_CAP};
