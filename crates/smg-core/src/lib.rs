//! smg-core: turns a free-form list of paths and URLs into a sitemaps.org
//! XML document.
//!
//! ```text
//! raw lines ──► normalize ──► dedup/validate ──► xml::serialize
//!      └──────► stats (textual counts only)
//! ```
//!
//! Everything here is synchronous and pure apart from [`config`] and
//! [`logging`], which the CLI uses for its ambient setup.

pub mod config;
pub mod dedup;
pub mod error;
pub mod generate;
pub mod logging;
pub mod model;
pub mod normalize;
pub mod stats;
pub mod xml;

pub use error::{CapacityExceeded, GenerationError, NormalizationError, SettingError, SitemapWarning};
pub use generate::{generate, generate_sitemap, generate_with, GenerationOptions, GenerationResult};
pub use model::{ChangeFreq, Priority, SitemapConfig, UrlEntry};
pub use normalize::{normalize, BaseUrl};
pub use stats::{compute_stats, Stats};
