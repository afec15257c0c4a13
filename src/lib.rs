//!
//! Typed async client for the barbershoptags.com XML API.
//!
//! Fetch individual tags, run filtered and sorted searches, submit
//! ratings, and pull remote file payloads. The service serializes
//! loosely (mixed date formats, empty strings for absent values,
//! numbers as strings, an "other" token for part counts), so decoding
//! is lenient and field-isolated: one bad field never costs the rest
//! of the record.
//!
//! ```no_run
//! use barbershop_tags::{ClientConfig, SortOrder, TagQuery, TagsClient};
//!
//! # async fn demo() -> Result<(), barbershop_tags::TagError> {
//! let client = TagsClient::new(ClientConfig::default())?;
//!
//! let tag = client.get_tag_by_id(5345).await?;
//! println!("{} ({})", tag.title, tag.rating);
//!
//! let result = client
//!     .query(&TagQuery::new().search("smile").sort(SortOrder::ByRating))
//!     .await?;
//! println!("{} of {} tags", result.tags.len(), result.available);
//! # Ok(())
//! # }
//! ```
//!

pub mod config;
pub mod decode;
pub mod encode;
pub mod errors;
pub mod fetch;
pub mod model;
pub mod query;

pub use config::{ClientConfig, HttpConfig, load_config};
pub use errors::TagError;
pub use fetch::TagsClient;
pub use model::{
    Collection, Field, FileFormat, Key, Note, RecordingMethod, RemoteFile, Tag,
    TagQueryResult, TagVideo, Tonality, VoicingType,
};
pub use query::{DEFAULT_PAGE_SIZE, SortOrder, TagQuery};
