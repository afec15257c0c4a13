//!
//! src/query.rs
//!
//! Builds the wire-level parameter set for a tag search. Every option
//! is independent; absent options are simply omitted.
//!

use chrono::NaiveDateTime;

use crate::model::{Collection, Field, VoicingType};

/// How many tags a query asks for when the caller does not say.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// The service's Minstamp parameter format. 12-hour, as existing
/// clients send it.
const MINSTAMP_FORMAT: &str = "%Y-%m-%d %I:%M:%S";

/// Control how returned tags are sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    ByTitle,
    /// Original post date, descending
    ByPosted,
    /// Last-update stamp, descending
    ByStamp,
    /// Total ratings, descending
    ByRating,
    ByDownloaded,
    /// Index in David Wright's Classic Tag Book. Only meaningful
    /// together with the classic collection filter.
    ByClassicIndex,
}

impl SortOrder {
    pub const ALL: [SortOrder; 6] = [
        SortOrder::ByTitle,
        SortOrder::ByPosted,
        SortOrder::ByStamp,
        SortOrder::ByRating,
        SortOrder::ByDownloaded,
        SortOrder::ByClassicIndex,
    ];

    pub fn wire(&self) -> &'static str {
        match self {
            SortOrder::ByTitle => "Title",
            SortOrder::ByPosted => "Posted",
            SortOrder::ByStamp => "stamp",
            SortOrder::ByRating => "Rating",
            SortOrder::ByDownloaded => "Downloaded",
            SortOrder::ByClassicIndex => "Classic",
        }
    }

    /// A human-readable label, useful for sort menus.
    pub fn pretty(&self) -> &'static str {
        match self {
            SortOrder::ByTitle => "Title",
            SortOrder::ByPosted => "Post Date",
            SortOrder::ByStamp => "Updated",
            SortOrder::ByRating => "Rating",
            SortOrder::ByDownloaded => "Downloads",
            SortOrder::ByClassicIndex => "Classic Tag Book Order",
        }
    }
}

/// A structured search request against the tag catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct TagQuery {
    /// Free-text search term
    pub search: Option<String>,
    /// Result count limit; `new()` seeds the default page size
    pub number: Option<u32>,
    /// Zero-based start offset; the wire is one-based
    pub start_index: Option<u32>,
    /// Required part count
    pub parts: Option<u32>,
    pub voicing_types: Option<Vec<VoicingType>>,
    pub has_learning_tracks: Option<bool>,
    pub has_sheet_music: Option<bool>,
    pub collection: Option<Collection>,
    pub min_rating: Option<f64>,
    pub min_downloaded: Option<f64>,
    pub min_stamp: Option<NaiveDateTime>,
    pub sort: Option<SortOrder>,
    /// When set, the service returns only these fields
    pub fields: Option<Vec<Field>>,
}

impl Default for TagQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl TagQuery {
    pub fn new() -> Self {
        Self {
            search: None,
            number: Some(DEFAULT_PAGE_SIZE),
            start_index: Some(0),
            parts: None,
            voicing_types: None,
            has_learning_tracks: None,
            has_sheet_music: None,
            collection: None,
            min_rating: None,
            min_downloaded: None,
            min_stamp: None,
            sort: None,
            fields: None,
        }
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn number(mut self, n: u32) -> Self {
        self.number = Some(n);
        self
    }

    pub fn start_index(mut self, start: u32) -> Self {
        self.start_index = Some(start);
        self
    }

    pub fn parts(mut self, parts: u32) -> Self {
        self.parts = Some(parts);
        self
    }

    pub fn voicing_types(mut self, types: impl Into<Vec<VoicingType>>) -> Self {
        self.voicing_types = Some(types.into());
        self
    }

    pub fn has_learning_tracks(mut self, wanted: bool) -> Self {
        self.has_learning_tracks = Some(wanted);
        self
    }

    pub fn has_sheet_music(mut self, wanted: bool) -> Self {
        self.has_sheet_music = Some(wanted);
        self
    }

    pub fn collection(mut self, collection: Collection) -> Self {
        self.collection = Some(collection);
        self
    }

    pub fn min_rating(mut self, rating: f64) -> Self {
        self.min_rating = Some(rating);
        self
    }

    pub fn min_downloaded(mut self, downloads: f64) -> Self {
        self.min_downloaded = Some(downloads);
        self
    }

    pub fn min_stamp(mut self, stamp: NaiveDateTime) -> Self {
        self.min_stamp = Some(stamp);
        self
    }

    pub fn sort(mut self, order: SortOrder) -> Self {
        self.sort = Some(order);
        self
    }

    pub fn fields(mut self, fields: impl Into<Vec<Field>>) -> Self {
        self.fields = Some(fields.into());
        self
    }

    /// The wire parameter set, in a stable order. The client identifier
    /// is appended by the client, not here.
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(n) = self.number {
            params.push(("n".to_string(), n.to_string()));
        }
        if let Some(start) = self.start_index {
            // zero-based for callers, one-based on the wire
            params.push(("start".to_string(), (start + 1).to_string()));
        }
        if let Some(q) = &self.search {
            params.push(("q".to_string(), q.clone()));
        }
        if let Some(parts) = self.parts {
            params.push(("Parts".to_string(), parts.to_string()));
        }
        if let Some(types) = &self.voicing_types {
            if !types.is_empty() {
                let joined = types
                    .iter()
                    .map(|t| t.query_code())
                    .collect::<Vec<_>>()
                    .join("|");
                params.push(("Type".to_string(), joined));
            }
        }
        if let Some(learning) = self.has_learning_tracks {
            params.push((
                "Learning".to_string(),
                if learning { "Yes" } else { "No" }.to_string(),
            ));
        }
        if let Some(sheet) = self.has_sheet_music {
            params.push((
                "SheetMusic".to_string(),
                if sheet { "Yes" } else { "No" }.to_string(),
            ));
        }
        if let Some(collection) = self.collection {
            params.push(("Collection".to_string(), collection.wire().to_string()));
        }
        if let Some(rating) = self.min_rating {
            params.push(("MinRating".to_string(), rating.to_string()));
        }
        if let Some(downloaded) = self.min_downloaded {
            params.push(("MinDownloaded".to_string(), downloaded.to_string()));
        }
        if let Some(stamp) = self.min_stamp {
            params.push((
                "Minstamp".to_string(),
                stamp.format(MINSTAMP_FORMAT).to_string(),
            ));
        }
        if let Some(order) = self.sort {
            params.push(("Sortby".to_string(), order.wire().to_string()));
        }
        if let Some(fields) = &self.fields {
            if !fields.is_empty() {
                let joined = fields
                    .iter()
                    .map(|f| f.wire())
                    .collect::<Vec<_>>()
                    .join(",");
                params.push(("fldlist".to_string(), joined));
            }
        }

        params
    }
}
