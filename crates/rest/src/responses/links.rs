//! Hypermedia link generation.
//!
//! Builds the absolute URLs that appear under `_links`, all rooted at the
//! configured base URL.

use serde::ser::{Serialize, SerializeMap, Serializer};
use url::Url;

/// Path of the doctor collection, relative to the base URL.
pub const DOCTORS_PATH: &str = "/api/doctors";

/// A single HAL link object.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Link {
    /// Target URL.
    pub href: String,
}

impl Link {
    /// Creates a new link.
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }
}

/// An ordered set of links keyed by relation name.
///
/// Serializes as a JSON object in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Links {
    entries: Vec<(&'static str, Link)>,
}

impl Links {
    /// Creates an empty link set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a link under the given relation.
    pub fn with(mut self, rel: &'static str, href: impl Into<String>) -> Self {
        self.entries.push((rel, Link::new(href)));
        self
    }

    /// Adds a link only when `href` is present.
    pub fn with_optional(self, rel: &'static str, href: Option<String>) -> Self {
        match href {
            Some(href) => self.with(rel, href),
            None => self,
        }
    }

    /// Returns the link for a relation.
    pub fn get(&self, rel: &str) -> Option<&Link> {
        self.entries
            .iter()
            .find(|(name, _)| *name == rel)
            .map(|(_, link)| link)
    }

    /// Returns the relation names in order.
    pub fn rels(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(rel, _)| *rel).collect()
    }
}

impl Serialize for Links {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (rel, link) in &self.entries {
            map.serialize_entry(rel, link)?;
        }
        map.end()
    }
}

/// Generates doctor URLs from a base URL.
#[derive(Debug, Clone)]
pub struct DoctorUris {
    base: String,
}

impl DoctorUris {
    /// Creates a URL generator for the given base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// URL of the doctor collection.
    pub fn collection(&self) -> String {
        format!("{}{}", self.base, DOCTORS_PATH)
    }

    /// URL of a single doctor.
    pub fn item(&self, id: i64) -> String {
        format!("{}{}/{}", self.base, DOCTORS_PATH, id)
    }

    /// URL of one page of the collection, keeping the pincode filter.
    pub fn page(&self, pincode: Option<&str>, page: u32, size: u32) -> String {
        let collection = self.collection();
        match Url::parse(&collection) {
            Ok(mut url) => {
                {
                    let mut query = url.query_pairs_mut();
                    if let Some(pincode) = pincode {
                        query.append_pair("pincode", pincode);
                    }
                    query
                        .append_pair("page", &page.to_string())
                        .append_pair("size", &size.to_string());
                }
                url.into()
            }
            // Config validation rejects unparseable base URLs; fall back to
            // plain concatenation for hand-built configs.
            Err(_) => {
                let mut href = format!("{}?", collection);
                if let Some(pincode) = pincode {
                    href.push_str(&format!("pincode={}&", pincode));
                }
                href.push_str(&format!("page={}&size={}", page, size));
                href
            }
        }
    }
}
