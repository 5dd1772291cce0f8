//! HAL representations of doctors and doctor pages.
//!
//! Entities are rendered as the doctor's fields plus `_links`; pages carry
//! `_embedded.doctors`, `_links` and `page` metadata.

use doctr_persistence::types::{Doctor, Page};
use serde::Serialize;

use super::links::{DoctorUris, Links};

/// Relation under which a doctor links to its collection, and under which
/// pages embed their doctors.
pub const DOCTORS_REL: &str = "doctors";

/// The link relations attached to a single doctor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityLinks {
    /// Freshly created: `self`, `doctors`.
    Created,
    /// Read by id: `self`, `update`, `delete`, `doctors`.
    Read,
    /// Just updated: `self`, `delete`, `doctors`.
    Updated,
    /// Listed inside a page: `self`, `update`, `delete`.
    Listed,
}

/// A doctor with its hypermedia links.
#[derive(Debug, Clone, Serialize)]
pub struct DoctorModel {
    #[serde(flatten)]
    doctor: Doctor,
    #[serde(rename = "_links")]
    links: Links,
}

impl DoctorModel {
    /// Wraps a doctor with the links appropriate for `kind`.
    pub fn new(doctor: Doctor, kind: EntityLinks, uris: &DoctorUris) -> Self {
        let item = uris.item(doctor.id);
        let links = Links::new().with("self", item.clone());

        let links = match kind {
            EntityLinks::Created => links.with(DOCTORS_REL, uris.collection()),
            EntityLinks::Read => links
                .with("update", item.clone())
                .with("delete", item)
                .with(DOCTORS_REL, uris.collection()),
            EntityLinks::Updated => links
                .with("delete", item)
                .with(DOCTORS_REL, uris.collection()),
            EntityLinks::Listed => links.with("update", item.clone()).with("delete", item),
        };

        Self { doctor, links }
    }

    /// Returns the wrapped doctor.
    pub fn doctor(&self) -> &Doctor {
        &self.doctor
    }

    /// Returns the links.
    pub fn links(&self) -> &Links {
        &self.links
    }
}

/// Page metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    /// Requested page size.
    pub size: u32,
    /// Zero-based page number.
    pub number: u32,
    /// Elements across all pages.
    pub total_elements: u64,
    /// Number of pages.
    pub total_pages: u64,
}

#[derive(Debug, Clone, Serialize)]
struct Embedded {
    doctors: Vec<DoctorModel>,
}

/// One page of doctors with navigation links.
#[derive(Debug, Clone, Serialize)]
pub struct DoctorPageModel {
    #[serde(rename = "_embedded", skip_serializing_if = "Option::is_none")]
    embedded: Option<Embedded>,
    #[serde(rename = "_links")]
    links: Links,
    page: PageMetadata,
}

impl DoctorPageModel {
    /// Builds the page representation.
    ///
    /// `next` is present iff a later page exists; `prev` iff this is not the
    /// first page. Every link keeps the pincode filter and page size.
    pub fn new(page: Page<Doctor>, pincode: Option<&str>, uris: &DoctorUris) -> Self {
        let number = page.number();
        let size = page.size();

        let next = page.has_next().then(|| {
            let next = page.request.next();
            uris.page(pincode, next.page, next.size)
        });
        let prev = page.has_previous().then(|| {
            let prev = page.request.previous_or_first();
            uris.page(pincode, prev.page, prev.size)
        });

        let links = Links::new()
            .with("self", uris.page(pincode, number, size))
            .with_optional("next", next)
            .with_optional("prev", prev)
            .with("create", uris.collection());

        let metadata = PageMetadata {
            size,
            number,
            total_elements: page.total_elements,
            total_pages: page.total_pages(),
        };

        let doctors: Vec<_> = page
            .items
            .into_iter()
            .map(|d| DoctorModel::new(d, EntityLinks::Listed, uris))
            .collect();
        let embedded = (!doctors.is_empty()).then_some(Embedded { doctors });

        Self {
            embedded,
            links,
            page: metadata,
        }
    }

    /// Returns the embedded doctors.
    pub fn doctors(&self) -> &[DoctorModel] {
        self.embedded
            .as_ref()
            .map(|e| e.doctors.as_slice())
            .unwrap_or(&[])
    }

    /// Returns the page links.
    pub fn links(&self) -> &Links {
        &self.links
    }

    /// Returns the page metadata.
    pub fn metadata(&self) -> PageMetadata {
        self.page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doctr_persistence::types::PageRequest;

    fn doctor(id: i64) -> Doctor {
        Doctor {
            id,
            first_name: "Srikanth".to_string(),
            last_name: "Kakumanu".to_string(),
            address: "Lakshmi Prasad Arcade".to_string(),
            city: "Tenali".to_string(),
            pincode: "522201".to_string(),
        }
    }

    fn uris() -> DoctorUris {
        DoctorUris::new("http://localhost:8080")
    }

    #[test]
    fn test_entity_link_sets() {
        let rels = |kind| DoctorModel::new(doctor(1), kind, &uris()).links().rels();
        assert_eq!(rels(EntityLinks::Created), vec!["self", "doctors"]);
        assert_eq!(
            rels(EntityLinks::Read),
            vec!["self", "update", "delete", "doctors"]
        );
        assert_eq!(rels(EntityLinks::Updated), vec!["self", "delete", "doctors"]);
        assert_eq!(rels(EntityLinks::Listed), vec!["self", "update", "delete"]);
    }

    #[test]
    fn test_entity_json_shape() {
        let model = DoctorModel::new(doctor(1), EntityLinks::Created, &uris());
        let json = serde_json::to_value(&model).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["firstName"], "Srikanth");
        assert_eq!(
            json["_links"]["self"]["href"],
            "http://localhost:8080/api/doctors/1"
        );
        assert_eq!(
            json["_links"]["doctors"]["href"],
            "http://localhost:8080/api/doctors"
        );
    }

    #[test]
    fn test_first_page_of_three() {
        let page = Page::new(vec![doctor(1), doctor(2)], PageRequest::new(0, 2), 5);
        let model = DoctorPageModel::new(page, None, &uris());

        assert_eq!(model.doctors().len(), 2);
        assert_eq!(model.links().rels(), vec!["self", "next", "create"]);
        assert_eq!(
            model.links().get("next").unwrap().href,
            "http://localhost:8080/api/doctors?page=1&size=2"
        );
        assert_eq!(
            model.metadata(),
            PageMetadata {
                size: 2,
                number: 0,
                total_elements: 5,
                total_pages: 3
            }
        );
    }

    #[test]
    fn test_last_page_has_prev_only() {
        let page = Page::new(vec![doctor(5)], PageRequest::new(2, 2), 5);
        let model = DoctorPageModel::new(page, Some("522201"), &uris());

        assert_eq!(model.links().rels(), vec!["self", "prev", "create"]);
        assert_eq!(
            model.links().get("prev").unwrap().href,
            "http://localhost:8080/api/doctors?pincode=522201&page=1&size=2"
        );
    }

    #[test]
    fn test_empty_page_omits_embedded() {
        let page = Page::new(Vec::new(), PageRequest::new(0, 20), 0);
        let json = serde_json::to_value(DoctorPageModel::new(page, None, &uris())).unwrap();

        assert!(json.get("_embedded").is_none());
        assert_eq!(json["page"]["totalPages"], 0);
        assert_eq!(json["page"]["totalElements"], 0);
    }
}
