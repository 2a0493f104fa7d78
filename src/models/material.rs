//! Material reference types shared by the item store

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::enums::MaterialKind;

/// Reference from an item to exactly one bibliographic material.
///
/// The storage layer keeps three nullable columns (`id_libro`, `id_revista`,
/// `id_periodico`) guarded by a CHECK constraint; the domain layer only ever
/// sees this sum type, so a zero- or multi-reference item is unrepresentable
/// once a row has been converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialRef {
    Book(Uuid),
    Magazine(Uuid),
    Newspaper(Uuid),
}

impl MaterialRef {
    /// Build from the three optional reference columns.
    pub fn from_ids(
        id_libro: Option<Uuid>,
        id_revista: Option<Uuid>,
        id_periodico: Option<Uuid>,
    ) -> Result<Self, String> {
        match (id_libro, id_revista, id_periodico) {
            (Some(id), None, None) => Ok(MaterialRef::Book(id)),
            (None, Some(id), None) => Ok(MaterialRef::Magazine(id)),
            (None, None, Some(id)) => Ok(MaterialRef::Newspaper(id)),
            _ => Err(
                "Exactly one of id_libro, id_revista or id_periodico must be provided".to_string(),
            ),
        }
    }

    pub fn from_kind(kind: MaterialKind, id: Uuid) -> Self {
        match kind {
            MaterialKind::Book => MaterialRef::Book(id),
            MaterialKind::Magazine => MaterialRef::Magazine(id),
            MaterialKind::Newspaper => MaterialRef::Newspaper(id),
        }
    }

    pub fn kind(&self) -> MaterialKind {
        match self {
            MaterialRef::Book(_) => MaterialKind::Book,
            MaterialRef::Magazine(_) => MaterialKind::Magazine,
            MaterialRef::Newspaper(_) => MaterialKind::Newspaper,
        }
    }

    /// The referenced material id, whatever its kind.
    pub fn material_id(&self) -> Uuid {
        match self {
            MaterialRef::Book(id) | MaterialRef::Magazine(id) | MaterialRef::Newspaper(id) => *id,
        }
    }

    pub fn book_id(&self) -> Option<Uuid> {
        match self {
            MaterialRef::Book(id) => Some(*id),
            _ => None,
        }
    }

    pub fn magazine_id(&self) -> Option<Uuid> {
        match self {
            MaterialRef::Magazine(id) => Some(*id),
            _ => None,
        }
    }

    pub fn newspaper_id(&self) -> Option<Uuid> {
        match self {
            MaterialRef::Newspaper(id) => Some(*id),
            _ => None,
        }
    }
}

/// Denormalised material data embedded in item responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(tag = "tipo")]
pub enum MaterialSummary {
    #[serde(rename = "libro")]
    Book {
        id: Uuid,
        titulo: String,
        isbn: Option<String>,
    },
    #[serde(rename = "revista")]
    Magazine {
        id: Uuid,
        titulo: String,
        numero_publicacion: Option<String>,
    },
    #[serde(rename = "periodico")]
    Newspaper {
        id: Uuid,
        titulo: String,
        fecha_publicacion: DateTime<Utc>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_reference_accepted() {
        let id = Uuid::new_v4();
        assert_eq!(
            MaterialRef::from_ids(Some(id), None, None),
            Ok(MaterialRef::Book(id))
        );
        assert_eq!(
            MaterialRef::from_ids(None, Some(id), None),
            Ok(MaterialRef::Magazine(id))
        );
        assert_eq!(
            MaterialRef::from_ids(None, None, Some(id)),
            Ok(MaterialRef::Newspaper(id))
        );
    }

    #[test]
    fn test_zero_references_rejected() {
        assert!(MaterialRef::from_ids(None, None, None).is_err());
    }

    #[test]
    fn test_multiple_references_rejected() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        assert!(MaterialRef::from_ids(Some(a), Some(b), None).is_err());
        assert!(MaterialRef::from_ids(Some(a), None, Some(b)).is_err());
        assert!(MaterialRef::from_ids(Some(a), Some(b), Some(b)).is_err());
    }

    #[test]
    fn test_kind_and_id_accessors() {
        let id = Uuid::new_v4();
        let r = MaterialRef::from_kind(MaterialKind::Magazine, id);
        assert_eq!(r.kind(), MaterialKind::Magazine);
        assert_eq!(r.material_id(), id);
        assert_eq!(r.magazine_id(), Some(id));
        assert_eq!(r.book_id(), None);
        assert_eq!(r.newspaper_id(), None);
    }

    #[test]
    fn test_summary_tagged_by_tipo() {
        let summary = MaterialSummary::Book {
            id: Uuid::new_v4(),
            titulo: "Cien años de soledad".to_string(),
            isbn: Some("978-0307474728".to_string()),
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["tipo"], "libro");
        assert_eq!(json["titulo"], "Cien años de soledad");
    }
}
