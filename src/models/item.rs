//! Item (physical copy) model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::audit::ActorId;
use crate::models::enums::{ItemCondition, MaterialKind};
use crate::models::material::{MaterialRef, MaterialSummary};

/// Internal row structure for database queries (raw reference columns)
#[derive(Debug, Clone, FromRow)]
pub struct ItemRow {
    pub id: Uuid,
    pub id_libro: Option<Uuid>,
    pub id_revista: Option<Uuid>,
    pub id_periodico: Option<Uuid>,
    pub codigo_barras: Option<String>,
    pub ubicacion: Option<String>,
    pub estado_fisico: ItemCondition,
    pub disponible: bool,
    pub observaciones: Option<String>,
    pub id_usuario_creacion: Option<Uuid>,
    pub id_usuario_edicion: Option<Uuid>,
    pub fecha_creacion: DateTime<Utc>,
    pub fecha_actualizacion: Option<DateTime<Utc>>,
}

/// Full item model with the material reference collapsed to a sum type
#[derive(Debug, Clone)]
pub struct Item {
    pub id: Uuid,
    pub material: MaterialRef,
    pub codigo_barras: Option<String>,
    pub ubicacion: Option<String>,
    pub estado_fisico: ItemCondition,
    pub disponible: bool,
    pub observaciones: Option<String>,
    pub id_usuario_creacion: Option<Uuid>,
    pub id_usuario_edicion: Option<Uuid>,
    pub fecha_creacion: DateTime<Utc>,
    pub fecha_actualizacion: Option<DateTime<Utc>>,
}

impl TryFrom<ItemRow> for Item {
    type Error = String;

    fn try_from(row: ItemRow) -> Result<Self, Self::Error> {
        let material = MaterialRef::from_ids(row.id_libro, row.id_revista, row.id_periodico)?;
        Ok(Item {
            id: row.id,
            material,
            codigo_barras: row.codigo_barras,
            ubicacion: row.ubicacion,
            estado_fisico: row.estado_fisico,
            disponible: row.disponible,
            observaciones: row.observaciones,
            id_usuario_creacion: row.id_usuario_creacion,
            id_usuario_edicion: row.id_usuario_edicion,
            fecha_creacion: row.fecha_creacion,
            fecha_actualizacion: row.fecha_actualizacion,
        })
    }
}

impl Item {
    pub fn to_response(&self, material: Option<MaterialSummary>) -> ItemResponse {
        ItemResponse {
            id: self.id,
            id_libro: self.material.book_id(),
            id_revista: self.material.magazine_id(),
            id_periodico: self.material.newspaper_id(),
            tipo_item: self.material.kind(),
            codigo_barras: self.codigo_barras.clone(),
            ubicacion: self.ubicacion.clone(),
            estado_fisico: self.estado_fisico,
            disponible: self.disponible,
            observaciones: self.observaciones.clone(),
            fecha_creacion: self.fecha_creacion,
            fecha_actualizacion: self.fecha_actualizacion,
            material,
        }
    }
}

/// Item representation on the wire
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItemResponse {
    pub id: Uuid,
    pub id_libro: Option<Uuid>,
    pub id_revista: Option<Uuid>,
    pub id_periodico: Option<Uuid>,
    pub tipo_item: MaterialKind,
    pub codigo_barras: Option<String>,
    pub ubicacion: Option<String>,
    pub estado_fisico: ItemCondition,
    pub disponible: bool,
    pub observaciones: Option<String>,
    pub fecha_creacion: DateTime<Utc>,
    pub fecha_actualizacion: Option<DateTime<Utc>>,
    pub material: Option<MaterialSummary>,
}

fn default_disponible() -> bool {
    true
}

/// Create item request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateItem {
    pub id_libro: Option<Uuid>,
    pub id_revista: Option<Uuid>,
    pub id_periodico: Option<Uuid>,
    #[validate(length(max = 50, message = "Barcode must not exceed 50 characters"))]
    pub codigo_barras: Option<String>,
    #[validate(length(max = 100, message = "Location must not exceed 100 characters"))]
    pub ubicacion: Option<String>,
    pub estado_fisico: Option<String>,
    #[serde(default = "default_disponible")]
    pub disponible: bool,
    pub observaciones: Option<String>,
    pub id_usuario_creacion: ActorId,
}

/// Update item request
///
/// Material reference fields are listed so their presence can be rejected:
/// the material binding of an item is immutable after creation.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateItem {
    pub id_libro: Option<Uuid>,
    pub id_revista: Option<Uuid>,
    pub id_periodico: Option<Uuid>,
    #[validate(length(max = 50, message = "Barcode must not exceed 50 characters"))]
    pub codigo_barras: Option<String>,
    #[validate(length(max = 100, message = "Location must not exceed 100 characters"))]
    pub ubicacion: Option<String>,
    pub estado_fisico: Option<String>,
    pub disponible: Option<bool>,
    pub observaciones: Option<String>,
    pub id_usuario_edicion: ActorId,
}

impl UpdateItem {
    /// True when any of the immutable material reference fields was supplied.
    pub fn touches_material_ref(&self) -> bool {
        self.id_libro.is_some() || self.id_revista.is_some() || self.id_periodico.is_some()
    }
}

/// Item list query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct ItemQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub solo_disponibles: Option<bool>,
    pub id_libro: Option<Uuid>,
    pub id_revista: Option<Uuid>,
    pub id_periodico: Option<Uuid>,
}

/// Query parameters for the by-material listing
#[derive(Debug, Deserialize, IntoParams)]
pub struct ItemsByMaterialQuery {
    pub solo_disponibles: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row(
        id_libro: Option<Uuid>,
        id_revista: Option<Uuid>,
        id_periodico: Option<Uuid>,
    ) -> ItemRow {
        ItemRow {
            id: Uuid::new_v4(),
            id_libro,
            id_revista,
            id_periodico,
            codigo_barras: Some("LIB-0001".to_string()),
            ubicacion: Some("Estante A3".to_string()),
            estado_fisico: ItemCondition::Good,
            disponible: true,
            observaciones: None,
            id_usuario_creacion: Some(Uuid::new_v4()),
            id_usuario_edicion: None,
            fecha_creacion: Utc::now(),
            fecha_actualizacion: None,
        }
    }

    #[test]
    fn test_row_with_single_reference_converts() {
        let book_id = Uuid::new_v4();
        let item = Item::try_from(sample_row(Some(book_id), None, None)).unwrap();
        assert_eq!(item.material, MaterialRef::Book(book_id));
        assert_eq!(item.material.kind(), MaterialKind::Book);
    }

    #[test]
    fn test_row_without_reference_fails() {
        assert!(Item::try_from(sample_row(None, None, None)).is_err());
    }

    #[test]
    fn test_row_with_two_references_fails() {
        let row = sample_row(Some(Uuid::new_v4()), Some(Uuid::new_v4()), None);
        assert!(Item::try_from(row).is_err());
    }

    #[test]
    fn test_response_exposes_kind_and_raw_columns() {
        let magazine_id = Uuid::new_v4();
        let item = Item::try_from(sample_row(None, Some(magazine_id), None)).unwrap();
        let response = item.to_response(None);
        assert_eq!(response.tipo_item, MaterialKind::Magazine);
        assert_eq!(response.id_revista, Some(magazine_id));
        assert_eq!(response.id_libro, None);
        assert_eq!(response.id_periodico, None);
    }

    #[test]
    fn test_update_detects_material_fields() {
        let update = UpdateItem {
            id_libro: Some(Uuid::new_v4()),
            id_revista: None,
            id_periodico: None,
            codigo_barras: None,
            ubicacion: None,
            estado_fisico: None,
            disponible: None,
            observaciones: None,
            id_usuario_edicion: ActorId::new(Uuid::new_v4()).unwrap(),
        };
        assert!(update.touches_material_ref());
    }
}
