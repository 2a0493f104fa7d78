//! Item (physical copy) operations
//!
//! Items sit between the catalog and circulation: every item references
//! exactly one material, and loans only ever reference items. Responses
//! embed a small summary of the referenced material so list views do not
//! need a follow-up request per row.

use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::enums::{ItemCondition, MaterialKind};
use crate::models::item::{CreateItem, Item, ItemQuery, ItemResponse, ItemRow, UpdateItem};
use crate::models::material::{MaterialRef, MaterialSummary};
use crate::repository::Repository;
use crate::services::{normalize_optional, pagination};

#[derive(Clone)]
pub struct ItemsService {
    repository: Repository,
}

impl ItemsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn get(&self, id: Uuid) -> AppResult<ItemResponse> {
        let row = self.repository.items.get_by_id(id).await?;
        self.to_response(row).await
    }

    pub async fn list(&self, mut query: ItemQuery) -> AppResult<Vec<ItemResponse>> {
        let (skip, limit) = pagination(query.skip, query.limit)?;
        query.skip = Some(skip);
        query.limit = Some(limit);

        let rows = self.repository.items.list(&query).await?;
        self.to_responses(rows).await
    }

    /// List the items of one material.
    ///
    /// An unknown material id yields an empty list rather than an error;
    /// the caller cannot tell a missing material from one with no items.
    pub async fn list_by_material(
        &self,
        kind: MaterialKind,
        material_id: Uuid,
        solo_disponibles: bool,
    ) -> AppResult<Vec<ItemResponse>> {
        let rows = self
            .repository
            .items
            .list_by_material(kind, material_id, solo_disponibles)
            .await?;
        self.to_responses(rows).await
    }

    pub async fn create(&self, mut data: CreateItem) -> AppResult<ItemResponse> {
        let material = MaterialRef::from_ids(data.id_libro, data.id_revista, data.id_periodico)
            .map_err(AppError::Validation)?;

        self.check_material_exists(&material).await?;

        data.codigo_barras = normalize_optional(data.codigo_barras);
        if let Some(codigo) = &data.codigo_barras {
            if self.repository.items.barcode_exists(codigo, None).await? {
                return Err(AppError::Duplicate(format!(
                    "An item with barcode '{}' already exists",
                    codigo
                )));
            }
        }

        let estado_fisico = match data.estado_fisico.as_deref() {
            Some(raw) => raw.trim().parse::<ItemCondition>().map_err(AppError::Validation)?,
            None => ItemCondition::Good,
        };

        data.ubicacion = normalize_optional(data.ubicacion);
        data.observaciones = normalize_optional(data.observaciones);
        data.validate()?;

        let row = self
            .repository
            .items
            .create(&data, &material, estado_fisico)
            .await?;
        self.to_response(row).await
    }

    pub async fn update(&self, id: Uuid, mut data: UpdateItem) -> AppResult<ItemResponse> {
        self.repository.items.get_by_id(id).await?;

        if data.touches_material_ref() {
            return Err(AppError::Validation(
                "The material reference of an item cannot be changed".to_string(),
            ));
        }

        data.codigo_barras = normalize_optional(data.codigo_barras);
        if let Some(codigo) = &data.codigo_barras {
            if self.repository.items.barcode_exists(codigo, Some(id)).await? {
                return Err(AppError::Duplicate(format!(
                    "An item with barcode '{}' already exists",
                    codigo
                )));
            }
        }

        let estado_fisico = match data.estado_fisico.as_deref() {
            Some(raw) => Some(raw.trim().parse::<ItemCondition>().map_err(AppError::Validation)?),
            None => None,
        };

        data.ubicacion = normalize_optional(data.ubicacion);
        data.observaciones = normalize_optional(data.observaciones);
        data.validate()?;

        let row = self.repository.items.update(id, &data, estado_fisico).await?;
        self.to_response(row).await
    }

    /// Delete an item unless it is checked out
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.items.get_by_id(id).await?;

        if self.repository.loans.active_exists_for_item(id).await? {
            return Err(AppError::Validation(
                "The item has an active loan and cannot be deleted".to_string(),
            ));
        }

        self.repository.items.delete(id).await
    }

    async fn check_material_exists(&self, material: &MaterialRef) -> AppResult<()> {
        let found = match material {
            MaterialRef::Book(id) => self.repository.books.exists(*id).await?,
            MaterialRef::Magazine(id) => self.repository.magazines.exists(*id).await?,
            MaterialRef::Newspaper(id) => self.repository.newspapers.exists(*id).await?,
        };
        if !found {
            return Err(AppError::Validation(match material {
                MaterialRef::Book(id) => format!("Book with id {} does not exist", id),
                MaterialRef::Magazine(id) => format!("Magazine with id {} does not exist", id),
                MaterialRef::Newspaper(id) => format!("Newspaper with id {} does not exist", id),
            }));
        }
        Ok(())
    }

    /// Load the material summary for an item row
    async fn material_summary(&self, material: &MaterialRef) -> AppResult<Option<MaterialSummary>> {
        let summary = match material {
            MaterialRef::Book(id) => {
                self.repository
                    .books
                    .find_by_id(*id)
                    .await?
                    .map(|book| MaterialSummary::Book {
                        id: book.id,
                        titulo: book.titulo,
                        isbn: book.isbn,
                    })
            }
            MaterialRef::Magazine(id) => {
                self.repository.magazines.find_by_id(*id).await?.map(|magazine| {
                    MaterialSummary::Magazine {
                        id: magazine.id,
                        titulo: magazine.titulo,
                        numero_publicacion: magazine.numero_publicacion,
                    }
                })
            }
            MaterialRef::Newspaper(id) => {
                self.repository.newspapers.find_by_id(*id).await?.map(|newspaper| {
                    MaterialSummary::Newspaper {
                        id: newspaper.id,
                        titulo: newspaper.titulo,
                        fecha_publicacion: newspaper.fecha_publicacion,
                    }
                })
            }
        };
        Ok(summary)
    }

    async fn to_response(&self, row: ItemRow) -> AppResult<ItemResponse> {
        let item = Item::try_from(row).map_err(AppError::Internal)?;
        let material = self.material_summary(&item.material).await?;
        Ok(item.to_response(material))
    }

    async fn to_responses(&self, rows: Vec<ItemRow>) -> AppResult<Vec<ItemResponse>> {
        let mut responses = Vec::with_capacity(rows.len());
        for row in rows {
            responses.push(self.to_response(row).await?);
        }
        Ok(responses)
    }
}
