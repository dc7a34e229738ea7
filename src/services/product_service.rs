use anyhow::anyhow;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    catalog::{MainCategory, RentType},
    defaults::{Timestamps, apply_defaults},
    dto::products::ProductInput,
    entity::products::{ActiveModel, Column, Entity as Products, Model as ProductModel},
    error::{AppError, AppResult},
    models::{Product, ProductDraft},
    normalize::normalize_facets,
    state::AppState,
    validation::{ValidationError, validate_product},
};

/// Runs the creation pipeline: defaults, facet normalization, validation.
pub fn prepare_create(mut input: ProductInput) -> Result<ProductDraft, ValidationError> {
    apply_defaults(&mut input);
    normalize_facets(&mut input);
    validate_product(&input)
}

/// Overlays `patch` on a stored product and validates the merged record.
pub fn prepare_update(
    existing: &Product,
    patch: ProductInput,
) -> Result<ProductDraft, ValidationError> {
    let mut input = ProductInput::from(existing).overlay(patch);
    normalize_facets(&mut input);
    validate_product(&input)
}

pub async fn create_product(state: &AppState, input: ProductInput) -> AppResult<Product> {
    let draft = prepare_create(input).inspect_err(|err| {
        tracing::debug!(error = %err, "product rejected");
    })?;

    let id = Uuid::new_v4();
    let stamps = Timestamps::on_create(Utc::now());
    let mut active = ActiveModel {
        id: Set(id),
        created_at: Set(stamps.created_at.into()),
        ..Default::default()
    };
    write_draft(&mut active, draft, stamps.updated_at);
    let product = active.insert(&state.orm).await?;

    tracing::info!(product_id = %product.id, owner = %product.owner_id, "product created");
    product_from_entity(product)
}

pub async fn get_product(state: &AppState, id: Uuid) -> AppResult<Product> {
    let model = Products::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    product_from_entity(model)
}

/// Looks up a product by its owner and exact title.
pub async fn find_owned_by_title(
    state: &AppState,
    owner: Uuid,
    title: &str,
) -> AppResult<Option<Product>> {
    Products::find()
        .filter(Column::OwnerId.eq(owner))
        .filter(Column::Title.eq(title))
        .one(&state.orm)
        .await?
        .map(product_from_entity)
        .transpose()
}

/// Read, merge and write run in one transaction with the row locked, so
/// concurrent updates of the same product apply one after the other.
pub async fn update_product(
    state: &AppState,
    id: Uuid,
    patch: ProductInput,
) -> AppResult<Product> {
    let txn = state.orm.begin().await?;
    let existing = Products::find_by_id(id)
        .lock_exclusive()
        .one(&txn)
        .await?;
    let existing = match existing {
        Some(p) => p,
        None => return Err(AppError::NotFound),
    };

    let current = product_from_entity(existing.clone())?;
    let draft = prepare_update(&current, patch).inspect_err(|err| {
        tracing::debug!(product_id = %id, error = %err, "product update rejected");
    })?;

    let stamps = Timestamps {
        created_at: current.created_at,
        updated_at: current.updated_at,
    }
    .touch(Utc::now());
    let mut active: ActiveModel = existing.into();
    write_draft(&mut active, draft, stamps.updated_at);
    let product = active.update(&txn).await?;
    txn.commit().await?;

    tracing::info!(product_id = %product.id, "product updated");
    product_from_entity(product)
}

pub async fn delete_product(state: &AppState, id: Uuid) -> AppResult<()> {
    let result = Products::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    tracing::info!(product_id = %id, "product deleted");
    Ok(())
}

fn write_draft(active: &mut ActiveModel, draft: ProductDraft, updated_at: DateTime<Utc>) {
    active.title = Set(draft.title);
    active.description = Set(draft.description);
    active.main_category = Set(draft.main_category.to_string());
    active.facets = Set(draft.facets);
    active.price = Set(draft.price);
    active.image_urls = Set(draft.image_urls);
    active.stock = Set(draft.stock);
    active.is_available = Set(draft.is_available);
    active.rating = Set(draft.rating);
    active.owner_id = Set(draft.owner);
    active.rent_type = Set(draft.rent_type.to_string());
    active.updated_at = Set(updated_at.into());
}

/// Maps a stored row back to the domain type.
///
/// Label columns are plain text in the table, so a value outside its set
/// means the row was written around this crate.
pub fn product_from_entity(model: ProductModel) -> AppResult<Product> {
    let main_category = model.main_category.parse::<MainCategory>().map_err(|err| {
        AppError::Internal(anyhow!("product {}: main category: {err}", model.id))
    })?;
    let rent_type = model
        .rent_type
        .parse::<RentType>()
        .map_err(|err| AppError::Internal(anyhow!("product {}: rent type: {err}", model.id)))?;

    Ok(Product {
        id: model.id,
        title: model.title,
        description: model.description,
        main_category,
        facets: model.facets,
        price: model.price,
        image_urls: model.image_urls,
        stock: model.stock,
        is_available: model.is_available,
        rating: model.rating,
        owner: model.owner_id,
        rent_type,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    })
}
