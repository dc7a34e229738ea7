use utoipa::OpenApi;

use crate::{
    catalog::{MainCategory, Material, Occasion, ProductType, Recipient, RentType, Size},
    dto::products::{FacetsInput, ProductInput},
    models::{Facets, Product},
    validation::{FieldError, ValidationError},
};

/// The Product contract: stored shape, accepted input and rejection body.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gift catalog product schema",
        description = "Shape of a catalog Product and the rules enforced when it is written."
    ),
    components(
        schemas(
            Product,
            Facets,
            ProductInput,
            FacetsInput,
            MainCategory,
            Occasion,
            Recipient,
            Material,
            Size,
            ProductType,
            RentType,
            ValidationError,
            FieldError
        )
    ),
    tags(
        (name = "Products", description = "Catalog product schema"),
    )
)]
pub struct ProductSchemaDoc;

pub fn schema_json() -> anyhow::Result<String> {
    Ok(ProductSchemaDoc::openapi().to_pretty_json()?)
}
