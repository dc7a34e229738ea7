//! Field-level validation of a candidate product.
//!
//! [`validate_product`] either produces a typed [`ProductDraft`] or a
//! [`ValidationError`] listing every violated path, in field declaration
//! order. Nothing is partially accepted.

use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    catalog::{MainCategory, Occasion, RentType},
    dto::products::{FacetsInput, OneOrMany, ProductInput},
    models::{Facets, ProductDraft},
};

pub const TITLE_REQUIRED: &str = "Please enter product title";
pub const DESCRIPTION_REQUIRED: &str = "Please enter product description";
pub const MAIN_CATEGORY_REQUIRED: &str = "Please select a main category";
pub const MAIN_CATEGORY_INVALID: &str = "Please select a valid category";
pub const PRICE_REQUIRED: &str = "Please enter price";
pub const PRICE_NEGATIVE: &str = "Price cannot be negative";
pub const IMAGE_REQUIRED: &str = "Please provide at least one image";
pub const STOCK_NEGATIVE: &str = "Stock cannot be negative";
pub const RATING_NEGATIVE: &str = "Rating cannot be negative";
pub const RATING_TOO_HIGH: &str = "Rating cannot be more than 5";

pub const MAX_RATING: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize, ToSchema)]
#[error("Product validation failed: {}", summarize(.errors))]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.path, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationError {
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn message_for(&self, path: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.path == path)
            .map(|e| e.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            path: path.into(),
            message: message.into(),
        });
    }
}

/// Message used for enumerated fields that declare no message of their own.
pub fn enum_violation(value: &str, path: &str) -> String {
    format!("`{value}` is not a valid enum value for path `{path}`.")
}

pub fn required_violation(path: &str) -> String {
    format!("Path `{path}` is required.")
}

fn cast_violation(value: &str, path: &str) -> String {
    format!("Cast to Uuid failed for value \"{value}\" at path \"{path}\"")
}

fn parse_label<T: FromStr>(
    raw: Option<&str>,
    path: &str,
    errors: &mut ValidationError,
) -> Option<T> {
    let raw = raw?;
    match raw.parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            errors.push(path, enum_violation(raw, path));
            None
        }
    }
}

fn present(field: &Option<Option<String>>) -> Option<&str> {
    field.as_ref()?.as_deref()
}

fn validate_facets(input: Option<&FacetsInput>, errors: &mut ValidationError) -> Facets {
    let Some(input) = input else {
        return Facets::default();
    };

    let raw_events: Vec<&str> = match &input.events {
        None => Vec::new(),
        Some(OneOrMany::One(event)) => vec![event.as_str()],
        Some(OneOrMany::Many(events)) => events.iter().map(String::as_str).collect(),
    };
    let mut events: Vec<Occasion> = Vec::with_capacity(raw_events.len());
    for (index, raw) in raw_events.into_iter().enumerate() {
        let path = format!("facets.events.{index}");
        if let Some(event) = parse_label(Some(raw), &path, errors) {
            events.push(event);
        }
    }

    Facets {
        events,
        relation: parse_label(present(&input.relation), "facets.relation", errors),
        material: parse_label(present(&input.material), "facets.material", errors),
        size: parse_label(present(&input.size), "facets.size", errors),
        color: present(&input.color).map(str::to_string),
        kind: parse_label(present(&input.kind), "facets.type", errors),
    }
}

fn validate_image_urls(
    input: Option<&Vec<String>>,
    errors: &mut ValidationError,
) -> Option<Vec<String>> {
    let urls = match input {
        Some(urls) if !urls.is_empty() => urls,
        _ => {
            errors.push("imageUrls", IMAGE_REQUIRED);
            return None;
        }
    };
    let before = errors.errors.len();
    for (index, url) in urls.iter().enumerate() {
        if url.is_empty() {
            errors.push(format!("imageUrls.{index}"), IMAGE_REQUIRED);
        }
    }
    (errors.errors.len() == before).then(|| urls.clone())
}

/// Checks a candidate against every field constraint.
///
/// Fields that carry a default (`stock`, `isAvailable`, `rating`,
/// `rentType`) fall back to it when absent.
pub fn validate_product(input: &ProductInput) -> Result<ProductDraft, ValidationError> {
    let mut errors = ValidationError::default();

    let title = input
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());
    if title.is_none() {
        errors.push("title", TITLE_REQUIRED);
    }

    let description = input.description.as_deref().filter(|d| !d.is_empty());
    if description.is_none() {
        errors.push("description", DESCRIPTION_REQUIRED);
    }

    let main_category = match input.main_category.as_deref() {
        None | Some("") => {
            errors.push("mainCategory", MAIN_CATEGORY_REQUIRED);
            None
        }
        Some(raw) => match raw.parse::<MainCategory>() {
            Ok(category) => Some(category),
            Err(_) => {
                errors.push("mainCategory", MAIN_CATEGORY_INVALID);
                None
            }
        },
    };

    let facets = validate_facets(input.facets.as_ref(), &mut errors);

    let price = match input.price {
        None => {
            errors.push("price", PRICE_REQUIRED);
            None
        }
        Some(price) if price.is_nan() || price < 0.0 => {
            errors.push("price", PRICE_NEGATIVE);
            None
        }
        Some(price) => Some(price),
    };

    let image_urls = validate_image_urls(input.image_urls.as_ref(), &mut errors);

    let stock = input.stock.unwrap_or_default();
    if stock < 0 {
        errors.push("stock", STOCK_NEGATIVE);
    }

    let rating = input.rating.unwrap_or_default();
    if rating.is_nan() || rating < 0.0 {
        errors.push("rating", RATING_NEGATIVE);
    } else if rating > MAX_RATING {
        errors.push("rating", RATING_TOO_HIGH);
    }

    let owner = match input.owner.as_deref() {
        None | Some("") => {
            errors.push("owner", required_violation("owner"));
            None
        }
        Some(raw) => match Uuid::parse_str(raw) {
            Ok(id) => Some(id),
            Err(_) => {
                errors.push("owner", cast_violation(raw, "owner"));
                None
            }
        },
    };

    let rent_type = match input.rent_type.as_deref() {
        None => Some(RentType::default()),
        raw => parse_label(raw, "rentType", &mut errors),
    };

    match (title, description, main_category, price, image_urls, owner, rent_type) {
        (
            Some(title),
            Some(description),
            Some(main_category),
            Some(price),
            Some(image_urls),
            Some(owner),
            Some(rent_type),
        ) if errors.is_empty() => Ok(ProductDraft {
            title: title.to_string(),
            description: description.to_string(),
            main_category,
            facets,
            price,
            image_urls,
            stock,
            is_available: input.is_available.unwrap_or(true),
            rating,
            owner,
            rent_type,
        }),
        _ => Err(errors),
    }
}
