use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use utoipa::ToSchema;

use crate::models::{Facets, Product};

/// A value the caller may send either bare or as a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

/// Keeps an explicit `null` apart from an absent key: absent is `None`,
/// `null` is `Some(None)`.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Accepts `3` and `3.0`; rejects fractions and values outside `i32`.
fn integral<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<f64>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if value.fract() != 0.0 || value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
        return Err(D::Error::custom(format!("expected an integer, found {value}")));
    }
    Ok(Some(value as i32))
}

/// Optional facets are tri-state so an update can clear them with `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FacetsInput {
    /// A single label is accepted and stored as a one-element list.
    #[schema(value_type = Option<Vec<String>>)]
    pub events: Option<OneOrMany<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub relation: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub material: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub size: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub color: Option<Option<String>>,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub kind: Option<Option<String>>,
}

/// Candidate product as supplied by a caller.
///
/// Every field is optional so the same shape serves full creates and
/// partial updates; the validator decides what is actually required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub main_category: Option<String>,
    pub facets: Option<FacetsInput>,
    pub price: Option<f64>,
    pub image_urls: Option<Vec<String>>,
    /// Integral numbers only; `3.0` is read as `3`.
    #[serde(default, deserialize_with = "integral")]
    pub stock: Option<i32>,
    pub is_available: Option<bool>,
    pub rating: Option<f64>,
    pub owner: Option<String>,
    pub rent_type: Option<String>,
}

impl FacetsInput {
    /// Shorthand for a facet value set in code.
    pub fn set(value: impl Into<String>) -> Option<Option<String>> {
        Some(Some(value.into()))
    }

    /// Fields present on `patch` replace the ones here, including an
    /// explicit clear; absent fields are kept.
    pub fn overlay(self, patch: FacetsInput) -> FacetsInput {
        FacetsInput {
            events: patch.events.or(self.events),
            relation: patch.relation.or(self.relation),
            material: patch.material.or(self.material),
            size: patch.size.or(self.size),
            color: patch.color.or(self.color),
            kind: patch.kind.or(self.kind),
        }
    }
}

impl ProductInput {
    pub fn overlay(self, patch: ProductInput) -> ProductInput {
        let facets = match (self.facets, patch.facets) {
            (Some(base), Some(patch)) => Some(base.overlay(patch)),
            (base, patch) => patch.or(base),
        };
        ProductInput {
            title: patch.title.or(self.title),
            description: patch.description.or(self.description),
            main_category: patch.main_category.or(self.main_category),
            facets,
            price: patch.price.or(self.price),
            image_urls: patch.image_urls.or(self.image_urls),
            stock: patch.stock.or(self.stock),
            is_available: patch.is_available.or(self.is_available),
            rating: patch.rating.or(self.rating),
            owner: patch.owner.or(self.owner),
            rent_type: patch.rent_type.or(self.rent_type),
        }
    }
}

impl From<&Facets> for FacetsInput {
    fn from(facets: &Facets) -> Self {
        FacetsInput {
            events: Some(OneOrMany::Many(
                facets.events.iter().map(|e| e.to_string()).collect(),
            )),
            relation: Some(facets.relation.map(|v| v.to_string())),
            material: Some(facets.material.map(|v| v.to_string())),
            size: Some(facets.size.map(|v| v.to_string())),
            color: Some(facets.color.clone()),
            kind: Some(facets.kind.map(|v| v.to_string())),
        }
    }
}

impl From<&Product> for ProductInput {
    fn from(product: &Product) -> Self {
        ProductInput {
            title: Some(product.title.clone()),
            description: Some(product.description.clone()),
            main_category: Some(product.main_category.to_string()),
            facets: Some(FacetsInput::from(&product.facets)),
            price: Some(product.price),
            image_urls: Some(product.image_urls.clone()),
            stock: Some(product.stock),
            is_available: Some(product.is_available),
            rating: Some(product.rating),
            owner: Some(product.owner.to_string()),
            rent_type: Some(product.rent_type.to_string()),
        }
    }
}
