use chrono::{DateTime, Utc};

use crate::{catalog::RentType, dto::products::ProductInput};

pub const DEFAULT_STOCK: i32 = 0;
pub const DEFAULT_RATING: f64 = 0.0;
pub const DEFAULT_IS_AVAILABLE: bool = true;

/// Fills unset defaulted fields of a record that is about to be created.
/// Values the caller supplied are kept as-is, even invalid ones.
pub fn apply_defaults(input: &mut ProductInput) {
    input.stock.get_or_insert(DEFAULT_STOCK);
    input.is_available.get_or_insert(DEFAULT_IS_AVAILABLE);
    input.rating.get_or_insert(DEFAULT_RATING);
    input
        .rent_type
        .get_or_insert_with(|| RentType::default().to_string());
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamps {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Timestamps {
    pub fn on_create(now: DateTime<Utc>) -> Self {
        Self {
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(self, now: DateTime<Utc>) -> Self {
        Self {
            created_at: self.created_at,
            updated_at: now,
        }
    }
}
