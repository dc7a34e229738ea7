use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("ORM error")]
    OrmError(#[from] sea_orm::DbErr),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            AppError::Validation(err) => Some(err),
            _ => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
