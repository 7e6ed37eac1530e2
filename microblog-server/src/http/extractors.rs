//! Custom Axum extractors

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use axum::Form;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::flash::FLASH_COOKIE;
use super::server::AppState;
use crate::db::RequestDb;
use crate::models::ValidationError;

/// Hands each request its own lazily-connected database handle
impl FromRequestParts<Arc<AppState>> for RequestDb {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        Ok(RequestDb::new(state.pool.clone()))
    }
}

/// Flash messages pending for this request
#[derive(Debug, Default)]
pub struct Flash {
    /// Verified messages (empty when none or the cookie was rejected)
    pub messages: Vec<String>,

    /// Whether the request carried a flash cookie at all
    pub cookie_present: bool,
}

impl FromRequestParts<Arc<AppState>> for Flash {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let cookie = parts
            .headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|header| header.to_str().ok())
            .flat_map(|header| header.split(';'))
            .filter_map(|cookie| cookie.trim().split_once('='))
            .find(|(name, _)| *name == FLASH_COOKIE)
            .map(|(_, value)| value);

        let Some(value) = cookie else {
            return Ok(Self::default());
        };

        let messages = state.flash.decode(value).unwrap_or_else(|| {
            tracing::debug!("discarding flash cookie that failed verification");
            Vec::new()
        });

        Ok(Self {
            messages,
            cookie_present: true,
        })
    }
}

/// Form body whose decode failures surface as `ApiError::Validation`
#[derive(Debug)]
pub struct ValidForm<T>(pub T);

impl<S, T> FromRequest<S> for ValidForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                ApiError::Validation(ValidationError::InvalidBody {
                    reason: rejection.body_text(),
                })
            })?;

        Ok(Self(value))
    }
}
