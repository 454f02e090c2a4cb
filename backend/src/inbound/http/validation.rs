//! Shared validation helpers for inbound HTTP adapters.

use actix_web::http::header::CONTENT_LENGTH;
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::LocalBoxFuture;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domain::validation::{invalid_identifier, non_blank};
use crate::domain::{Error, IdentifierValidationError, UserId};

/// JSON request body where an empty payload reads as `{}`.
///
/// Non-empty bodies go through `web::Json`, so the configured size ceiling
/// and error handler still apply.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T> JsonBody<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

fn declares_empty_body(req: &HttpRequest) -> bool {
    req.headers()
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
        == Some(0)
}

impl<T> FromRequest for JsonBody<T>
where
    T: DeserializeOwned + Default + 'static,
{
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if declares_empty_body(req) {
            return Box::pin(async { Ok(Self(T::default())) });
        }
        let fut = web::Json::<T>::from_request(req, payload);
        Box::pin(async move { fut.await.map(|json| Self(json.into_inner())) })
    }
}

/// Optional owner filter accepted by listing endpoints.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerFilter {
    /// Restrict results to records owned by this user.
    pub user_id: Option<String>,
}

impl OwnerFilter {
    /// Parse the filter; a blank value means no filter.
    pub(crate) fn parse(self) -> Result<Option<UserId>, Error> {
        non_blank(self.user_id)
            .map(|raw| UserId::new(raw).map_err(|err| invalid_identifier("userId", err)))
            .transpose()
    }
}

/// Parse a path segment into an identifier, naming the field on failure.
pub(crate) fn parse_path_id<T>(field: &'static str, raw: &str) -> Result<T, Error>
where
    T: TryFrom<String, Error = IdentifierValidationError>,
{
    T::try_from(raw.to_owned()).map_err(|err| invalid_identifier(field, err))
}
