use axum::{
    extract::{
        FromRequest, FromRequestParts, Query, Request,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, request::Parts},
};
use serde::de::DeserializeOwned;
use shared::errors::ErrorResponse;
use validator::{Validate, ValidationErrors};

type Rejection = (StatusCode, axum::Json<ErrorResponse>);

/// JSON extractor that runs `validator` rules before the handler sees the
/// body. Every rejection is a 400 carrying the `{"error"}` envelope; axum's
/// stock extractors would answer 422 or plain text otherwise.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(json_value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(invalid_json)?;

        json_value.validate().map_err(invalid_fields)?;

        Ok(Self(json_value))
    }
}

/// Array-body variant for the bulk-create endpoints: deserializes a JSON
/// array and validates every element.
#[derive(Debug)]
pub struct ValidatedJsonList<T>(pub Vec<T>);

impl<S, T> FromRequest<S> for ValidatedJsonList<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(items) = axum::Json::<Vec<T>>::from_request(req, state)
            .await
            .map_err(invalid_json)?;

        for item in &items {
            item.validate().map_err(invalid_fields)?;
        }

        Ok(Self(items))
    }
}

/// Query-string variant, for the listing parameters.
#[derive(Debug)]
pub struct ValidatedQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(invalid_query)?;

        value.validate().map_err(invalid_fields)?;

        Ok(Self(value))
    }
}

fn invalid_json(rejection: JsonRejection) -> Rejection {
    (
        StatusCode::BAD_REQUEST,
        axum::Json(ErrorResponse::new(format!(
            "Invalid JSON: {}",
            rejection.body_text()
        ))),
    )
}

fn invalid_query(rejection: QueryRejection) -> Rejection {
    (
        StatusCode::BAD_REQUEST,
        axum::Json(ErrorResponse::new(format!(
            "Invalid query string: {}",
            rejection.body_text()
        ))),
    )
}

fn invalid_fields(errors: ValidationErrors) -> Rejection {
    (
        StatusCode::BAD_REQUEST,
        axum::Json(ErrorResponse::new(format_validation_errors(&errors))),
    )
}

fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut error_messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| match error.code.as_ref() {
                    "length" => "Invalid length".to_string(),
                    "range" => "Value out of range".to_string(),
                    "custom" => "Custom validation failed".to_string(),
                    _ => format!("Invalid {field}"),
                });
            error_messages.push(format!("{field}: {message}"));
        }
    }

    if error_messages.is_empty() {
        "Validation failed".to_string()
    } else {
        error_messages.join("; ")
    }
}
