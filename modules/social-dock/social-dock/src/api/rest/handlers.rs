use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Extension, OriginalUri, Query};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde_json::Value;
use social_dock_sdk::FORM_NAMESPACE;

use crate::domain::contrast::contrast_color;
use crate::domain::schema::catalog;
use crate::domain::service::Service;

use super::dto::{CatalogDto, ContrastDto, ContrastQuery, SettingsDto};
use super::error::{domain_error_to_problem, form_error_to_problem};
use super::form::decode_form;
use super::problem::ApiResult;

pub async fn get_settings(
    Extension(svc): Extension<Arc<Service>>,
    OriginalUri(uri): OriginalUri,
) -> ApiResult<Json<SettingsDto>> {
    let settings = svc
        .get_settings()
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(settings.into()))
}

/// Full replacement from a JSON document shaped like the settings form.
pub async fn put_settings(
    Extension(svc): Extension<Arc<Service>>,
    OriginalUri(uri): OriginalUri,
    Json(raw): Json<Value>,
) -> ApiResult<Json<SettingsDto>> {
    let settings = svc
        .save_settings(&raw)
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(settings.into()))
}

/// Full replacement from the admin form.
pub async fn post_settings_form(
    Extension(svc): Extension<Arc<Service>>,
    OriginalUri(uri): OriginalUri,
    body: Bytes,
) -> ApiResult<Json<SettingsDto>> {
    let raw =
        decode_form(&body, FORM_NAMESPACE).map_err(|e| form_error_to_problem(&e, uri.path()))?;
    let settings = svc
        .save_settings(&raw)
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(settings.into()))
}

pub async fn delete_settings(
    Extension(svc): Extension<Arc<Service>>,
    OriginalUri(uri): OriginalUri,
) -> ApiResult<StatusCode> {
    svc.reset_settings()
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(StatusCode::NO_CONTENT)
}

#[allow(clippy::unused_async)] // axum handler
pub async fn get_catalog() -> Json<CatalogDto> {
    Json(catalog().into())
}

#[allow(clippy::unused_async)] // axum handler
pub async fn get_contrast(Query(query): Query<ContrastQuery>) -> Json<ContrastDto> {
    let foreground = contrast_color(&query.hex);
    Json(ContrastDto {
        background: query.hex,
        foreground,
    })
}

/// Widget markup with its style block, or 204 when nothing is enabled.
pub async fn get_widget(
    Extension(svc): Extension<Arc<Service>>,
    OriginalUri(uri): OriginalUri,
) -> ApiResult<Response> {
    let widget = svc
        .render_widget()
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    let response = match widget {
        Some(widget) => Html(format!(
            "<style>{}</style>{}",
            widget.inline_style, widget.markup
        ))
        .into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    };
    Ok(response)
}
