use actix_web::http::header::{self, ContentDisposition, DispositionParam, DispositionType};
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use log::{debug, error};
use serde::Deserialize;

use crate::interfaces::{subconverter, ConvertError};
use crate::models::AppState;

/// Query parameters for subscription conversion
#[derive(Deserialize, Debug, Default, Clone)]
pub struct SubconverterQuery {
    /// Subscription to convert; falls back to the configured default
    pub url: Option<String>,
}

impl ResponseError for ConvertError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(ConvertError::status_code(self))
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(ResponseError::status_code(self))
            .content_type("text/plain; charset=utf-8")
            .body(self.to_string())
    }
}

/// Handler for subscription conversion
pub async fn sub_handler(
    query: web::Query<SubconverterQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, ConvertError> {
    debug!("Received subconverter request: {:?}", query);
    let settings = &app_state.settings;

    let url = query
        .url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .or(settings.default_url.as_deref())
        .ok_or(ConvertError::MissingUrl)?;

    let document = subconverter(url, settings).await.inspect_err(|e| {
        error!("Conversion of {} failed: {}", url, e);
    })?;

    Ok(HttpResponse::Ok()
        .content_type("text/yaml; charset=utf-8")
        .insert_header((
            header::CONTENT_DISPOSITION,
            ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(settings.filename.clone())],
            },
        ))
        .body(document))
}

/// Register the conversion routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/sub", web::get().to(sub_handler));
}
