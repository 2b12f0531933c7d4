use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};

pub const HEALTH_PATH: &str = "/healthz";

/// Whether the request target is exactly `/healthz` in origin form.
///
/// Absolute-form targets (`http://host/healthz`) and targets carrying a query string are
/// different targets. Fragments never reach the application: hyper drops them while
/// parsing the request line.
pub fn is_health_target(uri: &Uri) -> bool {
    uri.scheme().is_none()
        && uri.authority().is_none()
        && uri.query().is_none()
        && uri.path() == HEALTH_PATH
}

/// Answers every request: an empty `200 OK` for the health target, an empty `404` otherwise.
/// The method is not inspected.
pub async fn healthcheck(uri: Uri) -> Response {
    if is_health_target(&uri) {
        StatusCode::OK.into_response()
    } else {
        not_found()
    }
}

fn not_found() -> Response {
    StatusCode::NOT_FOUND.into_response()
}
