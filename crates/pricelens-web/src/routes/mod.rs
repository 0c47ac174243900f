//! Route handlers.

pub mod api;
pub mod page;

use axum::http::StatusCode;
use pricelens_core::PriceLensError;

/// Map a pipeline error to an HTTP status.
pub(crate) fn status_for(err: &PriceLensError) -> StatusCode {
    if err.is_invalid_input() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}
