// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session extraction and authentication middleware for the server.
//!
//! This module provides an Axum extractor for validating session tokens
//! and enforcing authentication at the server boundary.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, header, request::Parts},
    response::{IntoResponse, Response},
};
use fleetflow_api::{AuthenticatedActor, Operator};
use time::OffsetDateTime;
use tracing::debug;

use crate::AppState;

/// Extractor for authenticated operators.
///
/// Validates the `Authorization: Bearer <token>` header against the
/// in-memory session store and returns the operator context.
///
/// # Errors
///
/// Rejects with HTTP 401 Unauthorized if the header is missing or
/// malformed, the token is unknown, or the session has expired.
pub struct SessionOperator(pub AuthenticatedActor, pub Operator);

/// Rejection type for failed session extraction.
pub struct SessionError {
    /// The reason the session was rejected.
    pub message: String,
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let body = axum::Json(serde_json::json!({
            "error": true,
            "message": self.message,
        }));
        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}

impl FromRequestParts<AppState> for SessionOperator {
    type Rejection = SessionError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header_value: &str = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| SessionError {
                message: String::from("Missing Authorization header"),
            })?;

        let token: &str = header_value.strip_prefix("Bearer ").ok_or_else(|| SessionError {
            message: String::from("Authorization header must be 'Bearer <token>'"),
        })?;

        let auth = state.auth.lock().await;
        let (actor, operator) = auth
            .validate_session(token, OffsetDateTime::now_utc())
            .map_err(|e| {
                debug!(error = %e, "Session validation failed");
                SessionError {
                    message: e.to_string(),
                }
            })?;

        Ok(Self(actor, operator))
    }
}
