//! Gate middleware
//!
//! One layer per gate. A denied request never reaches the inner handler;
//! the layer answers with a redirect to the decision's target. An allowed
//! request carries its resolved session in the request extensions.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

use gate_core::domain::{GateDecision, RoutePolicy, Session};

use crate::middleware::session_token;
use crate::state::AppState;

async fn apply_gate(
    state: AppState,
    mut request: Request,
    next: Next,
    check: fn(&RoutePolicy, Option<&Session>) -> GateDecision,
) -> Response {
    // Resolve once, then decide; the session rides along for the handler
    let token = session_token(request.headers(), &state.config.provider.cookie_name);
    let session = state.gate.current_session(token.as_deref()).await;

    match check(state.gate.policy(), session.as_ref()) {
        GateDecision::Allow => {
            if let Some(session) = session {
                request.extensions_mut().insert(session);
            }
            next.run(request).await
        }
        GateDecision::Deny { target } => {
            debug!(
                "Gate denied {} -> redirect {}",
                request.uri().path(),
                target
            );
            Redirect::to(&target).into_response()
        }
    }
}

pub async fn require_unauth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    apply_gate(state, request, next, RoutePolicy::require_unauth).await
}

pub async fn require_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    apply_gate(state, request, next, RoutePolicy::require_auth).await
}

pub async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    apply_gate(state, request, next, RoutePolicy::require_admin).await
}

pub async fn require_subscription(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    apply_gate(state, request, next, RoutePolicy::require_subscription).await
}
