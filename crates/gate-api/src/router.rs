//! Router assembly
//!
//! Route groups are wrapped by their gate layer; the redirect targets and
//! the health endpoint stay public so a denial always lands somewhere
//! reachable.

use axum::{middleware::from_fn_with_state, routing::get, Router};

use crate::handlers::{health, pages};
use crate::middleware::gates;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let unauth_pages = Router::new()
        .route("/login", get(pages::login))
        .route("/reset-password", get(pages::reset_password))
        .layer(from_fn_with_state(state.clone(), gates::require_unauth));

    let member_pages = Router::new()
        .route("/home", get(pages::home))
        .route("/account", get(pages::account))
        .layer(from_fn_with_state(state.clone(), gates::require_auth));

    let admin_pages = Router::new()
        .route("/admin", get(pages::admin_dashboard))
        .route("/admin/categories", get(pages::admin_categories))
        .layer(from_fn_with_state(state.clone(), gates::require_admin));

    let subscriber_pages = Router::new()
        .route("/projects", get(pages::projects))
        .layer(from_fn_with_state(state.clone(), gates::require_subscription));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/unauthorized", get(pages::unauthorized))
        .route("/subscribe", get(pages::subscribe))
        .merge(unauth_pages)
        .merge(member_pages)
        .merge(admin_pages)
        .merge(subscriber_pages)
        .with_state(state)
}
