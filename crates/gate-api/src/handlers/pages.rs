//! Page handlers
//!
//! The portal surface is glue: each page trusts the gate layer in front of
//! it and renders. Handlers behind a gate receive the resolved session from
//! the request extensions.

use axum::{response::Html, Extension};

use gate_core::domain::Session;

pub async fn login() -> Html<&'static str> {
    Html("<h1>Sign in</h1>")
}

pub async fn reset_password() -> Html<&'static str> {
    Html("<h1>Reset password</h1>")
}

pub async fn unauthorized() -> Html<&'static str> {
    Html("<h1>You do not have access to that page</h1>")
}

pub async fn subscribe() -> Html<&'static str> {
    Html("<h1>Subscribe to unlock projects</h1>")
}

pub async fn home(Extension(session): Extension<Session>) -> Html<String> {
    Html(format!("<h1>Dashboard</h1><p>Signed in as {}</p>", session.user_id))
}

pub async fn account(Extension(session): Extension<Session>) -> Html<String> {
    Html(format!(
        "<h1>Account</h1><p>Subscription: {}</p>",
        session.subscription.as_str()
    ))
}

pub async fn admin_dashboard(Extension(session): Extension<Session>) -> Html<String> {
    Html(format!("<h1>Admin</h1><p>Operator {}</p>", session.user_id))
}

pub async fn admin_categories() -> Html<&'static str> {
    Html("<h1>Categories</h1>")
}

pub async fn projects(Extension(session): Extension<Session>) -> Html<String> {
    Html(format!("<h1>Projects</h1><p>Viewer {}</p>", session.user_id))
}
