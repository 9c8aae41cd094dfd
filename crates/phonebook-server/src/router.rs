//! Axum router wiring.
//!
//! Contact routes are always mounted; the docs routes only when enabled in
//! config. This is the single place docs are gated. Wrong methods on contact
//! routes answer a JSON 405.

use axum::{
    routing::{get, post},
    Router,
};

use crate::{app_state::AppState, docs, handlers, ops};

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route(
            "/contacts",
            post(handlers::contacts::create_contact).fallback(handlers::method_not_allowed),
        )
        .route(
            "/contacts/:id",
            get(handlers::contacts::get_contact)
                .delete(handlers::contacts::delete_contact)
                .fallback(handlers::method_not_allowed),
        )
        .route("/healthz", get(ops::healthz));

    if state.cfg().docs.enabled {
        router = router
            .route(docs::SPEC_PATH, get(docs::apispec))
            .route(docs::UI_PATH, get(docs::apidocs));
    }

    router.fallback(handlers::not_found).with_state(state)
}
