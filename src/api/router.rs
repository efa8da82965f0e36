use axum::{
    body::Body,
    extract::Request,
    routing::get,
    routing::post,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{auth, echo, product, product_variant, root, user};
use tower_http::{
    cors::CorsLayer,
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root::welcome))

        // Auth
        .route("/login", post(auth::login))

        // Experimental echo channel
        .route("/echo", get(echo::echo_upgrade))

        // Products (transactional with their variants)
        .route("/products", get(product::list_products).post(product::create_product))
        .route("/products/{id}", get(product::get_product).put(product::update_product).delete(product::delete_product))

        // Product variants
        .route("/productVariants", get(product_variant::list_variants).post(product_variant::create_variant))
        .route("/productVariants/{id}", get(product_variant::get_variant).put(product_variant::update_variant).delete(product_variant::delete_variant))

        // Users
        .route("/user", get(user::list_users).post(user::create_user))
        .route("/user/{id}", get(user::get_user).put(user::update_user).delete(user::delete_user))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
