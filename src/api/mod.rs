pub mod handlers;

pub use handlers::{get_points, health_check, process_receipt};

use crate::service::ReceiptService;
use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;

/// 构建路由
pub fn router(service: Arc<ReceiptService>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/:id/points", get(get_points))
        .with_state(service)
        .layer(ServiceBuilder::new().layer(middleware::from_fn(log_request)))
}

/// 请求日志：方法、路径、状态码、耗时
async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        "{} {} -> {} ({} ms)",
        method,
        path,
        response.status().as_u16(),
        started.elapsed().as_millis()
    );
    response
}
