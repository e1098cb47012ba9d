use crate::error::{FieldError, ServiceError};
use crate::service::ReceiptService;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Json, Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// 提交收据响应体
#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub id: String,
}

/// 积分查询响应体
#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// 错误响应体：`error` 为字段错误列表或一条消息
#[derive(Debug, Serialize)]
pub struct ErrorResponse<T> {
    pub error: T,
}

fn error_response<T: Serialize>(status: StatusCode, error: T) -> Response {
    (status, Json(ErrorResponse { error })).into_response()
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match self {
            ServiceError::Validation(errors) => {
                error_response::<Vec<FieldError>>(StatusCode::BAD_REQUEST, errors)
            }
            ServiceError::InvalidId(_) => {
                error_response(StatusCode::BAD_REQUEST, "Invalid receipt ID format.")
            }
            ServiceError::NotFound(_) => error_response(StatusCode::NOT_FOUND, "Receipt not found."),
            ServiceError::Store(e) => {
                tracing::error!("Internal error: {}", e);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        }
    }
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 提交收据：校验、计分并存储，返回收据 ID
pub async fn process_receipt(
    State(service): State<Arc<ReceiptService>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let raw = match payload {
        Ok(Json(raw)) => raw,
        Err(rejection) => {
            tracing::warn!("Rejected receipt body: {}", rejection.body_text());
            return error_response(rejection.status(), rejection.body_text());
        }
    };

    match service.process(&raw) {
        Ok(id) => (StatusCode::OK, Json(ProcessResponse { id })).into_response(),
        Err(e) => {
            if let ServiceError::Validation(errors) = &e {
                tracing::info!("Receipt rejected with {} validation error(s)", errors.len());
            }
            e.into_response()
        }
    }
}

/// 按收据 ID 查询积分
pub async fn get_points(
    State(service): State<Arc<ReceiptService>>,
    receipt_id: Result<Path<String>, PathRejection>,
) -> Response {
    // 非 UTF-8 等无法解析的 ID 同样按格式错误处理
    let receipt_id = match receipt_id {
        Ok(Path(id)) => id,
        Err(rejection) => {
            tracing::info!("Rejected receipt id: {}", rejection.body_text());
            return ServiceError::InvalidId(rejection.body_text()).into_response();
        }
    };

    match service.points(&receipt_id) {
        Ok(points) => (StatusCode::OK, Json(PointsResponse { points })).into_response(),
        Err(e) => {
            tracing::info!("Points lookup for {:?} failed: {}", receipt_id, e);
            e.into_response()
        }
    }
}
