pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;

pub use crate::config::AppConfig;
pub use error::{FieldError, FieldErrorKind, ServiceError, StoreError};
pub use models::{Amount, Item, Receipt};
pub use service::{score, Clock, ReceiptService, SystemClock, Validator};
pub use store::{MemoryStore, PointsStore};
