use super::clock::Clock;
use super::scorer;
use super::validator::Validator;
use crate::error::ServiceError;
use crate::store::PointsStore;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

/// 收据服务：校验 → 计分 → 生成 ID → 存储
pub struct ReceiptService {
    clock: Arc<dyn Clock>,
    store: Arc<dyn PointsStore>,
}

impl ReceiptService {
    pub fn new(clock: Arc<dyn Clock>, store: Arc<dyn PointsStore>) -> Self {
        Self { clock, store }
    }

    /// 处理一张收据，返回新生成的收据 ID
    pub fn process(&self, raw: &Value) -> Result<String, ServiceError> {
        // 1. 校验
        let receipt = Validator::new(self.clock.today())
            .parse(raw)
            .map_err(ServiceError::Validation)?;

        // 2. 计分 (提交时计算一次，只存结果)
        let breakdown = scorer::breakdown(&receipt);
        let points = scorer::total(&breakdown);
        tracing::debug!(retailer = %receipt.retailer, ?breakdown, "Receipt scored");

        // 3. 存储
        let id = Uuid::new_v4().to_string();
        self.store.put(&id, points)?;

        tracing::info!("Receipt {} stored with {} points", id, points);
        Ok(id)
    }

    /// 按 ID 查询积分；ID 须为非空且不含空白 (`^\S+$`)
    pub fn points(&self, id: &str) -> Result<u64, ServiceError> {
        if id.is_empty() || id.chars().any(char::is_whitespace) {
            return Err(ServiceError::InvalidId(id.to_string()));
        }

        self.store
            .get(id)?
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::service::FixedClock;
    use crate::store::MemoryStore;
    use chrono::NaiveDate;
    use serde_json::json;

    struct BrokenStore;

    impl PointsStore for BrokenStore {
        fn put(&self, _id: &str, _points: u64) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("disk on fire".to_string()))
        }

        fn get(&self, _id: &str) -> Result<Option<u64>, StoreError> {
            Err(StoreError::Unavailable("disk on fire".to_string()))
        }
    }

    fn service_with(store: Arc<dyn PointsStore>) -> ReceiptService {
        let clock = FixedClock(NaiveDate::from_ymd_opt(2022, 1, 1).unwrap());
        ReceiptService::new(Arc::new(clock), store)
    }

    fn target_receipt() -> Value {
        json!({
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [{"shortDescription": "Mountain Dew 12PK", "price": "6.49"}],
            "total": "35.35",
        })
    }

    #[test]
    fn test_process_then_lookup() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with(store.clone());

        let id = service.process(&target_receipt()).unwrap();
        assert!(Uuid::parse_str(&id).is_ok());
        assert_eq!(service.points(&id).unwrap(), 12);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_each_submission_gets_new_id() {
        let service = service_with(Arc::new(MemoryStore::new()));
        let a = service.process(&target_receipt()).unwrap();
        let b = service.process(&target_receipt()).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_invalid_receipt_not_stored() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with(store.clone());

        let mut raw = target_receipt();
        raw["purchaseDate"] = json!("2022-01-02");
        match service.process(&raw) {
            Err(ServiceError::Validation(errors)) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "purchaseDate");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_lookup_errors() {
        let service = service_with(Arc::new(MemoryStore::new()));
        assert!(matches!(service.points("nope"), Err(ServiceError::NotFound(_))));
        assert!(matches!(service.points("a b"), Err(ServiceError::InvalidId(_))));
        assert!(matches!(service.points(""), Err(ServiceError::InvalidId(_))));
    }

    #[test]
    fn test_store_failure_is_internal() {
        let service = service_with(Arc::new(BrokenStore));
        assert!(matches!(
            service.process(&target_receipt()),
            Err(ServiceError::Store(_))
        ));
        assert!(matches!(service.points("abc"), Err(ServiceError::Store(_))));
    }
}
