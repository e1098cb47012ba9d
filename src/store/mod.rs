pub mod memory;

pub use memory::MemoryStore;

use crate::error::StoreError;

/// 收据 ID -> 积分 存储
pub trait PointsStore: Send + Sync {
    fn put(&self, id: &str, points: u64) -> Result<(), StoreError>;

    fn get(&self, id: &str) -> Result<Option<u64>, StoreError>;
}
