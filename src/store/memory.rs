use super::PointsStore;
use crate::error::StoreError;
use dashmap::DashMap;

/// 内存存储 (进程退出即丢失)
#[derive(Debug, Default)]
pub struct MemoryStore {
    points: DashMap<String, u64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl PointsStore for MemoryStore {
    fn put(&self, id: &str, points: u64) -> Result<(), StoreError> {
        self.points.insert(id.to_string(), points);
        Ok(())
    }

    fn get(&self, id: &str) -> Result<Option<u64>, StoreError> {
        Ok(self.points.get(id).map(|entry| *entry.value()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_put_then_get() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        store.put("abc", 28).unwrap();
        assert_eq!(store.get("abc").unwrap(), Some(28));
        assert_eq!(store.get("missing").unwrap(), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_put_overwrites() {
        let store = MemoryStore::new();
        store.put("abc", 1).unwrap();
        store.put("abc", 2).unwrap();
        assert_eq!(store.get("abc").unwrap(), Some(2));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_concurrent_writers() {
        let store = Arc::new(MemoryStore::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for i in 0..100u64 {
                        store.put(&format!("{t}-{i}"), i).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(store.len(), 800);
        assert_eq!(store.get("7-99").unwrap(), Some(99));
    }
}
