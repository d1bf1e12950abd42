pub mod lru;
pub mod stats;

pub use lru::LruCache;
pub use stats::CacheStats;
