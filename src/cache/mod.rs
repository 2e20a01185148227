mod metadata;

pub use metadata::{CacheStats, MetadataCache};
