//! Query cache with prefix invalidation.
//!
//! Reads go through [`QueryCache::fetch`]; mutations invalidate or remove the
//! affected key prefixes so the next read shows the server's state after the
//! write.

mod key;
mod store;

pub use key::CacheKey;
pub use store::{QueryCache, QueryStatus};
