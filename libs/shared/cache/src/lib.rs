pub mod key;
pub mod store;

pub use key::{KeySegment, QueryKey};
pub use store::QueryCache;
