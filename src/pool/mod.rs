//! Canonicalization: interned handles, per-kind pools and the [`Names`]
//! context that owns them.

mod context;
mod interned;
#[allow(clippy::module_inception)]
mod pool;

pub use context::{Names, NamesConfig};
pub use interned::Interned;
pub use pool::NamePool;
