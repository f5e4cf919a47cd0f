pub mod multimap;
pub mod multiset;

pub use multimap::{MultiMapError, ValidatedMultiMap};
pub use multiset::Multiset;
