pub mod exceptions;
pub mod location;
pub mod recipe;

pub use exceptions::*;
pub use location::*;
pub use recipe::*;
