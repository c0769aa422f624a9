//! Data loading and persistence for the game core.

pub mod load;
pub mod schema;

pub use load::*;
pub use schema::*;
