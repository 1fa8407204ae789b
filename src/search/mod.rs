//! Request-side types shared by the suggesters.

pub mod context;
pub mod field;
pub mod filter;

pub use context::SearchContext;
pub use filter::*;
