//! Storage abstraction layer.
//!
//! Backends hold category → word → tally data behind [`CategoryStore`];
//! the classifier reaches them through a [`StoreAccessor`].

pub mod accessor;
pub mod memory;
pub mod shared;
pub mod traits;
pub mod word_counts;

// Re-export commonly used types
pub use accessor::*;
pub use memory::*;
pub use shared::*;
pub use traits::*;
pub use word_counts::*;
