//! Domain models with validation at construction
//!
//! Form input is validated when building these types.
//! Invalid input returns ValidationError, not panic.

pub mod entry;
pub mod validation;

pub use entry::{Entry, EntryForm, EntryId, IdForm, NewEntry, UpdateForm};
pub use validation::ValidationError;
