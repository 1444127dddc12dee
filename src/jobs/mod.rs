// Job listings — flat-file loader, in-memory store, JSON persistence of
// user submissions.

pub mod model;
pub mod store;
pub mod traits;

pub use model::{Job, NewJob};
pub use store::FlatFileStore;
pub use traits::JobStore;
