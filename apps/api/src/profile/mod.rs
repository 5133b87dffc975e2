// Profile editing: the owned in-memory profile, its mutation functions,
// and the preview view-model.

pub mod handlers;
pub mod preview;
pub mod store;

pub use store::{ProfileError, ProfileStore};
