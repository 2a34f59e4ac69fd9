// Compiled-in portfolio content and its advisory shape check.
// Nothing here performs I/O; the repository is built once and shared read-only.

pub mod links;
pub mod repository;
pub mod self_check;

pub use repository::ContentRepository;
pub use self_check::{run_self_check, IntegrityReport};
