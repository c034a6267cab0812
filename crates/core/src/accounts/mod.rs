//! Accounts module - account and category models plus the repository seam.

mod accounts_model;
mod accounts_traits;


// Re-export the public interface
pub use accounts_model::{Account, Category};
pub use accounts_traits::AccountRepositoryTrait;
