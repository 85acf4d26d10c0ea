pub mod user;

// Re-export user module for easier access
pub use user::*;
