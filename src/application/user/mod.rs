//! User account use cases
//!
//! Each use case parses raw request fields into value objects, in the order
//! the controller reports them, and delegates the business rules to
//! `UserService`.

mod change_password;
mod create_user;
mod verify_credentials;

pub use change_password::{ChangePasswordCommand, ChangePasswordUseCase};
pub use create_user::{CreateUserCommand, CreateUserUseCase};
pub use verify_credentials::{VerifyCredentialsCommand, VerifyCredentialsUseCase};
