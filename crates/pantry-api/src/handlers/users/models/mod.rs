//! Request and response models for the user endpoints.

mod create_user_request;
mod token_request;
mod token_response;
mod update_me_request;
mod user_response;

pub use create_user_request::CreateUserRequest;
pub use token_request::TokenRequest;
pub use token_response::TokenResponse;
pub use update_me_request::UpdateMeRequest;
pub use user_response::UserResponse;
