pub mod comments;
pub mod contents;
pub mod error;
pub mod grants;
pub mod reports;
pub mod response;
pub mod share;
pub mod spaces;
pub mod state;
pub mod users;

pub use error::ApiError;
pub use response::ApiResponse;
pub use state::AppState;
