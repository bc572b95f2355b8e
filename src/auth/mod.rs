pub mod current_user;
pub mod extractor;
pub mod jwt;
pub mod password;
pub mod session;

pub use current_user::*;
pub use extractor::*;
pub use jwt::*;
pub use password::*;
pub use session::*;
