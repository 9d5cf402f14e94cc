//! Domain entities representing core business objects.

pub mod account;
pub mod role;
pub mod seller;
pub mod shop;
pub mod token;
pub mod user;


// Re-export commonly used types
pub use account::Account;
pub use role::Role;
pub use seller::Seller;
pub use shop::{NewShop, Shop};
pub use token::{Claims, TokenPair, ACCESS_TOKEN_EXPIRY_MINUTES, REFRESH_TOKEN_EXPIRY_DAYS};
pub use user::User;
