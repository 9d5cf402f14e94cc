//! Repository interfaces for the relational store.

pub mod seller;
pub mod shop;
pub mod user;

pub use seller::SellerRepository;
pub use shop::ShopRepository;
pub use user::UserRepository;

#[cfg(test)]
pub use seller::MockSellerRepository;
#[cfg(test)]
pub use shop::MockShopRepository;
#[cfg(test)]
pub use user::MockUserRepository;
