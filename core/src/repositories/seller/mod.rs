//! Seller repository module.

mod r#trait;
pub use r#trait::SellerRepository;

#[cfg(test)]
mod mock;
#[cfg(test)]
pub use mock::MockSellerRepository;
