//! Shop repository module.

mod r#trait;
pub use r#trait::ShopRepository;

#[cfg(test)]
mod mock;
#[cfg(test)]
pub use mock::MockShopRepository;
