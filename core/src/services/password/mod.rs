//! Password hashing

mod service;

pub use service::PasswordHasher;
