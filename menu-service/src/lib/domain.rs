pub mod authentication;
pub mod category;
pub mod food;
pub mod user;
