pub mod category;
pub mod food;
pub mod user;

pub use category::SqliteCategoryRepository;
pub use food::SqliteFoodRepository;
pub use user::SqliteUserRepository;
