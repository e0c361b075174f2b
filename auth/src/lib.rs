//! Authentication primitives
//!
//! Provides the I/O-free building blocks of the menu service's sign-in flow:
//! - Password hashing (salted Argon2id with configurable cost)
//! - Session token issuance and verification (HS256 JWT)
//!
//! Neither type reads ambient process state; secrets and cost parameters are
//! passed in at construction.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::{HashingCost, PasswordHasher};
//!
//! let hasher = PasswordHasher::new(HashingCost::default()).unwrap();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("other_password", &hash));
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::TokenService;
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!");
//! let token = tokens.issue(42, 3600).unwrap();
//! assert_eq!(tokens.verify(&token).unwrap().user_id, 42);
//! ```

pub mod jwt;
pub mod password;

pub use jwt::Claims;
pub use jwt::TokenError;
pub use jwt::TokenPayload;
pub use jwt::TokenService;
pub use password::HashingCost;
pub use password::PasswordError;
pub use password::PasswordHasher;
