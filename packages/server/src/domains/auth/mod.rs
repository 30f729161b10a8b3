//! Auth domain - accounts and credentials
//!
//! Responsibilities:
//! - Registration (role-scoped profile fields, pending verification)
//! - Credential checks for login and password changes
//! - Self-service account deletion
//!
//! Session issuance itself lives in the server layer; these actions only
//! decide whether a set of credentials maps to an account.

pub mod actions;
pub mod password;

pub use password::Argon2PasswordHasher;
