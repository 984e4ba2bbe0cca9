//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (secure random bytes, constant-time compare)
//! - Password hashing (Argon2id with caller-held salts)
//! - Signed, expiring tokens (HS256 JWT)
//! - Cookie management

pub mod cookie;
pub mod crypto;
pub mod password;
pub mod token;
