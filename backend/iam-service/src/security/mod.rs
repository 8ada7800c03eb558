pub mod password;

pub use password::{Argon2Hashing, PasswordHashing};
