// src/generators/mod.rs
mod password;
mod wordlist;

pub use password::{
    GeneratorError, PasswordGenerator, Result, PASSPHRASE_TARGET_LEN, SYMBOL_PASSWORD_LEN,
};
pub use wordlist::{WordPool, DEFAULT_WORDLIST_PATH};
