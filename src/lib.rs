pub mod config;
pub mod error;
pub mod mode;
pub mod shell;

pub mod core;
pub mod input;
pub mod process;

#[cfg(test)]
pub(crate) mod testing;
