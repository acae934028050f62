pub mod chain;
pub mod commands;
pub mod state;
pub mod status;
pub mod tokenizer;

pub use status::ExitStatus;
