// src/cli/mod.rs
pub mod dispatch;
pub mod helper;
pub mod repl;
