// src/lib.rs
pub mod commands;
pub mod console;
pub mod error;
pub mod tasks;
