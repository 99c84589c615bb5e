// src/application/commands/tags/mod.rs
mod commands;
mod service;

pub use commands::{CreateTagCommand, DeleteTagCommand, UpdateTagCommand};
pub use service::TagCommandService;
