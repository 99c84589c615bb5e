// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod content;
pub mod time;
pub mod todos;

pub use content::InMemoryContent;
pub use time::{DummyClock, fixed_now};
pub use todos::InMemoryTodos;
