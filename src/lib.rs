//! Blog publishing and personal task management core.
//!
//! Posts, categories and tags receive URL slugs from [`domain::slug`], which
//! normalizes titles, falls back to timestamped slugs for text that does not
//! survive ASCII normalization, and resolves collisions against storage.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
