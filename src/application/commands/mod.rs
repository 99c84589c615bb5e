pub mod categories;
pub mod posts;
pub mod tags;
pub mod todos;
