pub mod document;
pub mod envelope;
pub mod project;
pub mod blog;
pub mod message;
