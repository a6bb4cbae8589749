pub mod home;
pub mod projects;
pub mod blog;
pub mod messages;
pub mod system;
