use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod telemetry;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{db, utils};

use entities::{blog::Blog, message::Message, project::Project};
use repositories::{collection::SharedCollection, memory::MemoryCollection, sqlx_repo::SqlxCollection};
use use_cases::crud::CrudHandler;

pub struct AppState {
    pub project_handler: CrudHandler<Project>,
    pub blog_handler: CrudHandler<Blog>,
    pub message_handler: CrudHandler<Message>,
}

impl AppState {
    pub fn new(pool: sqlx::PgPool) -> Self {
        AppState::from_collections(
            Arc::new(SqlxCollection::<Project>::new(pool.clone())),
            Arc::new(SqlxCollection::<Blog>::new(pool.clone())),
            Arc::new(SqlxCollection::<Message>::new(pool)),
        )
    }

    pub fn in_memory() -> Self {
        AppState::from_collections(
            Arc::new(MemoryCollection::<Project>::new()),
            Arc::new(MemoryCollection::<Blog>::new()),
            Arc::new(MemoryCollection::<Message>::new()),
        )
    }

    pub fn from_collections(
        projects: SharedCollection<Project>,
        blogs: SharedCollection<Blog>,
        messages: SharedCollection<Message>,
    ) -> Self {
        AppState {
            project_handler: CrudHandler::new(projects),
            blog_handler: CrudHandler::new(blogs),
            message_handler: CrudHandler::new(messages),
        }
    }
}
