use actix_web::web;

use crate::handlers::{home::home, system::health_check};

mod projects;
mod blog;
mod messages;
mod json_error;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
    cfg.service(health_check);

    cfg.service(
        web::scope("/api")
            .configure(projects::config_routes)
            .configure(blog::config_routes)
            .configure(messages::config_routes)
    );

    cfg.configure(json_error::config_routes);
}
