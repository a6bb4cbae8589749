use actix_web::web;

use crate::handlers::messages;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/message")
            .route(web::post().to(messages::create_message))
            .route(web::get().to(messages::get_messages))
    );
}
