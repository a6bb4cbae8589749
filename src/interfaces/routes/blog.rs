use actix_web::web;

use crate::handlers::blog;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/blog")
            .service(
                web::resource("")
                    .route(web::post().to(blog::create_blog))
                    .route(web::get().to(blog::get_blogs))
            )
            .service(
                web::resource("/{blog_id}")
                    .route(web::patch().to(blog::update_blog))
                    .route(web::delete().to(blog::delete_blog))
            )
    );
}
