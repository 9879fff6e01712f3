use actix_web::web;

use crate::handlers::{home::home, json_error::json_config, pages, resume, system};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());

    cfg.service(home);
    cfg.service(system::health_check);

    cfg.service(
        web::scope("/api")
            .service(resume::get_own_resume)
            .service(resume::put_own_resume)
            .service(pages::export_resume)
            .service(resume::get_public_resume)
    );

    cfg.service(pages::resume_page);
}
