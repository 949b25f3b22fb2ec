mod create_person;
mod get_providers;

use actix_web::web;
use create_person::create_person_controller;
use get_providers::get_providers_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/persons", web::post().to(create_person_controller));
    cfg.route("/providers", web::get().to(get_providers_controller));
}
