pub mod send_booking_reminders;

use actix_web::web;
use send_booking_reminders::send_test_reminders_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/reminders/test",
        web::post().to(send_test_reminders_controller),
    );
}
