mod create_booking;
mod get_provider_bookings;
mod get_requester_bookings;
mod get_slot_availability;
mod respond_to_booking;
pub mod slot_conflicts;

use actix_web::web;
use create_booking::create_booking_controller;
use get_provider_bookings::get_provider_bookings_controller;
use get_requester_bookings::get_requester_bookings_controller;
use get_slot_availability::get_slot_availability_controller;
use respond_to_booking::respond_to_booking_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/bookings", web::post().to(create_booking_controller));
    cfg.route(
        "/bookings/{booking_id}/response",
        web::put().to(respond_to_booking_controller),
    );
    cfg.route(
        "/providers/{provider_id}/bookings",
        web::get().to(get_provider_bookings_controller),
    );
    cfg.route(
        "/providers/{provider_id}/slots",
        web::get().to(get_slot_availability_controller),
    );
    cfg.route(
        "/requesters/{requester_id}/bookings",
        web::get().to(get_requester_bookings_controller),
    );
}
