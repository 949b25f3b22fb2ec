use crate::error::SlotkeeperError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use slotkeeper_api_structs::get_requester_bookings::{APIResponse, PathParams};
use slotkeeper_domain::{Booking, ID};
use slotkeeper_infra::SlotkeeperContext;

pub async fn get_requester_bookings_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<SlotkeeperContext>,
) -> Result<HttpResponse, SlotkeeperError> {
    let usecase = GetRequesterBookingsUseCase {
        requester_id: path_params.into_inner().requester_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|bookings| HttpResponse::Ok().json(APIResponse::new(bookings)))
        .map_err(|e| match e {
            UseCaseError::StorageError => SlotkeeperError::InternalError,
        })
}

#[derive(Debug)]
pub struct GetRequesterBookingsUseCase {
    pub requester_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetRequesterBookingsUseCase {
    type Response = Vec<Booking>;

    type Errors = UseCaseError;

    const NAME: &'static str = "GetRequesterBookings";

    async fn execute(&mut self, ctx: &SlotkeeperContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .bookings
            .find_by_requester(&self.requester_id)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
