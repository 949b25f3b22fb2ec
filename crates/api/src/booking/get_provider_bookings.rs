use crate::error::SlotkeeperError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use slotkeeper_api_structs::get_provider_bookings::{APIResponse, PathParams, QueryParams};
use slotkeeper_domain::{Booking, BookingStatus, ID};
use slotkeeper_infra::SlotkeeperContext;

pub async fn get_provider_bookings_controller(
    path_params: web::Path<PathParams>,
    query_params: web::Query<QueryParams>,
    ctx: web::Data<SlotkeeperContext>,
) -> Result<HttpResponse, SlotkeeperError> {
    let usecase = GetProviderBookingsUseCase {
        provider_id: path_params.into_inner().provider_id,
        status: query_params.status,
    };

    execute(usecase, &ctx)
        .await
        .map(|bookings| HttpResponse::Ok().json(APIResponse::new(bookings)))
        .map_err(|e| match e {
            UseCaseError::StorageError => SlotkeeperError::InternalError,
        })
}

#[derive(Debug)]
pub struct GetProviderBookingsUseCase {
    pub provider_id: ID,
    pub status: Option<BookingStatus>,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetProviderBookingsUseCase {
    type Response = Vec<Booking>;

    type Errors = UseCaseError;

    const NAME: &'static str = "GetProviderBookings";

    async fn execute(&mut self, ctx: &SlotkeeperContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .bookings
            .find_by_provider(&self.provider_id, self.status)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[actix_web::main]
    #[test]
    async fn filters_by_status() {
        let ctx = SlotkeeperContext::create_inmemory();
        let provider_id = ID::new();
        let pending = Booking::new(
            ID::new(),
            provider_id.clone(),
            "2024-05-10".into(),
            "10:00".into(),
            0,
        );
        let mut approved = Booking::new(
            ID::new(),
            provider_id.clone(),
            "2024-05-10".into(),
            "11:00".into(),
            0,
        );
        approved.status = BookingStatus::Approved;
        let other = Booking::new(
            ID::new(),
            ID::new(),
            "2024-05-10".into(),
            "10:00".into(),
            0,
        );
        for b in &[&pending, &approved, &other] {
            ctx.repos.bookings.insert(b).await.unwrap();
        }

        let mut usecase = GetProviderBookingsUseCase {
            provider_id: provider_id.clone(),
            status: None,
        };
        assert_eq!(usecase.execute(&ctx).await.unwrap().len(), 2);

        let mut usecase = GetProviderBookingsUseCase {
            provider_id,
            status: Some(BookingStatus::Approved),
        };
        assert_eq!(usecase.execute(&ctx).await.unwrap(), vec![approved]);
    }
}
