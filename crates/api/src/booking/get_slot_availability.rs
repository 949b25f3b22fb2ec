use super::slot_conflicts::occupied_times;
use crate::error::SlotkeeperError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use slotkeeper_api_structs::get_slot_availability::{APIResponse, PathParams, QueryParams};
use slotkeeper_domain::{
    date::{format_date, format_time, parse_date, parse_slot_time},
    ID,
};
use slotkeeper_infra::SlotkeeperContext;

pub async fn get_slot_availability_controller(
    path_params: web::Path<PathParams>,
    query_params: web::Query<QueryParams>,
    ctx: web::Data<SlotkeeperContext>,
) -> Result<HttpResponse, SlotkeeperError> {
    let query = query_params.into_inner();
    let usecase = GetSlotAvailabilityUseCase {
        provider_id: path_params.into_inner().provider_id,
        date: query.date,
        time: query.time,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            HttpResponse::Ok().json(APIResponse {
                date: res.date,
                occupied_times: res.occupied_times,
                free: res.free,
            })
        })
        .map_err(|e| match e {
            UseCaseError::InvalidDate(date) => SlotkeeperError::BadClientData(format!(
                "Invalid date: {}. It should be of the format YYYY-MM-DD",
                date
            )),
            UseCaseError::InvalidTime(time) => SlotkeeperError::BadClientData(format!(
                "Invalid time: {}. It should be of the format HH:MM, seconds must be zero",
                time
            )),
            UseCaseError::StorageError => SlotkeeperError::InternalError,
        })
}

#[derive(Debug)]
pub struct GetSlotAvailabilityUseCase {
    pub provider_id: ID,
    pub date: String,
    pub time: Option<String>,
}

#[derive(Debug, PartialEq)]
pub struct SlotAvailability {
    pub date: String,
    pub occupied_times: Vec<String>,
    pub free: Option<bool>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidDate(String),
    InvalidTime(String),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetSlotAvailabilityUseCase {
    type Response = SlotAvailability;

    type Errors = UseCaseError;

    const NAME: &'static str = "GetSlotAvailability";

    async fn execute(&mut self, ctx: &SlotkeeperContext) -> Result<Self::Response, Self::Errors> {
        let date = parse_date(&self.date)
            .map(|d| format_date(&d))
            .map_err(|_| UseCaseError::InvalidDate(self.date.clone()))?;
        let time = match &self.time {
            Some(time) => Some(
                parse_slot_time(time)
                    .map(|t| format_time(&t))
                    .map_err(|_| UseCaseError::InvalidTime(time.clone()))?,
            ),
            None => None,
        };

        let occupied = occupied_times(&self.provider_id, &date, ctx)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        let free = time.map(|time| !occupied.contains(&time));

        Ok(SlotAvailability {
            date,
            occupied_times: occupied.into_iter().collect(),
            free,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::testing::UnreachableBookingRepo;
    use slotkeeper_domain::Booking;
    use std::sync::Arc;

    #[actix_web::main]
    #[test]
    async fn reports_occupied_times_and_free_slot() {
        let ctx = SlotkeeperContext::create_inmemory();
        let provider_id = ID::new();
        let booking = Booking::new(
            ID::new(),
            provider_id.clone(),
            "2024-05-10".into(),
            "10:00".into(),
            0,
        );
        ctx.repos.bookings.insert(&booking).await.unwrap();

        let mut usecase = GetSlotAvailabilityUseCase {
            provider_id: provider_id.clone(),
            date: "2024-05-10".into(),
            time: Some("10:00:00".into()),
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap(),
            SlotAvailability {
                date: "2024-05-10".into(),
                occupied_times: vec!["10:00".into()],
                free: Some(false),
            }
        );

        let mut usecase = GetSlotAvailabilityUseCase {
            provider_id,
            date: "2024-05-10".into(),
            time: None,
        };
        assert_eq!(usecase.execute(&ctx).await.unwrap().free, None);
    }

    #[actix_web::main]
    #[test]
    async fn rejects_time_with_seconds() {
        let ctx = SlotkeeperContext::create_inmemory();

        let mut usecase = GetSlotAvailabilityUseCase {
            provider_id: ID::new(),
            date: "2024-05-10".into(),
            time: Some("10:00:30".into()),
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::InvalidTime("10:00:30".into())
        );
    }

    #[actix_web::main]
    #[test]
    async fn surfaces_store_failure() {
        let mut ctx = SlotkeeperContext::create_inmemory();
        ctx.repos.bookings = Arc::new(UnreachableBookingRepo {});

        let mut usecase = GetSlotAvailabilityUseCase {
            provider_id: ID::new(),
            date: "2024-05-10".into(),
            time: Some("10:00".into()),
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::StorageError
        );
    }
}
