use super::slot_conflicts::is_slot_free;
use crate::error::SlotkeeperError;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use slotkeeper_api_structs::create_booking::{APIResponse, RequestBody};
use slotkeeper_domain::{
    date::{format_date, format_time, parse_date, parse_slot_time},
    Booking, Channel, Slot, ID,
};
use slotkeeper_infra::{BookingInsertResult, SlotkeeperContext};
use tracing::{error, warn};

pub async fn create_booking_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<SlotkeeperContext>,
) -> Result<HttpResponse, SlotkeeperError> {
    let body = body.into_inner();
    let usecase = CreateBookingUseCase {
        requester_id: body.requester_id,
        provider_id: body.provider_id,
        requested_date: body.requested_date,
        requested_time: body.requested_time,
        topic: body.topic,
        description: body.description,
        comment: body.comment,
    };

    execute(usecase, &ctx)
        .await
        .map(|booking| HttpResponse::Created().json(APIResponse::new(booking)))
        .map_err(SlotkeeperError::from)
}

#[derive(Debug)]
pub struct CreateBookingUseCase {
    pub requester_id: ID,
    pub provider_id: ID,
    pub requested_date: String,
    pub requested_time: String,
    pub topic: String,
    pub description: String,
    pub comment: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidDate(String),
    InvalidTime(String),
    SlotTaken,
    StorageError,
}

impl From<UseCaseError> for SlotkeeperError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidDate(date) => Self::BadClientData(format!(
                "Invalid date: {}. It should be of the format YYYY-MM-DD",
                date
            )),
            UseCaseError::InvalidTime(time) => Self::BadClientData(format!(
                "Invalid time: {}. It should be of the format HH:MM, seconds must be zero",
                time
            )),
            UseCaseError::SlotTaken => {
                Self::Conflict("The provider already has a booking at the requested time".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateBookingUseCase {
    type Response = Booking;

    type Errors = UseCaseError;

    const NAME: &'static str = "CreateBooking";

    async fn execute(&mut self, ctx: &SlotkeeperContext) -> Result<Self::Response, Self::Errors> {
        let date = parse_date(&self.requested_date)
            .map_err(|_| UseCaseError::InvalidDate(self.requested_date.clone()))?;
        let time = parse_slot_time(&self.requested_time)
            .map_err(|_| UseCaseError::InvalidTime(self.requested_time.clone()))?;

        let slot = Slot::new(
            self.provider_id.clone(),
            format_date(&date),
            format_time(&time),
        );
        if !is_slot_free(&slot, ctx).await {
            return Err(UseCaseError::SlotTaken);
        }

        let mut booking = Booking::new(
            self.requester_id.clone(),
            slot.provider_id,
            slot.date,
            slot.time,
            ctx.sys.get_timestamp_millis(),
        );
        booking.topic = self.topic.clone();
        booking.description = self.description.clone();
        booking.comment = self.comment.clone();

        // The store rejects the insert as well when another request took
        // the slot after it was checked
        match ctx.repos.bookings.insert(&booking).await {
            Ok(BookingInsertResult::Inserted) => Ok(booking),
            Ok(BookingInsertResult::SlotTaken) => Err(UseCaseError::SlotTaken),
            Err(e) => {
                error!("Unable to store booking: {:?}", e);
                Err(UseCaseError::StorageError)
            }
        }
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(NotifyProviderOfRequest)]
    }
}

/// Lets the provider know by email that a session was requested
pub struct NotifyProviderOfRequest;

#[async_trait::async_trait(?Send)]
impl Subscriber<CreateBookingUseCase> for NotifyProviderOfRequest {
    async fn notify(&self, booking: &Booking, ctx: &SlotkeeperContext) {
        if ctx.notifications.ensure_configured(Channel::Email).is_err() {
            return;
        }
        let email = match ctx.repos.persons.find(&booking.provider_id).await {
            Ok(Some(provider)) => match provider.email() {
                Some(email) => email.to_string(),
                None => return,
            },
            Ok(None) => return,
            Err(e) => {
                warn!("Unable to look up provider {}: {:?}", booking.provider_id, e);
                return;
            }
        };
        let body = format!(
            "New booking request for {} at {}.",
            booking.requested_date, booking.requested_time
        );
        if let Err(e) = ctx
            .notifications
            .send(Channel::Email, &email, &body)
            .await
        {
            error!(
                "Unable to notify provider of booking {}: {:?}",
                booking.id, e
            );
        }
    }
}
