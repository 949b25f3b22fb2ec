use crate::error::SlotkeeperError;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use slotkeeper_api_structs::respond_to_booking::{APIResponse, PathParams, RequestBody};
use slotkeeper_domain::{Booking, BookingStatus, BookingTransitionError, Channel, ID};
use slotkeeper_infra::SlotkeeperContext;
use tracing::{error, warn};

pub async fn respond_to_booking_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<SlotkeeperContext>,
) -> Result<HttpResponse, SlotkeeperError> {
    let body = body.into_inner();
    let usecase = RespondToBookingUseCase {
        booking_id: path_params.into_inner().booking_id,
        status: body.status,
        response: body.response,
    };

    execute(usecase, &ctx)
        .await
        .map(|booking| HttpResponse::Ok().json(APIResponse::new(booking)))
        .map_err(SlotkeeperError::from)
}

/// The single provider action on a pending `Booking`
#[derive(Debug)]
pub struct RespondToBookingUseCase {
    pub booking_id: ID,
    pub status: BookingStatus,
    pub response: String,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    InvalidStatus,
    AlreadyResponded,
    StorageError,
}

impl From<UseCaseError> for SlotkeeperError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The booking with id: {}, was not found.", id))
            }
            UseCaseError::InvalidStatus => Self::BadClientData(
                "A booking can only be responded to with approved or rejected".into(),
            ),
            UseCaseError::AlreadyResponded => {
                Self::Conflict("The booking has already been responded to".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for RespondToBookingUseCase {
    type Response = Booking;

    type Errors = UseCaseError;

    const NAME: &'static str = "RespondToBooking";

    async fn execute(&mut self, ctx: &SlotkeeperContext) -> Result<Self::Response, Self::Errors> {
        let mut booking = match ctx.repos.bookings.find(&self.booking_id).await {
            Ok(Some(booking)) => booking,
            Ok(None) => return Err(UseCaseError::NotFound(self.booking_id.clone())),
            Err(e) => {
                error!("Unable to read booking: {:?}", e);
                return Err(UseCaseError::StorageError);
            }
        };

        booking
            .respond(
                self.status,
                self.response.clone(),
                ctx.sys.get_timestamp_millis(),
            )
            .map_err(|e| match e {
                BookingTransitionError::AlreadyResponded(_) => UseCaseError::AlreadyResponded,
                BookingTransitionError::InvalidTarget => UseCaseError::InvalidStatus,
            })?;

        // Only applied by the store while the booking is still pending
        match ctx.repos.bookings.save_response(&booking).await {
            Ok(true) => Ok(booking),
            Ok(false) => Err(UseCaseError::AlreadyResponded),
            Err(e) => {
                error!("Unable to store booking response: {:?}", e);
                Err(UseCaseError::StorageError)
            }
        }
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(NotifyRequesterOfResponse)]
    }
}

pub struct NotifyRequesterOfResponse;

#[async_trait::async_trait(?Send)]
impl Subscriber<RespondToBookingUseCase> for NotifyRequesterOfResponse {
    async fn notify(&self, booking: &Booking, ctx: &SlotkeeperContext) {
        if let Err(e) = ctx.notifications.ensure_configured(Channel::Email) {
            warn!("Not notifying requester of booking {}: {}", booking.id, e);
            return;
        }
        let email = match ctx.repos.persons.find(&booking.requester_id).await {
            Ok(Some(requester)) => match requester.email() {
                Some(email) => email.to_string(),
                None => return,
            },
            Ok(None) => return,
            Err(e) => {
                warn!("Unable to look up requester {}: {:?}", booking.requester_id, e);
                return;
            }
        };

        let mut body = format!(
            "Your booking on {} at {} was {}.",
            booking.requested_date, booking.requested_time, booking.status
        );
        if let Some(response) = booking.response.as_ref().filter(|r| !r.trim().is_empty()) {
            body.push_str(&format!(" Message from the provider: {}", response.trim()));
        }
        if let Err(e) = ctx.notifications.send(Channel::Email, &email, &body).await {
            error!(
                "Unable to notify requester of booking {}: {:?}",
                booking.id, e
            );
        }
    }
}
