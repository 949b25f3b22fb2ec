use crate::error::SlotkeeperError;
use crate::shared::{
    timeout::with_timeout,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use futures::future::join_all;
use slotkeeper_api_structs::dtos::SentReminderDTO;
use slotkeeper_api_structs::send_test_reminders::APIResponse;
use slotkeeper_domain::{
    format_reminder_message, Booking, BookingStatus, Channel, LedgerCreateResult, ParticipantRole,
    Person, ReminderLedgerEntry, ScheduleWindow, SentTo, ID,
};
use slotkeeper_infra::{GatewayConfigError, SlotkeeperContext};
use tracing::{error, info, warn};

/// Runs one tick with the short test window
pub async fn send_test_reminders_controller(
    ctx: web::Data<SlotkeeperContext>,
) -> Result<HttpResponse, SlotkeeperError> {
    let usecase = SendBookingRemindersUseCase {
        window: ScheduleWindow::test(),
    };

    execute(usecase, &ctx)
        .await
        .map(|entries| {
            let sent = entries
                .into_iter()
                .map(|e| SentReminderDTO::new(e.booking_id, e.sent_to))
                .collect();
            HttpResponse::Ok().json(APIResponse::new(sent))
        })
        .map_err(SlotkeeperError::from)
}

/// One tick of the reminder scheduler.
///
/// Every approved `Booking` starting within `window` gets one WhatsApp reminder
/// per participant, unless the reminder ledger already holds an entry for the
/// (`Booking`, window tag) pair. The ledger entry is created after dispatching
/// and its atomic create is the only guard against concurrent ticks. Two ticks
/// passing the ledger check at the same time will both dispatch, and only one
/// of them records the entry.
#[derive(Debug)]
pub struct SendBookingRemindersUseCase {
    pub window: ScheduleWindow,
}

#[derive(Debug)]
pub enum UseCaseError {
    GatewayNotConfigured(GatewayConfigError),
    StorageError,
}

impl From<UseCaseError> for SlotkeeperError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::GatewayNotConfigured(e) => Self::Misconfigured(e.to_string()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendBookingRemindersUseCase {
    /// The ledger entries created by this tick
    type Response = Vec<ReminderLedgerEntry>;

    type Errors = UseCaseError;

    const NAME: &'static str = "SendBookingReminders";

    async fn execute(&mut self, ctx: &SlotkeeperContext) -> Result<Self::Response, Self::Errors> {
        if let Err(e) = ctx.notifications.ensure_configured(Channel::WhatsApp) {
            error!(
                "Aborting reminder tick for window {}: {}",
                self.window.tag, e
            );
            return Err(UseCaseError::GatewayNotConfigured(e));
        }

        let timeout_millis = ctx.config.external_call_timeout_millis;
        let now = ctx.sys.get_local_datetime();

        let approved = with_timeout(
            timeout_millis,
            ctx.repos.bookings.find_by_status(BookingStatus::Approved),
        )
        .await
        .map_err(|e| {
            error!("Unable to fetch approved bookings: {:?}", e);
            UseCaseError::StorageError
        })?;

        let window = &self.window;
        let candidates = approved
            .into_iter()
            .filter(|booking| match booking.time_until_start(&now) {
                Some(lead_time) => window.contains(lead_time),
                None => {
                    warn!(
                        "Skipping booking {} with unparsable start: {} {}",
                        booking.id, booking.requested_date, booking.requested_time
                    );
                    false
                }
            })
            .collect::<Vec<_>>();

        let created = join_all(
            candidates
                .iter()
                .map(|booking| remind_participants(booking, window, ctx)),
        )
        .await
        .into_iter()
        .flatten()
        .collect::<Vec<_>>();

        info!(
            "Reminder tick for window {} done. Candidates: {}, reminded: {}",
            window.tag,
            candidates.len(),
            created.len()
        );

        Ok(created)
    }
}

/// Returns the ledger entry when this call was the one creating it
async fn remind_participants(
    booking: &Booking,
    window: &ScheduleWindow,
    ctx: &SlotkeeperContext,
) -> Option<ReminderLedgerEntry> {
    let timeout_millis = ctx.config.external_call_timeout_millis;

    match with_timeout(
        timeout_millis,
        ctx.repos.reminder_ledger.exists(&booking.id, &window.tag),
    )
    .await
    {
        Ok(true) => return None,
        Ok(false) => (),
        Err(e) => {
            warn!(
                "Unable to read the reminder ledger for booking {}: {:?}",
                booking.id, e
            );
            return None;
        }
    }

    let requester = find_contact(&booking.requester_id, ctx).await;
    let provider = find_contact(&booking.provider_id, ctx).await;

    let mut sent_to = SentTo::default();
    let recipients = [
        (ParticipantRole::Requester, &requester, &provider),
        (ParticipantRole::Provider, &provider, &requester),
    ];
    for &(role, recipient, counterpart) in recipients.iter() {
        let phone = match recipient.as_ref().and_then(|p| p.phone()) {
            Some(phone) => phone,
            None => continue,
        };
        let body = format_reminder_message(booking, role, counterpart.as_ref());
        let res = with_timeout(timeout_millis, async {
            ctx.notifications
                .send(Channel::WhatsApp, phone, &body)
                .await
                .map_err(anyhow::Error::from)
        })
        .await;
        match res {
            Ok(()) => sent_to.mark(role),
            Err(e) => error!(
                "Unable to send reminder for booking {} to the {:?}: {:?}",
                booking.id, role, e
            ),
        }
    }

    let entry = ReminderLedgerEntry::new(
        booking.id.clone(),
        window.tag.clone(),
        sent_to,
        ctx.sys.get_timestamp_millis(),
    );
    match with_timeout(timeout_millis, ctx.repos.reminder_ledger.create(&entry)).await {
        Ok(LedgerCreateResult::Created) => Some(entry),
        Ok(LedgerCreateResult::Conflict) => {
            info!(
                "Reminder for booking {} in window {} was recorded by another tick",
                booking.id, window.tag
            );
            None
        }
        Err(e) => {
            error!(
                "Unable to record reminder for booking {} in window {}: {:?}",
                booking.id, window.tag, e
            );
            None
        }
    }
}

/// A failing or slow lookup is treated as a missing contact
async fn find_contact(person_id: &ID, ctx: &SlotkeeperContext) -> Option<Person> {
    match with_timeout(
        ctx.config.external_call_timeout_millis,
        ctx.repos.persons.find(person_id),
    )
    .await
    {
        Ok(person) => person,
        Err(e) => {
            warn!("Unable to look up contact {}: {:?}", person_id, e);
            None
        }
    }
}
