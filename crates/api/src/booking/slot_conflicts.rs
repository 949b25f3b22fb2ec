use crate::shared::timeout::with_timeout;
use slotkeeper_domain::{occupied_times as occupied_times_of, Slot, ID};
use slotkeeper_infra::SlotkeeperContext;
use std::collections::BTreeSet;
use tracing::warn;

/// Whether no pending or approved `Booking` holds the `Slot`.
/// A failing booking store reports the `Slot` as taken.
pub async fn is_slot_free(slot: &Slot, ctx: &SlotkeeperContext) -> bool {
    let res = with_timeout(
        ctx.config.external_call_timeout_millis,
        ctx.repos
            .bookings
            .find_by_provider_and_date(&slot.provider_id, &slot.date),
    )
    .await;

    match res {
        Ok(bookings) => slot.is_free(&bookings),
        Err(e) => {
            warn!(
                "Unable to check slot {} {} of provider {}, treating it as taken: {:?}",
                slot.date, slot.time, slot.provider_id, e
            );
            false
        }
    }
}

/// The times of `date` held by a pending or approved `Booking` of the provider
pub async fn occupied_times(
    provider_id: &ID,
    date: &str,
    ctx: &SlotkeeperContext,
) -> anyhow::Result<BTreeSet<String>> {
    let bookings = with_timeout(
        ctx.config.external_call_timeout_millis,
        ctx.repos.bookings.find_by_provider_and_date(provider_id, date),
    )
    .await?;

    Ok(occupied_times_of(provider_id, date, &bookings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::UnreachableBookingRepo;
    use slotkeeper_domain::{Booking, BookingStatus};
    use std::sync::Arc;

    async fn insert_booking(
        ctx: &SlotkeeperContext,
        provider_id: &ID,
        time: &str,
        status: BookingStatus,
    ) -> Booking {
        let mut booking = Booking::new(
            ID::new(),
            provider_id.clone(),
            "2024-05-10".into(),
            time.into(),
            0,
        );
        booking.status = status;
        ctx.repos.bookings.insert(&booking).await.unwrap();
        booking
    }

    fn slot(provider_id: &ID, time: &str) -> Slot {
        Slot::new(provider_id.clone(), "2024-05-10".into(), time.into())
    }

    #[actix_web::main]
    #[test]
    async fn approved_booking_only_holds_its_exact_slot() {
        let ctx = SlotkeeperContext::create_inmemory();
        let provider_id = ID::new();
        insert_booking(&ctx, &provider_id, "10:00", BookingStatus::Approved).await;

        assert!(!is_slot_free(&slot(&provider_id, "10:00"), &ctx).await);
        assert!(is_slot_free(&slot(&provider_id, "10:30"), &ctx).await);
        assert!(is_slot_free(&slot(&ID::new(), "10:00"), &ctx).await);
        assert!(
            is_slot_free(
                &Slot::new(provider_id.clone(), "2024-05-11".into(), "10:00".into()),
                &ctx
            )
            .await
        );
    }

    #[actix_web::main]
    #[test]
    async fn rejected_booking_frees_its_slot() {
        let ctx = SlotkeeperContext::create_inmemory();
        let provider_id = ID::new();
        let mut booking =
            insert_booking(&ctx, &provider_id, "10:00", BookingStatus::Pending).await;
        assert!(!is_slot_free(&slot(&provider_id, "10:00"), &ctx).await);

        booking
            .respond(BookingStatus::Rejected, "Busy".into(), 10)
            .unwrap();
        assert!(ctx.repos.bookings.save_response(&booking).await.unwrap());

        assert!(is_slot_free(&slot(&provider_id, "10:00"), &ctx).await);
    }

    #[actix_web::main]
    #[test]
    async fn lists_occupied_times() {
        let ctx = SlotkeeperContext::create_inmemory();
        let provider_id = ID::new();
        insert_booking(&ctx, &provider_id, "10:00", BookingStatus::Approved).await;
        insert_booking(&ctx, &provider_id, "09:00", BookingStatus::Pending).await;
        insert_booking(&ctx, &provider_id, "11:00", BookingStatus::Rejected).await;

        let times = occupied_times(&provider_id, "2024-05-10", &ctx)
            .await
            .unwrap();
        assert_eq!(
            times.into_iter().collect::<Vec<_>>(),
            vec!["09:00".to_string(), "10:00".to_string()]
        );
    }

    #[actix_web::main]
    #[test]
    async fn unreachable_store_denies_slots() {
        let mut ctx = SlotkeeperContext::create_inmemory();
        ctx.repos.bookings = Arc::new(UnreachableBookingRepo {});
        let provider_id = ID::new();

        assert!(!is_slot_free(&slot(&provider_id, "10:00"), &ctx).await);
        assert!(occupied_times(&provider_id, "2024-05-10", &ctx)
            .await
            .is_err());
    }
}
