use crate::reminder::send_booking_reminders::SendBookingRemindersUseCase;
use crate::shared::usecase::execute;
use actix_web::rt::time::{interval, sleep_until, Instant};
use slotkeeper_domain::{Channel, ScheduleWindow};
use slotkeeper_infra::SlotkeeperContext;
use std::time::Duration;
use tracing::{error, info};

pub fn get_start_delay(now_ts: usize, secs_before_min: usize) -> usize {
    let secs_to_next_minute = 60 - (now_ts / 1000) % 60;
    if secs_to_next_minute > secs_before_min {
        secs_to_next_minute - secs_before_min
    } else {
        secs_to_next_minute + (60 - secs_before_min)
    }
}

/// Runs a reminder tick for the one hour ahead window at the start of every
/// minute. Every tick is spawned on its own so a slow tick never delays the
/// next one, which means ticks may overlap.
pub fn start_send_reminders_job(ctx: SlotkeeperContext) {
    if let Err(e) = ctx.notifications.ensure_configured(Channel::WhatsApp) {
        error!(
            "The reminder job is started but every tick will fail until this is fixed: {}",
            e
        );
    }

    actix_web::rt::spawn(async move {
        let now = ctx.sys.get_timestamp_millis();
        let secs_to_next_run = get_start_delay(now as usize, 0);
        let start = Instant::now() + Duration::from_secs(secs_to_next_run as u64);
        info!("Starting reminder job in {} secs", secs_to_next_run);

        sleep_until(start).await;
        let mut minutely_interval = interval(Duration::from_secs(60));
        loop {
            minutely_interval.tick().await;
            let context = ctx.clone();
            actix_web::rt::spawn(async move {
                let usecase = SendBookingRemindersUseCase {
                    window: ScheduleWindow::one_hour_ahead(),
                };
                // Failures are logged by the usecase runner
                let _ = execute(usecase, &context).await;
            });
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_delay_works() {
        assert_eq!(get_start_delay(50 * 1000, 5), 5);
        assert_eq!(get_start_delay(50 * 1000, 10), 60);
        assert_eq!(get_start_delay(50 * 1000, 15), 55);
        assert_eq!(get_start_delay(60 * 1000, 60), 60);
        assert_eq!(get_start_delay(60 * 1000, 10), 50);
        assert_eq!(get_start_delay(59 * 1000, 0), 1);
        assert_eq!(get_start_delay(59 * 1000, 1), 60);
    }
}
