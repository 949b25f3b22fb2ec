use actix_web::rt::time::timeout;
use std::future::Future;
use std::time::Duration;

/// Awaits `fut` for at most `millis`. Running out of time is reported as
/// an error just like a failure of the call itself.
pub async fn with_timeout<T, F>(millis: u64, fut: F) -> anyhow::Result<T>
where
    F: Future<Output = anyhow::Result<T>>,
{
    match timeout(Duration::from_millis(millis), fut).await {
        Ok(res) => res,
        Err(_) => Err(anyhow::anyhow!("Call timed out after {} millis", millis)),
    }
}
