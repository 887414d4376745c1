//! Interrupt listener

use std::future::Future;

/// Log each interrupt produced by `next` until it fails.
///
/// Interrupts are only logged. The running operation is left to finish and
/// nothing already sent to the provider is rolled back.
pub async fn log_interrupts<F, Fut>(mut next: F)
where
    F: FnMut() -> Fut,
    Fut: Future<Output = std::io::Result<()>>,
{
    loop {
        if let Err(e) = next().await {
            tracing::warn!("Cannot listen for interrupts: {e}");
            return;
        }
        tracing::info!("Interrupt received, finishing current operation");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use tokio::time::Instant;

    use super::*;
    use crate::challenge::ChallengeRecord;
    use crate::config::ErrorPolicy;
    use crate::domain::DomainSplit;
    use crate::service::{ChallengeService, PROPAGATION_DELAY};
    use crate::test_utils::{MockDnsProvider, MockOp};

    /// Delivers an interrupt every 10 s, `limit` times, then fails.
    fn every_ten_seconds(
        fired: Arc<AtomicUsize>,
        limit: usize,
    ) -> impl FnMut() -> std::pin::Pin<Box<dyn Future<Output = std::io::Result<()>> + Send>>
    + Send
    + 'static {
        move || {
            let fired = fired.clone();
            Box::pin(async move {
                if fired.load(Ordering::SeqCst) >= limit {
                    return Err(std::io::Error::other("signal stream closed"));
                }
                tokio::time::sleep(Duration::from_secs(10)).await;
                fired.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
        }
    }

    #[tokio::test(start_paused = true)]
    async fn interrupts_do_not_cancel_running_add() {
        let mock = Arc::new(MockDnsProvider::new());
        mock.insert_txt("example.com", "_acme-challenge", "stale")
            .await;
        let service = ChallengeService::new(mock.clone(), ErrorPolicy::Continue);
        let record = ChallengeRecord::new(
            "_acme-challenge.example.com".to_string(),
            DomainSplit {
                root: "example.com".to_string(),
                host: "_acme-challenge".to_string(),
            },
            "abc123".to_string(),
        );

        let fired = Arc::new(AtomicUsize::new(0));
        let listener = tokio::spawn(log_interrupts(every_ten_seconds(fired.clone(), 2)));

        let start = Instant::now();
        service.add_record(&record).await.unwrap();

        // Both interrupts landed inside the propagation wait
        assert_eq!(fired.load(Ordering::SeqCst), 2);
        assert!(start.elapsed() >= PROPAGATION_DELAY);

        let records = mock.records().await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].value, "abc123");
        assert_eq!(mock.count(MockOp::Delete).await, 1);
        assert_eq!(mock.count(MockOp::Create).await, 1);

        listener.await.unwrap();
    }

    #[tokio::test]
    async fn listener_stops_when_source_fails() {
        let fired = Arc::new(AtomicUsize::new(0));
        log_interrupts(every_ten_seconds(fired.clone(), 0)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
