//! Backoff schedule and polling loop for the read operation.

use std::future::Future;
use std::time::{Duration, Instant};

use voicelens_core::{Error, Result};

use crate::client::PollConfig;
use crate::read::ReadOperation;

/// Decides how long to sleep between status queries.
///
/// Delays double from the initial interval up to the configured cap;
/// once the total wait budget would be exceeded, `next_delay` returns
/// `None` and the caller must abandon the operation with a timeout
/// error.
#[derive(Debug)]
pub struct PollSchedule {
    deadline: Instant,
    interval: Duration,
    max_interval: Duration,
}

impl PollSchedule {
    /// Starts a schedule whose budget begins now.
    pub fn new(config: &PollConfig) -> Self {
        Self::starting_at(config, Instant::now())
    }

    /// Starts a schedule whose budget begins at the given instant.
    pub fn starting_at(config: &PollConfig, start: Instant) -> Self {
        Self {
            deadline: start + config.max_wait(),
            interval: config.initial_interval(),
            max_interval: config.max_interval(),
        }
    }

    /// Returns the next sleep duration, or `None` when the wait budget
    /// does not cover another full interval.
    pub fn next_delay(&mut self, now: Instant) -> Option<Duration> {
        if now + self.interval > self.deadline {
            return None;
        }

        let delay = self.interval;
        self.interval = (self.interval * 2).min(self.max_interval);
        Some(delay)
    }
}

/// Drives `fetch` until the operation reaches a terminal status.
///
/// The status is fetched at least once; a non-terminal snapshot is never
/// returned. When the schedule's wait budget runs out the operation is
/// abandoned with [`voicelens_core::ErrorKind::UpstreamTimedOut`].
pub async fn poll_operation<F, Fut>(
    config: &PollConfig,
    mut fetch: F,
) -> Result<ReadOperation>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<ReadOperation>>,
{
    let mut schedule = PollSchedule::new(config);
    let mut queries = 0u32;

    loop {
        let operation = fetch().await?;
        queries += 1;

        if operation.status.is_terminal() {
            return Ok(operation);
        }

        let Some(delay) = schedule.next_delay(Instant::now()) else {
            return Err(Error::upstream_timed_out().with_message(format!(
                "read operation still {:?} after {} status queries within {:?}",
                operation.status,
                queries,
                config.max_wait()
            )));
        };

        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::read::OperationStatus;

    use super::*;

    fn config(initial_ms: u64, max_ms: u64, wait_secs: u64) -> PollConfig {
        PollConfig {
            initial_interval_ms: initial_ms,
            max_interval_ms: max_ms,
            max_wait_secs: wait_secs,
        }
    }

    #[test]
    fn delays_double_up_to_the_cap() {
        let start = Instant::now();
        let mut schedule = PollSchedule::starting_at(&config(500, 4_000, 3_600), start);

        let delays: Vec<u64> = (0..6)
            .map(|_| schedule.next_delay(start).unwrap().as_millis() as u64)
            .collect();

        assert_eq!(delays, vec![500, 1_000, 2_000, 4_000, 4_000, 4_000]);
    }

    #[test]
    fn budget_exhaustion_stops_the_schedule() {
        let start = Instant::now();
        let mut schedule = PollSchedule::starting_at(&config(500, 4_000, 1), start);

        // 500ms fits into the 1s budget, the doubled 1s delay does not.
        assert!(schedule.next_delay(start).is_some());
        assert!(schedule.next_delay(start + Duration::from_millis(500)).is_none());
    }

    #[test]
    fn elapsed_time_counts_against_the_budget() {
        let start = Instant::now();
        let mut schedule = PollSchedule::starting_at(&config(500, 4_000, 10), start);

        assert!(schedule.next_delay(start + Duration::from_secs(11)).is_none());
    }

    fn snapshot(status: OperationStatus) -> ReadOperation {
        ReadOperation {
            status,
            analyze_result: None,
            error: None,
        }
    }

    #[tokio::test]
    async fn polling_stops_at_the_first_terminal_snapshot() {
        let calls = AtomicUsize::new(0);
        let statuses = [
            OperationStatus::NotStarted,
            OperationStatus::Running,
            OperationStatus::Succeeded,
        ];

        let operation = poll_operation(&config(1, 1, 60), || {
            let index = calls.fetch_add(1, Ordering::SeqCst);
            let status = statuses[index];
            async move { Ok(snapshot(status)) }
        })
        .await
        .unwrap();

        assert_eq!(operation.status, OperationStatus::Succeeded);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn an_already_terminal_operation_is_queried_exactly_once() {
        let calls = AtomicUsize::new(0);

        let operation = poll_operation(&config(1, 1, 60), || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok(snapshot(OperationStatus::Failed)) }
        })
        .await
        .unwrap();

        assert_eq!(operation.status, OperationStatus::Failed);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn a_never_finishing_operation_times_out() {
        let error = poll_operation(&config(1, 1, 0), || async {
            Ok(snapshot(OperationStatus::Running))
        })
        .await
        .unwrap_err();

        assert_eq!(error.kind(), voicelens_core::ErrorKind::UpstreamTimedOut);
    }
}
