use std::future::Future;
use std::time::{Duration, Instant};

/// Invoke `work` back-to-back until `duration` of wall-clock time has
/// elapsed, measured from just before the first invocation.
///
/// There is no delay between invocations and no overlap: each call is
/// awaited before the elapsed budget is re-checked, so the final call may
/// overrun the budget by up to its own latency. An error from `work` aborts
/// the remaining repetitions immediately and propagates unchanged.
///
/// Returns the number of completed invocations. The count is not
/// deterministic; it depends on the latency of each call.
pub async fn repeat_for_duration<F, Fut, E>(duration: Duration, mut work: F) -> Result<u64, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    let start = Instant::now();
    let mut invocations: u64 = 0;
    while start.elapsed() < duration {
        work().await?;
        invocations += 1;
    }
    Ok(invocations)
}
