use std::time::Duration;

/// Suspends the current task for `duration`
#[cfg(feature = "web")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::TimeoutFuture::new(duration.as_millis() as u32).await;
}

/// Without a browser there is no timer to wait on, so the task stays parked
#[cfg(not(feature = "web"))]
pub async fn sleep(_duration: Duration) {
    std::future::pending::<()>().await
}
