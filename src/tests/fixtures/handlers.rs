use crate::modules::posts::core::events::PostEvent;
use crate::shared::infrastructure::event_bus::EventHandler;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Subscriber that fails the first event it sees and accepts every later one.
pub struct FailOnNextEvent {
    armed: AtomicBool,
}

impl FailOnNextEvent {
    pub fn armed() -> Self {
        Self {
            armed: AtomicBool::new(true),
        }
    }
}

#[async_trait]
impl<Tx: Send> EventHandler<PostEvent, Tx> for FailOnNextEvent {
    fn name(&self) -> &str {
        "fail_on_next_event"
    }

    async fn handle(&self, _event: &PostEvent, _tx: &mut Tx) -> anyhow::Result<()> {
        if self.armed.swap(false, Ordering::SeqCst) {
            anyhow::bail!("injected handler failure");
        }
        Ok(())
    }
}

/// Subscriber that takes `delay` to handle every event.
pub struct SlowHandler {
    delay: Duration,
}

impl SlowHandler {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl<Tx: Send> EventHandler<PostEvent, Tx> for SlowHandler {
    fn name(&self) -> &str {
        "slow_handler"
    }

    async fn handle(&self, _event: &PostEvent, _tx: &mut Tx) -> anyhow::Result<()> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}
