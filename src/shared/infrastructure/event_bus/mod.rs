// In-process, synchronous publish/subscribe over tagged domain events.
//
// Purpose
// - Deliver an event to every handler subscribed to its kind, on the publisher's task.
//
// Responsibilities
// - Run handlers in subscription order and stop at the first failure.
// - Hand every handler the publisher's open transaction so its writes join the same unit of work.
//
// Boundaries
// - No queue, no persistence, no retry. An event that is not delivered is gone.

use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;
use thiserror::Error;

/// An event that can be routed by its kind tag.
pub trait DomainEvent: Send + Sync {
    type Kind: Copy + Eq + Debug + Send + Sync + 'static;

    fn kind(&self) -> Self::Kind;
}

#[async_trait]
pub trait EventHandler<E, Tx>: Send + Sync
where
    E: DomainEvent,
    Tx: Send,
{
    fn name(&self) -> &str;

    async fn handle(&self, event: &E, tx: &mut Tx) -> anyhow::Result<()>;
}

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("handler {handler} failed on {kind} event: {source}")]
    HandlerFailed {
        handler: String,
        kind: String,
        #[source]
        source: anyhow::Error,
    },
}

struct Subscription<E: DomainEvent, Tx: Send> {
    kind: E::Kind,
    handler: Arc<dyn EventHandler<E, Tx>>,
}

pub struct EventBus<E: DomainEvent, Tx: Send> {
    subscriptions: Vec<Subscription<E, Tx>>,
}

impl<E: DomainEvent, Tx: Send> Default for EventBus<E, Tx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: DomainEvent, Tx: Send> EventBus<E, Tx> {
    pub fn new() -> Self {
        Self {
            subscriptions: Vec::new(),
        }
    }

    /// Registering the same handler twice for the same kind is a no-op.
    pub fn subscribe(&mut self, kind: E::Kind, handler: Arc<dyn EventHandler<E, Tx>>) {
        let already_subscribed = self
            .subscriptions
            .iter()
            .any(|s| s.kind == kind && Arc::ptr_eq(&s.handler, &handler));
        if already_subscribed {
            return;
        }
        tracing::debug!(handler = handler.name(), ?kind, "subscribed event handler");
        self.subscriptions.push(Subscription { kind, handler });
    }

    pub fn subscriber_count(&self, kind: E::Kind) -> usize {
        self.subscriptions.iter().filter(|s| s.kind == kind).count()
    }

    pub async fn publish(&self, event: &E, tx: &mut Tx) -> Result<(), PublishError> {
        let kind = event.kind();
        for subscription in self.subscriptions.iter().filter(|s| s.kind == kind) {
            let handler = &subscription.handler;
            if let Err(source) = handler.handle(event, tx).await {
                tracing::error!(handler = handler.name(), ?kind, error = %source, "event handler failed");
                return Err(PublishError::HandlerFailed {
                    handler: handler.name().to_string(),
                    kind: format!("{kind:?}"),
                    source,
                });
            }
        }
        Ok(())
    }
}
