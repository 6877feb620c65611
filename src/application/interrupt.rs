//! User interrupt shared between the session and the recorder

use tokio::sync::watch;

/// Raises the interrupt. Raising it more than once is harmless.
#[derive(Debug)]
pub struct InterruptTrigger {
    tx: watch::Sender<bool>,
}

impl InterruptTrigger {
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }
}

/// Read side of a one-shot stop request.
///
/// Once raised it stays raised, so a listener that starts late still sees it.
#[derive(Debug, Clone)]
pub struct Interrupt {
    rx: watch::Receiver<bool>,
}

impl Interrupt {
    /// Create a connected trigger and interrupt
    pub fn channel() -> (InterruptTrigger, Interrupt) {
        let (tx, rx) = watch::channel(false);
        (InterruptTrigger { tx }, Interrupt { rx })
    }

    /// An interrupt that is never raised
    pub fn never() -> Self {
        Self::channel().1
    }

    pub fn is_triggered(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolve once the interrupt is raised
    pub async fn triggered(&self) {
        let mut rx = self.rx.clone();
        if rx.wait_for(|raised| *raised).await.is_err() {
            // Trigger dropped without firing
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn trigger_wakes_waiter() {
        let (trigger, interrupt) = Interrupt::channel();
        assert!(!interrupt.is_triggered());

        let waiter = interrupt.clone();
        let handle = tokio::spawn(async move { waiter.triggered().await });
        trigger.trigger();

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .unwrap()
            .unwrap();
        assert!(interrupt.is_triggered());
    }

    #[tokio::test]
    async fn late_listener_sees_earlier_trigger() {
        let (trigger, interrupt) = Interrupt::channel();
        trigger.trigger();
        drop(trigger);

        tokio::time::timeout(Duration::from_millis(100), interrupt.triggered())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn never_stays_pending() {
        let interrupt = Interrupt::never();
        let waited = tokio::time::timeout(Duration::from_millis(50), interrupt.triggered()).await;
        assert!(waited.is_err());
    }
}
