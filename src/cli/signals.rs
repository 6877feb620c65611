//! SIGINT handling for a recording session

use tokio::signal::unix::{signal, SignalKind};
use tracing::debug;

use crate::application::Interrupt;

/// Start listening for SIGINT (Ctrl+C) and expose it as an [`Interrupt`].
///
/// The handler is installed before this returns, so from then on SIGINT no
/// longer terminates the process.
pub fn listen_for_interrupt() -> Result<Interrupt, std::io::Error> {
    let mut sigint = signal(SignalKind::interrupt())?;
    let (trigger, interrupt) = Interrupt::channel();

    tokio::spawn(async move {
        if sigint.recv().await.is_some() {
            debug!("received SIGINT");
            trigger.trigger();
        }
    });

    Ok(interrupt)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use nix::sys::signal::{raise, Signal};

    use super::*;

    #[tokio::test]
    async fn sigint_raises_interrupt() {
        let interrupt = listen_for_interrupt().unwrap();
        assert!(!interrupt.is_triggered());

        raise(Signal::SIGINT).unwrap();

        tokio::time::timeout(Duration::from_secs(5), interrupt.triggered())
            .await
            .expect("interrupt not raised");
    }
}
