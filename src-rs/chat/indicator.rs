use std::io::Write;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

const DOT_INTERVAL: Duration = Duration::from_millis(500);

/// Prints a period to the terminal every half second while a turn is
/// waiting on the network. Owned by the turn that started it; the stop
/// signal travels over a oneshot channel rather than shared state.
pub struct BusyIndicator {
    stop: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl BusyIndicator {
    pub fn start() -> Self {
        Self::start_with(std::io::stdout())
    }

    /// Starts the dot printer against an arbitrary sink.
    pub fn start_with<W>(mut sink: W) -> Self
    where
        W: Write + Send + 'static,
    {
        let (stop, mut stopped) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(DOT_INTERVAL);
            loop {
                tokio::select! {
                    _ = &mut stopped => break,
                    _ = ticker.tick() => {
                        let _ = sink.write_all(b".");
                        let _ = sink.flush();
                    }
                }
            }
        });
        Self { stop, handle }
    }

    /// Signals the task and waits for it to exit, so no dot can land
    /// after the caller starts printing replies.
    pub async fn stop(self) {
        let _ = self.stop.send(());
        let _ = self.handle.await;
    }
}
