use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::chat::indicator::BusyIndicator;

/// Write sink shared with the indicator task so tests can watch the dots.
#[derive(Clone, Default)]
struct SharedSink(Arc<Mutex<Vec<u8>>>);

impl SharedSink {
    fn written(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

impl Write for SharedSink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn no_dot_lands_after_stop_returns() {
        let sink = SharedSink::default();
        let indicator = BusyIndicator::start_with(sink.clone());

        tokio::time::sleep(Duration::from_millis(1600)).await;
        indicator.stop().await;
        let dots_at_stop = sink.written();
        assert!(dots_at_stop >= 1);

        // Once stop has returned the task is joined; the next reply line
        // can never be interleaved with a late dot.
        tokio::time::sleep(Duration::from_millis(1600)).await;
        assert_eq!(sink.written(), dots_at_stop);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_waits_for_the_task_to_exit() {
        let indicator = BusyIndicator::start_with(SharedSink::default());
        tokio::time::timeout(Duration::from_secs(5), indicator.stop())
            .await
            .expect("stop should return once the printer task has exited");
    }

    #[tokio::test(start_paused = true)]
    async fn indicator_keeps_printing_until_stopped() {
        let sink = SharedSink::default();
        let indicator = BusyIndicator::start_with(sink.clone());

        tokio::time::sleep(Duration::from_millis(600)).await;
        let early = sink.written();
        tokio::time::sleep(Duration::from_millis(1000)).await;
        let later = sink.written();
        assert!(later > early);

        indicator.stop().await;
    }
}
