use std::time::Duration;

pub type ScheduledTask = Box<dyn FnOnce() + Send + 'static>;

/// Fire-and-forget delayed work used to sequence CSS transitions.
///
/// Tasks are never cancelled and overlapping schedules are not deduplicated.
pub trait Scheduler: Send + Sync {
    fn schedule(&self, delay: Duration, task: ScheduledTask);
}

/// Runs each task on the Tauri async runtime after a timer; no thread per task.
#[derive(Debug, Default, Clone, Copy)]
pub struct AsyncRuntimeScheduler;

impl Scheduler for AsyncRuntimeScheduler {
    fn schedule(&self, delay: Duration, task: ScheduledTask) {
        tauri::async_runtime::spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::mpsc, time::Instant};

    use super::*;

    #[test]
    fn async_runtime_scheduler_runs_task_after_delay() {
        let (sender, receiver) = mpsc::channel();
        let started = Instant::now();
        AsyncRuntimeScheduler.schedule(
            Duration::from_millis(20),
            Box::new(move || {
                let _ = sender.send(started.elapsed());
            }),
        );

        let elapsed = receiver
            .recv_timeout(Duration::from_secs(2))
            .expect("scheduled task should run");
        assert!(elapsed >= Duration::from_millis(20));
    }

    #[test]
    fn async_runtime_scheduler_runs_overlapping_tasks_in_delay_order() {
        let (sender, receiver) = mpsc::channel();
        for (delay_ms, label) in [(60, "late"), (10, "early")] {
            let sender = sender.clone();
            AsyncRuntimeScheduler.schedule(
                Duration::from_millis(delay_ms),
                Box::new(move || {
                    let _ = sender.send(label);
                }),
            );
        }

        let first = receiver.recv_timeout(Duration::from_secs(2)).expect("first task");
        let second = receiver.recv_timeout(Duration::from_secs(2)).expect("second task");
        assert_eq!((first, second), ("early", "late"));
    }
}
