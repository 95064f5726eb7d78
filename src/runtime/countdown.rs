use std::sync::{Arc, Weak};
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::AssessmentRuntime;

pub type SharedRuntime = Arc<Mutex<AssessmentRuntime>>;

/// Ticks `runtime` once per second. The task ends when the clock reaches
/// zero, the attempt is submitted or the last handle to the runtime is
/// dropped.
pub fn spawn_countdown(runtime: &SharedRuntime) -> JoinHandle<()> {
    let weak: Weak<Mutex<AssessmentRuntime>> = Arc::downgrade(runtime);
    tokio::spawn(async move {
        let period = Duration::from_secs(1);
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let Some(runtime) = weak.upgrade() else {
                break;
            };
            let mut runtime = runtime.lock().await;
            if runtime.is_submitted() {
                break;
            }
            runtime.tick();
            if runtime.is_expired() {
                tracing::info!(assessment_id = runtime.assessment_id(), "assessment time is up");
                break;
            }
        }
    })
}
