use std::time::Duration;

/// How long the "sending" state is shown after a submit.
pub const SEND_DELAY: Duration = Duration::from_millis(2000);

/// Fire-and-forget one-shot scheduling. No handle is returned, so scheduled
/// callbacks cannot be cancelled.
pub trait Timer {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce() + 'static>);
}

/// The "sending" flag shared between the form and its pending reset.
pub trait SendingFlag: Clone + 'static {
    fn get(&self) -> bool;
    fn set(&self, sending: bool);
}

/// What the visitor typed. It is read at submit time and then dropped.
#[derive(Debug, Clone, Default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Pretends to send `message`.
///
/// Returns `false` without side effects while a previous send is still
/// showing. Otherwise raises the flag and schedules exactly one reset after
/// [`SEND_DELAY`]. Nothing is transmitted.
pub fn simulate_send<F, T>(flag: &F, timer: &T, message: ContactMessage) -> bool
where
    F: SendingFlag,
    T: Timer,
{
    if flag.get() {
        log::debug!("contact form already sending, ignoring submit");
        return false;
    }
    drop(message);
    flag.set(true);
    log::info!("simulating contact form send");

    let flag = flag.clone();
    timer.schedule(
        SEND_DELAY,
        Box::new(move || {
            flag.set(false);
        }),
    );
    true
}
