//! Terminal event abstraction.
//!
//! Wraps crossterm events into the page's own vocabulary and runs a
//! background task that forwards them over a channel so the main loop stays
//! non-blocking.

use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind, MouseEvent};
use tokio::sync::mpsc;

/// High-level events consumed by the application.
#[derive(Debug)]
pub enum AppEvent {
    /// Sent once, before anything else: the page has finished loading.
    Load,
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// The terminal lost focus; the pointer has left the page.
    PointerLeft,
    Tick,
}

/// Translate a raw crossterm event.  Key releases and repeats are dropped
/// so that one press moves the slider exactly once.
fn translate(ev: CtEvent) -> Option<AppEvent> {
    match ev {
        CtEvent::Key(k) if k.kind == KeyEventKind::Press => Some(AppEvent::Key(k)),
        CtEvent::Mouse(m) => Some(AppEvent::Mouse(m)),
        CtEvent::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        CtEvent::FocusLost => Some(AppEvent::PointerLeft),
        _ => None,
    }
}

/// Consecutive poll failures tolerated before the reader gives up.
const MAX_POLL_FAILURES: u32 = 5;

/// Delay policy for a failing `event::poll`: wait a little longer after each
/// consecutive failure, and stop once they keep coming.
#[derive(Debug)]
struct PollBackoff {
    base: Duration,
    failures: u32,
}

impl PollBackoff {
    fn new(base: Duration) -> Self {
        Self { base, failures: 0 }
    }

    /// Record a failure.  Returns how long to wait before polling again, or
    /// `None` when the reader should stop.
    fn failed(&mut self) -> Option<Duration> {
        self.failures += 1;
        (self.failures < MAX_POLL_FAILURES).then(|| self.base * 2u32.pow(self.failures))
    }

    fn succeeded(&mut self) {
        self.failures = 0;
    }
}

/// Spawns a background task that polls the terminal for events and sends them
/// through the returned channel.
pub fn spawn_event_reader(tick_rate: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        if tx.send(AppEvent::Load).is_err() {
            return;
        }
        let mut backoff = PollBackoff::new(tick_rate);
        loop {
            let has_event = match event::poll(tick_rate) {
                Ok(ready) => {
                    backoff.succeeded();
                    ready
                }
                Err(err) => match backoff.failed() {
                    Some(wait) => {
                        tracing::warn!(%err, ?wait, "terminal poll failed");
                        tokio::time::sleep(wait).await;
                        continue;
                    }
                    None => {
                        tracing::error!(%err, "terminal poll keeps failing; no more input");
                        break;
                    }
                },
            };
            let next = if has_event {
                match event::read() {
                    Ok(ev) => match translate(ev) {
                        Some(app_event) => app_event,
                        None => continue,
                    },
                    Err(err) => {
                        tracing::warn!(%err, "terminal read failed");
                        continue;
                    }
                }
            } else {
                AppEvent::Tick
            };
            if tx.send(next).is_err() {
                break; // receiver dropped
            }
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn key(kind: KeyEventKind) -> CtEvent {
        CtEvent::Key(KeyEvent {
            code: KeyCode::Right,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn only_key_presses_are_forwarded() {
        assert!(matches!(translate(key(KeyEventKind::Press)), Some(AppEvent::Key(_))));
        assert!(translate(key(KeyEventKind::Release)).is_none());
        assert!(translate(key(KeyEventKind::Repeat)).is_none());
    }

    #[test]
    fn focus_loss_means_the_pointer_left() {
        assert!(matches!(translate(CtEvent::FocusLost), Some(AppEvent::PointerLeft)));
        assert!(translate(CtEvent::FocusGained).is_none());
    }

    #[test]
    fn poll_failures_back_off_then_give_up() {
        let mut backoff = PollBackoff::new(Duration::from_millis(50));
        assert_eq!(backoff.failed(), Some(Duration::from_millis(100)));
        assert_eq!(backoff.failed(), Some(Duration::from_millis(200)));
        backoff.succeeded();
        assert_eq!(backoff.failed(), Some(Duration::from_millis(100)));

        let mut backoff = PollBackoff::new(Duration::from_millis(50));
        let waits: Vec<_> = std::iter::from_fn(|| backoff.failed()).collect();
        assert_eq!(waits.len(), MAX_POLL_FAILURES as usize - 1);
        assert!(waits.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(backoff.failed(), None);
    }

    #[test]
    fn resize_carries_the_new_size() {
        assert!(matches!(
            translate(CtEvent::Resize(100, 30)),
            Some(AppEvent::Resize(100, 30))
        ));
    }
}
