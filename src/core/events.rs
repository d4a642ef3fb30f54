//! Per-trigger handler registry.
//!
//! Front ends translate their raw input (DOM events, terminal keys) into
//! opaque [`Trigger`]s and hand them to [`Subscriptions::dispatch`].  Each
//! handler runs to completion before the next one starts; dispatch order is
//! registration order.

use std::collections::HashMap;

/// Payload-free signals a page behaviour can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// The page finished loading.
    Load,
    /// The viewport changed size.
    Resize,
    /// The slider's "previous" control was activated.
    SliderPrevious,
    /// The slider's "next" control was activated.
    SliderNext,
    /// The navigation toggle was activated.
    NavToggle,
    /// A link inside the navigation menu was activated.
    NavLink,
    /// The theme toggle was activated.
    ThemeToggle,
}

impl Trigger {
    pub const ALL: &[Trigger] = &[
        Trigger::Load,
        Trigger::Resize,
        Trigger::SliderPrevious,
        Trigger::SliderNext,
        Trigger::NavToggle,
        Trigger::NavLink,
        Trigger::ThemeToggle,
    ];
}

/// A handler over the shared page context `C`.
pub type Handler<C> = fn(&mut C);

/// Ordered handler lists keyed by trigger.
pub struct Subscriptions<C> {
    handlers: HashMap<Trigger, Vec<Handler<C>>>,
}

impl<C> Default for Subscriptions<C> {
    fn default() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }
}

impl<C> std::fmt::Debug for Subscriptions<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut counts: Vec<(Trigger, usize)> =
            self.handlers.iter().map(|(t, h)| (*t, h.len())).collect();
        counts.sort_by_key(|(t, _)| Trigger::ALL.iter().position(|x| x == t));
        f.debug_struct("Subscriptions").field("handlers", &counts).finish()
    }
}

impl<C> Subscriptions<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `handler` to the list for `trigger`.
    pub fn on(&mut self, trigger: Trigger, handler: Handler<C>) {
        self.handlers.entry(trigger).or_default().push(handler);
    }

    /// Run every handler registered for `trigger`.  Returns how many ran;
    /// a trigger nobody listens to is not an error.
    pub fn dispatch(&self, trigger: Trigger, ctx: &mut C) -> usize {
        let Some(handlers) = self.handlers.get(&trigger) else {
            return 0;
        };
        for handler in handlers {
            handler(ctx);
        }
        handlers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Log(Vec<&'static str>);

    #[test]
    fn handlers_run_in_registration_order() {
        let mut subs: Subscriptions<Log> = Subscriptions::new();
        subs.on(Trigger::Resize, |log| log.0.push("first"));
        subs.on(Trigger::Resize, |log| log.0.push("second"));

        let mut log = Log::default();
        assert_eq!(subs.dispatch(Trigger::Resize, &mut log), 2);
        assert_eq!(log.0, vec!["first", "second"]);
    }

    #[test]
    fn unsubscribed_trigger_is_a_no_op() {
        let subs: Subscriptions<Log> = Subscriptions::new();
        let mut log = Log::default();
        assert_eq!(subs.dispatch(Trigger::ThemeToggle, &mut log), 0);
        assert!(log.0.is_empty());
    }

    #[test]
    fn handlers_only_fire_for_their_trigger() {
        let mut subs: Subscriptions<Log> = Subscriptions::new();
        subs.on(Trigger::SliderNext, |log| log.0.push("next"));
        subs.on(Trigger::SliderPrevious, |log| log.0.push("prev"));

        let mut log = Log::default();
        subs.dispatch(Trigger::SliderNext, &mut log);
        assert_eq!(log.0, vec!["next"]);
        assert_eq!(subs.dispatch(Trigger::Load, &mut log), 0);
        assert_eq!(log.0, vec!["next"]);
    }
}
