//! Middleware hooks around dispatch

use crate::action::{Action, ActionSummary};

/// Observes every action a store dispatches
///
/// `before` runs ahead of the reducer and `after` once it has returned.
pub trait Middleware<A: Action> {
    fn before(&mut self, action: &A);

    fn after(&mut self, action: &A, state_changed: bool);
}

/// Traces each dispatch: the summary at `trace`, the outcome at `debug`
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl<A: ActionSummary> Middleware<A> for LoggingMiddleware {
    fn before(&mut self, action: &A) {
        tracing::trace!(action = %action.name(), summary = %action.summary(), "dispatching");
    }

    fn after(&mut self, action: &A, state_changed: bool) {
        tracing::debug!(action = %action.name(), state_changed, "dispatched");
    }
}
