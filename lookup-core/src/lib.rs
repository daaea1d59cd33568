//! Core traits and plumbing for the lookup widget
//!
//! The widget follows a Redux/Elm-inspired shape: every host operation
//! becomes an action, a pure reducer updates state and returns effects, and
//! the host performs those effects (notify listeners, arm or cancel the
//! debounce timer).
//!
//! # Core Concepts
//!
//! - **Action**: Events that describe state changes
//! - **EffectStore**: State container whose reducer returns [`DispatchResult`]
//! - **Middleware**: Hooks around dispatch, e.g. [`LoggingMiddleware`]
//! - **TaskManager**: Keyed tokio tasks with debounce and cancellation
//! - **Component**: Pure UI elements that render from props
//! - **EffectRuntime**: Terminal event loop for hosting components
//!
//! # Async results
//!
//! Timer-driven work uses a two-phase action pattern: an intent action
//! (`SearchUpdate`) makes the reducer return a scheduling effect, and the
//! task sends a result action (`SearchDidComplete`) back when it fires. The
//! `Did*` naming makes result actions easy to spot in logs.

pub mod action;
pub mod bus;
pub mod component;
pub mod effect;
pub mod event;
pub mod runtime;
pub mod store;
#[cfg(feature = "tasks")]
pub mod tasks;
pub mod testing;

pub use action::{Action, ActionCategory, ActionSummary};
pub use component::Component;

pub use bus::{event_kind, spawn_event_poller};
pub use event::EventKind;

pub use store::{LoggingMiddleware, Middleware};

pub use effect::{DispatchResult, EffectReducer, EffectStore, EffectStoreWithMiddleware};

pub use runtime::{EffectContext, EffectRuntime, EffectStoreLike, EventOutcome, PollerConfig};

#[cfg(feature = "tasks")]
pub use tasks::{TaskKey, TaskManager};

// Re-export ratatui types for convenience
pub use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    Frame,
};

pub use testing::{char_key, key, type_text, RenderHarness};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::{Action, ActionCategory, ActionSummary};
    pub use crate::component::Component;
    pub use crate::effect::{DispatchResult, EffectReducer, EffectStore, EffectStoreWithMiddleware};
    pub use crate::event::EventKind;
    pub use crate::runtime::{EffectContext, EffectRuntime, EventOutcome};
    pub use crate::store::{LoggingMiddleware, Middleware};
    #[cfg(feature = "tasks")]
    pub use crate::tasks::{TaskKey, TaskManager};

    pub use ratatui::{
        layout::Rect,
        style::{Color, Modifier, Style},
        text::{Line, Span, Text},
        Frame,
    };
}
