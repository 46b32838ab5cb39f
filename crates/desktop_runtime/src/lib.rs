//! Desktop window manager: app registry, window state store, and the Leptos shell around it.
//!
//! All window mutation goes through [`reduce_desktop`]; [`WindowStore`] wraps it with
//! slice-scoped subscriptions and [`DesktopProvider`] bridges those into Leptos signals.

pub mod apps;
pub mod components;
pub mod host;
pub mod model;
pub mod persistence;
pub mod reducer;
pub mod runtime_context;
pub mod store;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopShell};
pub use host::DesktopHostContext;
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, DesktopError, RuntimeEffect};
pub use runtime_context::DesktopRuntimeContext;
pub use store::{StoreSlice, SubscriptionId, WindowStore};
