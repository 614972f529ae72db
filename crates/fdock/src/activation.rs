#![forbid(unsafe_code)]

//! Item activation: the dock's only business-logic side effect.
//!
//! An interactive item with a callback has it invoked; otherwise its `href`
//! is handed to the host's [`Navigator`]. Everything else is reported as
//! [`Activation::Ignored`] with a reason, never as an error.

use crate::item::{DockItem, ItemId};

/// Host navigation hook.
pub trait Navigator {
    fn navigate(&mut self, href: &str);
}

impl<F> Navigator for F
where
    F: FnMut(&str),
{
    fn navigate(&mut self, href: &str) {
        self(href);
    }
}

/// A navigator that drops every request. For hosts without routing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNavigation;

impl Navigator for NoNavigation {
    fn navigate(&mut self, _href: &str) {}
}

/// Outcome of an activation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// The item's callback ran.
    Invoked(ItemId),
    /// The item's `href` was passed to the navigator.
    Navigated { id: ItemId, href: String },
    Ignored(IgnoreReason),
}

impl Activation {
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored(_))
    }
}

/// Why an activation did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    UnknownItem,
    Separator,
    /// Interactive item with neither callback nor `href`.
    NoAction,
    /// A click landed on no item.
    NoTarget,
    /// The dock is hidden.
    Hidden,
}

/// Activate `item`. Callback wins over `href`.
pub fn activate<N>(item: &DockItem, navigator: &mut N) -> Activation
where
    N: Navigator + ?Sized,
{
    if item.is_separator() {
        return Activation::Ignored(IgnoreReason::Separator);
    }
    if let Some(callback) = item.callback() {
        callback.call(item.id());
        log_activation(item.id(), "callback");
        return Activation::Invoked(item.id().clone());
    }
    if let Some(href) = item.href_target() {
        navigator.navigate(href);
        log_activation(item.id(), "href");
        return Activation::Navigated {
            id: item.id().clone(),
            href: href.to_owned(),
        };
    }
    Activation::Ignored(IgnoreReason::NoAction)
}

#[cfg(feature = "tracing")]
fn log_activation(id: &ItemId, via: &str) {
    tracing::info!(message = "dock.activate", id = id.as_str(), via);
}

#[cfg(not(feature = "tracing"))]
#[inline]
fn log_activation(_id: &ItemId, _via: &str) {}
