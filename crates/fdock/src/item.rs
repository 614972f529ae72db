#![forbid(unsafe_code)]

//! Dock items.
//!
//! Items are supplied by the host as an ordered, immutable list. The engine
//! reads them (identity, separator flag, activation target) and never
//! mutates them. Presentation fields (`label`, `icon`, `badge`, `active`)
//! are carried through untouched for the host's renderer.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Stable item identity. Motion state is keyed by this.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Opaque icon reference, resolved by the host renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRef(String);

impl IconRef {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.0
    }
}

/// Badge shown on an item: a counter or a short text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Badge {
    Count(u32),
    Text(String),
}

impl From<u32> for Badge {
    fn from(count: u32) -> Self {
        Self::Count(count)
    }
}

impl From<&str> for Badge {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

/// Activation callback.
#[derive(Clone)]
pub struct ActivateFn(Arc<dyn Fn(&ItemId) + Send + Sync>);

impl ActivateFn {
    pub fn new(f: impl Fn(&ItemId) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn call(&self, id: &ItemId) {
        (self.0)(id);
    }
}

impl fmt::Debug for ActivateFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ActivateFn(..)")
    }
}

/// A single dock entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DockItem {
    id: ItemId,
    #[serde(default)]
    label: String,
    #[serde(default)]
    icon: IconRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    href: Option<String>,
    #[serde(skip)]
    on_activate: Option<ActivateFn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    badge: Option<Badge>,
    #[serde(default, rename = "isActive")]
    active: bool,
    #[serde(default, rename = "isSeparator")]
    separator: bool,
}

impl DockItem {
    /// Create an interactive item.
    #[must_use]
    pub fn new(id: impl Into<ItemId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: IconRef::default(),
            href: None,
            on_activate: None,
            badge: None,
            active: false,
            separator: false,
        }
    }

    /// Create a non-interactive spacer.
    #[must_use]
    pub fn separator(id: impl Into<ItemId>) -> Self {
        Self {
            separator: true,
            ..Self::new(id, "")
        }
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = IconRef::new(icon);
        self
    }

    /// Navigation target used when no callback is set.
    #[must_use]
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    #[must_use]
    pub fn on_activate(mut self, f: impl Fn(&ItemId) + Send + Sync + 'static) -> Self {
        self.on_activate = Some(ActivateFn::new(f));
        self
    }

    #[must_use]
    pub fn badge(mut self, badge: impl Into<Badge>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    #[must_use]
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    #[must_use]
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn icon_ref(&self) -> &IconRef {
        &self.icon
    }

    #[must_use]
    pub fn href_target(&self) -> Option<&str> {
        self.href.as_deref()
    }

    #[must_use]
    pub fn callback(&self) -> Option<&ActivateFn> {
        self.on_activate.as_ref()
    }

    #[must_use]
    pub fn badge_value(&self) -> Option<&Badge> {
        self.badge.as_ref()
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub const fn is_separator(&self) -> bool {
        self.separator
    }

    /// Interactive items take part in magnification and activation.
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        !self.separator
    }
}
