//! Document-level keyboard events.
//!
//! [`DocumentEvents`] plays the role of the page document: it knows which
//! element has focus and fans key events out to subscribed listeners. A
//! listener stays installed exactly as long as its [`Subscription`] lives.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use dashmap::DashMap;
use tokio::sync::watch;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Char(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Input,
    TextArea,
    Select,
    Button,
    Link,
}

/// What currently holds keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Nothing focusable is focused.
    #[default]
    Body,
    Element(ElementKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            shift: false,
            alt: false,
        }
    }

    pub fn ctrl(key: Key) -> Self {
        Self {
            ctrl: true,
            ..Self::new(key)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Ignored,
    /// Handled; the host must suppress its default action for this event.
    PreventDefault,
}

pub type KeyListener = Arc<dyn Fn(&KeyEvent, Focus) -> EventOutcome + Send + Sync>;

struct Registry {
    listeners: DashMap<u64, KeyListener>,
    next_id: AtomicU64,
    focus: watch::Sender<Focus>,
}

#[derive(Clone)]
pub struct DocumentEvents {
    registry: Arc<Registry>,
}

impl Default for DocumentEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DocumentEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentEvents")
            .field("listeners", &self.listener_count())
            .field("focus", &self.focus())
            .finish()
    }
}

impl DocumentEvents {
    pub fn new() -> Self {
        let (focus, _rx) = watch::channel(Focus::Body);
        Self {
            registry: Arc::new(Registry {
                listeners: DashMap::new(),
                next_id: AtomicU64::new(0),
                focus,
            }),
        }
    }

    pub fn focus(&self) -> Focus {
        *self.registry.focus.borrow()
    }

    pub fn set_focus(&self, focus: Focus) {
        self.registry.focus.send_replace(focus);
    }

    pub fn blur(&self) {
        self.set_focus(Focus::Body);
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&KeyEvent, Focus) -> EventOutcome + Send + Sync + 'static,
    {
        let id = self.registry.next_id.fetch_add(1, Ordering::Relaxed);
        self.registry.listeners.insert(id, Arc::new(listener));
        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Delivers `event` to every listener in subscription order. Returns
    /// `true` when some listener asked for the default action to be prevented.
    pub fn dispatch(&self, event: &KeyEvent) -> bool {
        let focus = self.focus();

        // Snapshot first so listeners may (un)subscribe while handling.
        let mut listeners: Vec<(u64, KeyListener)> = self
            .registry
            .listeners
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();
        listeners.sort_by_key(|(id, _)| *id);

        let mut prevented = false;
        for (_, listener) in listeners {
            if listener(event, focus) == EventOutcome::PreventDefault {
                prevented = true;
            }
        }
        prevented
    }

    pub fn listener_count(&self) -> usize {
        self.registry.listeners.len()
    }
}

/// Removes its listener when dropped.
#[must_use = "dropping a Subscription immediately removes the listener"]
pub struct Subscription {
    id: u64,
    registry: Weak<Registry>,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.listeners.remove(&self.id);
        }
    }
}
