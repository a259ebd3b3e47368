//! Scoped cleanup for host-side registrations.

use crate::host::{HostTable, ListenerToken};

/// Collects every [`ListenerToken`] the engine acquires so teardown can
/// release them in one pass. Replaces ad-hoc per-event bookkeeping: a
/// registration that is pushed here cannot be leaked by a rebuild.
#[derive(Debug, Default)]
pub struct Disposables {
    tokens: Vec<ListenerToken>,
}

impl Disposables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: ListenerToken) {
        self.tokens.push(token);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Release every collected token against the host, atomically from
    /// the engine's point of view: the list is empty afterwards even if
    /// it was empty to begin with.
    pub fn release<H: HostTable>(&mut self, host: &mut H) {
        for token in self.tokens.drain(..) {
            host.unregister(token);
        }
    }
}
