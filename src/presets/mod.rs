//! Named parameter presets.
//!
//! Backends offer a fixed menu of named parameter configurations. The
//! catalog populates itself lazily on first access by enumerating the
//! backend until it signals exhaustion, then caches the result for the
//! session's lifetime: presets are a pure function of the backend,
//! independent of the current parameters, so reconfiguration never
//! invalidates them and entry indices stay stable once populated.

use tracing::debug;

use crate::backend::Backend;

/// A named parameter configuration offered as a shortcut.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PresetEntry<P> {
    /// Menu label.
    pub name: String,
    /// The parameters this preset selects.
    pub params: P,
}

impl<P> PresetEntry<P> {
    /// Create a preset entry.
    pub fn new(name: impl Into<String>, params: P) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }
}

/// Lazily populated, session-lifetime cache of presets.
#[derive(Clone, Debug, Default)]
pub struct PresetCatalog<P> {
    entries: Option<Vec<PresetEntry<P>>>,
}

impl<P> PresetCatalog<P> {
    /// Create an unpopulated catalog.
    #[must_use]
    pub fn new() -> Self {
        Self { entries: None }
    }

    /// Whether the catalog has been populated yet.
    #[must_use]
    pub fn is_populated(&self) -> bool {
        self.entries.is_some()
    }

    /// Number of presets, populating the catalog on first call.
    pub fn count<B>(&mut self, backend: &B) -> usize
    where
        B: Backend<Params = P>,
    {
        self.ensure(backend);
        match &self.entries {
            Some(entries) => entries.len(),
            None => unreachable!("catalog populated above"),
        }
    }

    /// Fetch a preset by index.
    ///
    /// Callers only ever use indices previously reported by
    /// [`count`](Self::count), so violations are caller bugs.
    ///
    /// ## Panics
    ///
    /// Panics if the catalog is unpopulated or `index` is out of range.
    #[must_use]
    pub fn fetch(&self, index: usize) -> &PresetEntry<P> {
        let entries = match &self.entries {
            Some(entries) => entries,
            None => panic!("preset catalog accessed before population"),
        };
        assert!(
            index < entries.len(),
            "preset index {index} out of range ({} presets)",
            entries.len()
        );
        &entries[index]
    }

    fn ensure<B>(&mut self, backend: &B)
    where
        B: Backend<Params = P>,
    {
        if self.entries.is_some() {
            return;
        }

        let mut entries = Vec::new();
        while let Some(entry) = backend.fetch_preset(entries.len()) {
            entries.push(entry);
        }

        debug!(game = backend.name(), count = entries.len(), "preset catalog populated");
        self.entries = Some(entries);
    }
}
