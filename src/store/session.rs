// src/store/session.rs

use tracing::debug;

use crate::engine::StatusEngine;
use crate::errors::Result;
use crate::graph::ActivityGraph;
use crate::store::Store;

/// A status engine bound to the store its completed set lives in.
///
/// The completed set is read once in [`open`](Self::open) and written back
/// by [`save`](Self::save); everything in between is in memory.
#[derive(Debug)]
pub struct Session<S: Store> {
    engine: StatusEngine,
    store: S,
    key: String,
}

impl<S: Store> Session<S> {
    /// Build an engine over `graph` and load whatever `store` holds under `key`.
    ///
    /// A missing value counts as "nothing completed yet".
    pub fn open(graph: ActivityGraph, store: S, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let mut engine = StatusEngine::new(graph);

        let stored = store.read(&key)?.unwrap_or_default();
        engine.load_completed(&stored);

        debug!(
            key = %key,
            completed = engine.completed().len(),
            "opened activity session"
        );

        Ok(Self { engine, store, key })
    }

    pub fn engine(&self) -> &StatusEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut StatusEngine {
        &mut self.engine
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Write the completed set back to the store.
    pub fn save(&self) -> Result<()> {
        let value = self.engine.save_completed();
        self.store.write(&self.key, &value)?;
        debug!(key = %self.key, bytes = value.len(), "saved completed activities");
        Ok(())
    }
}
