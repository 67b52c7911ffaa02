//! Named on/off gates for groups of shortcuts.
//!
//! A registration that names a scope only fires while that scope (or the `"*"`
//! wildcard) is enabled in the [`ScopeRegistry`] it consults. Registrations use
//! the process-wide registry returned by [`global_scopes`] unless their options
//! carry another one.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use once_cell::sync::Lazy;
use thiserror::Error;

/// Scope that is always active.
pub const WILDCARD_SCOPE: &str = "*";

/// Scope name to enabled flag.
pub type ScopeTable = BTreeMap<String, bool>;

/// Errors from loading or saving a scope table.
#[derive(Debug, Error)]
pub enum ScopeStoreError {
    #[error("scope table io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("scope table json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Shared, cloneable handle to a scope table.
///
/// Clones observe and mutate the same table. Each operation holds the lock for
/// the whole read-modify-write, so concurrent calls never interleave.
#[derive(Debug, Clone)]
pub struct ScopeRegistry {
    table: Arc<Mutex<ScopeTable>>,
}

impl Default for ScopeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeRegistry {
    /// Creates an independent registry holding `{ "*": true }`.
    pub fn new() -> Self {
        Self::with_scopes(default_table())
    }

    pub fn with_scopes(table: ScopeTable) -> Self {
        Self {
            table: Arc::new(Mutex::new(table)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ScopeTable> {
        match self.table.lock() {
            Ok(table) => table,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Returns whether both handles share one table.
    pub fn same_registry(&self, other: &ScopeRegistry) -> bool {
        Arc::ptr_eq(&self.table, &other.table)
    }

    pub fn set_scopes(&self, table: ScopeTable) {
        *self.lock() = table;
    }

    /// Replaces the table with every listed scope enabled.
    ///
    /// An empty list restores `{ "*": true }`.
    pub fn provide_scopes<I, S>(&self, active: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table: ScopeTable = active.into_iter().map(|name| (name.into(), true)).collect();
        if table.is_empty() {
            table = default_table();
        }
        tracing::debug!(scopes = ?table.keys().collect::<Vec<_>>(), "providing scopes");
        self.set_scopes(table);
    }

    /// Snapshot of the current table.
    pub fn scopes(&self) -> ScopeTable {
        self.lock().clone()
    }

    pub fn active_scopes(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn enable_scope(&self, scope: &str) {
        self.lock().insert(scope.to_string(), true);
    }

    pub fn disable_scope(&self, scope: &str) {
        self.lock().insert(scope.to_string(), false);
    }

    pub fn enable_all_scopes(&self) {
        self.lock().values_mut().for_each(|enabled| *enabled = true);
    }

    pub fn disable_all_scopes(&self) {
        self.lock().values_mut().for_each(|enabled| *enabled = false);
    }

    /// Flips a scope; an absent scope counts as disabled and becomes enabled.
    pub fn toggle_scope(&self, scope: &str) {
        let mut table = self.lock();
        let enabled = table.get(scope).copied().unwrap_or(false);
        table.insert(scope.to_string(), !enabled);
    }

    /// `None`, `""` and `"*"` are always in scope. Any other name is in scope
    /// while it or the wildcard is enabled.
    pub fn is_in_scope(&self, scope: Option<&str>) -> bool {
        let scope = match scope {
            None | Some("") | Some(WILDCARD_SCOPE) => return true,
            Some(scope) => scope,
        };
        let table = self.lock();
        table.get(scope).copied().unwrap_or(false)
            || table.get(WILDCARD_SCOPE).copied().unwrap_or(false)
    }

    /// Replaces the table with the JSON object stored at `path`.
    ///
    /// A missing file loads `{ "*": true }`.
    pub fn load(&self, path: &Path) -> Result<(), ScopeStoreError> {
        let table = if path.exists() {
            let content = fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        } else {
            default_table()
        };
        tracing::debug!(path = %path.display(), scopes = table.len(), "loaded scope table");
        self.set_scopes(table);
        Ok(())
    }

    /// Writes the table as a JSON object, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ScopeStoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.scopes())?;
        fs::write(path, content)?;
        Ok(())
    }
}

fn default_table() -> ScopeTable {
    let mut table = ScopeTable::new();
    table.insert(WILDCARD_SCOPE.to_string(), true);
    table
}

static GLOBAL_SCOPES: Lazy<ScopeRegistry> = Lazy::new(ScopeRegistry::new);

/// The process-wide registry.
pub fn global_scopes() -> ScopeRegistry {
    GLOBAL_SCOPES.clone()
}

pub fn set_scopes(table: ScopeTable) {
    GLOBAL_SCOPES.set_scopes(table);
}

pub fn provide_scopes<I, S>(active: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    GLOBAL_SCOPES.provide_scopes(active);
}

pub fn get_scopes() -> ScopeTable {
    GLOBAL_SCOPES.scopes()
}

pub fn get_active_scopes() -> Vec<String> {
    GLOBAL_SCOPES.active_scopes()
}

pub fn enable_scope(scope: &str) {
    GLOBAL_SCOPES.enable_scope(scope);
}

pub fn disable_scope(scope: &str) {
    GLOBAL_SCOPES.disable_scope(scope);
}

pub fn enable_all_scopes() {
    GLOBAL_SCOPES.enable_all_scopes();
}

pub fn disable_all_scopes() {
    GLOBAL_SCOPES.disable_all_scopes();
}

pub fn toggle_scope(scope: &str) {
    GLOBAL_SCOPES.toggle_scope(scope);
}

pub fn is_in_scope(scope: Option<&str>) -> bool {
    GLOBAL_SCOPES.is_in_scope(scope)
}
