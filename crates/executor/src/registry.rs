//! Handler registry.
//!
//! Each [`BlockContext`] owns one table of handlers. Tables are sorted with
//! the same case-insensitive comparator used for lookup, so lookup is a binary
//! search. A registry is immutable once built and can be shared freely.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use tracing::debug;
use wmctl_core::{BlockContext, CommandResult, Error, Result};

use crate::handlers;
use crate::state::ServerState;

/// Command handler.
///
/// Receives the arguments after the command name.
pub type Handler = fn(&mut ServerState, &[String]) -> CommandResult;

/// A named handler.
#[derive(Clone)]
pub struct HandlerEntry {
    /// Command name, matched case-insensitively
    pub name: String,
    /// Function invoked for the command
    pub handler: Handler,
}

impl HandlerEntry {
    /// Create an entry.
    pub fn new(name: impl Into<String>, handler: Handler) -> Self {
        HandlerEntry {
            name: name.into(),
            handler,
        }
    }
}

impl fmt::Debug for HandlerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerEntry")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Process-wide builtin registry, built on first use.
static SHARED: Lazy<Arc<Registry>> = Lazy::new(|| Arc::new(Registry::builtin()));

/// Case-insensitive ASCII comparison, the ordering of every table.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}

/// Immutable set of handler tables.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    tables: BTreeMap<BlockContext, Vec<HandlerEntry>>,
}

impl Registry {
    /// Registry with the builtin general handlers and empty block tables.
    pub fn builtin() -> Self {
        let mut general = handlers::builtin();
        general.sort_by(|a, b| compare_names(&a.name, &b.name));
        let mut tables = BTreeMap::new();
        tables.insert(BlockContext::General, general);
        Registry { tables }
    }

    /// The shared builtin registry.
    pub fn shared() -> Arc<Registry> {
        Arc::clone(&SHARED)
    }

    /// Start building a custom registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Handlers available in `context`, sorted by name.
    pub fn table(&self, context: BlockContext) -> &[HandlerEntry] {
        self.tables
            .get(&context.table_key())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Find the handler for `name` in `context`.
    pub fn lookup(&self, name: &str, context: BlockContext) -> Option<&HandlerEntry> {
        debug!(target: "wmctl::registry", name, %context, "find_handler");
        let table = self.table(context);
        table
            .binary_search_by(|entry| compare_names(&entry.name, name))
            .ok()
            .map(|index| &table[index])
    }

    /// Number of handlers in `context`.
    pub fn len(&self, context: BlockContext) -> usize {
        self.table(context).len()
    }

    /// Check if `context` has no handlers.
    pub fn is_empty(&self, context: BlockContext) -> bool {
        self.table(context).is_empty()
    }
}

/// Builder for a [`Registry`] with embedder-provided handlers.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    tables: BTreeMap<BlockContext, Vec<HandlerEntry>>,
}

impl RegistryBuilder {
    /// Start from the builtin handlers.
    pub fn with_builtins(mut self) -> Self {
        self.tables
            .entry(BlockContext::General)
            .or_default()
            .extend(handlers::builtin());
        self
    }

    /// Add a handler to the table of `context`.
    pub fn register(
        mut self,
        context: BlockContext,
        name: impl Into<String>,
        handler: Handler,
    ) -> Self {
        self.tables
            .entry(context.table_key())
            .or_default()
            .push(HandlerEntry::new(name, handler));
        self
    }

    /// Sort every table and reject duplicate names.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateHandler`] if a table holds two names that
    /// compare equal case-insensitively.
    pub fn build(mut self) -> Result<Registry> {
        for (context, table) in self.tables.iter_mut() {
            table.sort_by(|a, b| compare_names(&a.name, &b.name));
            if let Some(pair) = table
                .windows(2)
                .find(|pair| compare_names(&pair[0].name, &pair[1].name) == Ordering::Equal)
            {
                return Err(Error::DuplicateHandler {
                    name: pair[1].name.clone(),
                    context: *context,
                });
            }
        }
        Ok(Registry {
            tables: self.tables,
        })
    }
}
