// src/abb/mod.rs
//! Static ABB RAPID reference material: instruction syntax and quick-reference guides.

pub mod commands;
pub mod quickref;

use std::collections::BTreeMap;

pub use commands::CommandEntry;
pub use quickref::QuickRefEntry;

/// Result of a keyed lookup against one of the reference tables.
///
/// Every lookup-capable command goes through this shape: no key lists the table,
/// a known key yields its entry, anything else is a miss.
#[derive(Debug, PartialEq, Eq)]
pub enum Lookup<'a, E> {
    List(Vec<&'static str>),
    Found(&'a E),
    Unknown,
}

#[derive(Debug)]
pub struct ReferenceStore<E: 'static> {
    entries: BTreeMap<&'static str, &'static E>,
}

impl<E: 'static> ReferenceStore<E> {
    pub fn from_table(table: &'static [(&'static str, E)]) -> Self {
        let entries = table.iter().map(|(key, entry)| (*key, entry)).collect();
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&'static E> {
        self.entries.get(key).copied()
    }

    /// Known keys in alphabetical order.
    pub fn keys(&self) -> Vec<&'static str> {
        self.entries.keys().copied().collect()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static E)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, *v))
    }

    pub fn lookup(&self, key: Option<&str>) -> Lookup<'static, E> {
        match key {
            None => Lookup::List(self.keys()),
            Some(key) => self.get(key).map_or(Lookup::Unknown, Lookup::Found),
        }
    }
}

/// Both reference tables, built once at startup and shared read-only.
#[derive(Debug)]
pub struct Library {
    pub commands: ReferenceStore<CommandEntry>,
    pub quickref: ReferenceStore<QuickRefEntry>,
}

impl Library {
    pub fn new() -> Self {
        Self {
            commands: ReferenceStore::from_table(commands::COMMANDS),
            quickref: ReferenceStore::from_table(quickref::QUICK_REFERENCE),
        }
    }
}
