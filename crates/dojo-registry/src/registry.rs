//! Registry lookup and the `evaluate` call surface.

use std::collections::BTreeMap;

use serde_json::{Value, json};

use crate::catalog::{CATALOG, KataRecord};
use crate::error::KataError;
use crate::signature::{ParamType, ReturnType};

/// The kata function registry.
///
/// Built once from the static catalog and never mutated afterwards.
/// Lookups and enumeration are deterministic (lexicographic by name).
pub struct Registry {
    records: BTreeMap<&'static str, &'static KataRecord>,
}

/// Serializable description of one catalog entry.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KataSummary {
    pub name: &'static str,
    pub summary: &'static str,
    pub params: &'static [ParamType],
    pub returns: ReturnType,
    pub implementations: Vec<&'static str>,
}

impl Registry {
    pub fn new() -> Self {
        let records = CATALOG.iter().map(|record| (record.name, record)).collect();
        Self { records }
    }

    /// Look up a kata record by name.
    pub fn get(&self, name: &str) -> Option<&KataRecord> {
        self.records.get(name).copied()
    }

    /// All kata names, lexicographically sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.records.keys().copied()
    }

    /// Evaluate the named kata's canonical implementation.
    ///
    /// Validates `args` against the declared signature first; no type
    /// coercion is performed.
    pub fn evaluate(&self, name: &str, args: &[Value]) -> Result<Value, KataError> {
        let record = self.lookup(name)?;
        record.signature.check(record.name, args)?;
        (record.canonical.run)(args)
    }

    /// Evaluate a specific implementation of the named kata.
    ///
    /// An unknown implementation id is reported as `NotFound` under the
    /// combined `kata::implementation` name.
    pub fn evaluate_with(
        &self,
        name: &str,
        impl_id: &str,
        args: &[Value],
    ) -> Result<Value, KataError> {
        let record = self.lookup(name)?;
        let implementation = record
            .implementation(impl_id)
            .ok_or_else(|| KataError::not_found(format!("{name}::{impl_id}")))?;
        record.signature.check(record.name, args)?;
        (implementation.run)(args)
    }

    /// Serializable catalog rows, in name order.
    pub fn catalog(&self) -> Vec<KataSummary> {
        self.records
            .values()
            .map(|record| KataSummary {
                name: record.name,
                summary: record.summary,
                params: record.signature.params,
                returns: record.signature.returns,
                implementations: record.implementations().map(|imp| imp.id).collect(),
            })
            .collect()
    }

    /// The catalog as a schema-tagged JSON surface.
    pub fn catalog_json(&self) -> Value {
        json!({
            "schema": 1,
            "catalogKind": "dojo.kata_catalog.v1",
            "katas": self.catalog(),
        })
    }

    fn lookup(&self, name: &str) -> Result<&'static KataRecord, KataError> {
        self.records
            .get(name)
            .copied()
            .ok_or_else(|| KataError::not_found(name))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
