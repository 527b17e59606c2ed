//! # Commit Object
//!
//! A commit is an immutable snapshot: a message, a timestamp, up to two
//! parent fingerprints, and a flat tree mapping file name to blob
//! fingerprint. Its own fingerprint is the hash of its canonical serialized
//! form, so changing any field — including the tree — yields a new identity.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::hash::fingerprint;

/// Represents a commit object.
///
/// `tree` is a `BTreeMap` rather than a `HashMap` specifically so that
/// `serde_json::to_vec` always emits its entries in sorted-key order —
/// that's what makes the serialized form canonical and the fingerprint
/// reproducible across processes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Commit {
    pub message: String,
    pub timestamp: i64,
    pub parent1: Option<String>,
    pub parent2: Option<String>,
    pub tree: BTreeMap<String, String>,
}

impl Commit {
    /// Build the sentinel initial commit: empty tree, no parents, epoch
    /// timestamp, and the fixed message "initial commit".
    pub fn initial() -> Self {
        Self {
            message: "initial commit".to_string(),
            timestamp: 0,
            parent1: None,
            parent2: None,
            tree: BTreeMap::new(),
        }
    }

    /// Build a normal (single-parent) commit.
    pub fn new(message: String, timestamp: i64, parent1: String, tree: BTreeMap<String, String>) -> Self {
        Self {
            message,
            timestamp,
            parent1: Some(parent1),
            parent2: None,
            tree,
        }
    }

    /// Build a merge commit (two parents).
    pub fn merge(
        message: String,
        timestamp: i64,
        parent1: String,
        parent2: String,
        tree: BTreeMap<String, String>,
    ) -> Self {
        Self {
            message,
            timestamp,
            parent1: Some(parent1),
            parent2: Some(parent2),
            tree,
        }
    }

    /// Serialize to the canonical byte form whose hash is this commit's
    /// fingerprint. Field order is fixed by the struct's declaration order
    /// and the tree's keys are sorted by `BTreeMap`, so two commits with the
    /// same field values always serialize identically.
    pub fn serialize(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).context("failed to serialize commit")
    }

    /// Parse a commit back from its serialized form.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).context("failed to parse commit")
    }

    /// Compute this commit's fingerprint (the hash of its canonical form).
    pub fn fingerprint(&self) -> Result<String> {
        Ok(fingerprint(&self.serialize()?))
    }

    /// Ordered list of parent fingerprints: `{parent1, parent2?}`.
    pub fn parents(&self) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(p) = &self.parent1 {
            out.push(p.clone());
        }
        if let Some(p) = &self.parent2 {
            out.push(p.clone());
        }
        out
    }

    /// True for the sentinel initial commit (no parents).
    pub fn is_initial(&self) -> bool {
        self.parent1.is_none()
    }

    /// True for a merge commit (two parents).
    pub fn is_merge(&self) -> bool {
        self.parent2.is_some()
    }
}
