//! Conformance report generation.
//!
//! Structured outcome of one assertion run, suitable for logging or
//! serialization.

use chrono::{DateTime, Utc};
use iface_types::ConformanceDefect;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of one `assert_implements` run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConformanceReport {
    /// The class that was checked.
    pub class: String,
    /// Interface names checked, in traversal order.
    pub interfaces_checked: Vec<String>,
    /// Total stubs examined across all interfaces.
    pub stubs_checked: usize,
    /// Every defect found, in discovery order.
    pub defects: Vec<ConformanceDefect>,
    /// Whether the class was reclassified as a verified implementor.
    pub verified: bool,
    /// When the assertion ran.
    pub checked_at: DateTime<Utc>,
}

impl ConformanceReport {
    /// Whether no defect was found.
    pub fn is_conformant(&self) -> bool {
        self.defects.is_empty()
    }

    /// Defects pointing at the given interface.
    pub fn defects_for(&self, interface: &str) -> Vec<&ConformanceDefect> {
        self.defects
            .iter()
            .filter(|d| d.interface() == interface)
            .collect()
    }
}

impl fmt::Display for ConformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "conformance report for {} ({} interface(s), {} stub(s))",
            self.class,
            self.interfaces_checked.len(),
            self.stubs_checked,
        )?;
        if !self.interfaces_checked.is_empty() {
            writeln!(f, "  interfaces: {}", self.interfaces_checked.join(", "))?;
        }
        for defect in &self.defects {
            writeln!(f, "  [x] {defect}")?;
        }
        if self.verified {
            writeln!(f, "  VERIFIED IMPLEMENTOR")?;
        } else if self.is_conformant() {
            writeln!(f, "  no interfaces to implement")?;
        } else {
            writeln!(f, "  {} DEFECT(S)", self.defects.len())?;
        }
        Ok(())
    }
}
