//! Conventional directories inside a Hearts of Iron IV installation.

use std::path::{Path, PathBuf};

/// Paths derived from a game (or mod) root. Pure path joining, no I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLayout {
    root: PathBuf,
}

impl InstallLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/common`
    pub fn common(&self) -> PathBuf {
        self.root.join("common")
    }

    /// `<root>/common/units`
    pub fn units(&self) -> PathBuf {
        self.common().join("units")
    }

    /// `<root>/common/units/equipment`
    pub fn equipment(&self) -> PathBuf {
        self.units().join("equipment")
    }
}
