//! Column Model
//!
//! Typed column headers and the closed set of reports that own a column
//! sequence in the registry.

use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::constant::{
    BD_LIST_COLUMNS, BD_TREE_LIST_COLUMNS, CSTOR_BACKUP_COLUMNS, CSTOR_COMPLETED_BACKUP_COLUMNS,
    CSTOR_POOL_LIST_COLUMNS, CSTOR_REPLICA_COLUMNS, CSTOR_RESTORE_COLUMNS,
    CSTOR_TARGET_DETAILS_COLUMNS, POOL_REPLICA_COLUMNS, VOLUME_LIST_COLUMNS,
};

// =============================================================================
// Column Type
// =============================================================================

/// Declared type of a column's cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    String,
    Bool,
    Int,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::String => write!(f, "string"),
            ColumnType::Bool => write!(f, "bool"),
            ColumnType::Int => write!(f, "int"),
        }
    }
}

/// One column header: display name plus declared type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableColumnDefinition {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}

impl TableColumnDefinition {
    pub const fn new(name: &'static str, column_type: ColumnType) -> Self {
        Self { name, column_type }
    }
}

// =============================================================================
// Report Kind
// =============================================================================

/// Report kinds with a fixed column sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    CstorReplica,
    CstorTargetDetails,
    VolumeList,
    CstorPoolList,
    BdList,
    PoolReplica,
    CstorBackup,
    CstorCompletedBackup,
    CstorRestore,
    BdTreeList,
}

impl ReportKind {
    /// Every report kind, in declaration order
    pub const ALL: [ReportKind; 10] = [
        ReportKind::CstorReplica,
        ReportKind::CstorTargetDetails,
        ReportKind::VolumeList,
        ReportKind::CstorPoolList,
        ReportKind::BdList,
        ReportKind::PoolReplica,
        ReportKind::CstorBackup,
        ReportKind::CstorCompletedBackup,
        ReportKind::CstorRestore,
        ReportKind::BdTreeList,
    ];

    /// Column sequence for this report. Order is the display order.
    pub fn columns(&self) -> &'static [TableColumnDefinition] {
        match self {
            ReportKind::CstorReplica => CSTOR_REPLICA_COLUMNS,
            ReportKind::CstorTargetDetails => CSTOR_TARGET_DETAILS_COLUMNS,
            ReportKind::VolumeList => VOLUME_LIST_COLUMNS,
            ReportKind::CstorPoolList => CSTOR_POOL_LIST_COLUMNS,
            ReportKind::BdList => BD_LIST_COLUMNS,
            ReportKind::PoolReplica => POOL_REPLICA_COLUMNS,
            ReportKind::CstorBackup => CSTOR_BACKUP_COLUMNS,
            ReportKind::CstorCompletedBackup => CSTOR_COMPLETED_BACKUP_COLUMNS,
            ReportKind::CstorRestore => CSTOR_RESTORE_COLUMNS,
            ReportKind::BdTreeList => BD_TREE_LIST_COLUMNS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::CstorReplica => "cstor-replica",
            ReportKind::CstorTargetDetails => "cstor-target-details",
            ReportKind::VolumeList => "volume-list",
            ReportKind::CstorPoolList => "cstor-pool-list",
            ReportKind::BdList => "bd-list",
            ReportKind::PoolReplica => "pool-replica",
            ReportKind::CstorBackup => "cstor-backup",
            ReportKind::CstorCompletedBackup => "cstor-completed-backup",
            ReportKind::CstorRestore => "cstor-restore",
            ReportKind::BdTreeList => "bd-tree-list",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ReportKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::UnknownReport(s.to_string()))
    }
}
