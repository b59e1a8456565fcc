//! Static Registry
//!
//! Process-wide constants, cas-type lookup tables and the column sequences
//! used when printing reports. Everything here is built at compile time and
//! never mutated, so any number of threads can read it without locking.

use super::column::{ColumnType, TableColumnDefinition};

// =============================================================================
// Unit Conversions
// =============================================================================

/// Bytes in a gigabyte (2^30)
pub const BYTES_TO_GB: u64 = 1_073_741_824;

/// Bytes in a megabyte, as the CLI has always shipped it.
///
/// Note this is 1048567, not 2^20 (1048576). Output produced by existing
/// tooling depends on the exact divisor, so it is kept as is.
pub const BYTES_TO_MB: u64 = 1_048_567;

/// Bytes in a kilobyte
pub const BYTES_TO_KB: u64 = 1024;

/// Microseconds in a second
pub const MIC_SEC: u64 = 1_000_000;

// =============================================================================
// Tabwriter Parameters
// =============================================================================

/// Minimum cell width
pub const MIN_WIDTH: usize = 0;

/// Maximum cell width, 0 disables truncation
pub const MAX_WIDTH: usize = 0;

/// Spaces added after the widest cell of each column
pub const PADDING: usize = 4;

// =============================================================================
// Label Keys and Status Literals
// =============================================================================

/// Label on a PV carrying its cas type
pub const OPENEBS_CAS_TYPE_KEY: &str = "openebs.io/cas-type";

/// Parameter on a StorageClass carrying its cas type
pub const OPENEBS_CAS_TYPE_KEY_SC: &str = "cas-type";

/// Label on a CStorVolumeAttachment naming its volume
pub const CVA_VOLNAME_KEY: &str = "Volname";

/// Key in `pvc.status.capacity`
pub const STORAGE_KEY: &str = "storage";

/// Returned when a cas type cannot be determined
pub const UNKNOWN: &str = "unknown";

/// Healthy cStor volume status
pub const HEALTHY: &str = "Healthy";

/// Shown when a volume has no attachment
pub const NOT_ATTACHED: &str = "N/A";

/// cStor cas type name
pub const CSTOR_CAS_TYPE: &str = "cstor";

/// Jiva cas type name
pub const JIVA_CAS_TYPE: &str = "jiva";

// =============================================================================
// CSI Drivers
// =============================================================================

/// cStor CSI driver name
pub const CSTOR_CSI_DRIVER: &str = "cstor.csi.openebs.io";

/// Jiva CSI driver name
pub const JIVA_CSI_DRIVER: &str = "jiva.csi.openebs.io";

// =============================================================================
// Cas Type Tables
// =============================================================================

/// Cas type to the name of its CSI controller component.
///
/// The reverse direction is derived from this table by
/// [`cas_type_for_component_name`] instead of being kept as a second table.
pub static CAS_TYPE_AND_COMPONENT_NAME: &[(&str, &str)] = &[
    (CSTOR_CAS_TYPE, "openebs-cstor-csi-controller"),
    (JIVA_CAS_TYPE, "openebs-jiva-csi-controller"),
];

/// Provisioner (or CSI driver) name to cas type. Not a bijection.
pub static PROVISIONER_AND_CAS_TYPE: &[(&str, &str)] = &[
    (CSTOR_CSI_DRIVER, CSTOR_CAS_TYPE),
    // legacy external provisioner, not supported by the CLI
    ("openebs.io/provisioner-iscsi", JIVA_CAS_TYPE),
    ("openebs.io/local", "local"),
    ("local.csi.openebs.io", "localpv-lvm"),
    ("zfs.csi.openebs.io", "localpv-zfs"),
];

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Component name of the CSI controller for a cas type
pub fn component_name_for_cas_type(cas_type: &str) -> Option<&'static str> {
    lookup(CAS_TYPE_AND_COMPONENT_NAME, cas_type)
}

/// Cas type served by a CSI controller component
pub fn cas_type_for_component_name(component: &str) -> Option<&'static str> {
    CAS_TYPE_AND_COMPONENT_NAME
        .iter()
        .find(|(_, c)| *c == component)
        .map(|(t, _)| *t)
}

/// Iterate the component-name to cas-type mapping
pub fn component_name_to_cas_type() -> impl Iterator<Item = (&'static str, &'static str)> {
    CAS_TYPE_AND_COMPONENT_NAME.iter().map(|(t, c)| (*c, *t))
}

/// Cas type for a provisioner name. Exact match only.
pub fn provisioner_cas_type(provisioner: &str) -> Option<&'static str> {
    lookup(PROVISIONER_AND_CAS_TYPE, provisioner)
}

// =============================================================================
// Column Definitions
// =============================================================================

const fn string(name: &'static str) -> TableColumnDefinition {
    TableColumnDefinition::new(name, ColumnType::String)
}

/// Headers for cStor volume replica details
pub static CSTOR_REPLICA_COLUMNS: &[TableColumnDefinition] = &[
    string("Name"),
    string("Total"),
    string("Used"),
    string("Status"),
    string("Age"),
];

/// Headers for cStor target details
pub static CSTOR_TARGET_DETAILS_COLUMNS: &[TableColumnDefinition] = &[
    string("Namespace"),
    string("Name"),
    string("Ready"),
    string("Status"),
    string("Age"),
    string("IP"),
    string("Node"),
];

/// Headers for the volume list
pub static VOLUME_LIST_COLUMNS: &[TableColumnDefinition] = &[
    string("Namespace"),
    string("Name"),
    string("Status"),
    string("Version"),
    string("Capacity"),
    string("Storage Class"),
    string("Attached"),
    string("Access Mode"),
    string("Attached Node"),
];

/// Headers for the cStor pool list
pub static CSTOR_POOL_LIST_COLUMNS: &[TableColumnDefinition] = &[
    string("Name"),
    string("HostName"),
    string("Free"),
    string("Capacity"),
    TableColumnDefinition::new("Read Only", ColumnType::Bool),
    TableColumnDefinition::new("Provisioned Replicas", ColumnType::Int),
    TableColumnDefinition::new("Healthy Replicas", ColumnType::Int),
    string("Status"),
    string("Age"),
];

/// Headers for the block device list
pub static BD_LIST_COLUMNS: &[TableColumnDefinition] = &[
    string("Name"),
    string("Capacity"),
    string("State"),
];

/// Headers for replicas hosted on a pool
pub static POOL_REPLICA_COLUMNS: &[TableColumnDefinition] = &[
    string("Name"),
    string("PVC Name"),
    string("Size"),
    string("State"),
];

/// Headers for cStor backups
pub static CSTOR_BACKUP_COLUMNS: &[TableColumnDefinition] = &[
    string("Name"),
    string("Backup Name"),
    string("Volume Name"),
    string("Backup Destination"),
    string("Snap Name"),
    string("Status"),
];

/// Headers for completed cStor backups
pub static CSTOR_COMPLETED_BACKUP_COLUMNS: &[TableColumnDefinition] = &[
    string("Name"),
    string("Backup Name"),
    string("Volume Name"),
    string("Last Snap Name"),
];

/// Headers for cStor restores
pub static CSTOR_RESTORE_COLUMNS: &[TableColumnDefinition] = &[
    string("Name"),
    string("Restore Name"),
    string("Volume Name"),
    string("Restore Source"),
    string("Storage Class"),
    string("Status"),
];

/// Headers for block devices displayed as a tree
pub static BD_TREE_LIST_COLUMNS: &[TableColumnDefinition] = &[
    string("Name"),
    string("Path"),
    string("Size"),
    string("ClaimState"),
    string("Status"),
    string("FsType"),
    string("MountPoint"),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn names(columns: &[TableColumnDefinition]) -> Vec<&str> {
        columns.iter().map(|c| c.name).collect()
    }

    #[test]
    fn test_unit_constants() {
        assert_eq!(BYTES_TO_GB, 1024 * 1024 * 1024);
        assert_eq!(BYTES_TO_KB, 1024);
        assert_eq!(BYTES_TO_MB, 1_048_567);
        assert_ne!(BYTES_TO_MB, 1024 * 1024);
        assert_eq!(MIC_SEC, 1_000_000);
        assert_eq!((MIN_WIDTH, MAX_WIDTH, PADDING), (0, 0, 4));
    }

    #[test]
    fn test_component_inverse_round_trip() {
        for (cas_type, component) in CAS_TYPE_AND_COMPONENT_NAME {
            assert_eq!(component_name_for_cas_type(cas_type), Some(*component));
            assert_eq!(cas_type_for_component_name(component), Some(*cas_type));
        }
        for (component, cas_type) in component_name_to_cas_type() {
            assert_eq!(component_name_for_cas_type(cas_type), Some(component));
        }
        assert_eq!(component_name_to_cas_type().count(), 2);
    }

    #[test]
    fn test_provisioner_lookup() {
        assert_eq!(provisioner_cas_type("cstor.csi.openebs.io"), Some("cstor"));
        assert_eq!(provisioner_cas_type("openebs.io/provisioner-iscsi"), Some("jiva"));
        assert_eq!(provisioner_cas_type("openebs.io/local"), Some("local"));
        assert_eq!(provisioner_cas_type("local.csi.openebs.io"), Some("localpv-lvm"));
        assert_eq!(provisioner_cas_type("zfs.csi.openebs.io"), Some("localpv-zfs"));
    }

    #[test]
    fn test_lookup_misses_are_absent() {
        assert_eq!(provisioner_cas_type("ebs.csi.aws.com"), None);
        assert_eq!(provisioner_cas_type(""), None);
        // no case folding
        assert_eq!(provisioner_cas_type("CSTOR.CSI.OPENEBS.IO"), None);
        assert_eq!(component_name_for_cas_type("Cstor"), None);
        assert_eq!(cas_type_for_component_name("openebs-lvm-controller"), None);
    }

    #[test]
    fn test_pool_list_columns() {
        assert_eq!(
            names(CSTOR_POOL_LIST_COLUMNS),
            vec![
                "Name",
                "HostName",
                "Free",
                "Capacity",
                "Read Only",
                "Provisioned Replicas",
                "Healthy Replicas",
                "Status",
                "Age",
            ]
        );
        assert_eq!(CSTOR_POOL_LIST_COLUMNS[4].column_type, ColumnType::Bool);
        assert_eq!(CSTOR_POOL_LIST_COLUMNS[5].column_type, ColumnType::Int);
        assert_eq!(CSTOR_POOL_LIST_COLUMNS[6].column_type, ColumnType::Int);
    }

    #[test]
    fn test_column_sequences() {
        assert_eq!(names(CSTOR_REPLICA_COLUMNS), ["Name", "Total", "Used", "Status", "Age"]);
        assert_eq!(
            names(CSTOR_TARGET_DETAILS_COLUMNS),
            ["Namespace", "Name", "Ready", "Status", "Age", "IP", "Node"]
        );
        assert_eq!(
            names(VOLUME_LIST_COLUMNS),
            [
                "Namespace",
                "Name",
                "Status",
                "Version",
                "Capacity",
                "Storage Class",
                "Attached",
                "Access Mode",
                "Attached Node",
            ]
        );
        assert_eq!(names(BD_LIST_COLUMNS), ["Name", "Capacity", "State"]);
        assert_eq!(names(POOL_REPLICA_COLUMNS), ["Name", "PVC Name", "Size", "State"]);
        assert_eq!(
            names(CSTOR_BACKUP_COLUMNS),
            ["Name", "Backup Name", "Volume Name", "Backup Destination", "Snap Name", "Status"]
        );
        assert_eq!(
            names(CSTOR_COMPLETED_BACKUP_COLUMNS),
            ["Name", "Backup Name", "Volume Name", "Last Snap Name"]
        );
        assert_eq!(
            names(CSTOR_RESTORE_COLUMNS),
            ["Name", "Restore Name", "Volume Name", "Restore Source", "Storage Class", "Status"]
        );
        assert_eq!(
            names(BD_TREE_LIST_COLUMNS),
            ["Name", "Path", "Size", "ClaimState", "Status", "FsType", "MountPoint"]
        );
    }

    #[test]
    fn test_only_pool_list_has_typed_columns() {
        let others = [
            CSTOR_REPLICA_COLUMNS,
            CSTOR_TARGET_DETAILS_COLUMNS,
            VOLUME_LIST_COLUMNS,
            BD_LIST_COLUMNS,
            POOL_REPLICA_COLUMNS,
            CSTOR_BACKUP_COLUMNS,
            CSTOR_COMPLETED_BACKUP_COLUMNS,
            CSTOR_RESTORE_COLUMNS,
            BD_TREE_LIST_COLUMNS,
        ];
        for columns in others {
            assert!(columns.iter().all(|c| c.column_type == ColumnType::String));
        }
    }

    #[test]
    fn test_repeated_reads_are_identical() {
        let first = (component_name_for_cas_type(CSTOR_CAS_TYPE), CSTOR_POOL_LIST_COLUMNS.as_ptr());
        let second = (component_name_for_cas_type(CSTOR_CAS_TYPE), CSTOR_POOL_LIST_COLUMNS.as_ptr());
        assert_eq!(first, second);
        assert_eq!(OPENEBS_CAS_TYPE_KEY, "openebs.io/cas-type");
        assert_eq!(NOT_ATTACHED, "N/A");
    }

    #[test]
    fn test_concurrent_reads_agree() {
        use crate::util::column::ReportKind;

        let snapshot = || {
            (
                provisioner_cas_type(CSTOR_CSI_DRIVER),
                provisioner_cas_type("zfs.csi.openebs.io"),
                cas_type_for_component_name("openebs-jiva-csi-controller"),
                ReportKind::CstorPoolList.columns().as_ptr() as usize,
            )
        };

        let seen: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| (0..1000).map(|_| snapshot()).collect::<Vec<_>>()))
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });

        let expected = snapshot();
        assert_eq!(expected.0, Some("cstor"));
        assert_eq!(expected.1, Some("localpv-zfs"));
        assert_eq!(expected.2, Some("jiva"));
        assert_eq!(expected.3, CSTOR_POOL_LIST_COLUMNS.as_ptr() as usize);
        assert_eq!(seen.len(), 8000);
        assert!(seen.iter().all(|s| *s == expected));
    }
}
