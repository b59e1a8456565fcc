//! Cas Type Resolution
//!
//! Works out which storage engine backs a PersistentVolume or StorageClass
//! using the registry's label keys and provisioner table.

use k8s_openapi::api::core::v1::PersistentVolume;
use k8s_openapi::api::storage::v1::StorageClass;
use tracing::debug;

use super::constant::{
    provisioner_cas_type, CSTOR_CAS_TYPE, JIVA_CAS_TYPE, OPENEBS_CAS_TYPE_KEY,
    OPENEBS_CAS_TYPE_KEY_SC, UNKNOWN,
};

/// Cas type for a provisioner or CSI driver name
pub fn cas_type_for_provisioner(provisioner: &str) -> Option<&'static str> {
    let cas_type = provisioner_cas_type(provisioner);
    if cas_type.is_none() {
        debug!(provisioner, "provisioner has no cas type mapping");
    }
    cas_type
}

/// Whether the CLI can describe volumes of this cas type
pub fn is_supported_cas_type(cas_type: &str) -> bool {
    cas_type == CSTOR_CAS_TYPE || cas_type == JIVA_CAS_TYPE
}

/// Cas type of a StorageClass.
///
/// The `cas-type` parameter wins; otherwise the provisioner is looked up.
/// Returns [`UNKNOWN`] when neither resolves.
pub fn cas_type_of_storage_class(sc: &StorageClass) -> &str {
    if let Some(cas_type) = sc
        .parameters
        .as_ref()
        .and_then(|p| p.get(OPENEBS_CAS_TYPE_KEY_SC))
    {
        return cas_type;
    }
    cas_type_for_provisioner(&sc.provisioner).unwrap_or(UNKNOWN)
}

/// Cas type of a PersistentVolume.
///
/// The `openebs.io/cas-type` label wins; otherwise the CSI driver name is
/// looked up. Returns [`UNKNOWN`] when neither resolves.
pub fn cas_type_of_pv(pv: &PersistentVolume) -> &str {
    if let Some(cas_type) = pv
        .metadata
        .labels
        .as_ref()
        .and_then(|l| l.get(OPENEBS_CAS_TYPE_KEY))
    {
        return cas_type;
    }
    pv.spec
        .as_ref()
        .and_then(|spec| spec.csi.as_ref())
        .and_then(|csi| cas_type_for_provisioner(&csi.driver))
        .unwrap_or(UNKNOWN)
}
