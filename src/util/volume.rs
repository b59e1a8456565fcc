//! Volume Helpers
//!
//! Cell values for the volume and replica reports: capacity, attachment
//! node and age.

use chrono::{DateTime, Utc};
use k8s_openapi::api::core::v1::PersistentVolumeClaim;
use k8s_openapi::api::storage::v1::VolumeAttachment;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ObjectMeta, Time};

use super::constant::{CVA_VOLNAME_KEY, NOT_ATTACHED, STORAGE_KEY};

/// Capacity reported in a PVC's status, e.g. "10Gi"
pub fn pvc_capacity(pvc: &PersistentVolumeClaim) -> Option<&str> {
    pvc.status
        .as_ref()
        .and_then(|s| s.capacity.as_ref())
        .and_then(|c| c.get(STORAGE_KEY))
        .map(|q| q.0.as_str())
}

/// Node of the first CStorVolumeAttachment labelled with `volume`.
///
/// Each attachment is given as its metadata plus the node it targets.
/// Returns [`NOT_ATTACHED`] when none matches.
pub fn attached_node<'a, I>(volume: &str, attachments: I) -> &'a str
where
    I: IntoIterator<Item = (&'a ObjectMeta, &'a str)>,
{
    attachments
        .into_iter()
        .find(|(meta, _)| {
            meta.labels
                .as_ref()
                .and_then(|l| l.get(CVA_VOLNAME_KEY))
                .is_some_and(|v| v == volume)
        })
        .map(|(_, node)| node)
        .unwrap_or(NOT_ATTACHED)
}

/// Node holding an attached CSI VolumeAttachment for the PV, or [`NOT_ATTACHED`]
pub fn csi_attached_node<'a>(pv_name: &str, attachments: &'a [VolumeAttachment]) -> &'a str {
    attachments
        .iter()
        .find(|va| {
            va.spec.source.persistent_volume_name.as_deref() == Some(pv_name)
                && va.status.as_ref().is_some_and(|s| s.attached)
        })
        .map(|va| va.spec.node_name.as_str())
        .unwrap_or(NOT_ATTACHED)
}

/// Short age for the `Age` column, in the style kubectl prints it
pub fn translate_age(created: Option<&Time>, now: DateTime<Utc>) -> String {
    let Some(created) = created else {
        return "<unknown>".to_string();
    };

    let seconds = (now - created.0).num_seconds();
    if seconds < -1 {
        return "<invalid>".to_string();
    }
    if seconds < 0 {
        return "0s".to_string();
    }

    let minutes = seconds / 60;
    let hours = minutes / 60;
    if seconds < 60 {
        format!("{}s", seconds)
    } else if minutes < 60 {
        format!("{}m", minutes)
    } else if hours < 24 {
        format!("{}h", hours)
    } else if hours < 24 * 365 {
        format!("{}d", hours / 24)
    } else {
        format!("{}y", hours / 24 / 365)
    }
}
