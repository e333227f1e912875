use crate::blockchain::announcement::{announcement_id, AnnouncementId, AnnouncementKind};
use crate::blockchain::condition_with_args::AnnouncementCondition;
use crate::blockchain::spend_bundle_conditions::{SpendBundleConditions, SpendConditions};
use crate::config::ValidationConfig;
use crate::errors::AnnouncementError;
use crate::validation::verdict::{AssertionRecord, CreatedAnnouncements};
use log::{debug, warn};
use rayon::prelude::*;

/// Announcement facts declared by a single spend.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct SpendAnnouncements {
    pub created: Vec<(AnnouncementKind, AnnouncementId)>,
    pub asserted: Vec<AssertionRecord>,
}

pub fn scan_spend(
    spend: &SpendConditions,
    config: &ValidationConfig,
) -> Result<SpendAnnouncements, AnnouncementError> {
    let mut found = SpendAnnouncements::default();
    for condition in &spend.conditions {
        let parsed = AnnouncementCondition::parse(condition, &spend.coin_id, config.strict_arguments)
            .inspect_err(|e| warn!("Rejecting bundle: {e}"))?;
        match parsed {
            Some(AnnouncementCondition::Create { kind, message }) => {
                let origin_info = match kind {
                    AnnouncementKind::Coin => &spend.coin_id,
                    AnnouncementKind::Puzzle => &spend.puzzle_hash,
                };
                let id = announcement_id(kind, origin_info, &message, config.max_message_length)
                    .inspect_err(|e| warn!("Rejecting bundle, coin {}: {e}", spend.coin_id))?;
                found.created.push((kind, id));
            }
            Some(AnnouncementCondition::Assert {
                kind,
                announcement_id,
            }) => found.asserted.push(AssertionRecord {
                coin_id: spend.coin_id,
                kind,
                announcement_id,
            }),
            None => {}
        }
    }
    Ok(found)
}

/// Scans every spend, in parallel for large bundles. Results keep bundle
/// order and the first failing spend in that order decides the error.
pub fn scan_bundle(
    bundle: &SpendBundleConditions,
    config: &ValidationConfig,
) -> Result<Vec<SpendAnnouncements>, AnnouncementError> {
    if bundle.spends.len() >= config.parallel_threshold {
        debug!("Scanning {} spends on the rayon pool", bundle.spends.len());
        let scanned: Vec<Result<SpendAnnouncements, AnnouncementError>> = bundle
            .spends
            .par_iter()
            .map(|spend| scan_spend(spend, config))
            .collect();
        scanned.into_iter().collect()
    } else {
        bundle
            .spends
            .iter()
            .map(|spend| scan_spend(spend, config))
            .collect()
    }
}

/// Creations and assertions of the whole bundle from a single scan.
pub fn collect(
    bundle: &SpendBundleConditions,
    config: &ValidationConfig,
) -> Result<(CreatedAnnouncements, Vec<AssertionRecord>), AnnouncementError> {
    Ok(merge(scan_bundle(bundle, config)?))
}

/// Every announcement created anywhere in the bundle, keyed by kind.
/// Presence only, duplicates collapse. Scans the whole bundle, use
/// [`collect`] when the assertions are needed too.
pub fn collect_created(
    bundle: &SpendBundleConditions,
    config: &ValidationConfig,
) -> Result<CreatedAnnouncements, AnnouncementError> {
    collect(bundle, config).map(|(created, _)| created)
}

/// Every assertion in the bundle, in bundle order, with the asserting coin.
/// Scans the whole bundle, use [`collect`] when the creations are needed too.
pub fn collect_asserted(
    bundle: &SpendBundleConditions,
    config: &ValidationConfig,
) -> Result<Vec<AssertionRecord>, AnnouncementError> {
    collect(bundle, config).map(|(_, asserted)| asserted)
}

pub fn merge(scanned: Vec<SpendAnnouncements>) -> (CreatedAnnouncements, Vec<AssertionRecord>) {
    let mut created = CreatedAnnouncements::new();
    let mut asserted = vec![];
    for spend in scanned {
        created.extend(spend.created);
        asserted.extend(spend.asserted);
    }
    (created, asserted)
}
