pub mod collector;
pub mod verdict;

use crate::blockchain::spend_bundle_conditions::SpendBundleConditions;
use crate::config::ValidationConfig;
use crate::errors::AnnouncementError;
use crate::validation::collector::collect;
use crate::validation::verdict::{validate, BundleVerdict};
use log::{debug, info};

/// Validates every announcement assertion in `bundle` against the
/// announcements created by the same bundle.
///
/// Malformed conditions and oversized messages abort with an error before
/// any matching happens. Otherwise the verdict lists the unmet assertions,
/// all of them unless `config.match_mode` is fail fast.
pub fn validate_bundle(
    bundle: &SpendBundleConditions,
    config: &ValidationConfig,
) -> Result<BundleVerdict, AnnouncementError> {
    let (created, asserted) = collect(bundle, config)?;
    debug!(
        "Bundle of {} spends: {} announcements created, {} asserted",
        bundle.spends.len(),
        created.len(),
        asserted.len()
    );
    let verdict = validate(&created, &asserted, config);
    if let Some(first) = verdict.unmet().first() {
        info!(
            "Bundle failed announcement validation with {} unmet, first: {first}",
            verdict.unmet().len()
        );
    }
    Ok(verdict)
}
