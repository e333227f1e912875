use crate::blockchain::announcement::{AnnouncementId, AnnouncementKind};
use crate::blockchain::sized_bytes::Bytes32;
use crate::config::ValidationConfig;
use crate::errors::AnnouncementError;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Created announcements keyed by kind, so an assertion only matches
/// announcements of its own kind.
pub type CreatedAnnouncements = HashSet<(AnnouncementKind, AnnouncementId)>;

#[derive(Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Report every unmet assertion.
    #[default]
    Exhaustive,
    /// Stop at the first unmet assertion.
    FailFast,
}

#[derive(Copy, Clone, Hash, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct AssertionRecord {
    pub coin_id: Bytes32,
    pub kind: AnnouncementKind,
    pub announcement_id: AnnouncementId,
}
impl AssertionRecord {
    fn is_met(&self, created: &CreatedAnnouncements) -> bool {
        created.contains(&(self.kind, self.announcement_id))
    }
}

#[derive(Copy, Clone, Hash, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct UnmetAssertion {
    pub coin_id: Bytes32,
    pub kind: AnnouncementKind,
    pub announcement_id: AnnouncementId,
}
impl From<&AssertionRecord> for UnmetAssertion {
    fn from(record: &AssertionRecord) -> Self {
        Self {
            coin_id: record.coin_id,
            kind: record.kind,
            announcement_id: record.announcement_id,
        }
    }
}
impl fmt::Display for UnmetAssertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "coin {} asserted missing {} announcement {}",
            self.coin_id, self.kind, self.announcement_id
        )
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(tag = "status", content = "unmet", rename_all = "snake_case")]
pub enum BundleVerdict {
    Valid,
    Invalid(Vec<UnmetAssertion>),
}
impl BundleVerdict {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, BundleVerdict::Valid)
    }
    #[must_use]
    pub fn unmet(&self) -> &[UnmetAssertion] {
        match self {
            BundleVerdict::Valid => &[],
            BundleVerdict::Invalid(unmet) => unmet,
        }
    }
    pub fn into_result(self) -> Result<(), AnnouncementError> {
        match self {
            BundleVerdict::Valid => Ok(()),
            BundleVerdict::Invalid(unmet) => Err(AnnouncementError::UnmetAssertions(unmet)),
        }
    }
    fn from_unmet(unmet: Vec<UnmetAssertion>) -> Self {
        if unmet.is_empty() {
            BundleVerdict::Valid
        } else {
            BundleVerdict::Invalid(unmet)
        }
    }
}

/// Checks every assertion against the bundle's created announcements of the
/// same kind.
///
/// Lookups never consume a creation: one announcement satisfies any number
/// of assertions. Unmet assertions are reported in bundle order. Exhaustive
/// matching runs on the rayon pool once the list reaches
/// `config.parallel_threshold`.
#[must_use]
pub fn validate(
    created: &CreatedAnnouncements,
    assertions: &[AssertionRecord],
    config: &ValidationConfig,
) -> BundleVerdict {
    let unmet: Vec<UnmetAssertion> = match config.match_mode {
        MatchMode::FailFast => assertions
            .iter()
            .find(|a| !a.is_met(created))
            .map(UnmetAssertion::from)
            .into_iter()
            .collect(),
        MatchMode::Exhaustive if assertions.len() >= config.parallel_threshold => assertions
            .par_iter()
            .filter(|a| !a.is_met(created))
            .map(UnmetAssertion::from)
            .collect(),
        MatchMode::Exhaustive => assertions
            .iter()
            .filter(|a| !a.is_met(created))
            .map(UnmetAssertion::from)
            .collect(),
    };
    BundleVerdict::from_unmet(unmet)
}
