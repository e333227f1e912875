use crate::errors::ServiceGroupError;

/// Service processes started for each named group.
pub const SERVICES_FOR_GROUP: &[(&str, &[&str])] = &[
    (
        "all",
        &[
            "seno_harvester",
            "seno_timelord_launcher",
            "seno_timelord",
            "seno_farmer",
            "seno_full_node",
            "seno_wallet",
        ],
    ),
    ("node", &["seno_full_node"]),
    ("harvester", &["seno_harvester"]),
    (
        "farmer",
        &["seno_harvester", "seno_farmer", "seno_full_node", "seno_wallet"],
    ),
    (
        "farmer-no-wallet",
        &["seno_harvester", "seno_farmer", "seno_full_node"],
    ),
    ("farmer-only", &["seno_farmer"]),
    (
        "timelord",
        &["seno_timelord_launcher", "seno_timelord", "seno_full_node"],
    ),
    ("timelord-only", &["seno_timelord"]),
    ("timelord-launcher-only", &["seno_timelord_launcher"]),
    ("wallet", &["seno_wallet", "seno_full_node"]),
    ("wallet-only", &["seno_wallet"]),
    ("introducer", &["seno_introducer"]),
    ("simulator", &["seno_full_node_simulator"]),
];

pub fn all_groups() -> impl Iterator<Item = &'static str> {
    SERVICES_FOR_GROUP.iter().map(|(group, _)| *group)
}

pub fn services_for_group(group: &str) -> Result<&'static [&'static str], ServiceGroupError> {
    SERVICES_FOR_GROUP
        .iter()
        .find(|(name, _)| *name == group)
        .map(|(_, services)| *services)
        .ok_or_else(|| ServiceGroupError::UnknownGroup(group.to_string()))
}

/// Services for each group in turn. Repeats are kept, the caller decides
/// whether starting a service twice matters.
pub fn services_for_groups<S: AsRef<str>>(
    groups: &[S],
) -> Result<Vec<&'static str>, ServiceGroupError> {
    groups.iter().try_fold(vec![], |mut services, group| {
        services.extend(services_for_group(group.as_ref())?);
        Ok(services)
    })
}

#[must_use]
pub fn validate_service(service: &str) -> bool {
    SERVICES_FOR_GROUP
        .iter()
        .any(|(_, services)| services.iter().any(|s| *s == service))
}
