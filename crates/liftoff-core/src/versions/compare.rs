//! Version comparison for package index results

use semver::{Prerelease, Version};
use std::cmp::Ordering;

/// Qualifiers that mark a build as unreleased
const UNSTABLE_MARKERS: &[&str] = &["snapshot", "alpha", "beta", "rc", "preview", "eap"];

/// Parse a Maven-style version as semver, padding missing components
/// ("1.5" becomes "1.5.0"). Returns None for versions with more than three
/// numeric components or non-numeric cores.
pub fn parse_lenient(version_str: &str) -> Option<Version> {
    let cleaned = version_str.strip_prefix('v').unwrap_or(version_str);
    let (core, qualifier) = match cleaned.find('-') {
        Some(idx) => (&cleaned[..idx], Some(&cleaned[idx + 1..])),
        None => (cleaned, None),
    };

    let components = core.split('.').count();
    if components == 0 || components > 3 {
        return None;
    }
    let mut padded = core.to_string();
    for _ in components..3 {
        padded.push_str(".0");
    }
    if let Some(qualifier) = qualifier {
        padded.push('-');
        padded.push_str(qualifier);
    }
    Version::parse(&padded).ok()
}

/// Whether a version looks like a release rather than a snapshot or pre-release
pub fn is_stable(version_str: &str) -> bool {
    let lower = version_str.to_ascii_lowercase();
    !lower
        .split(['-', '.', '_'])
        .any(|token| {
            UNSTABLE_MARKERS.iter().any(|m| token.starts_with(m))
                || (token.len() > 1
                    && token.starts_with('m')
                    && token[1..].chars().all(|c| c.is_ascii_digit()))
        })
}

/// Where a qualifier places a build relative to its bare release.
/// Variant order is the sort order.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Qualifier {
    PreRelease(Prerelease),
    Release,
    /// Maven post-release qualifiers such as `rev10`: label, then number
    PostRelease(String, u64),
}

fn qualifier(version: &Version, raw: Option<&str>) -> Qualifier {
    let Some(raw) = raw else {
        return Qualifier::Release;
    };
    if !is_stable(raw) {
        return Qualifier::PreRelease(version.pre.clone());
    }
    let lower = raw.to_ascii_lowercase();
    let label = lower.trim_end_matches(|c: char| c.is_ascii_digit());
    let number = lower[label.len()..].parse().unwrap_or(0);
    Qualifier::PostRelease(label.to_string(), number)
}

fn sort_key(version_str: &str) -> Option<(u64, u64, u64, Qualifier)> {
    let version = parse_lenient(version_str)?;
    let raw = version_str.split_once('-').map(|(_, q)| q);
    let qualifier = qualifier(&version, raw);
    Some((version.major, version.minor, version.patch, qualifier))
}

/// Order two versions, newest last. Unstable qualifiers sort below the bare
/// release and any other qualifier (`-rev2`) above it, numbered suffixes
/// compared numerically. Falls back to string comparison when either side
/// is not parseable.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    match (sort_key(a), sort_key(b)) {
        (Some(ka), Some(kb)) => ka.cmp(&kb),
        _ => a.cmp(b),
    }
}
