use crate::error::BumpError;
use crate::types::bump::BumpKind;

/// Computes the version that follows `current` for the given bump.
///
/// `current` must be a plain `x.y.z` triple of non-negative integers.
/// Lower components are reset to zero on a major or minor bump.
pub fn compute_next_version(current: &str, kind: BumpKind) -> Result<String, BumpError> {
    let malformed = || BumpError::MalformedVersion {
        version: current.to_string(),
    };

    let parts = current
        .split('.')
        .map(parse_component)
        .collect::<Option<Vec<u64>>>()
        .ok_or_else(malformed)?;
    let &[major, minor, patch] = parts.as_slice() else {
        return Err(malformed());
    };

    let next = match kind {
        BumpKind::Major => (major.checked_add(1).ok_or_else(malformed)?, 0, 0),
        BumpKind::Minor => (major, minor.checked_add(1).ok_or_else(malformed)?, 0),
        BumpKind::Patch => (major, minor, patch.checked_add(1).ok_or_else(malformed)?),
    };

    Ok(format!("{}.{}.{}", next.0, next.1, next.2))
}

// `u64::from_str` accepts a leading '+', which is not part of a version.
fn parse_component(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<u64>().ok()
}
