use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A trimmed, non-empty participant name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Participant(String);

impl Participant {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn sort_key(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Participant {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Participant {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Participant {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// How two trimmed names are compared when removing duplicates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DedupPolicy {
    #[default]
    CaseInsensitive,
    CaseSensitive,
}

impl DedupPolicy {
    fn key(self, name: &str) -> String {
        match self {
            DedupPolicy::CaseInsensitive => name.to_lowercase(),
            DedupPolicy::CaseSensitive => name.to_string(),
        }
    }
}

/// Deduplicated roster, sorted case-insensitively.
///
/// Only [`sanitize`] and [`sanitize_with`] build one, so every instance
/// holds no blank entries and no duplicates under its policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParticipantSet(Vec<Participant>);

impl ParticipantSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Participant> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Participant] {
        &self.0
    }

    pub fn names(&self) -> Vec<String> {
        self.0.iter().map(|p| p.as_str().to_string()).collect()
    }
}

impl<'a> IntoIterator for &'a ParticipantSet {
    type Item = &'a Participant;
    type IntoIter = std::slice::Iter<'a, Participant>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Sanitize with the default (case-insensitive) dedup policy
pub fn sanitize<I, S>(raw_names: I) -> ParticipantSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    sanitize_with(raw_names, DedupPolicy::default())
}

/// Trim, drop blanks, keep the first spelling of each duplicate, then sort
/// case-insensitively. Ties keep their input order.
pub fn sanitize_with<I, S>(raw_names: I, policy: DedupPolicy) -> ParticipantSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut names: Vec<Participant> = raw_names
        .into_iter()
        .filter_map(|raw| {
            let trimmed = raw.as_ref().trim();
            if trimmed.is_empty() || !seen.insert(policy.key(trimmed)) {
                return None;
            }
            Some(Participant(trimmed.to_string()))
        })
        .collect();

    // stable
    names.sort_by_cached_key(Participant::sort_key);

    ParticipantSet(names)
}
