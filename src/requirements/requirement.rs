//! Requirement definitions and groupings.
//!
//! A [`Requirement`] is one named asynchronous check. Requirements are
//! grouped into toggleable [`RequirementList`]s, and all groups relevant to
//! a single command invocation live in a [`CommandRequirements`] mapping.

use std::fmt;
use std::future::Future;

use futures::future::BoxFuture;
use futures::FutureExt;

/// What a check settles to: optional informational text on success, a
/// description of what is missing on failure.
pub type CheckOutcome = std::result::Result<Option<String>, String>;

/// A zero-argument asynchronous check, consumed when it runs.
pub type CheckFn = Box<dyn FnOnce() -> BoxFuture<'static, CheckOutcome> + Send>;

/// A named environment check.
pub struct Requirement {
    /// Human-readable label, also the identity used in reports.
    pub title: String,
    /// Text used when the check passes without its own message.
    pub fulfilled_message: Option<String>,
    /// Text used when the check fails without its own message.
    pub unfulfilled_message: Option<String>,
    /// Text appended to the report message whatever the outcome.
    pub supplemental_message: Option<String>,
    check: CheckFn,
}

impl Requirement {
    /// Create a requirement from a title and an async check.
    pub fn new<F, Fut>(title: impl Into<String>, check: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = CheckOutcome> + Send + 'static,
    {
        Self {
            title: title.into(),
            fulfilled_message: None,
            unfulfilled_message: None,
            supplemental_message: None,
            check: Box::new(move || check().boxed()),
        }
    }

    /// Set the message used when the check passes silently.
    pub fn with_fulfilled_message(mut self, msg: impl Into<String>) -> Self {
        self.fulfilled_message = Some(msg.into());
        self
    }

    /// Set the message used when the check fails silently.
    pub fn with_unfulfilled_message(mut self, msg: impl Into<String>) -> Self {
        self.unfulfilled_message = Some(msg.into());
        self
    }

    /// Set text that is appended to the report message in every case.
    pub fn with_supplemental_message(mut self, msg: impl Into<String>) -> Self {
        self.supplemental_message = Some(msg.into());
        self
    }

    /// Split into the check and the static report text.
    pub(crate) fn into_parts(self) -> (CheckFn, RequirementText) {
        (
            self.check,
            RequirementText {
                title: self.title,
                fulfilled: self.fulfilled_message,
                unfulfilled: self.unfulfilled_message,
                supplemental: self.supplemental_message,
            },
        )
    }
}

impl fmt::Debug for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Requirement")
            .field("title", &self.title)
            .field("fulfilled_message", &self.fulfilled_message)
            .field("unfulfilled_message", &self.unfulfilled_message)
            .field("supplemental_message", &self.supplemental_message)
            .finish_non_exhaustive()
    }
}

/// Static report text of a requirement, kept once its check has been taken.
#[derive(Debug, Clone)]
pub(crate) struct RequirementText {
    pub title: String,
    pub fulfilled: Option<String>,
    pub unfulfilled: Option<String>,
    pub supplemental: Option<String>,
}

/// A toggleable group of requirements.
#[derive(Debug)]
pub struct RequirementList {
    /// Requirements in display order.
    pub requirements: Vec<Requirement>,
    /// When false, none of the requirements run or appear in results.
    pub enabled: bool,
}

impl RequirementList {
    /// Create an enabled list.
    pub fn new(requirements: Vec<Requirement>) -> Self {
        Self {
            requirements,
            enabled: true,
        }
    }

    /// Create a list with an explicit enabled flag.
    pub fn with_enabled(requirements: Vec<Requirement>, enabled: bool) -> Self {
        Self {
            requirements,
            enabled,
        }
    }

    /// Titles of the requirements in this list.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.requirements.iter().map(|r| r.title.as_str())
    }

    /// Number of requirements in this list.
    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    /// Whether this list has no requirements.
    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }
}

/// All requirement groups relevant to one command invocation, keyed by name.
///
/// Iteration follows insertion order. Inserting under an existing key
/// replaces that group in place.
#[derive(Debug, Default)]
pub struct CommandRequirements {
    groups: Vec<(String, RequirementList)>,
}

impl CommandRequirements {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a group, replacing any group already stored under `key`.
    pub fn insert(&mut self, key: impl Into<String>, list: RequirementList) {
        let key = key.into();
        match self.groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = list,
            None => self.groups.push((key, list)),
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, list: RequirementList) -> Self {
        self.insert(key, list);
        self
    }

    /// Look up a group.
    pub fn get(&self, key: &str) -> Option<&RequirementList> {
        self.groups.iter().find(|(k, _)| k == key).map(|(_, l)| l)
    }

    /// Look up a group mutably.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut RequirementList> {
        self.groups
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, l)| l)
    }

    /// Toggle a group. Returns false if no group has that key.
    pub fn set_enabled(&mut self, key: &str, enabled: bool) -> bool {
        match self.get_mut(key) {
            Some(list) => {
                list.enabled = enabled;
                true
            }
            None => false,
        }
    }

    /// Iterate over `(key, list)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RequirementList)> {
        self.groups.iter().map(|(k, l)| (k.as_str(), l))
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether there are no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of requirements that would run.
    pub fn enabled_count(&self) -> usize {
        self.groups
            .iter()
            .filter(|(_, l)| l.enabled)
            .map(|(_, l)| l.len())
            .sum()
    }

    /// Flatten enabled groups, in mapping order, into one sequence.
    pub fn into_enabled_requirements(self) -> Vec<Requirement> {
        self.groups
            .into_iter()
            .filter(|(_, list)| list.enabled)
            .flat_map(|(_, list)| list.requirements)
            .collect()
    }
}
