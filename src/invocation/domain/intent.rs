//! Intent and slot value types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Reserved namespace prefix for platform-defined intent names.
const BUILT_IN_PREFIX: &str = "AMAZON.";

/// A recognised user intention within an intent request.
///
/// The name is either caller-defined or one of the platform's reserved
/// built-in names (for example `AMAZON.YesIntent`). Slots carry the named
/// parameters captured alongside the intent; the map keys are unique by
/// construction.
///
/// # Examples
///
/// ```
/// use oratory::invocation::domain::{Intent, Slot};
///
/// let intent = Intent::new("GetZodiacHoroscopeIntent")
///     .with_slot(Slot::new("ZodiacSign").with_value("virgo"));
/// assert!(!intent.is_built_in());
/// assert_eq!(
///     intent.slot("ZodiacSign").and_then(Slot::value),
///     Some("virgo"),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    name: String,
    slots: BTreeMap<String, Slot>,
}

impl Intent {
    /// Creates an intent with no slots.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: BTreeMap::new(),
        }
    }

    /// Adds a slot, keyed by the slot's name. A slot with the same name
    /// replaces the previous entry, keeping keys unique.
    #[must_use]
    pub fn with_slot(mut self, slot: Slot) -> Self {
        self.slots.insert(slot.name().to_owned(), slot);
        self
    }

    /// Replaces the slot map wholesale.
    #[must_use]
    pub fn with_slots(mut self, slots: BTreeMap<String, Slot>) -> Self {
        self.slots = slots;
        self
    }

    /// Returns the intent name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the slot map.
    #[must_use]
    pub const fn slots(&self) -> &BTreeMap<String, Slot> {
        &self.slots
    }

    /// Looks up a slot by name.
    #[must_use]
    pub fn slot(&self, name: &str) -> Option<&Slot> {
        self.slots.get(name)
    }

    /// Returns `true` when the name lives in the platform's reserved
    /// built-in namespace.
    #[must_use]
    pub fn is_built_in(&self) -> bool {
        self.name.starts_with(BUILT_IN_PREFIX)
    }
}

/// A named, possibly-unfilled parameter captured within an intent.
///
/// # Examples
///
/// ```
/// use oratory::invocation::domain::Slot;
///
/// let unfilled = Slot::new("ZodiacSign");
/// assert_eq!(unfilled.value(), None);
///
/// let filled = Slot::new("ZodiacSign").with_value("virgo");
/// assert_eq!(filled.value(), Some("virgo"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

impl Slot {
    /// Creates an unfilled slot.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// Sets the captured value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Returns the slot name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the captured value, or `None` when the slot is unfilled.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}
