//! Named owners and the order in which they take turns advancing the grid.

use std::collections::BTreeSet;

use lifeclaim_types::OwnerId;

use crate::config::ConfigError;

/// An owner: an opaque identity paired with a display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    /// Identity stamped onto the cells this owner raises.
    pub id: OwnerId,
    /// Human-readable name, unique within a roster.
    pub name: String,
}

impl Owner {
    /// Create an owner with a freshly minted identity.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: OwnerId::new(),
            name: name.into(),
        }
    }
}

/// Ordered, non-empty set of owners with a round-robin cursor.
#[derive(Debug, Clone)]
pub struct OwnerRoster {
    owners: Vec<Owner>,
    /// Index of the owner who takes the next turn.
    cursor: usize,
}

impl OwnerRoster {
    /// Build a roster from owner names, in turn order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoOwners`] for an empty list, or
    /// [`ConfigError::DuplicateOwner`] if a name repeats.
    pub fn from_names<'a, I>(names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen = BTreeSet::new();
        let mut owners = Vec::new();
        for name in names {
            if !seen.insert(name) {
                return Err(ConfigError::DuplicateOwner {
                    name: name.to_owned(),
                });
            }
            owners.push(Owner::new(name));
        }
        if owners.is_empty() {
            return Err(ConfigError::NoOwners);
        }
        Ok(Self { owners, cursor: 0 })
    }

    /// Return the owner whose turn it is and move the cursor to the next.
    ///
    /// Wraps around after the last owner.
    pub fn take_turn(&mut self) -> Option<&Owner> {
        let current = self.cursor;
        self.cursor = current
            .checked_add(1)
            .and_then(|next| next.checked_rem(self.owners.len()))
            .unwrap_or(0);
        self.owners.get(current)
    }

    /// The owner whose turn is next, without advancing.
    pub fn peek(&self) -> Option<&Owner> {
        self.owners.get(self.cursor)
    }

    /// Look an owner up by name.
    pub fn by_name(&self, name: &str) -> Option<&Owner> {
        self.owners.iter().find(|owner| owner.name == name)
    }

    /// Look an owner up by identity.
    pub fn by_id(&self, id: OwnerId) -> Option<&Owner> {
        self.owners.iter().find(|owner| owner.id == id)
    }

    /// All owners in turn order.
    pub fn owners(&self) -> &[Owner] {
        &self.owners
    }

    /// Number of owners.
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    /// Always `false` for a roster built by [`OwnerRoster::from_names`].
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}
