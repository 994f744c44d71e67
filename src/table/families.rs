use std::collections::{BTreeMap, btree_map};

use tracing::debug;

use crate::{
    column_family::{FamilyDescriptor, column},
    util::{Result, Slice, Status},
};

/// Column families of a table, keyed by family name.
///
/// Lookups accept either a bare family name or a qualified
/// `family:qualifier` column; only the family portion is used as the key.
/// Iteration is in ascending name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FamilyRegistry {
    families: BTreeMap<Slice, FamilyDescriptor>,
}

impl FamilyRegistry {
    pub fn new() -> Self {
        FamilyRegistry::default()
    }

    /// Adds `family`, replacing any family with the same name.
    pub fn add(&mut self, family: FamilyDescriptor) -> Result<()> {
        if family.name.is_empty() {
            return Err(Status::invalid_argument("Family name cannot be empty"));
        }
        debug!(family = %family.name, "add family");
        self.families.insert(family.name.clone(), family);
        Ok(())
    }

    /// Inserts without validating the name.
    pub(crate) fn insert(&mut self, family: FamilyDescriptor) {
        self.families.insert(family.name.clone(), family);
    }

    pub fn contains(&self, column: &[u8]) -> bool {
        self.families.contains_key(column::family_of(column))
    }

    pub fn get(&self, column: &[u8]) -> Option<&FamilyDescriptor> {
        self.families.get(column::family_of(column))
    }

    pub fn remove(&mut self, column: &[u8]) -> Option<FamilyDescriptor> {
        let removed = self.families.remove(column::family_of(column));
        if let Some(family) = &removed {
            debug!(family = %family.name, "remove family");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    pub fn clear(&mut self) {
        self.families.clear();
    }

    pub fn iter(&self) -> btree_map::Values<'_, Slice, FamilyDescriptor> {
        self.families.values()
    }
}

impl<'a> IntoIterator for &'a FamilyRegistry {
    type Item = &'a FamilyDescriptor;
    type IntoIter = btree_map::Values<'a, Slice, FamilyDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
