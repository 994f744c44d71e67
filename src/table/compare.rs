//! Ordering and equality of table descriptors.
//!
//! Descriptors are ordered by:
//! 1. name, unsigned bytewise
//! 2. number of families
//! 3. families pairwise in name order, first difference wins
//! 4. aggregate hash of the attribute dictionary
//! 5. attribute dictionary entries, in key order
//!
//! Step 5 only decides between descriptors whose attribute hashes collide,
//! so two descriptors compare equal exactly when name, families and
//! attributes all match. Equality is defined as `cmp == Equal`.

use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

use crate::{
    table::{TableDescriptor, codec::TABLE_DESCRIPTOR_VERSION},
    util::hash,
};

impl TableDescriptor {
    /// Stable hash combining the name, encoding version, families and
    /// attributes. Equal descriptors have equal hash codes.
    pub fn hash_code(&self) -> u32 {
        let mut result = hash::hash_bytes(self.name.data());
        result ^= TABLE_DESCRIPTOR_VERSION as u32;
        for family in &self.families {
            result ^= family.hash_code();
        }
        result ^ self.values.hash_code()
    }

    fn compare_families(&self, other: &Self) -> Ordering {
        self.families
            .len()
            .cmp(&other.families.len())
            .then_with(|| {
                self.families
                    .iter()
                    .zip(other.families.iter())
                    .map(|(a, b)| a.cmp(b))
                    .find(|ord| ord.is_ne())
                    .unwrap_or(Ordering::Equal)
            })
    }

    fn compare_values(&self, other: &Self) -> Ordering {
        self.values
            .hash_code()
            .cmp(&other.values.hash_code())
            .then_with(|| self.values.cmp(&other.values))
    }
}

impl Ord for TableDescriptor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.compare_families(other))
            .then_with(|| self.compare_values(other))
    }
}

impl PartialOrd for TableDescriptor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for TableDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TableDescriptor {}

impl Hash for TableDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash_code());
    }
}
