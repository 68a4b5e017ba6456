//! Typed bitmask sets over a vocabulary
//!
//! A [`FlagSet`] is the storage encoding of set membership: each vocabulary
//! entry owns one bit and a set is the OR of its members' bits. The kind
//! parameter keeps resource-type sets and error-class sets from being mixed.

use crate::kind::{ErrorClasses, ResourceTypes, VocabularyKind};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;
use std::ops::{BitOr, BitOrAssign};

/// A single vocabulary flag (exactly one bit set)
pub type Flag = u32;

/// Set of flags drawn from the vocabulary tagged by `K`
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FlagSet<K> {
    bits: Flag,
    _kind: PhantomData<K>,
}

/// Resource types an error report concerns
pub type ResourceTypeSet = FlagSet<ResourceTypes>;

/// Error classes prescribed to an error report
pub type ErrorClassSet = FlagSet<ErrorClasses>;

impl<K> FlagSet<K> {
    /// The set with no members
    pub const fn empty() -> Self {
        Self::from_bits(0)
    }

    /// Wrap a raw mask, e.g. one read back from storage
    pub const fn from_bits(bits: Flag) -> Self {
        Self {
            bits,
            _kind: PhantomData,
        }
    }

    /// The raw mask
    pub const fn bits(self) -> Flag {
        self.bits
    }

    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Number of set bits
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Whether every bit of `flag` is set. The zero flag is never contained.
    pub const fn contains(self, flag: Flag) -> bool {
        flag != 0 && self.bits & flag == flag
    }

    /// A new set with `flag` added
    #[must_use]
    pub const fn with(self, flag: Flag) -> Self {
        Self::from_bits(self.bits | flag)
    }

    /// A new set holding the members of both sets
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self::from_bits(self.bits | other.bits)
    }

    /// Each set bit as its own flag, lowest first
    pub fn iter(self) -> impl Iterator<Item = Flag> {
        (0..Flag::BITS)
            .map(|shift| -> Flag { 1 << shift })
            .filter(move |&flag| self.bits & flag != 0)
    }
}

impl<K: VocabularyKind> fmt::Debug for FlagSet<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlagSet<{}>({:#b})", K::KIND, self.bits)
    }
}

impl<K> BitOr for FlagSet<K> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl<K> BitOr<Flag> for FlagSet<K> {
    type Output = Self;

    fn bitor(self, rhs: Flag) -> Self {
        self.with(rhs)
    }
}

impl<K> BitOrAssign<Flag> for FlagSet<K> {
    fn bitor_assign(&mut self, rhs: Flag) {
        self.bits |= rhs;
    }
}

impl<K> FromIterator<Flag> for FlagSet<K> {
    fn from_iter<I: IntoIterator<Item = Flag>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl<K> Serialize for FlagSet<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.bits)
    }
}

impl<'de, K> Deserialize<'de> for FlagSet<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Flag::deserialize(deserializer).map(Self::from_bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set() {
        let set = ResourceTypeSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.bits(), 0);
        assert_eq!(set, ResourceTypeSet::default());
    }

    #[test]
    fn test_with_is_idempotent() {
        let once = ErrorClassSet::empty().with(4);
        let twice = once.with(4);
        assert_eq!(once, twice);
        assert_eq!(twice.len(), 1);
    }

    #[test]
    fn test_union_is_order_independent() {
        let a = ResourceTypeSet::from_bits(0b01);
        let b = ResourceTypeSet::from_bits(0b10);
        assert_eq!(a | b, b | a);
        assert_eq!((a | b).bits(), 0b11);
    }

    #[test]
    fn test_contains() {
        let set = ErrorClassSet::from_bits(0b101);
        assert!(set.contains(1));
        assert!(!set.contains(2));
        assert!(set.contains(4));
        assert!(set.contains(0b101));
        assert!(!set.contains(0));
    }

    #[test]
    fn test_iter_lowest_first() {
        let set = ErrorClassSet::from_bits(0b1010_0001);
        let flags: Vec<Flag> = set.iter().collect();
        assert_eq!(flags, vec![1, 32, 128]);
    }

    #[test]
    fn test_iter_high_bit() {
        let set = ResourceTypeSet::from_bits(1 << 31);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![1 << 31]);
    }

    #[test]
    fn test_from_iterator_and_bitor_assign() {
        let collected: ResourceTypeSet = [1, 2, 2].into_iter().collect();
        let mut accumulated = ResourceTypeSet::empty();
        accumulated |= 2;
        accumulated |= 1;
        assert_eq!(collected, accumulated);
    }

    #[test]
    fn test_debug_names_the_vocabulary() {
        let set = ErrorClassSet::from_bits(0b10);
        assert_eq!(format!("{:?}", set), "FlagSet<error class>(0b10)");
    }

    #[test]
    fn test_serializes_as_plain_mask() {
        let set = ResourceTypeSet::from_bits(3);
        assert_eq!(serde_json::to_string(&set).unwrap(), "3");
        let back: ResourceTypeSet = serde_json::from_str("3").unwrap();
        assert_eq!(back, set);
    }
}
