use fnv::FnvHasher;
use rand::{SeedableRng, XorShiftRng};
use std::{
    collections::HashSet,
    hash::{BuildHasherDefault, Hash}
};

pub type FnvHashSet<T> = HashSet<T, BuildHasherDefault<FnvHasher>>;

/// A hash set with room for `capacity` items, hashed with FNV which is quick for small keys
/// like grid coordinates.
pub fn fnv_hashset<T: Hash + Eq>(capacity: usize) -> FnvHashSet<T> {
    let fnv = BuildHasherDefault::<FnvHasher>::default();
    HashSet::<T, _>::with_capacity_and_hasher(capacity, fnv)
}

/// A fast, deterministic random number generator for repeatable maze generation.
///
/// XorShift must not be seeded with all zeros, so the user seed only fills the first word.
pub fn seeded_rng(seed: u32) -> XorShiftRng {
    XorShiftRng::from_seed([seed, 0x193a_6754, 0xa8a7_d469, 0x9783_0e05])
}
