use alloc::{boxed::Box, vec};
use core::{
    hash::{Hash, Hasher},
    mem,
    num::NonZeroU32,
};

use apmath_internals::*;

/// The discriminant of this union-like storage is derivable from the
/// bitwidth: a single-limb integer is always `Inline` and a multi-limb
/// integer is always `Heap` with a buffer of exactly `regular_limbs(w)`
/// limbs. Every constructor and width-changing operation upholds this.
pub(crate) enum Storage {
    Inline(Limb),
    Heap(Box<[Limb]>),
}

impl Storage {
    fn zeroed(len: usize) -> Storage {
        if len == 1 {
            Storage::Inline(0)
        } else {
            Storage::Heap(vec![0; len].into_boxed_slice())
        }
    }

    #[inline]
    fn as_slice(&self) -> &[Limb] {
        match self {
            Storage::Inline(limb) => core::slice::from_ref(limb),
            Storage::Heap(limbs) => limbs,
        }
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [Limb] {
        match self {
            Storage::Inline(limb) => core::slice::from_mut(limb),
            Storage::Heap(limbs) => limbs,
        }
    }
}

/// An arbitrary width integer with manually controlled bitwidth. The value
/// lives in `Z/2^w Z`: all arithmetic is wrapping, and anything carried or
/// shifted past bit `w - 1` is discarded. Small integers are stored inline,
/// anything wider than one limb owns a heap buffer.
///
/// Bits above the declared width in the most significant limb are kept
/// cleared at every public boundary, so two values of equal bitwidth are
/// equal exactly when their limb views are equal.
///
/// ```
/// use apmath_core::ApInt;
///
/// let mut x = ApInt::from_u64(3, 100);
/// x.mul(&ApInt::from_u64(5, 100)).sub(&ApInt::from_u64(1, 100));
/// assert_eq!(x, ApInt::from_u64(14, 100));
/// assert_eq!(x.to_string_radix(16), "E");
/// ```
pub struct ApInt {
    bw: NonZeroU32,
    storage: Storage,
}

/// The constant the limb hash fold is seeded and salted with
const GOLDEN: u64 = 0x9e37_79b9_7f4a_7c15;

impl ApInt {
    /// Checks a declared bitwidth at a construction or width-change boundary
    ///
    /// # Panics
    ///
    /// If `w == 0` or `w > MAX_BITWIDTH`
    #[track_caller]
    pub(crate) fn check_width(w: usize) -> NonZeroU32 {
        assert!(
            w <= MAX_BITWIDTH,
            "tried to construct an `ApInt` with a bitwidth of {w} which exceeds `MAX_BITWIDTH`"
        );
        match NonZeroU32::new(w as u32) {
            None => panic!("tried to construct an `ApInt` with an invalid bitwidth of 0"),
            Some(w) => w,
        }
    }

    /// Zero-value construction with bitwidth `w`
    pub fn zero(w: usize) -> Self {
        let bw = Self::check_width(w);
        ApInt {
            bw,
            storage: Storage::zeroed(regular_limbs(w)),
        }
    }

    /// Constructs from `value mod 2^w` with bitwidth `w`
    pub fn from_u64(value: u64, w: usize) -> Self {
        let mut x = Self::zero(w);
        *x.first_mut() = value;
        x.clear_unused_bits();
        x
    }

    /// Constructs from a little-endian limb view with bitwidth `w`. Up to
    /// `ceil(w/64)` limbs are copied; missing limbs are zero and bits beyond
    /// `w` are discarded.
    pub fn from_limbs(limbs: &[Limb], w: usize) -> Self {
        let mut x = Self::zero(w);
        let n = limbs.len().min(x.len());
        x.limbs_mut()[..n].copy_from_slice(&limbs[..n]);
        x.clear_unused_bits();
        x
    }

    /// Constructs a bitwidth 1 boolean constant
    pub fn from_bool(value: bool) -> Self {
        Self::from_u64(value as u64, 1)
    }

    /// Unsigned-minimum-value (zero) construction with bitwidth `w`
    pub fn umin(w: usize) -> Self {
        Self::zero(w)
    }

    /// Unsigned-maximum-value construction with bitwidth `w`
    pub fn umax(w: usize) -> Self {
        let mut x = Self::zero(w);
        for limb in x.limbs_mut() {
            *limb = MAX;
        }
        x.clear_unused_bits();
        x
    }

    /// Signed-maximum-value construction with bitwidth `w`
    pub fn smax(w: usize) -> Self {
        let mut x = Self::umax(w);
        let extra = x.extra();
        if extra == 0 {
            *x.last_mut() = MAX >> 1;
        } else {
            *x.last_mut() = top_limb_mask(w) >> 1;
        }
        x
    }

    /// Signed-minimum-value construction with bitwidth `w`, the value with
    /// only the sign bit set
    pub fn smin(w: usize) -> Self {
        let mut x = Self::zero(w);
        let extra = x.extra();
        if extra == 0 {
            *x.last_mut() = 1 << (BITS - 1);
        } else {
            *x.last_mut() = 1 << (extra - 1);
        }
        x
    }

    /// The bitwidth of this integer
    #[inline]
    #[must_use]
    pub fn bitwidth(&self) -> usize {
        self.bw.get() as usize
    }

    /// The number of limbs backing this integer, `ceil(bitwidth/64)`
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        regular_limbs(self.bitwidth())
    }

    /// The number of live bits in the most significant limb, except that a
    /// full top limb maps to 0
    #[inline]
    pub(crate) fn extra(&self) -> usize {
        extra(self.bitwidth())
    }

    /// The number of dead bits in the most significant limb
    #[inline]
    pub(crate) fn unused(&self) -> usize {
        if self.extra() == 0 {
            0
        } else {
            BITS - self.extra()
        }
    }

    /// Little-endian view over the limbs. The view is stable for a given
    /// bitwidth and together with `bitwidth()` fully describes the value.
    #[inline]
    #[must_use]
    pub fn limbs(&self) -> &[Limb] {
        self.storage.as_slice()
    }

    #[inline]
    pub(crate) fn limbs_mut(&mut self) -> &mut [Limb] {
        self.storage.as_mut_slice()
    }

    /// The limb at `index`
    ///
    /// # Panics
    ///
    /// If `index >= self.len()`
    #[track_caller]
    #[must_use]
    pub fn limb(&self, index: usize) -> Limb {
        assert!(
            index < self.len(),
            "limb index {index} out of range for an `ApInt` of {} limbs",
            self.len()
        );
        self.limbs()[index]
    }

    #[inline]
    pub(crate) fn first(&self) -> Limb {
        self.limbs()[0]
    }

    #[inline]
    pub(crate) fn first_mut(&mut self) -> &mut Limb {
        &mut self.limbs_mut()[0]
    }

    #[inline]
    pub(crate) fn last(&self) -> Limb {
        *self.limbs().last().unwrap()
    }

    #[inline]
    pub(crate) fn last_mut(&mut self) -> &mut Limb {
        self.limbs_mut().last_mut().unwrap()
    }

    /// Clears the bits in the most significant limb above the declared
    /// bitwidth. Every mutating operation ends with this.
    #[inline]
    pub(crate) fn clear_unused_bits(&mut self) {
        let mask = top_limb_mask(self.bitwidth());
        *self.last_mut() &= mask;
    }

    /// Sets all live bits at positions `from..bitwidth()` to one. Used for
    /// sign extension fills.
    pub(crate) fn fill_ones_from(&mut self, from: usize) {
        let limbs = from / BITS;
        let bits = from % BITS;
        let len = self.len();
        let x = self.limbs_mut();
        x[limbs] |= MAX << bits;
        for i in (limbs + 1)..len {
            x[i] = MAX;
        }
        self.clear_unused_bits();
    }

    /// Replaces the storage with one of `new_len` limbs, copying over as
    /// many limbs as both sizes allow and zero filling the rest. The caller
    /// updates the bitwidth and re-masks.
    pub(crate) fn resize_storage(&mut self, new_len: usize) {
        if new_len == self.len() {
            return
        }
        let mut storage = Storage::zeroed(new_len);
        let n = new_len.min(self.len());
        storage.as_mut_slice()[..n].copy_from_slice(&self.limbs()[..n]);
        self.storage = storage;
    }

    pub(crate) fn set_bitwidth(&mut self, bw: NonZeroU32) {
        self.bw = bw;
    }

    /// Guards the equal-bitwidth precondition of the binary operations
    ///
    /// # Panics
    ///
    /// If the bitwidths differ
    #[inline]
    #[track_caller]
    pub(crate) fn assert_same_width(&self, rhs: &Self) {
        assert!(
            self.bitwidth() == rhs.bitwidth(),
            "mismatched `ApInt` bitwidths: {} and {}",
            self.bitwidth(),
            rhs.bitwidth()
        );
    }

    /// Swaps the values of `self` and `rhs`, headers and storage together
    pub fn swap(&mut self, rhs: &mut Self) {
        mem::swap(self, rhs);
    }

    /// Computes a deterministic 64 bit hash over the limbs.
    ///
    /// Note that this is meant for use with associative containers and is
    /// not a cryptographic hash.
    #[must_use]
    pub fn hash_value(&self) -> u64 {
        let mut seed = GOLDEN;
        for limb in self.limbs() {
            seed ^= limb
                .wrapping_add(GOLDEN)
                .wrapping_add(seed << 6)
                .wrapping_add(seed >> 2);
        }
        seed
    }
}

/// Duplicates the heap buffer when present. `clone_from` reuses the existing
/// buffer whenever the limb counts agree.
impl Clone for ApInt {
    fn clone(&self) -> Self {
        let mut x = ApInt::zero(self.bitwidth());
        x.limbs_mut().copy_from_slice(self.limbs());
        x
    }

    fn clone_from(&mut self, source: &Self) {
        if self.len() == source.len() {
            self.bw = source.bw;
            self.limbs_mut().copy_from_slice(source.limbs());
        } else {
            *self = source.clone();
        }
    }
}

impl Default for ApInt {
    /// A zero value of bitwidth 64
    fn default() -> Self {
        ApInt::zero(64)
    }
}

impl From<bool> for ApInt {
    fn from(value: bool) -> Self {
        ApInt::from_bool(value)
    }
}

impl Hash for ApInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.bitwidth());
        state.write_u64(self.hash_value());
    }
}

#[cfg(feature = "zeroize_support")]
impl zeroize::Zeroize for ApInt {
    fn zeroize(&mut self) {
        self.limbs_mut().zeroize()
    }
}
