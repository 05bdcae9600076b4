//! # Memory-mapped registers
//!
//! [`Register`] is the single choke point between the drivers and the memory
//! bus. It wraps one fixed, word aligned address and performs every access
//! with a volatile load or store, so accesses are neither elided, merged nor
//! reordered with respect to other volatile accesses.
//!
//! A `Register` is a unique handle: it is not `Clone`, and the drivers create
//! exactly one per physical register. Writes take `&self` so that several
//! bitfields can be bound to the same register at once; the handle is not
//! `Sync`, so sharing it with another execution context requires moving the
//! owning driver there.
//!
//! ## Concurrent modification
//!
//! [`modify`](Register::modify), the bit helpers and every bitfield `set` are
//! read-modify-write sequences. Two contexts updating different fields of the
//! same register can lose one of the updates. Serializing them is up to the
//! caller, for example by running the update inside
//! [`critical_section::with`] and using [`modify_cs`](Register::modify_cs).

use core::fmt;

use critical_section::CriticalSection;
use vcell::VolatileCell;

use crate::access::Access;
use crate::field::{Field, FieldRef};

/// A 32-bit memory-mapped register at a fixed address
pub struct Register {
    cell: *const VolatileCell<u32>,
}

// The handle may move to the context that owns the peripheral.
unsafe impl Send for Register {}

impl Register {
    /// Creates the handle for the register at `address`
    ///
    /// # Panics
    ///
    /// Panics if `address` is not word aligned. In const context this is a
    /// compile error.
    ///
    /// # Safety
    ///
    /// `address` must be a valid 32-bit register (or memory word) for as long
    /// as the handle lives, and no other `Register` may be created for it.
    #[inline(always)]
    pub const unsafe fn new(address: usize) -> Self {
        assert!(address % 4 == 0, "register address is not word aligned");
        Register {
            cell: address as *const VolatileCell<u32>,
        }
    }

    /// Creates the handle for the word behind `ptr`
    ///
    /// # Safety
    ///
    /// See [`Register::new`].
    #[inline(always)]
    pub unsafe fn from_ptr(ptr: *mut u32) -> Self {
        Self::new(ptr as usize)
    }

    /// Physical address of the register
    #[inline(always)]
    pub fn address(&self) -> usize {
        self.cell as usize
    }

    /// Reads the whole word with a single volatile load
    #[inline(always)]
    pub fn read(&self) -> u32 {
        unsafe { (*self.cell).get() }
    }

    /// Overwrites the whole word with a single volatile store
    #[inline(always)]
    pub fn write(&self, value: u32) {
        unsafe { (*self.cell).set(value) }
    }

    /// Reads the register, passes the word to `f` and writes back the result
    #[inline]
    pub fn modify<F>(&self, f: F)
    where
        F: FnOnce(u32) -> u32,
    {
        let bits = self.read();
        self.write(f(bits));
    }

    /// [`modify`](Self::modify) inside a critical section held by the caller
    #[inline]
    pub fn modify_cs<F>(&self, _cs: CriticalSection<'_>, f: F)
    where
        F: FnOnce(u32) -> u32,
    {
        self.modify(f)
    }

    /// Sets the bits specified by `mask` (read-modify-write)
    #[inline]
    pub fn set_bits(&self, mask: u32) {
        self.modify(|bits| bits | mask)
    }

    /// Clears the bits specified by `mask` (read-modify-write)
    #[inline]
    pub fn clear_bits(&self, mask: u32) {
        self.modify(|bits| bits & !mask)
    }

    /// Toggles the bits specified by `mask` (read-modify-write)
    #[inline]
    pub fn toggle_bits(&self, mask: u32) {
        self.modify(|bits| bits ^ mask)
    }

    /// Binds a statically declared field to this register
    #[inline(always)]
    pub fn field<A: Access>(&self, field: Field<A>) -> FieldRef<'_, A> {
        field.bind(self)
    }
}

impl fmt::Debug for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Register({:#010x})", self.address())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Register {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Register({=usize:#x})", self.address())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_write_whole_word() {
        let mut word = 0u32;
        let reg = unsafe { Register::from_ptr(&mut word) };

        reg.write(0xDEAD_BEEF);
        assert_eq!(reg.read(), 0xDEAD_BEEF);
        reg.write(0);
        assert_eq!(reg.read(), 0);
    }

    #[test]
    fn write_back_of_read_is_idempotent() {
        let mut word = 0x1234_5678u32;
        let reg = unsafe { Register::from_ptr(&mut word) };

        reg.write(reg.read());
        assert_eq!(reg.read(), 0x1234_5678);
    }

    #[test]
    fn bit_helpers() {
        let mut word = 0b1010u32;
        let reg = unsafe { Register::from_ptr(&mut word) };

        reg.set_bits(0b0101);
        assert_eq!(reg.read(), 0b1111);
        reg.clear_bits(0b0011);
        assert_eq!(reg.read(), 0b1100);
        reg.toggle_bits(0b1001);
        assert_eq!(reg.read(), 0b0101);
        reg.modify(|bits| bits << 4);
        assert_eq!(reg.read(), 0b0101_0000);
    }

    #[test]
    fn modify_inside_critical_section() {
        let mut word = 0u32;
        let reg = unsafe { Register::from_ptr(&mut word) };

        critical_section::with(|cs| reg.modify_cs(cs, |bits| bits | 0x8000_0000));
        assert_eq!(reg.read(), 0x8000_0000);
    }

    #[test]
    fn reports_address() {
        let mut word = 0u32;
        let ptr: *mut u32 = &mut word;
        let reg = unsafe { Register::from_ptr(ptr) };
        assert_eq!(reg.address(), ptr as usize);
    }

    #[test]
    #[should_panic(expected = "not word aligned")]
    fn rejects_unaligned_address() {
        let _reg = unsafe { Register::new(0x400F_E61E) };
    }
}
