//! # Bitfields
//!
//! A bitfield is a sub-range of a 32-bit register: a start bit (`offset`), a
//! `width` and an [`AccessMode`]. Descriptors are declared on their own, as
//! constants, and only bound to a concrete [`Register`] when they are used.
//!
//! Two descriptor flavours share the same masking rules:
//!
//! - [`Field<A>`] carries its access mode in the type. Binding it gives a
//!   [`FieldRef`], which only has `get` for readable modes and only has `set`
//!   for writable modes, so writing a status bit does not compile.
//! - [`BitField`] carries its access mode as a value. Binding it gives a
//!   [`Bound`] whose `get`/`set` check the mode and return
//!   [`Error::AccessViolation`] instead.
//!
//! Both are checked when constructed: `offset + width` must not exceed 32
//! bits. Construction is a `const fn`, so an out-of-range `const` declaration
//! is rejected by the compiler and a run-time construction panics.
//!
//! ## Oversized values
//!
//! `set` keeps the low `width` bits of the value and drops the rest.
//! `set_checked` refuses such values with [`Error::OutOfRange`] and leaves the
//! register untouched.
//!
//! ## Example
//!
//! ```
//! use tm4c123_regs::access::{ReadOnly, ReadWrite};
//! use tm4c123_regs::{Field, Register};
//!
//! const ENABLE: Field<ReadWrite> = Field::new(3, 1);
//! const STATUS: Field<ReadOnly> = Field::new(0, 3);
//!
//! let mut word = 0u32;
//! let reg = unsafe { Register::from_ptr(&mut word) };
//!
//! reg.field(ENABLE).set(1);
//! assert_eq!(reg.read(), 0x0000_0008);
//! assert_eq!(reg.field(STATUS).get(), 0);
//! ```

use core::marker::PhantomData;

use crate::access::{Access, AccessMode, Readable, Writable};
use crate::bb;
use crate::register::Register;

/// Bitfield access error
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Write to a read-only field, or read of a write-only field
    AccessViolation {
        /// Declared mode of the field
        mode: AccessMode,
    },
    /// Value does not fit in the field
    OutOfRange {
        /// Rejected value
        value: u32,
        /// Width of the field in bits
        width: u8,
    },
    /// The field cannot be written through the bit-band alias region
    NotBitBandable {
        /// Address of the register holding the field
        address: usize,
    },
}

/// Bitfield descriptor with a run-time access mode
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BitField {
    offset: u8,
    width: u8,
    mode: AccessMode,
}

impl BitField {
    /// Describes `width` bits starting at bit `offset`
    ///
    /// # Panics
    ///
    /// Panics if `width` is zero or the range does not fit in 32 bits.
    pub const fn new(offset: u8, width: u8, mode: AccessMode) -> Self {
        assert!(width > 0, "bitfield is empty");
        assert!(
            offset as u32 + width as u32 <= 32,
            "bitfield exceeds the 32-bit register"
        );
        BitField {
            offset,
            width,
            mode,
        }
    }

    /// Start bit
    #[inline(always)]
    pub const fn offset(&self) -> u8 {
        self.offset
    }

    /// Width in bits
    #[inline(always)]
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Declared access mode
    #[inline(always)]
    pub const fn mode(&self) -> AccessMode {
        self.mode
    }

    /// `width` ones, right aligned
    #[inline(always)]
    pub const fn mask(&self) -> u32 {
        u32::MAX >> (32 - self.width as u32)
    }

    /// The field's bits in register position
    #[inline(always)]
    pub const fn shifted_mask(&self) -> u32 {
        self.mask() << self.offset
    }

    /// Returns `true` if `value` fits in the field without truncation
    #[inline(always)]
    pub const fn fits(&self, value: u32) -> bool {
        value & !self.mask() == 0
    }

    /// Isolates the field in a register word
    #[inline(always)]
    pub const fn extract(&self, word: u32) -> u32 {
        (word >> self.offset) & self.mask()
    }

    /// Replaces the field in a register word, truncating `value` to `width` bits
    #[inline(always)]
    pub const fn insert(&self, word: u32, value: u32) -> u32 {
        (word & !self.shifted_mask()) | ((value & self.mask()) << self.offset)
    }

    /// Binds the descriptor to `register`
    #[inline(always)]
    pub fn bind(self, register: &Register) -> Bound<'_> {
        Bound {
            register,
            field: self,
        }
    }

    fn check_read(&self) -> Result<(), Error> {
        if self.mode.is_readable() {
            Ok(())
        } else {
            Err(Error::AccessViolation { mode: self.mode })
        }
    }

    fn check_write(&self) -> Result<(), Error> {
        if self.mode.is_writable() {
            Ok(())
        } else {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "refused write to {} field at bits {}..{}",
                self.mode,
                self.offset,
                self.offset + self.width
            );
            Err(Error::AccessViolation { mode: self.mode })
        }
    }

    fn check_range(&self, value: u32) -> Result<(), Error> {
        if self.fits(value) {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                value,
                width: self.width,
            })
        }
    }
}

/// A [`BitField`] bound to its register
#[derive(Debug)]
pub struct Bound<'r> {
    register: &'r Register,
    field: BitField,
}

impl<'r> Bound<'r> {
    /// Owning register
    #[inline(always)]
    pub fn register(&self) -> &'r Register {
        self.register
    }

    /// Field descriptor
    #[inline(always)]
    pub fn field(&self) -> BitField {
        self.field
    }

    /// Reads the field
    ///
    /// Fails with [`Error::AccessViolation`] on write-only fields.
    pub fn get(&self) -> Result<u32, Error> {
        self.field.check_read()?;
        Ok(self.field.extract(self.register.read()))
    }

    /// Writes the field, keeping the other bits of the register
    ///
    /// Bits of `value` above the field width are dropped. Fails with
    /// [`Error::AccessViolation`] on read-only fields, in which case the
    /// register is not accessed at all.
    ///
    /// This is a read-modify-write of the whole register and is not atomic
    /// with respect to other execution contexts.
    pub fn set(&self, value: u32) -> Result<(), Error> {
        self.field.check_write()?;
        let field = self.field;
        self.register.modify(|word| field.insert(word, value));
        Ok(())
    }

    /// Like [`set`](Self::set), but values wider than the field fail with
    /// [`Error::OutOfRange`] instead of being truncated
    pub fn set_checked(&self, value: u32) -> Result<(), Error> {
        self.field.check_write()?;
        self.field.check_range(value)?;
        self.set(value)
    }
}

/// Bitfield descriptor with a compile-time access mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field<A> {
    raw: BitField,
    _access: PhantomData<A>,
}

impl<A: Access> Field<A> {
    /// Describes `width` bits starting at bit `offset`
    ///
    /// # Panics
    ///
    /// Panics if `width` is zero or the range does not fit in 32 bits.
    pub const fn new(offset: u8, width: u8) -> Self {
        Field {
            raw: BitField::new(offset, width, A::MODE),
            _access: PhantomData,
        }
    }

    /// Drops the type-level mode, keeping it as a value
    #[inline(always)]
    pub const fn erase(self) -> BitField {
        self.raw
    }

    /// Start bit
    #[inline(always)]
    pub const fn offset(&self) -> u8 {
        self.raw.offset()
    }

    /// Width in bits
    #[inline(always)]
    pub const fn width(&self) -> u8 {
        self.raw.width()
    }

    /// `width` ones, right aligned
    #[inline(always)]
    pub const fn mask(&self) -> u32 {
        self.raw.mask()
    }

    /// Binds the descriptor to `register`
    #[inline(always)]
    pub fn bind(self, register: &Register) -> FieldRef<'_, A> {
        FieldRef {
            register,
            field: self,
        }
    }
}

/// A [`Field`] bound to its register
#[derive(Debug)]
pub struct FieldRef<'r, A> {
    register: &'r Register,
    field: Field<A>,
}

impl<'r, A: Access> FieldRef<'r, A> {
    /// Owning register
    #[inline(always)]
    pub fn register(&self) -> &'r Register {
        self.register
    }

    /// Field descriptor
    #[inline(always)]
    pub fn field(&self) -> Field<A> {
        self.field
    }

    /// Run-time checked view of the same field
    #[inline(always)]
    pub fn erase(&self) -> Bound<'r> {
        self.field.erase().bind(self.register)
    }
}

impl<'r, A: Readable> FieldRef<'r, A> {
    /// Reads the field
    #[inline]
    pub fn get(&self) -> u32 {
        self.field.raw.extract(self.register.read())
    }

    /// Returns `true` if any bit of the field is set
    #[inline]
    pub fn is_set(&self) -> bool {
        self.get() != 0
    }
}

impl<'r, A: Writable> FieldRef<'r, A> {
    /// Writes the field, keeping the other bits of the register
    ///
    /// Bits of `value` above the field width are dropped. This is a
    /// read-modify-write of the whole register and is not atomic with respect
    /// to other execution contexts.
    #[inline]
    pub fn set(&self, value: u32) {
        let field = self.field.raw;
        self.register.modify(|word| field.insert(word, value));
    }

    /// Like [`set`](Self::set), but values wider than the field fail with
    /// [`Error::OutOfRange`] instead of being truncated
    pub fn set_checked(&self, value: u32) -> Result<(), Error> {
        self.field.raw.check_range(value)?;
        self.set(value);
        Ok(())
    }

    /// Writes a one-bit field with a single store to its bit-band alias
    ///
    /// Unlike [`set`](Self::set) this does not read the register, so it
    /// cannot lose a concurrent update of a neighbouring bit. Only registers in
    /// the peripheral region have an alias.
    pub fn set_atomic(&self, value: bool) -> Result<(), Error> {
        if self.field.width() != 1 {
            return Err(Error::NotBitBandable {
                address: self.register.address(),
            });
        }
        bb::write(self.register, self.field.offset(), value)
    }
}

impl<'r> FieldRef<'r, crate::access::ReadWrite> {
    /// Reads the field, passes the value to `f` and writes back the result
    #[inline]
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(u32) -> u32,
    {
        let field = self.field.raw;
        self.register.modify(|word| field.insert(word, f(field.extract(word))));
    }
}

mod compile_tests {
    //! ```compile_fail
    //! use tm4c123_regs::access::ReadOnly;
    //! use tm4c123_regs::{Field, Register};
    //! const STATUS: Field<ReadOnly> = Field::new(0, 3);
    //! fn poke(reg: &Register) {
    //!     reg.field(STATUS).set(5);
    //! }
    //! fn main() {}
    //! ```
    //!
    //! ```compile_fail
    //! use tm4c123_regs::access::WriteOnly;
    //! use tm4c123_regs::{Field, Register};
    //! const KEY: Field<WriteOnly> = Field::new(0, 16);
    //! fn peek(reg: &Register) -> u32 {
    //!     reg.field(KEY).get()
    //! }
    //! fn main() {}
    //! ```
    //!
    //! ```compile_fail
    //! use tm4c123_regs::access::AccessMode;
    //! use tm4c123_regs::BitField;
    //! const TOO_WIDE: BitField = BitField::new(30, 4, AccessMode::ReadWrite);
    //! fn main() {
    //!     let _field = TOO_WIDE;
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use tm4c123_regs::access::ReadWrite;
    //! use tm4c123_regs::Field;
    //! const TOO_WIDE: Field<ReadWrite> = Field::new(30, 4);
    //! fn main() {
    //!     let _field = TOO_WIDE;
    //! }
    //! ```
    //!
    //! ```
    //! use tm4c123_regs::access::ReadWrite;
    //! use tm4c123_regs::Field;
    //! const TOP: Field<ReadWrite> = Field::new(28, 4);
    //! fn main() {
    //!     assert_eq!(TOP.mask(), 0xF);
    //! }
    //! ```
}
