//! Access modes
//!
//! Every bitfield carries the access mode fixed by the hardware design. The
//! mode exists twice: as a value ([`AccessMode`]) for fields whose mode is
//! only known at run time, and as a zero-sized marker type ([`ReadOnly`],
//! [`ReadWrite`], [`WriteOnly`]) so that statically declared fields reject
//! forbidden accesses at compile time.

use crate::Sealed;

/// Access mode of a bitfield
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessMode {
    /// Status bits, writes are refused
    ReadOnly,
    /// Control bits
    ReadWrite,
    /// Command bits, reads are refused
    WriteOnly,
}

impl AccessMode {
    /// Returns `true` if the field may be read
    #[inline(always)]
    pub const fn is_readable(self) -> bool {
        matches!(self, AccessMode::ReadOnly | AccessMode::ReadWrite)
    }

    /// Returns `true` if the field may be written
    #[inline(always)]
    pub const fn is_writable(self) -> bool {
        matches!(self, AccessMode::ReadWrite | AccessMode::WriteOnly)
    }
}

/// Read-only marker
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadOnly;

/// Read/write marker
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadWrite;

/// Write-only marker
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WriteOnly;

impl Sealed for ReadOnly {}
impl Sealed for ReadWrite {}
impl Sealed for WriteOnly {}

/// Type-level access mode
pub trait Access: Sealed + Copy {
    /// Value-level counterpart of the marker
    const MODE: AccessMode;
}

/// Marker for modes that allow reading
pub trait Readable: Access {}

/// Marker for modes that allow writing
pub trait Writable: Access {}

impl Access for ReadOnly {
    const MODE: AccessMode = AccessMode::ReadOnly;
}

impl Access for ReadWrite {
    const MODE: AccessMode = AccessMode::ReadWrite;
}

impl Access for WriteOnly {
    const MODE: AccessMode = AccessMode::WriteOnly;
}

impl Readable for ReadOnly {}
impl Readable for ReadWrite {}
impl Writable for ReadWrite {}
impl Writable for WriteOnly {}
