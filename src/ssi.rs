//! # Synchronous Serial Interface (SSI)
//!
//! System control registers of the four SSI modules: presence, software
//! reset, clock gating in run/sleep/deep-sleep mode and peripheral ready.
//! All offsets are relative to the System Control base address
//! ([`sysctl::BASE`](crate::sysctl::BASE)).
//!
//! ```no_run
//! use tm4c123_regs::ssi::rcgcssi;
//!
//! let dp = tm4c123_regs::Peripherals::take().unwrap();
//! let sysctl = dp.SYSCTL.constrain();
//! let ssi = dp.SSI.constrain(&sysctl);
//!
//! ssi.rcgcssi.field(rcgcssi::R2).set(1);
//! while !ssi.ready().contains(tm4c123_regs::ssi::Instances::SSI2) {}
//! ```

use bitflags::bitflags;

use crate::register::Register;
use crate::sysctl::SystemControl;

/// SSI0 base address
pub const SSI0_BASE: usize = 0x4000_8000;
/// SSI1 base address
pub const SSI1_BASE: usize = 0x4000_9000;
/// SSI2 base address
pub const SSI2_BASE: usize = 0x4000_A000;
/// SSI3 base address
pub const SSI3_BASE: usize = 0x4000_B000;

crate::register_map! {
    /// Synchronous Serial Interface Peripheral Present
    pub mod ppssi @ 0x31C, reset 0x0000_000F {
        /// SSI Module 3 Present
        P3(3, 1): ReadOnly;
        /// SSI Module 2 Present
        P2(2, 1): ReadOnly;
        /// SSI Module 1 Present
        P1(1, 1): ReadOnly;
        /// SSI Module 0 Present
        P0(0, 1): ReadOnly;
    }

    /// Synchronous Serial Interface Software Reset
    pub mod srssi @ 0x51C, reset 0x0000_0000 {
        /// SSI Module 3 Software Reset
        R3(3, 1): ReadWrite;
        /// SSI Module 2 Software Reset
        R2(2, 1): ReadWrite;
        /// SSI Module 1 Software Reset
        R1(1, 1): ReadWrite;
        /// SSI Module 0 Software Reset
        R0(0, 1): ReadWrite;
    }

    /// Synchronous Serial Interface Run Mode Clock Gating Control
    pub mod rcgcssi @ 0x61C, reset 0x0000_0000 {
        /// SSI Module 3 Run Mode Clock Gating Control
        R3(3, 1): ReadWrite;
        /// SSI Module 2 Run Mode Clock Gating Control
        R2(2, 1): ReadWrite;
        /// SSI Module 1 Run Mode Clock Gating Control
        R1(1, 1): ReadWrite;
        /// SSI Module 0 Run Mode Clock Gating Control
        R0(0, 1): ReadWrite;
    }

    /// Synchronous Serial Interface Sleep Mode Clock Gating Control
    pub mod scgcssi @ 0x71C, reset 0x0000_0000 {
        /// SSI Module 3 Sleep Mode Clock Gating Control
        S3(3, 1): ReadWrite;
        /// SSI Module 2 Sleep Mode Clock Gating Control
        S2(2, 1): ReadWrite;
        /// SSI Module 1 Sleep Mode Clock Gating Control
        S1(1, 1): ReadWrite;
        /// SSI Module 0 Sleep Mode Clock Gating Control
        S0(0, 1): ReadWrite;
    }

    /// Synchronous Serial Interface Deep-Sleep Mode Clock Gating Control
    pub mod dcgcssi @ 0x81C, reset 0x0000_0000 {
        /// SSI Module 3 Deep-Sleep Mode Clock Gating Control
        D3(3, 1): ReadWrite;
        /// SSI Module 2 Deep-Sleep Mode Clock Gating Control
        D2(2, 1): ReadWrite;
        /// SSI Module 1 Deep-Sleep Mode Clock Gating Control
        D1(1, 1): ReadWrite;
        /// SSI Module 0 Deep-Sleep Mode Clock Gating Control
        D0(0, 1): ReadWrite;
    }

    /// Synchronous Serial Interface Peripheral Ready
    pub mod prssi @ 0xA1C, reset 0x0000_0000 {
        /// SSI Module 3 Peripheral Ready
        R3(3, 1): ReadOnly;
        /// SSI Module 2 Peripheral Ready
        R2(2, 1): ReadOnly;
        /// SSI Module 1 Peripheral Ready
        R1(1, 1): ReadOnly;
        /// SSI Module 0 Peripheral Ready
        R0(0, 1): ReadOnly;
    }
}

/// SSI bits of the legacy System Control registers
///
/// These alias the per-module bits above and live in registers owned by
/// [`SystemControl`].
pub mod legacy {
    use crate::access::ReadOnly;
    use crate::field::Field;

    /// SSI Module 1 Present
    pub const DC2_SSI1: Field<ReadOnly> = Field::new(5, 1);
    /// SSI Module 0 Present
    pub const DC2_SSI0: Field<ReadOnly> = Field::new(4, 1);

    /// SSI1 Reset Control
    pub const SRCR1_SSI1: Field<ReadOnly> = Field::new(5, 1);
    /// SSI0 Reset Control
    pub const SRCR1_SSI0: Field<ReadOnly> = Field::new(4, 1);

    /// SSI1 Run Mode Clock Gating Control
    pub const RCGC1_SSI1: Field<ReadOnly> = Field::new(5, 1);
    /// SSI0 Run Mode Clock Gating Control
    pub const RCGC1_SSI0: Field<ReadOnly> = Field::new(4, 1);

    /// SSI1 Sleep Mode Clock Gating Control
    pub const SCGC1_SSI1: Field<ReadOnly> = Field::new(5, 1);
    /// SSI0 Sleep Mode Clock Gating Control
    pub const SCGC1_SSI0: Field<ReadOnly> = Field::new(4, 1);

    /// SSI1 Deep-Sleep Mode Clock Gating Control
    pub const DCGC1_SSI1: Field<ReadOnly> = Field::new(5, 1);
    /// SSI0 Deep-Sleep Mode Clock Gating Control
    pub const DCGC1_SSI0: Field<ReadOnly> = Field::new(4, 1);
}

bitflags! {
    /// Set of SSI modules, in the bit order of the per-module registers
    pub struct Instances: u32 {
        const SSI0 = 1 << 0;
        const SSI1 = 1 << 1;
        const SSI2 = 1 << 2;
        const SSI3 = 1 << 3;
    }
}

/// Ownership token of the SSI system control registers
pub struct SSI {
    pub(crate) _0: (),
}

impl SSI {
    /// Constrains the SSI registers of the System Control block `sysctl`
    pub fn constrain(self, sysctl: &SystemControl) -> Ssi {
        unsafe { Ssi::new(sysctl) }
    }
}

/// SSI system control registers
///
/// The legacy SSI bits in [`legacy`] belong to the registers of the
/// [`SystemControl`] the driver was constrained from.
#[derive(Debug)]
pub struct Ssi {
    /// Synchronous Serial Interface Peripheral Present
    pub ppssi: Register,
    /// Synchronous Serial Interface Software Reset
    pub srssi: Register,
    /// Synchronous Serial Interface Run Mode Clock Gating Control
    pub rcgcssi: Register,
    /// Synchronous Serial Interface Sleep Mode Clock Gating Control
    pub scgcssi: Register,
    /// Synchronous Serial Interface Deep-Sleep Mode Clock Gating Control
    pub dcgcssi: Register,
    /// Synchronous Serial Interface Peripheral Ready
    pub prssi: Register,
}

impl Ssi {
    /// # Safety
    ///
    /// No other driver may own the SSI registers of `sysctl`.
    unsafe fn new(sysctl: &SystemControl) -> Self {
        Ssi {
            ppssi: sysctl.register(ppssi::OFFSET),
            srssi: sysctl.register(srssi::OFFSET),
            rcgcssi: sysctl.register(rcgcssi::OFFSET),
            scgcssi: sysctl.register(scgcssi::OFFSET),
            dcgcssi: sysctl.register(dcgcssi::OFFSET),
            prssi: sysctl.register(prssi::OFFSET),
        }
    }

    /// Modules present on the chip, as reported by `PPSSI`
    pub fn present(&self) -> Instances {
        Instances::from_bits_truncate(self.ppssi.read())
    }

    /// Modules ready for access, as reported by `PRSSI`
    pub fn ready(&self) -> Instances {
        Instances::from_bits_truncate(self.prssi.read())
    }

    /// Releases the registers
    pub fn free(self) -> SSI {
        SSI { _0: () }
    }
}
