//! # System Control
//!
//! The system control block holds the clock gating, reset and presence
//! registers of every other peripheral. All of its registers are relative to
//! [`BASE`].
//!
//! [`SystemControl`] owns the registers that are shared between peripheral
//! classes: the legacy capability/gating registers and the reset cause. The
//! per-class registers (`RCGCSSI`, `PPWD`, ...) are owned by the class driver,
//! which holds a reference to the `SystemControl` to reach the shared ones and
//! the base address.
//!
//! Registers in the legacy group are provided for legacy software support
//! only; the per-class registers should be used instead.

use crate::register::Register;

/// System Control base address
pub const BASE: usize = 0x400F_E000;

crate::register_map! {
    /// Device Capabilities 2 (legacy)
    pub mod dc2 @ 0x014 {}

    /// Software Reset Control 1 (legacy)
    pub mod srcr1 @ 0x044, reset 0x0000_0000 {}

    /// Reset Cause
    pub mod resc @ 0x05C {}

    /// Run Mode Clock Gating Control Register 1 (legacy)
    pub mod rcgc1 @ 0x104, reset 0x0000_0000 {}

    /// Sleep Mode Clock Gating Control Register 1 (legacy)
    pub mod scgc1 @ 0x114, reset 0x0000_0000 {}

    /// Deep-Sleep Mode Clock Gating Control Register 1 (legacy)
    pub mod dcgc1 @ 0x124, reset 0x0000_0000 {}
}

/// Ownership token of the system control block
pub struct SYSCTL {
    pub(crate) _0: (),
}

impl SYSCTL {
    /// Constrains the system control block so it plays nicely with the other abstractions
    pub fn constrain(self) -> SystemControl {
        unsafe { SystemControl::new(BASE) }
    }
}

/// Constrained system control block
///
/// Aquired by calling [`SYSCTL::constrain`]
///
/// ```no_run
/// let dp = tm4c123_regs::Peripherals::take().unwrap();
/// let sysctl = dp.SYSCTL.constrain();
/// let ssi = dp.SSI.constrain(&sysctl);
/// ```
#[derive(Debug)]
pub struct SystemControl {
    base: usize,
    /// Device Capabilities 2 (legacy)
    pub dc2: Register,
    /// Software Reset Control 1 (legacy)
    pub srcr1: Register,
    /// Reset Cause
    pub resc: Register,
    /// Run Mode Clock Gating Control Register 1 (legacy)
    pub rcgc1: Register,
    /// Sleep Mode Clock Gating Control Register 1 (legacy)
    pub scgc1: Register,
    /// Deep-Sleep Mode Clock Gating Control Register 1 (legacy)
    pub dcgc1: Register,
}

impl SystemControl {
    /// Creates the driver for a system control block at `base`
    ///
    /// # Safety
    ///
    /// `base` must be the start of a system control block (or of memory laid
    /// out like one), and no other driver may own its registers.
    pub unsafe fn new(base: usize) -> Self {
        SystemControl {
            base,
            dc2: Register::new(base + dc2::OFFSET),
            srcr1: Register::new(base + srcr1::OFFSET),
            resc: Register::new(base + resc::OFFSET),
            rcgc1: Register::new(base + rcgc1::OFFSET),
            scgc1: Register::new(base + scgc1::OFFSET),
            dcgc1: Register::new(base + dcgc1::OFFSET),
        }
    }

    /// Base address of the block
    #[inline(always)]
    pub fn base(&self) -> usize {
        self.base
    }

    /// Handle of a class-specific register at `offset` from the base
    ///
    /// # Safety
    ///
    /// The caller must be the only owner of that register.
    #[inline(always)]
    pub(crate) unsafe fn register(&self, offset: usize) -> Register {
        Register::new(self.base + offset)
    }

    /// Releases the registers
    pub fn free(self) -> SYSCTL {
        SYSCTL { _0: () }
    }
}
