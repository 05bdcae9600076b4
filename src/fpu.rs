//! # Floating-Point Unit (FPU)
//!
//! FPU registers in the System Control Space of the Cortex-M4F core, in
//! numerical order by address offset. The FPU is a core peripheral: it is not
//! behind the System Control block and is outside the bit-band region.
//!
//! ```no_run
//! use tm4c123_regs::fpu::{cpac, CoprocessorAccess};
//!
//! let dp = tm4c123_regs::Peripherals::take().unwrap();
//! let fpu = dp.FPU.constrain();
//!
//! fpu.cpac.field(cpac::CP10).set(CoprocessorAccess::Full.into());
//! fpu.cpac.field(cpac::CP11).set(CoprocessorAccess::Full.into());
//! ```

use crate::register::Register;

/// Base address of the System Control Space
pub const SCS_BASE: usize = 0xE000_E000;

crate::register_map! {
    /// Coprocessor Access Control
    pub mod cpac @ 0xD88, reset 0x0000_0000 {
        /// CP11 Coprocessor Access Privilege
        CP11(22, 2): ReadWrite;
        /// CP10 Coprocessor Access Privilege
        CP10(20, 2): ReadWrite;
    }

    /// Floating-Point Context Control
    pub mod fpcc @ 0xF34, reset 0xC000_0000 {
        /// Automatic State Preservation Enable
        ASPEN(31, 1): ReadWrite;
        /// Lazy State Preservation Enable
        LSPEN(30, 1): ReadWrite;
        /// Monitor Ready
        MONRDY(8, 1): ReadOnly;
        /// Bus Fault Ready
        BFRDY(6, 1): ReadOnly;
        /// Memory Management Fault Ready
        MMRDY(5, 1): ReadOnly;
        /// Hard Fault Ready
        HFRDY(4, 1): ReadOnly;
        /// Thread Mode
        THREAD(3, 1): ReadOnly;
        /// User Privilege Level
        USER(1, 1): ReadOnly;
        /// Lazy State Preservation Active
        LSPACT(0, 1): ReadOnly;
    }

    /// Floating-Point Context Address
    pub mod fpca @ 0xF38 {
        /// Address of the unpopulated floating-point register space
        ADDRESS(3, 29): ReadWrite;
    }

    /// Floating-Point Default Status Control
    pub mod fpdsc @ 0xF3C, reset 0x0000_0000 {
        /// AHP Bit Default
        AHP(26, 1): ReadWrite;
        /// DN Bit Default
        DN(25, 1): ReadWrite;
        /// FZ Bit Default
        FZ(24, 1): ReadWrite;
        /// RMODE Bit Default
        RMODE(22, 2): ReadWrite;
    }
}

/// Encoding of the `CP10`/`CP11` access privilege fields
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoprocessorAccess {
    /// Any attempted access generates a NOCP Usage Fault
    Denied = 0b00,
    /// Privileged access only
    Privileged = 0b01,
    /// Full access
    Full = 0b11,
}

impl From<CoprocessorAccess> for u32 {
    fn from(access: CoprocessorAccess) -> u32 {
        access as u32
    }
}

impl TryFrom<u32> for CoprocessorAccess {
    type Error = u32;

    fn try_from(bits: u32) -> Result<Self, u32> {
        match bits {
            0b00 => Ok(CoprocessorAccess::Denied),
            0b01 => Ok(CoprocessorAccess::Privileged),
            0b11 => Ok(CoprocessorAccess::Full),
            reserved => Err(reserved),
        }
    }
}

/// Encoding of the `RMODE` field
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundingMode {
    /// Round to Nearest (RN)
    Nearest = 0b00,
    /// Round towards Plus Infinity (RP)
    PlusInfinity = 0b01,
    /// Round towards Minus Infinity (RM)
    MinusInfinity = 0b10,
    /// Round towards Zero (RZ)
    Zero = 0b11,
}

impl From<RoundingMode> for u32 {
    fn from(mode: RoundingMode) -> u32 {
        mode as u32
    }
}

impl From<u32> for RoundingMode {
    /// Decodes the low two bits
    fn from(bits: u32) -> Self {
        match bits & 0b11 {
            0b00 => RoundingMode::Nearest,
            0b01 => RoundingMode::PlusInfinity,
            0b10 => RoundingMode::MinusInfinity,
            _ => RoundingMode::Zero,
        }
    }
}

/// Ownership token of the FPU registers
pub struct FPU {
    pub(crate) _0: (),
}

impl FPU {
    /// Constrains the FPU registers so they play nicely with the other abstractions
    pub fn constrain(self) -> Fpu {
        unsafe { Fpu::new(SCS_BASE) }
    }
}

/// Constrained FPU registers
#[derive(Debug)]
pub struct Fpu {
    /// Coprocessor Access Control
    pub cpac: Register,
    /// Floating-Point Context Control
    pub fpcc: Register,
    /// Floating-Point Context Address
    pub fpca: Register,
    /// Floating-Point Default Status Control
    pub fpdsc: Register,
}

impl Fpu {
    /// Creates the driver for a System Control Space at `base`
    ///
    /// # Safety
    ///
    /// `base` must be the start of the System Control Space (or of memory laid
    /// out like one), and no other driver may own the FPU registers.
    pub unsafe fn new(base: usize) -> Self {
        Fpu {
            cpac: Register::new(base + cpac::OFFSET),
            fpcc: Register::new(base + fpcc::OFFSET),
            fpca: Register::new(base + fpca::OFFSET),
            fpdsc: Register::new(base + fpdsc::OFFSET),
        }
    }

    /// Releases the registers
    pub fn free(self) -> FPU {
        FPU { _0: () }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bb;

    const SCS_WORDS: usize = 0xF40 / 4;

    #[test]
    fn registers_sit_at_their_offsets() {
        let mut scs = [0u32; SCS_WORDS];
        let base = scs.as_mut_ptr() as usize;
        let fpu = unsafe { Fpu::new(base) };

        assert_eq!(fpu.cpac.address(), base + 0xD88);
        assert_eq!(fpu.fpcc.address(), base + 0xF34);
        assert_eq!(fpu.fpca.address(), base + 0xF38);
        assert_eq!(fpu.fpdsc.address(), base + 0xF3C);
        assert_eq!(SCS_BASE + cpac::OFFSET, 0xE000_ED88);
    }

    #[test]
    fn grant_coprocessor_access() {
        let mut scs = [0u32; SCS_WORDS];
        let fpu = unsafe { Fpu::new(scs.as_mut_ptr() as usize) };

        fpu.cpac.field(cpac::CP10).set(CoprocessorAccess::Full.into());
        fpu.cpac.field(cpac::CP11).set(CoprocessorAccess::Full.into());
        assert_eq!(fpu.cpac.read(), 0x00F0_0000);
        assert_eq!(
            CoprocessorAccess::try_from(fpu.cpac.field(cpac::CP11).get()),
            Ok(CoprocessorAccess::Full)
        );
        assert_eq!(CoprocessorAccess::try_from(0b10u32), Err(0b10));
    }

    #[test]
    fn context_control_after_reset() {
        let mut scs = [0u32; SCS_WORDS];
        let fpu = unsafe { Fpu::new(scs.as_mut_ptr() as usize) };
        fpu.fpcc.write(fpcc::RESET);

        assert!(fpu.fpcc.field(fpcc::ASPEN).is_set());
        assert!(fpu.fpcc.field(fpcc::LSPEN).is_set());
        assert!(!fpu.fpcc.field(fpcc::LSPACT).is_set());

        fpu.fpcc.field(fpcc::LSPEN).set(0);
        assert_eq!(fpu.fpcc.read(), 0x8000_0000);
    }

    #[test]
    fn default_status_control() {
        let mut scs = [0u32; SCS_WORDS];
        let fpu = unsafe { Fpu::new(scs.as_mut_ptr() as usize) };

        fpu.fpdsc.field(fpdsc::RMODE).set(RoundingMode::Zero.into());
        fpu.fpdsc.field(fpdsc::DN).set(1);
        assert_eq!(fpu.fpdsc.read(), 0x02C0_0000);
        assert_eq!(
            RoundingMode::from(fpu.fpdsc.field(fpdsc::RMODE).get()),
            RoundingMode::Zero
        );
    }

    #[test]
    fn context_address_is_word_aligned() {
        let mut scs = [0u32; SCS_WORDS];
        let fpu = unsafe { Fpu::new(scs.as_mut_ptr() as usize) };

        fpu.fpca.write(0x2000_7FFF);
        assert_eq!(fpu.fpca.field(fpca::ADDRESS).get() << 3, 0x2000_7FF8);
    }

    #[test]
    fn outside_the_bit_band_region() {
        assert_eq!(bb::alias(SCS_BASE + fpcc::OFFSET, 31), None);
    }
}
