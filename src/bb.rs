//! Bit banding
//!
//! Support for the manipulation of peripheral register bits through bit-banding.
//! The peripheral bit-band region is from `0x4000_0000` to `0x400F_FFFF`; every
//! bit in it has a word-sized alias starting at `0x4200_0000`. A store to the
//! alias sets or clears exactly that bit, without a read-modify-write of the
//! register. Core peripherals such as the FPU are outside the region.

use crate::field::Error;
use crate::register::Register;

// Start address of the peripheral memory region capable of being addressed by bit-banding
const PERI_ADDRESS_START: usize = 0x4000_0000;
const PERI_ADDRESS_END: usize = 0x400F_FFFF;

const PERI_BIT_BAND_BASE: usize = 0x4200_0000;

/// Returns the alias word of `bit` in the register at `address`, if it has one
pub const fn alias(address: usize, bit: u8) -> Option<usize> {
    if address < PERI_ADDRESS_START || address > PERI_ADDRESS_END || bit >= 32 {
        return None;
    }
    Some(PERI_BIT_BAND_BASE + (address - PERI_ADDRESS_START) * 32 + 4 * bit as usize)
}

/// Sets or clears `bit` of `register` with a single store to its alias word
pub(crate) fn write(register: &Register, bit: u8, set: bool) -> Result<(), Error> {
    let address = register.address();
    let alias = alias(address, bit).ok_or(Error::NotBitBandable { address })?;

    // The alias of a valid peripheral register is itself a valid word.
    let alias = unsafe { Register::new(alias) };
    alias.write(u32::from(set));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_of_first_and_last_bits() {
        assert_eq!(alias(0x4000_0000, 0), Some(0x4200_0000));
        assert_eq!(alias(0x4000_0000, 31), Some(0x4200_007C));
        assert_eq!(alias(0x400F_FFFC, 31), Some(0x43FF_FFFC));
    }

    #[test]
    fn alias_of_clock_gating_register() {
        // RCGCSSI, bit 2
        assert_eq!(alias(0x400F_E61C, 2), Some(0x43FC_C388));
    }

    #[test]
    fn outside_the_region() {
        assert_eq!(alias(0x3FFF_FFFC, 0), None);
        assert_eq!(alias(0x4010_0000, 0), None);
        // FPCC, in the system control space
        assert_eq!(alias(0xE000_EF34, 31), None);
        assert_eq!(alias(0x4000_0000, 32), None);
    }
}
