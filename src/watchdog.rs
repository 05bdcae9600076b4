//! # Watchdog timers
//!
//! System control registers of the two watchdog timers. Offsets are relative
//! to the System Control base address. The reset cause bits live in the
//! shared `RESC` register owned by [`SystemControl`].

use bitflags::bitflags;

use crate::register::Register;
use crate::sysctl::SystemControl;

/// Watchdog timer 0 base address
pub const WATCHDOG0_BASE: usize = 0x4000_0000;
/// Watchdog timer 1 base address
pub const WATCHDOG1_BASE: usize = 0x4000_1000;

crate::register_map! {
    /// Watchdog Timer Peripheral Present
    pub mod ppwd @ 0x300, reset 0x0000_0003 {
        /// Watchdog Timer 1 Present
        P1(1, 1): ReadOnly;
        /// Watchdog Timer 0 Present
        P0(0, 1): ReadOnly;
    }

    /// Watchdog Timer Software Reset
    pub mod srwd @ 0x500, reset 0x0000_0000 {
        /// Watchdog Timer 1 Software Reset
        R1(1, 1): ReadWrite;
        /// Watchdog Timer 0 Software Reset
        R0(0, 1): ReadWrite;
    }

    /// Watchdog Timer Run Mode Clock Gating Control
    pub mod rcgcwd @ 0x600, reset 0x0000_0000 {
        /// Watchdog Timer 1 Run Mode Clock Gating Control
        R1(1, 1): ReadWrite;
        /// Watchdog Timer 0 Run Mode Clock Gating Control
        R0(0, 1): ReadWrite;
    }

    /// Watchdog Timer Sleep Mode Clock Gating Control
    pub mod scgcwd @ 0x700, reset 0x0000_0000 {
        /// Watchdog Timer 1 Sleep Mode Clock Gating Control
        S1(1, 1): ReadWrite;
        /// Watchdog Timer 0 Sleep Mode Clock Gating Control
        S0(0, 1): ReadWrite;
    }

    /// Watchdog Timer Deep-Sleep Mode Clock Gating Control
    pub mod dcgcwd @ 0x800, reset 0x0000_0000 {
        /// Watchdog Timer 1 Deep-Sleep Mode Clock Gating Control
        D1(1, 1): ReadWrite;
        /// Watchdog Timer 0 Deep-Sleep Mode Clock Gating Control
        D0(0, 1): ReadWrite;
    }

    /// Watchdog Timer Peripheral Ready
    pub mod prwd @ 0xA00, reset 0x0000_0000 {
        /// Watchdog Timer 1 Peripheral Ready
        R1(1, 1): ReadOnly;
        /// Watchdog Timer 0 Peripheral Ready
        R0(0, 1): ReadOnly;
    }
}

/// Watchdog bits of the shared Reset Cause register
pub mod resc {
    use crate::access::ReadWrite;
    use crate::field::Field;

    /// Watchdog Timer 1 Reset
    pub const WDT1: Field<ReadWrite> = Field::new(5, 1);
    /// Watchdog Timer 0 Reset
    pub const WDT0: Field<ReadWrite> = Field::new(3, 1);
}

bitflags! {
    /// Set of watchdog timers, in the bit order of the per-module registers
    pub struct Instances: u32 {
        const WATCHDOG0 = 1 << 0;
        const WATCHDOG1 = 1 << 1;
    }
}

/// Ownership token of the watchdog system control registers
pub struct WATCHDOG {
    pub(crate) _0: (),
}

impl WATCHDOG {
    /// Constrains the watchdog registers of the System Control block `sysctl`
    pub fn constrain(self, sysctl: &SystemControl) -> Watchdog {
        unsafe { Watchdog::new(sysctl) }
    }
}

/// Watchdog system control registers
#[derive(Debug)]
pub struct Watchdog {
    /// Watchdog Timer Peripheral Present
    pub ppwd: Register,
    /// Watchdog Timer Software Reset
    pub srwd: Register,
    /// Watchdog Timer Run Mode Clock Gating Control
    pub rcgcwd: Register,
    /// Watchdog Timer Sleep Mode Clock Gating Control
    pub scgcwd: Register,
    /// Watchdog Timer Deep-Sleep Mode Clock Gating Control
    pub dcgcwd: Register,
    /// Watchdog Timer Peripheral Ready
    pub prwd: Register,
}

impl Watchdog {
    /// # Safety
    ///
    /// No other driver may own the watchdog registers of `sysctl`.
    unsafe fn new(sysctl: &SystemControl) -> Self {
        Watchdog {
            ppwd: sysctl.register(ppwd::OFFSET),
            srwd: sysctl.register(srwd::OFFSET),
            rcgcwd: sysctl.register(rcgcwd::OFFSET),
            scgcwd: sysctl.register(scgcwd::OFFSET),
            dcgcwd: sysctl.register(dcgcwd::OFFSET),
            prwd: sysctl.register(prwd::OFFSET),
        }
    }

    /// Timers that caused a reset, as latched in the `RESC` register of
    /// `sysctl`
    pub fn reset_causes(&self, sysctl: &SystemControl) -> Instances {
        let mut causes = Instances::empty();
        causes.set(Instances::WATCHDOG0, sysctl.resc.field(resc::WDT0).is_set());
        causes.set(Instances::WATCHDOG1, sysctl.resc.field(resc::WDT1).is_set());
        causes
    }

    /// Timers present on the chip, as reported by `PPWD`
    pub fn present(&self) -> Instances {
        Instances::from_bits_truncate(self.ppwd.read())
    }

    /// Timers ready for access, as reported by `PRWD`
    pub fn ready(&self) -> Instances {
        Instances::from_bits_truncate(self.prwd.read())
    }

    /// Releases the registers
    pub fn free(self) -> WATCHDOG {
        WATCHDOG { _0: () }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sysctl::tests::BLOCK_WORDS;

    #[test]
    fn registers_sit_at_their_offsets() {
        let mut block = [0u32; BLOCK_WORDS];
        let base = block.as_mut_ptr() as usize;
        let sysctl = unsafe { SystemControl::new(base) };
        let wd = WATCHDOG { _0: () }.constrain(&sysctl);

        assert_eq!(wd.ppwd.address(), base + 0x300);
        assert_eq!(wd.srwd.address(), base + 0x500);
        assert_eq!(wd.rcgcwd.address(), base + 0x600);
        assert_eq!(wd.scgcwd.address(), base + 0x700);
        assert_eq!(wd.dcgcwd.address(), base + 0x800);
        assert_eq!(wd.prwd.address(), base + 0xA00);
    }

    #[test]
    fn reset_cause_bits() {
        let mut block = [0u32; BLOCK_WORDS];
        let sysctl = unsafe { SystemControl::new(block.as_mut_ptr() as usize) };
        let wd = WATCHDOG { _0: () }.constrain(&sysctl);

        // External reset and watchdog 1 reset latched
        sysctl.resc.write(0x0000_0021);
        assert!(sysctl.resc.field(resc::WDT1).is_set());
        assert!(!sysctl.resc.field(resc::WDT0).is_set());
        assert_eq!(wd.reset_causes(&sysctl), Instances::WATCHDOG1);

        // Clearing the cause leaves the other causes in place
        sysctl.resc.field(resc::WDT1).set(0);
        assert_eq!(sysctl.resc.read(), 0x0000_0001);
        assert!(wd.reset_causes(&sysctl).is_empty());

        sysctl.resc.write(0x0000_0028);
        assert_eq!(wd.reset_causes(&sysctl), Instances::all());
    }

    #[test]
    fn gating_and_status() {
        let mut block = [0u32; BLOCK_WORDS];
        let sysctl = unsafe { SystemControl::new(block.as_mut_ptr() as usize) };
        let wd = WATCHDOG { _0: () }.constrain(&sysctl);

        wd.rcgcwd.field(rcgcwd::R1).set(1);
        wd.scgcwd.field(scgcwd::S0).set(1);
        assert_eq!(wd.rcgcwd.read(), 0b10);
        assert_eq!(wd.scgcwd.read(), 0b01);

        wd.ppwd.write(ppwd::RESET);
        wd.prwd.write(0b10);
        assert_eq!(wd.present(), Instances::all());
        assert_eq!(wd.ready(), Instances::WATCHDOG1);
        assert_eq!(wd.prwd.field(prwd::R1).get(), 1);
    }

    #[test]
    fn free_returns_the_token() {
        let mut block = [0u32; BLOCK_WORDS];
        let sysctl = unsafe { SystemControl::new(block.as_mut_ptr() as usize) };
        let token = WATCHDOG { _0: () }.constrain(&sysctl).free();
        let wd = token.constrain(&sysctl);
        assert_eq!(wd.ppwd.read(), 0);
    }

    #[test]
    fn driver_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<Watchdog>();
        assert_send::<SystemControl>();
    }
}
