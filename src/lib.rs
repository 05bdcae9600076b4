//! # Register layer for the TM4C123 family of microcontrollers
//!
//! This crate gives safe, volatile access to the memory-mapped control and
//! status registers of the Tiva C TM4C123 microcontrollers, down to individual
//! bitfields.
//!
//! - [`Register`] wraps one fixed 32-bit register address.
//! - [`Field`] and [`BitField`] describe a range of bits with an access mode,
//!   independently of the register they belong to, and are bound to one when
//!   used. Writing a field only touches its own bits.
//! - The peripheral modules ([`sysctl`], [`ssi`], [`watchdog`], [`fpu`])
//!   declare the registers and fields of each peripheral with
//!   [`register_map!`].
//!
//! # Usage
//!
//! Select the microcontroller with the corresponding Cargo feature. The
//! currently supported microcontrollers are:
//!
//! - tm4c123gh6pm (default)
//!
//! ```toml
//! [dependencies.tm4c123-regs]
//! version = "0.1.0"
//! features = ["defmt"]
//! ```
//!
//! ## Usage example
//!
//! ```no_run
//! use tm4c123_regs::ssi::{rcgcssi, Instances};
//!
//! // Get access to the peripherals, once
//! let dp = tm4c123_regs::Peripherals::take().unwrap();
//!
//! // The shared System Control registers are lent to the other drivers
//! let sysctl = dp.SYSCTL.constrain();
//! let ssi = dp.SSI.constrain(&sysctl);
//!
//! // Gate the clock of SSI0 and wait until the module is ready
//! ssi.rcgcssi.field(rcgcssi::R0).set(1);
//! while !ssi.ready().contains(Instances::SSI0) {}
//! ```
//!
//! # Concurrency
//!
//! Nothing in this crate locks. Bitfield writes are read-modify-write
//! sequences on the whole register, so updates of the same register from an
//! interrupt handler and from the main program must be serialized by the
//! caller, for example with [`critical_section::with`].

#![no_std]

#[macro_use]
mod macros;

pub mod access;
pub mod bb;
pub mod field;
pub mod fpu;
pub mod prelude;
pub mod register;
pub mod ssi;
pub mod sysctl;
pub mod watchdog;

pub use crate::field::{BitField, Bound, Error, Field, FieldRef};
pub use crate::register::Register;

/// Name of the microcontroller selected by Cargo feature
pub const CHIP: &str = env!("TM4C123_CHIP");

mod sealed {
    pub trait Sealed {}
}
pub(crate) use sealed::Sealed;

static mut TAKEN: bool = false;

/// All peripherals handled by this crate
///
/// Each field is an ownership token; turn it into a driver with `constrain`.
#[allow(non_snake_case)]
pub struct Peripherals {
    /// System Control
    pub SYSCTL: sysctl::SYSCTL,
    /// Synchronous Serial Interface
    pub SSI: ssi::SSI,
    /// Watchdog timers
    pub WATCHDOG: watchdog::WATCHDOG,
    /// Floating-Point Unit
    pub FPU: fpu::FPU,
}

impl Peripherals {
    /// Returns all the peripherals *once*
    #[inline]
    pub fn take() -> Option<Self> {
        critical_section::with(|_| {
            if unsafe { TAKEN } {
                None
            } else {
                Some(unsafe { Peripherals::steal() })
            }
        })
    }

    /// Unchecked version of [`Peripherals::take`]
    ///
    /// # Safety
    ///
    /// Each of the returned peripherals must be used at most once.
    #[inline]
    pub unsafe fn steal() -> Self {
        TAKEN = true;

        Peripherals {
            SYSCTL: sysctl::SYSCTL { _0: () },
            SSI: ssi::SSI { _0: () },
            WATCHDOG: watchdog::WATCHDOG { _0: () },
            FPU: fpu::FPU { _0: () },
        }
    }
}
