/// Declares register offsets and bitfields
///
/// Each register becomes a module holding its `OFFSET` from the peripheral
/// base address, its `RESET` value when one is given, and one
/// [`Field`](crate::Field) constant per bitfield, written as
/// `NAME(start_bit, width): Mode`. Field ranges are checked at compile time.
///
/// ```
/// tm4c123_regs::register_map! {
///     /// Watchdog Control
///     pub mod wdtctl @ 0x008, reset 0x0000_0000 {
///         /// Watchdog Interrupt Enable
///         INTEN(0, 1): ReadWrite;
///         /// Write Complete
///         WRC(31, 1): ReadOnly;
///     }
/// }
///
/// assert_eq!(wdtctl::OFFSET, 0x008);
/// assert_eq!(wdtctl::WRC.offset(), 31);
/// ```
#[macro_export]
macro_rules! register_map {
    (
        $(
            $(#[$rmeta:meta])*
            $vis:vis mod $reg:ident @ $offset:literal $(, reset $reset:literal)? {
                $(
                    $(#[$fmeta:meta])*
                    $field:ident ( $bit:literal , $width:literal ) : $access:ident ;
                )*
            }
        )*
    ) => {
        $(
            $(#[$rmeta])*
            #[allow(dead_code)]
            $vis mod $reg {
                /// Offset from the peripheral base address
                pub const OFFSET: usize = $offset;
                $(
                    /// Value after reset
                    pub const RESET: u32 = $reset;
                )?
                $(
                    $(#[$fmeta])*
                    pub const $field: $crate::field::Field<$crate::access::$access> =
                        $crate::field::Field::new($bit, $width);
                )*
            }
        )*
    };
}
