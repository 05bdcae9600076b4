use tm4c123_regs::prelude::*;
use tm4c123_regs::ssi::{self, legacy};
use tm4c123_regs::sysctl::SystemControl;
use tm4c123_regs::{watchdog, Bound};

const BACKGROUNDS: [u32; 4] = [0x0000_0000, 0xFFFF_FFFF, 0xA5A5_A5A5, 0x0F0F_F0F0];

fn ranges() -> impl Iterator<Item = (u8, u8)> {
    (0..32u8).flat_map(|offset| (1..=32 - offset).map(move |width| (offset, width)))
}

#[test]
fn set_then_get_masks_the_value() {
    let mut word = 0u32;
    let reg = unsafe { Register::from_ptr(&mut word) };

    for (offset, width) in ranges() {
        let field = BitField::new(offset, width, AccessMode::ReadWrite);
        for &background in &BACKGROUNDS {
            reg.write(background);
            field.bind(&reg).set(0xDEAD_BEEF).unwrap();

            assert_eq!(field.bind(&reg).get(), Ok(0xDEAD_BEEF & field.mask()));
            assert_eq!(
                reg.read() & !field.shifted_mask(),
                background & !field.shifted_mask(),
                "bits outside {}..{} changed",
                offset,
                offset + width
            );
        }
    }
}

#[test]
fn disjoint_fields_do_not_interfere() {
    let mut word = 0u32;
    let reg = unsafe { Register::from_ptr(&mut word) };

    for split in 1..32u8 {
        let low = BitField::new(0, split, AccessMode::ReadWrite);
        let high = BitField::new(split, 32 - split, AccessMode::ReadWrite);
        let (v1, v2) = (0x1234_5678 & low.mask(), 0x9ABC_DEF0 & high.mask());

        reg.write(0);
        low.bind(&reg).set(v1).unwrap();
        high.bind(&reg).set(v2).unwrap();
        assert_eq!(low.bind(&reg).get(), Ok(v1));
        assert_eq!(high.bind(&reg).get(), Ok(v2));

        high.bind(&reg).set(!v2).unwrap();
        low.bind(&reg).set(!v1).unwrap();
        assert_eq!(low.bind(&reg).get(), Ok(!v1 & low.mask()));
        assert_eq!(high.bind(&reg).get(), Ok(!v2 & high.mask()));
    }
}

#[test]
fn read_only_fields_never_change_the_register() {
    let mut word = 0u32;
    let reg = unsafe { Register::from_ptr(&mut word) };

    for (offset, width) in ranges() {
        let status: Bound<'_> = BitField::new(offset, width, AccessMode::ReadOnly).bind(&reg);
        reg.write(0x5A5A_5A5A);

        assert_eq!(
            status.set(0),
            Err(FieldError::AccessViolation {
                mode: AccessMode::ReadOnly
            })
        );
        assert_eq!(reg.read(), 0x5A5A_5A5A);
    }
}

#[test]
fn write_of_read_is_a_no_op() {
    let mut word = 0xC0FF_EE00u32;
    let reg = unsafe { Register::from_ptr(&mut word) };

    let before = reg.read();
    reg.write(reg.read());
    assert_eq!(reg.read(), before);
}

#[test]
fn worked_examples() {
    let mut word = 0x0000_0000u32;
    let reg = unsafe { Register::from_ptr(&mut word) };

    let enable = BitField::new(3, 1, AccessMode::ReadWrite).bind(&reg);
    enable.set(1).unwrap();
    assert_eq!(reg.read(), 0x0000_0008);
    assert_eq!(enable.get(), Ok(1));

    let status = BitField::new(0, 3, AccessMode::ReadOnly).bind(&reg);
    assert_eq!(status.get(), Ok(0));
    assert_eq!(
        status.set(5),
        Err(FieldError::AccessViolation {
            mode: AccessMode::ReadOnly
        })
    );
    assert_eq!(reg.read(), 0x0000_0008);
}

#[test]
#[should_panic]
fn field_past_the_register_end_is_rejected() {
    let _ = Field::<ReadWrite>::new(30, 4);
}

#[test]
fn drivers_share_one_system_control() {
    let mut block = [0u32; 0xA20 / 4];
    let sysctl = unsafe { SystemControl::new(block.as_mut_ptr() as usize) };

    // Peripherals::take() hands out the tokens once; drivers are built here
    // from a stolen set so that the test owns the mock block.
    let dp = unsafe { tm4c123_regs::Peripherals::steal() };
    let ssi = dp.SSI.constrain(&sysctl);
    let wd = dp.WATCHDOG.constrain(&sysctl);

    ssi.rcgcssi.field(ssi::rcgcssi::R1).set(1);
    wd.rcgcwd.field(watchdog::rcgcwd::R0).set(1);
    sysctl.rcgc1.write(1 << 5);

    assert_eq!(ssi.rcgcssi.read(), 0b10);
    assert_eq!(wd.rcgcwd.read(), 0b01);
    assert!(sysctl.rcgc1.field(legacy::RCGC1_SSI1).is_set());
    assert!(wd.reset_causes(&sysctl).is_empty());
}
