use enum_mask::{enable_bitmask_external, BitMask};

mod vendor {
    #[derive(Clone, Copy, Debug)]
    pub enum Reg {
        Lo = 0x01,
        Hi = 0x80,
    }
}

enable_bitmask_external!(vendor::Reg: u8, vendor::Reg::Lo, vendor::Reg::Hi);

fn main() {
    let mask = vendor::Reg::Lo | vendor::Reg::Hi;
    assert_eq!(mask.bits(), 0x81);
    assert_eq!(mask, BitMask::all());
    assert!(!BitMask::<vendor::Reg>::empty().intersects(mask));
}
