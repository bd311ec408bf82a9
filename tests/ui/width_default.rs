use enum_mask::{enable_bitmask, BitMask};

#[derive(Clone, Copy, Debug)]
enum Raw {
    A = 0x01,
    B = 0x02,
}
enable_bitmask!(Raw: u8);

fn main() {
    // No flag list, so the universe is the whole byte and negation reaches
    // past the two declared flags.
    assert_eq!(BitMask::<Raw>::all().bits(), 0xFF);
    assert_eq!((!BitMask::from(Raw::A)).bits(), 0xFE);
    assert_eq!((Raw::A | Raw::B).bits(), 0x03);
}
