use enum_mask::BitMask;

mod device {
    #[derive(Clone, Copy, Debug)]
    pub enum Feature {
        Dma = 0x01,
        Irq = 0x02,
        Pio = 0x04,
    }
    enum_mask::enable_bitmask!(Feature: u8, Feature::Dma, Feature::Irq, Feature::Pio);
}

use device::Feature;

fn main() {
    let mut caps = BitMask::<Feature>::empty();
    caps.set(Feature::Dma).set(Feature::Pio);
    assert!(caps.is_set(Feature::Dma));
    assert!(!caps.is_set(Feature::Irq));
    assert_eq!(!caps, Feature::Irq);
    assert_eq!(caps.bits(), 0x05);
}
