//! The `excess24` crate defines a 24-bit-range signed integer type
//! which is stored in excess-8388608 (offset binary) form inside a
//! `u32`.  The idea is that code doing tick, price or coordinate
//! arithmetic can depend on this crate for a compact signed type
//! whose overflow behaviour is always an explicit error, never a
//! silent wrap.

mod offsetbinary;

pub use crate::offsetbinary::error::{ArithmeticError, RangeError};
pub use crate::offsetbinary::signed::Excess24Bit;
pub use crate::offsetbinary::Signum;

#[macro_export]
macro_rules! x24 {
    ($n:expr) => {
        $crate::Excess24Bit::new::<{ $n }>()
    };
}

#[test]
fn test_x24() {
    let zero: Excess24Bit = x24!(8_388_608);
    assert_eq!(zero, Excess24Bit::ZERO);

    let max: Excess24Bit = x24!(16_777_215);
    let also_max: Excess24Bit =
        Excess24Bit::from_bits(16_777_215).expect("test data should be in range");
    assert_eq!(max, also_max);
}
