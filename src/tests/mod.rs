mod basic;

use crate::SpscFifo as Rb;

/// Element of `ELEM` bytes that carries `value`.
fn elem(value: u64) -> [u8; 8] {
    value.to_le_bytes()
}

fn value(bytes: &[u8]) -> u64 {
    u64::from_le_bytes(bytes.try_into().unwrap())
}

const ELEM: usize = 8;
