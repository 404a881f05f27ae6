//! Difficulty-bomb delays
//!
//! Parity keeps one `difficultyBombDelays` map from block to delay. Delays
//! that activate at the same block are summed, and the three known delays
//! have distinct subset sums, so each entry decomposes uniquely.

use std::collections::BTreeMap;

use confp_types::HexOrDecimal64;

/// Byzantium delay (EIP-649)
pub(crate) const EIP649_DELAY: u64 = 3_000_000;

/// Constantinople delay (EIP-1234)
pub(crate) const EIP1234_DELAY: u64 = 2_000_000;

/// Muir Glacier delay (EIP-2384)
pub(crate) const EIP2384_DELAY: u64 = 4_000_000;

const KNOWN: [u64; 3] = [EIP649_DELAY, EIP1234_DELAY, EIP2384_DELAY];

type Delays = BTreeMap<HexOrDecimal64, HexOrDecimal64>;

/// Known delays summing to `total`, if it decomposes
fn parts(total: u64) -> Option<Vec<u64>> {
    (0u8..1 << KNOWN.len())
        .map(|mask| {
            KNOWN
                .iter()
                .enumerate()
                .filter(|&(i, _)| mask & (1 << i) != 0)
                .map(|(_, d)| *d)
                .collect::<Vec<_>>()
        })
        .find(|subset| subset.iter().sum::<u64>() == total)
}

fn includes(total: u64, delay: u64) -> bool {
    parts(total).is_some_and(|p| p.contains(&delay))
}

/// Block at which `delay` activates
pub(crate) fn activation(delays: &Delays, delay: u64) -> Option<u64> {
    delays
        .iter()
        .find(|(_, total)| includes(total.get(), delay))
        .map(|(block, _)| block.get())
}

/// Move `delay` to `block`, or drop it when `block` is `None`
pub(crate) fn update(delays: &mut Delays, delay: u64, block: Option<u64>) {
    let holders: Vec<HexOrDecimal64> = delays
        .iter()
        .filter(|(_, total)| includes(total.get(), delay))
        .map(|(b, _)| *b)
        .collect();
    for key in holders {
        let remaining = delays.get(&key).map_or(0, |t| t.get() - delay);
        if remaining == 0 {
            delays.remove(&key);
        } else {
            delays.insert(key, HexOrDecimal64(remaining));
        }
    }
    if let Some(b) = block {
        let entry = delays.entry(HexOrDecimal64(b)).or_default();
        entry.0 += delay;
    }
}
