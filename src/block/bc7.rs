//! BC7 (BPTC-RGBA): 8 modes selected by a leading-one bit code, each with
//! its own subset count, partition-bit width, rotation, endpoint/alpha bit
//! widths, and p-bit policy. The mode table, partition tables, and anchor
//! positions below are the published BPTC format constants; every BC7
//! decoder embeds the same numbers.

use crate::bits::expand_channel_to_8;
use crate::block::Bitstream128;
use crate::color::{interpolate64, B8G8R8A8};

/// Per-mode field widths, in the order the bitstream is read: subset
/// count, partition-selector bits, rotation bits, index-selection bit,
/// color bits, alpha bits, per-endpoint p-bit, shared p-bit, primary index
/// bits, secondary index bits.
struct ModeInfo {
    ns: usize,
    pb: u32,
    rb: u32,
    isb: u32,
    cb: u32,
    ab: u32,
    epb: u32,
    spb: u32,
    ib: u32,
    ib2: u32,
}

const MODES: [ModeInfo; 8] = [
    ModeInfo { ns: 3, pb: 4, rb: 0, isb: 0, cb: 4, ab: 0, epb: 1, spb: 0, ib: 3, ib2: 0 },
    ModeInfo { ns: 2, pb: 6, rb: 0, isb: 0, cb: 6, ab: 0, epb: 0, spb: 1, ib: 3, ib2: 0 },
    ModeInfo { ns: 3, pb: 6, rb: 0, isb: 0, cb: 5, ab: 0, epb: 0, spb: 0, ib: 2, ib2: 0 },
    ModeInfo { ns: 2, pb: 6, rb: 0, isb: 0, cb: 7, ab: 0, epb: 1, spb: 0, ib: 2, ib2: 0 },
    ModeInfo { ns: 1, pb: 0, rb: 2, isb: 1, cb: 5, ab: 6, epb: 0, spb: 0, ib: 2, ib2: 3 },
    ModeInfo { ns: 1, pb: 0, rb: 2, isb: 0, cb: 7, ab: 8, epb: 0, spb: 0, ib: 2, ib2: 2 },
    ModeInfo { ns: 1, pb: 0, rb: 0, isb: 0, cb: 7, ab: 7, epb: 1, spb: 0, ib: 4, ib2: 0 },
    ModeInfo { ns: 2, pb: 6, rb: 0, isb: 0, cb: 5, ab: 5, epb: 1, spb: 0, ib: 2, ib2: 0 },
];

/// Subset assignment per texel for every 2-subset partition (64 shapes),
/// indexed `[partition][row][col]`. The subset-0 anchor is always texel
/// `(0, 0)`; it's tagged `0x80` here (OR'd into the subset value) so the
/// index-reading pass can find the one-bit-shorter anchor without a second
/// table, and the subset-1 anchor is tagged `0x81`.
///
/// BC6H's 32 two-region partitions are the first 32 entries of this same
/// shape table, so `bc6h` reuses it rather than carrying a second copy.
#[rustfmt::skip]
pub(crate) const PARTITION_2: [[[u8; 4]; 4]; 64] = [
    [[0x80, 0, 1, 1], [0, 0, 1, 1], [0, 0, 1, 1], [0, 0, 1, 0x81]],
    [[0x80, 0, 0, 1], [0, 0, 0, 1], [0, 0, 0, 1], [0, 0, 0, 0x81]],
    [[0x80, 1, 1, 1], [0, 1, 1, 1], [0, 1, 1, 1], [0, 1, 1, 0x81]],
    [[0x80, 0, 0, 1], [0, 0, 1, 1], [0, 0, 1, 1], [0, 1, 1, 0x81]],
    [[0x80, 0, 0, 0], [0, 0, 0, 1], [0, 0, 0, 1], [0, 0, 1, 0x81]],
    [[0x80, 0, 1, 1], [0, 1, 1, 1], [0, 1, 1, 1], [1, 1, 1, 0x81]],
    [[0x80, 0, 0, 1], [0, 0, 1, 1], [0, 1, 1, 1], [1, 1, 1, 0x81]],
    [[0x80, 0, 0, 0], [0, 0, 0, 1], [0, 0, 1, 1], [0, 1, 1, 0x81]],
    [[0x80, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 1], [0, 0, 1, 0x81]],
    [[0x80, 0, 1, 1], [0, 1, 1, 1], [1, 1, 1, 1], [1, 1, 1, 0x81]],
    [[0x80, 0, 0, 0], [0, 0, 0, 1], [0, 1, 1, 1], [1, 1, 1, 0x81]],
    [[0x80, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 1], [0, 1, 1, 0x81]],
    [[0x80, 0, 0, 1], [0, 1, 1, 1], [1, 1, 1, 1], [1, 1, 1, 0x81]],
    [[0x80, 0, 0, 0], [0, 0, 0, 0], [1, 1, 1, 1], [1, 1, 1, 0x81]],
    [[0x80, 0, 0, 0], [1, 1, 1, 1], [1, 1, 1, 1], [1, 1, 1, 0x81]],
    [[0x80, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [1, 1, 1, 0x81]],
    [[0x80, 0, 0, 0], [1, 0, 0, 0], [1, 1, 1, 0], [1, 1, 1, 0x81]],
    [[0x80, 1, 0x81, 1], [0, 0, 0, 1], [0, 0, 0, 0], [0, 0, 0, 0]],
    [[0x80, 0, 0, 0], [0, 0, 0, 0], [0x81, 0, 0, 0], [1, 1, 1, 0]],
    [[0x80, 1, 0x81, 1], [0, 0, 1, 1], [0, 0, 0, 1], [0, 0, 0, 0]],
    [[0x80, 0, 0x81, 1], [0, 0, 0, 1], [0, 0, 0, 0], [0, 0, 0, 0]],
    [[0x80, 0, 0, 0], [1, 0, 0, 0], [0x81, 1, 0, 0], [1, 1, 1, 0]],
    [[0x80, 0, 0, 0], [0, 0, 0, 0], [0x81, 0, 0, 0], [1, 1, 0, 0]],
    [[0x80, 1, 1, 1], [0, 0, 1, 1], [0, 0, 1, 1], [0, 0, 0, 0x81]],
    [[0x80, 0, 0x81, 1], [0, 0, 0, 1], [0, 0, 0, 1], [0, 0, 0, 0]],
    [[0x80, 0, 0, 0], [1, 0, 0, 0], [0x81, 0, 0, 0], [1, 1, 0, 0]],
    [[0x80, 1, 0x81, 0], [0, 1, 1, 0], [0, 1, 1, 0], [0, 1, 1, 0]],
    [[0x80, 0, 0x81, 1], [0, 1, 1, 0], [0, 1, 1, 0], [1, 1, 0, 0]],
    [[0x80, 0, 0, 1], [0, 1, 1, 1], [0x81, 1, 1, 0], [1, 0, 0, 0]],
    [[0x80, 0, 0, 0], [1, 1, 1, 1], [0x81, 1, 1, 1], [0, 0, 0, 0]],
    [[0x80, 1, 0x81, 1], [0, 0, 0, 1], [1, 0, 0, 0], [1, 1, 1, 0]],
    [[0x80, 0, 0x81, 1], [1, 0, 0, 1], [1, 0, 0, 1], [1, 1, 0, 0]],
    [[0x80, 1, 0, 1], [0, 1, 0, 1], [0, 1, 0, 1], [0, 1, 0, 0x81]],
    [[0x80, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [1, 1, 1, 0x81]],
    [[0x80, 1, 0, 1], [1, 0, 0x81, 0], [0, 1, 0, 1], [1, 0, 1, 0]],
    [[0x80, 0, 1, 1], [0, 0, 1, 1], [0x81, 1, 0, 0], [1, 1, 0, 0]],
    [[0x80, 0, 0x81, 1], [1, 1, 0, 0], [0, 0, 1, 1], [1, 1, 0, 0]],
    [[0x80, 1, 0, 1], [0, 1, 0, 1], [0x81, 0, 1, 0], [1, 0, 1, 0]],
    [[0x80, 1, 1, 0], [1, 0, 0, 1], [0, 1, 1, 0], [1, 0, 0, 0x81]],
    [[0x80, 1, 0, 1], [1, 0, 1, 0], [1, 0, 1, 0], [0, 1, 0, 0x81]],
    [[0x80, 1, 0x81, 1], [0, 0, 1, 1], [1, 1, 0, 0], [1, 1, 1, 0]],
    [[0x80, 0, 0, 1], [0, 0, 1, 1], [0x81, 1, 0, 0], [1, 0, 0, 0]],
    [[0x80, 0, 0x81, 1], [0, 0, 1, 0], [0, 1, 0, 0], [1, 1, 0, 0]],
    [[0x80, 0, 0x81, 1], [1, 0, 1, 1], [1, 1, 0, 1], [1, 1, 0, 0]],
    [[0x80, 1, 0x81, 0], [1, 0, 0, 1], [1, 0, 0, 1], [0, 1, 1, 0]],
    [[0x80, 0, 1, 1], [1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 1, 0x81]],
    [[0x80, 1, 1, 0], [0, 1, 1, 0], [1, 0, 0, 1], [1, 0, 0, 0x81]],
    [[0x80, 0, 0, 0], [0, 1, 0x81, 0], [0, 1, 1, 0], [0, 0, 0, 0]],
    [[0x80, 1, 0, 0], [1, 1, 0x81, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
    [[0x80, 0, 0x81, 0], [0, 1, 1, 1], [0, 0, 1, 0], [0, 0, 0, 0]],
    [[0x80, 0, 0, 0], [0, 0, 0x81, 0], [0, 1, 1, 1], [0, 0, 1, 0]],
    [[0x80, 0, 0, 0], [0, 1, 0, 0], [0x81, 1, 1, 0], [0, 1, 0, 0]],
    [[0x80, 1, 1, 0], [1, 1, 0, 0], [1, 0, 0, 1], [0, 0, 1, 0x81]],
    [[0x80, 0, 1, 1], [0, 1, 1, 0], [1, 1, 0, 0], [1, 0, 0, 0x81]],
    [[0x80, 1, 0x81, 0], [0, 0, 1, 1], [1, 0, 0, 1], [1, 1, 0, 0]],
    [[0x80, 0, 0x81, 1], [1, 0, 0, 1], [1, 1, 0, 0], [0, 1, 1, 0]],
    [[0x80, 1, 1, 0], [1, 1, 0, 0], [1, 1, 0, 0], [1, 0, 0, 0x81]],
    [[0x80, 1, 1, 0], [0, 0, 1, 1], [0, 0, 1, 1], [1, 0, 0, 0x81]],
    [[0x80, 1, 1, 1], [1, 1, 1, 0], [1, 0, 0, 0], [0, 0, 0, 0x81]],
    [[0x80, 0, 0, 1], [1, 0, 0, 0], [1, 1, 1, 0], [0, 1, 1, 0x81]],
    [[0x80, 0, 0, 0], [1, 1, 1, 1], [0, 0, 1, 1], [0, 0, 1, 0x81]],
    [[0x80, 0, 0x81, 1], [0, 0, 1, 1], [1, 1, 1, 1], [0, 0, 0, 0]],
    [[0x80, 0, 0x81, 0], [0, 0, 1, 0], [1, 1, 1, 0], [1, 1, 1, 0]],
    [[0x80, 1, 0, 0], [0, 1, 0, 0], [0, 1, 1, 1], [0, 1, 1, 0x81]],
];

/// Subset assignment per texel for every 3-subset partition (64 shapes).
/// Subset-0 anchor tagged `0x80`, subset-1 anchor `0x81`, subset-2 anchor
/// `0x82`.
#[rustfmt::skip]
const PARTITION_3: [[[u8; 4]; 4]; 64] = [
    [[0x80, 0, 1, 0x81], [0, 0, 1, 1], [0, 2, 2, 1], [2, 2, 2, 0x82]],
    [[0x80, 0, 0, 0x81], [0, 0, 1, 1], [0x82, 2, 1, 1], [2, 2, 2, 1]],
    [[0x80, 0, 0, 0], [2, 0, 0, 1], [0x82, 2, 1, 1], [2, 2, 1, 0x81]],
    [[0x80, 2, 2, 0x82], [0, 0, 2, 2], [0, 0, 1, 1], [0, 1, 1, 0x81]],
    [[0x80, 0, 0, 0], [0, 0, 0, 0], [0x81, 1, 2, 2], [1, 1, 2, 0x82]],
    [[0x80, 0, 1, 0x81], [0, 0, 1, 1], [0, 0, 2, 2], [0, 0, 2, 0x82]],
    [[0x80, 0, 2, 0x82], [0, 0, 2, 2], [1, 1, 1, 1], [1, 1, 1, 0x81]],
    [[0x80, 0, 1, 1], [0, 0, 1, 1], [0x82, 2, 1, 1], [2, 2, 1, 0x81]],
    [[0x80, 0, 0, 0], [0, 0, 0, 0], [0x81, 1, 1, 1], [2, 2, 2, 0x82]],
    [[0x80, 0, 0, 0], [1, 1, 1, 1], [0x81, 1, 1, 1], [2, 2, 2, 0x82]],
    [[0x80, 0, 0, 0], [1, 1, 0x81, 1], [2, 2, 2, 2], [2, 2, 2, 0x82]],
    [[0x80, 0, 1, 2], [0, 0, 0x81, 2], [0, 0, 1, 2], [0, 0, 1, 0x82]],
    [[0x80, 1, 1, 2], [0, 1, 0x81, 2], [0, 1, 1, 2], [0, 1, 1, 0x82]],
    [[0x80, 1, 2, 2], [0, 0x81, 2, 2], [0, 1, 2, 2], [0, 1, 2, 0x82]],
    [[0x80, 0, 1, 0x81], [0, 1, 1, 2], [1, 1, 2, 2], [1, 2, 2, 0x82]],
    [[0x80, 0, 1, 0x81], [2, 0, 0, 1], [0x82, 2, 0, 0], [2, 2, 2, 0]],
    [[0x80, 0, 0, 0x81], [0, 0, 1, 1], [0, 1, 1, 2], [1, 1, 2, 0x82]],
    [[0x80, 1, 1, 0x81], [0, 0, 1, 1], [0x82, 0, 0, 1], [2, 2, 0, 0]],
    [[0x80, 0, 0, 0], [1, 1, 2, 2], [0x81, 1, 2, 2], [1, 1, 2, 0x82]],
    [[0x80, 0, 2, 0x82], [0, 0, 2, 2], [0, 0, 2, 2], [1, 1, 1, 0x81]],
    [[0x80, 1, 1, 0x81], [0, 1, 1, 1], [0, 2, 2, 2], [0, 2, 2, 0x82]],
    [[0x80, 0, 0, 0x81], [0, 0, 0, 1], [0x82, 2, 2, 1], [2, 2, 2, 1]],
    [[0x80, 0, 0, 0], [0, 0, 0x81, 1], [0, 1, 2, 2], [0, 1, 2, 0x82]],
    [[0x80, 0, 0, 0], [1, 1, 0, 0], [0x82, 2, 0x81, 0], [2, 2, 1, 0]],
    [[0x80, 1, 2, 0x82], [0, 0x81, 2, 2], [0, 0, 1, 1], [0, 0, 0, 0]],
    [[0x80, 0, 1, 2], [0, 0, 1, 2], [0x81, 1, 2, 2], [2, 2, 2, 0x82]],
    [[0x80, 1, 1, 0], [1, 2, 0x82, 1], [0x81, 2, 2, 1], [0, 1, 1, 0]],
    [[0x80, 0, 0, 0], [0, 1, 0x81, 0], [1, 2, 0x82, 1], [1, 2, 2, 1]],
    [[0x80, 0, 2, 2], [1, 1, 0, 2], [0x81, 1, 0, 2], [0, 0, 2, 0x82]],
    [[0x80, 1, 1, 0], [0, 0x81, 1, 0], [2, 0, 0, 2], [2, 2, 2, 0x82]],
    [[0x80, 0, 1, 1], [0, 1, 2, 2], [0, 1, 0x82, 2], [0, 0, 1, 0x81]],
    [[0x80, 0, 0, 0], [2, 0, 0, 0], [0x82, 2, 1, 1], [2, 2, 2, 0x81]],
    [[0x80, 0, 0, 0], [0, 0, 0, 2], [0x81, 1, 2, 2], [1, 2, 2, 0x82]],
    [[0x80, 2, 2, 0x82], [0, 0, 2, 2], [0, 0, 1, 2], [0, 0, 1, 0x81]],
    [[0x80, 0, 1, 0x81], [0, 0, 1, 2], [0, 0, 2, 2], [0, 2, 2, 0x82]],
    [[0x80, 1, 2, 0], [0, 0x81, 2, 0], [0, 1, 0x82, 0], [0, 1, 2, 0]],
    [[0x80, 0, 0, 0], [1, 1, 0x81, 1], [2, 2, 0x82, 2], [0, 0, 0, 0]],
    [[0x80, 1, 2, 0], [1, 2, 0, 1], [0x82, 0, 0x81, 2], [0, 1, 2, 0]],
    [[0x80, 1, 2, 0], [2, 0, 1, 2], [0x81, 0x82, 0, 1], [0, 1, 2, 0]],
    [[0x80, 0, 1, 1], [2, 2, 0, 0], [1, 1, 0x82, 2], [0, 0, 1, 0x81]],
    [[0x80, 0, 1, 1], [1, 1, 0x82, 2], [2, 2, 0, 0], [0, 0, 1, 0x81]],
    [[0x80, 1, 0, 0x81], [0, 1, 0, 1], [2, 2, 2, 2], [2, 2, 2, 0x82]],
    [[0x80, 0, 0, 0], [0, 0, 0, 0], [0x82, 1, 2, 1], [2, 1, 2, 0x81]],
    [[0x80, 0, 2, 2], [1, 0x81, 2, 2], [0, 0, 2, 2], [1, 1, 2, 0x82]],
    [[0x80, 0, 2, 0x82], [0, 0, 1, 1], [0, 0, 2, 2], [0, 0, 1, 0x81]],
    [[0x80, 2, 2, 0], [1, 2, 0x82, 1], [0, 2, 2, 0], [1, 2, 2, 0x81]],
    [[0x80, 1, 0, 1], [2, 2, 0x82, 2], [2, 2, 2, 2], [0, 1, 0, 0x81]],
    [[0x80, 0, 0, 0], [2, 1, 2, 1], [0x82, 1, 2, 1], [2, 1, 2, 0x81]],
    [[0x80, 1, 0, 0x81], [0, 1, 0, 1], [0, 1, 0, 1], [2, 2, 2, 0x82]],
    [[0x80, 2, 2, 0x82], [0, 1, 1, 1], [0, 2, 2, 2], [0, 1, 1, 0x81]],
    [[0x80, 0, 0, 2], [1, 0x81, 1, 2], [0, 0, 0, 2], [1, 1, 1, 0x82]],
    [[0x80, 0, 0, 0], [2, 0x81, 1, 2], [2, 1, 1, 2], [2, 1, 1, 0x82]],
    [[0x80, 2, 2, 2], [0, 0x81, 1, 1], [0, 1, 1, 1], [0, 2, 2, 0x82]],
    [[0x80, 0, 0, 2], [1, 1, 1, 2], [0x81, 1, 1, 2], [0, 0, 0, 0x82]],
    [[0x80, 1, 1, 0], [0, 0x81, 1, 0], [0, 1, 1, 0], [2, 2, 2, 0x82]],
    [[0x80, 0, 0, 0], [0, 0, 0, 0], [2, 1, 0x81, 2], [2, 1, 1, 0x82]],
    [[0x80, 1, 1, 0], [0, 0x81, 1, 0], [2, 2, 2, 2], [2, 2, 2, 0x82]],
    [[0x80, 0, 2, 2], [0, 0, 1, 1], [0, 0, 0x81, 1], [0, 0, 2, 0x82]],
    [[0x80, 0, 2, 2], [1, 1, 2, 2], [0x81, 1, 2, 2], [0, 0, 2, 0x82]],
    [[0x80, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [2, 0x81, 1, 0x82]],
    [[0x80, 0, 0, 0x82], [0, 0, 0, 1], [0, 0, 0, 2], [0, 0, 0, 0x81]],
    [[0x80, 2, 2, 2], [1, 2, 2, 2], [0, 2, 2, 2], [0x81, 2, 2, 0x82]],
    [[0x80, 1, 0, 0x81], [2, 2, 2, 2], [2, 2, 2, 2], [2, 2, 2, 0x82]],
    [[0x80, 1, 1, 0x81], [2, 0, 1, 1], [0x82, 2, 0, 1], [2, 2, 2, 0]],
];

const WEIGHTS2: [u32; 4] = [0, 21, 43, 64];
const WEIGHTS3: [u32; 8] = [0, 9, 18, 27, 37, 46, 55, 64];
const WEIGHTS4: [u32; 16] = [0, 4, 9, 13, 17, 21, 26, 30, 34, 38, 43, 47, 51, 55, 60, 64];

fn weights_for(index_bits: u32) -> &'static [u32] {
    match index_bits {
        2 => &WEIGHTS2,
        3 => &WEIGHTS3,
        _ => &WEIGHTS4,
    }
}

fn zero_block(dst: &mut [u8], dst_stride_x: usize, dst_pitch_y: usize) {
    for y in 0..4 {
        for x in 0..4 {
            let off = crate::block::texel_offset(x, y, dst_stride_x, dst_pitch_y);
            dst[off..off + 4].copy_from_slice(&[0, 0, 0, 0]);
        }
    }
}

/// Decode one 16-byte BC7 block. An invalid mode byte (all-zero leading
/// byte) produces an all-zero 4x4 RGBA block rather than an error.
pub fn decode_bc7_block(src: &[u8], dst: &mut [u8], dst_stride_x: usize, dst_pitch_y: usize) {
    debug_assert!(src.len() >= 16);
    let mut bstream = Bitstream128::new(src);

    let mut mode = 0u32;
    while mode < 8 && bstream.read_bit() == 0 {
        mode += 1;
    }
    if mode >= 8 {
        zero_block(dst, dst_stride_x, dst_pitch_y);
        return;
    }
    let info = &MODES[mode as usize];

    let partition = if info.pb > 0 {
        bstream.read_bits(info.pb)
    } else {
        0
    };
    let rotation = if info.rb > 0 { bstream.read_bits(info.rb) } else { 0 };
    let index_selection_bit = if info.isb > 0 { bstream.read_bit() } else { 0 };

    let num_endpoints = info.ns * 2;
    let mut endpoints = [[0u32; 4]; 6];

    for channel in 0..3 {
        for e in endpoints.iter_mut().take(num_endpoints) {
            e[channel] = bstream.read_bits(info.cb);
        }
    }
    if info.ab > 0 {
        for e in endpoints.iter_mut().take(num_endpoints) {
            e[3] = bstream.read_bits(info.ab);
        }
    } else {
        for e in endpoints.iter_mut().take(num_endpoints) {
            e[3] = 0xFF;
        }
    }

    if info.epb == 1 {
        for e in endpoints.iter_mut().take(num_endpoints) {
            for c in e.iter_mut() {
                *c <<= 1;
            }
            let p = bstream.read_bit();
            for c in e.iter_mut() {
                *c |= p;
            }
        }
    } else if info.spb == 1 {
        for e in endpoints.iter_mut().take(num_endpoints) {
            for c in e.iter_mut() {
                *c <<= 1;
            }
        }
        let p0 = bstream.read_bit();
        let p1 = bstream.read_bit();
        for c in 0..4 {
            endpoints[0][c] |= p0;
            endpoints[1][c] |= p0;
            endpoints[2][c] |= p1;
            endpoints[3][c] |= p1;
        }
    }

    let pbit_width = info.epb.max(info.spb);
    for e in endpoints.iter_mut().take(num_endpoints) {
        let color_width = info.cb + pbit_width;
        for c in e.iter_mut().take(3) {
            *c = expand_channel_to_8(*c, color_width) as u32;
        }
        let alpha_width = if info.ab > 0 { info.ab + pbit_width } else { 8 };
        e[3] = if info.ab > 0 {
            expand_channel_to_8(e[3], alpha_width) as u32
        } else {
            0xFF
        };
    }

    let partition_table: fn(usize, usize, usize) -> u8 = match info.ns {
        1 => |_p, x, y| if x == 0 && y == 0 { 0x80 } else { 0 },
        2 => |p, x, y| PARTITION_2[p][y][x],
        _ => |p, x, y| PARTITION_3[p][y][x],
    };

    // Pass 1: primary (and, for two-index modes, secondary) index bits.
    let mut primary = [[0u32; 4]; 4];
    let mut secondary = [[0u32; 4]; 4];
    for y in 0..4 {
        for x in 0..4 {
            let tagged = partition_table(partition as usize, x, y);
            let is_anchor = tagged & 0x80 != 0;
            let width = if is_anchor { info.ib - 1 } else { info.ib };
            primary[y][x] = bstream.read_bits(width);
        }
    }
    if info.ib2 > 0 {
        for y in 0..4 {
            for x in 0..4 {
                let is_anchor = x == 0 && y == 0;
                let width = if is_anchor { info.ib2 - 1 } else { info.ib2 };
                secondary[y][x] = bstream.read_bits(width);
            }
        }
    }

    for y in 0..4 {
        for x in 0..4 {
            let tagged = partition_table(partition as usize, x, y);
            let subset = (tagged & 0x03) as usize;
            let e0 = endpoints[subset * 2];
            let e1 = endpoints[subset * 2 + 1];

            let (color_idx, alpha_idx, color_weights, alpha_weights) = if info.ib2 == 0 {
                (
                    primary[y][x],
                    primary[y][x],
                    weights_for(info.ib),
                    weights_for(info.ib),
                )
            } else if index_selection_bit == 0 {
                (
                    primary[y][x],
                    secondary[y][x],
                    weights_for(info.ib),
                    weights_for(info.ib2),
                )
            } else {
                (
                    secondary[y][x],
                    primary[y][x],
                    weights_for(info.ib2),
                    weights_for(info.ib),
                )
            };

            let mut r = interpolate64(e0[0] as i32, e1[0] as i32, color_weights[color_idx as usize]);
            let mut g = interpolate64(e0[1] as i32, e1[1] as i32, color_weights[color_idx as usize]);
            let mut b = interpolate64(e0[2] as i32, e1[2] as i32, color_weights[color_idx as usize]);
            let mut a = interpolate64(e0[3] as i32, e1[3] as i32, alpha_weights[alpha_idx as usize]);

            match rotation {
                1 => std::mem::swap(&mut a, &mut r),
                2 => std::mem::swap(&mut a, &mut g),
                3 => std::mem::swap(&mut a, &mut b),
                _ => {}
            }

            let color = B8G8R8A8::new(r as u8, g as u8, b as u8, a as u8);
            let off = crate::block::texel_offset(x, y, dst_stride_x, dst_pitch_y);
            dst[off] = color.r;
            dst[off + 1] = color.g;
            dst[off + 2] = color.b;
            dst[off + 3] = color.a;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_mode_byte_yields_all_zero_block() {
        let src = [0u8; 16];
        let mut dst = [0xAAu8; 16 * 4];
        decode_bc7_block(&src, &mut dst, 4, 16);
        assert!(dst.iter().all(|&b| b == 0));
    }

    #[test]
    fn idempotent_redecode() {
        let mut src = [0u8; 16];
        src[0] = 0x01; // mode 0: bit 0 set
        let mut dst_a = [0u8; 16 * 4];
        let mut dst_b = [0u8; 16 * 4];
        decode_bc7_block(&src, &mut dst_a, 4, 16);
        decode_bc7_block(&src, &mut dst_b, 4, 16);
        assert_eq!(dst_a, dst_b);
    }

    #[test]
    fn anchor_bit_budget_matches_invariant() {
        // Property: for a 2-subset mode, total index bits read == 16*IB - 2
        // (the subset-0 anchor at (0,0) and the subset-1 anchor each
        // contribute one fewer bit than IB).
        let info = &MODES[1]; // mode 1: NS=2, IB=3
        let mut total = 0u32;
        for y in 0..4 {
            for x in 0..4 {
                let tagged = PARTITION_2[0][y][x];
                let is_anchor = tagged & 0x80 != 0;
                total += if is_anchor { info.ib - 1 } else { info.ib };
            }
        }
        assert_eq!(total, 16 * info.ib - 2);
    }
}
