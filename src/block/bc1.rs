//! BC1 (S3TC DXT1): two packed 5/6/5 endpoints plus sixteen 2-bit indices.
//! Also the RGB half of BC2 and BC3, which call this with `use_alpha=false`
//! and supply their own endpoint-ordering convention via `use_select`.

use crate::bits::u16_from_le;
use crate::block::texel_offset;
use crate::color::{expand_b5g6r5, interpolate2_color, interpolate3_color, B8G8R8A8};

/// Decode one 8-byte BC1 block.
///
/// `use_select` chooses whether the raw endpoint comparison can select the
/// 3-color-plus-transparent palette (`true`), or whether the 4-color
/// opaque palette is always used regardless of endpoint order (`false`) —
/// the mode BC2/BC3 force for their RGB half, since those formats carry
/// alpha separately and never need the fourth palette entry to be
/// transparent black.
///
/// `use_alpha` selects whether the alpha byte is written at all: BC1 proper
/// writes RGBA, while BC2/BC3's RGB half writes only three bytes per texel.
pub fn decode_bc1_block(
    src: &[u8],
    dst: &mut [u8],
    dst_stride_x: usize,
    dst_pitch_y: usize,
    use_select: bool,
    use_alpha: bool,
) {
    debug_assert!(src.len() >= 8);
    let color0_raw = u16_from_le([src[0], src[1]]);
    let color1_raw = u16_from_le([src[2], src[3]]);
    let indices = u32::from_le_bytes([src[4], src[5], src[6], src[7]]);

    let c0 = expand_b5g6r5(color0_raw);
    let c1 = expand_b5g6r5(color1_raw);

    let palette: [B8G8R8A8; 4] = if !use_select || color0_raw > color1_raw {
        [
            c0,
            c1,
            interpolate3_color(c0, c1, 1),
            interpolate3_color(c0, c1, 2),
        ]
    } else {
        [
            c0,
            c1,
            interpolate2_color(c0, c1, 1),
            B8G8R8A8::TRANSPARENT_BLACK,
        ]
    };

    for i in 0..16 {
        let idx = ((indices >> (2 * i)) & 0x3) as usize;
        let color = palette[idx];
        let x = i % 4;
        let y = i / 4;
        let off = texel_offset(x, y, dst_stride_x, dst_pitch_y);
        dst[off] = color.r;
        dst[off + 1] = color.g;
        dst[off + 2] = color.b;
        if use_alpha {
            dst[off + 3] = color.a;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(color0: u16, color1: u16, indices: u32) -> [u8; 8] {
        let c0 = color0.to_le_bytes();
        let c1 = color1.to_le_bytes();
        let idx = indices.to_le_bytes();
        [c0[0], c0[1], c1[0], c1[1], idx[0], idx[1], idx[2], idx[3]]
    }

    #[test]
    fn four_color_palette_when_color0_greater() {
        // c0 = white, c1 = black, use_select=true: c0 > c1 forces 4-color.
        let src = block(0xFFFF, 0x0000, 0xFFFF_FFFF);
        let mut dst = [0u8; 16 * 4];
        decode_bc1_block(&src, &mut dst, 4, 16, true, true);
        // index 2 (0b10) selects 2/3 white + 1/3 black.
        assert_eq!(dst[0], (2 * 255 + 1) / 3);
        assert_eq!(dst[3], 255);
    }

    #[test]
    fn three_color_transparent_when_reversed() {
        // c0 = black, c1 = white, use_select=true: c0 <= c1, 3-color mode.
        let src = block(0x0000, 0xFFFF, 0xFFFF_FFFF);
        let mut dst = [0xAAu8; 16 * 4];
        decode_bc1_block(&src, &mut dst, 4, 16, true, true);
        // All indices are 3 (0b11): transparent black.
        assert_eq!(&dst[0..4], &[0, 0, 0, 0]);
    }

    #[test]
    fn use_select_false_forces_opaque_regardless_of_order() {
        // c0 = black, c1 = white, but use_select=false: always 4-color.
        let src = block(0x0000, 0xFFFF, 0xFFFF_FFFF);
        let mut dst = [0u8; 16 * 3];
        decode_bc1_block(&src, &mut dst, 3, 12, false, false);
        // index 3 (0b11) now selects 2/3 c1 + 1/3 c0, not transparent black.
        assert_eq!(dst[0], (255 * 2 + 1) / 3);
    }

    #[test]
    fn use_alpha_false_skips_alpha_byte() {
        let src = block(0xFFFF, 0x0000, 0);
        let mut dst = [0x42u8; 3];
        decode_bc1_block(&src, &mut dst, 3, 12, true, false);
        assert_eq!(&dst[0..3], &[255, 255, 255]);
    }
}
