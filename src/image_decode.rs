//! Tile a source buffer into 4x4 blocks and invoke a block decoder for
//! each, advancing the source pointer by the format's block byte size and
//! the destination pointer by the caller's stride/pitch. `width`/`height`
//! must be multiples of 4 (block-compressed formats are never sampled at
//! finer granularity than one block).

use crate::block::alpha4::decode_alpha4_block;
use crate::block::bc1::decode_bc1_block;
use crate::block::bc2::decode_bc2_block;
use crate::block::bc3::decode_bc3_block;
use crate::block::bc4::decode_bc4_block;
use crate::block::bc5::decode_bc5_block;
use crate::block::bc6h::decode_bc6h_block;
use crate::block::bc7::decode_bc7_block;

const BLOCK_SIZE_8: usize = 8;
const BLOCK_SIZE_16: usize = 16;

fn decompress<F: FnMut(&[u8], &mut [u8], usize, usize)>(
    dst: &mut [u8],
    dst_stride_x: usize,
    dst_pitch_y: usize,
    src: &[u8],
    width: u32,
    height: u32,
    src_block_size: usize,
    mut decode_block: F,
) {
    let width = width as usize;
    let height = height as usize;
    let mut src_offset = 0usize;

    let mut y = 0usize;
    while y < height {
        let mut x = 0usize;
        while x < width {
            let dst_off = y * dst_pitch_y + x * dst_stride_x;
            let block_src = &src[src_offset..src_offset + src_block_size];
            decode_block(block_src, &mut dst[dst_off..], dst_stride_x, dst_pitch_y);
            src_offset += src_block_size;
            x += 4;
        }
        y += 4;
    }
}

/// Decode an Alpha4 image into channel `channel_offset` of an RGBA (or
/// narrower) destination.
pub fn decompress_alpha4(
    dst: &mut [u8],
    dst_stride_x: usize,
    dst_pitch_y: usize,
    src: &[u8],
    width: u32,
    height: u32,
    channel_offset: usize,
) {
    decompress(dst, dst_stride_x, dst_pitch_y, src, width, height, BLOCK_SIZE_8, |s, d, sx, py| {
        decode_alpha4_block(s, d, sx, py, channel_offset)
    });
}

pub fn decompress_bc1(
    dst: &mut [u8],
    dst_stride_x: usize,
    dst_pitch_y: usize,
    src: &[u8],
    width: u32,
    height: u32,
    use_select: bool,
    use_alpha: bool,
) {
    decompress(dst, dst_stride_x, dst_pitch_y, src, width, height, BLOCK_SIZE_8, |s, d, sx, py| {
        decode_bc1_block(s, d, sx, py, use_select, use_alpha)
    });
}

pub fn decompress_bc2(dst: &mut [u8], dst_stride_x: usize, dst_pitch_y: usize, src: &[u8], width: u32, height: u32) {
    decompress(dst, dst_stride_x, dst_pitch_y, src, width, height, BLOCK_SIZE_16, decode_bc2_block);
}

pub fn decompress_bc3(dst: &mut [u8], dst_stride_x: usize, dst_pitch_y: usize, src: &[u8], width: u32, height: u32) {
    decompress(dst, dst_stride_x, dst_pitch_y, src, width, height, BLOCK_SIZE_16, decode_bc3_block);
}

pub fn decompress_bc4(
    dst: &mut [u8],
    dst_stride_x: usize,
    dst_pitch_y: usize,
    src: &[u8],
    width: u32,
    height: u32,
    channel_offset: usize,
    is_signed: bool,
) {
    decompress(dst, dst_stride_x, dst_pitch_y, src, width, height, BLOCK_SIZE_8, |s, d, sx, py| {
        decode_bc4_block(s, d, sx, py, channel_offset, is_signed)
    });
}

pub fn decompress_bc5(
    dst: &mut [u8],
    dst_stride_x: usize,
    dst_pitch_y: usize,
    src: &[u8],
    width: u32,
    height: u32,
    is_signed: bool,
) {
    decompress(dst, dst_stride_x, dst_pitch_y, src, width, height, BLOCK_SIZE_16, |s, d, sx, py| {
        decode_bc5_block(s, d, sx, py, is_signed)
    });
}

/// Decode a whole BC6H image. `dst_stride_x` is normally 6 (three packed
/// half-float channels); callers targeting a wider interleaved buffer may
/// pass a larger stride.
pub fn decompress_bc6h(
    dst: &mut [u8],
    dst_stride_x: usize,
    dst_pitch_y: usize,
    src: &[u8],
    width: u32,
    height: u32,
    is_signed: bool,
) {
    decompress(dst, dst_stride_x, dst_pitch_y, src, width, height, BLOCK_SIZE_16, |s, d, sx, py| {
        decode_bc6h_block(s, d, sx, py, is_signed)
    });
}

pub fn decompress_bc7(dst: &mut [u8], dst_stride_x: usize, dst_pitch_y: usize, src: &[u8], width: u32, height: u32) {
    decompress(dst, dst_stride_x, dst_pitch_y, src, width, height, BLOCK_SIZE_16, decode_bc7_block);
}

#[cfg(feature = "rayon")]
mod parallel {
    use super::*;
    use rayon::prelude::*;

    /// Row-parallel BC7 decode: each row of 4x4 blocks is independent, so
    /// rows fan out across the `rayon` pool. Destination rows must be
    /// disjoint non-overlapping slices, which `dst_pitch_y` guarantees.
    pub fn decompress_bc7_rows_parallel(
        dst: &mut [u8],
        dst_stride_x: usize,
        dst_pitch_y: usize,
        src: &[u8],
        width: u32,
        height: u32,
    ) {
        let width = width as usize;
        let blocks_per_row = width.div_ceil(4);
        let src_row_stride = blocks_per_row * 16;

        dst.par_chunks_mut(dst_pitch_y * 4)
            .zip(src.par_chunks(src_row_stride))
            .for_each(|(dst_row, src_row)| {
                decompress_bc7(dst_row, dst_stride_x, dst_pitch_y, src_row, width as u32, 4);
            });
    }
}

#[cfg(feature = "rayon")]
pub use parallel::decompress_bc7_rows_parallel;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decompress_bc1_tiles_a_two_by_two_block_grid() {
        // 8x8 image = 4 BC1 blocks, each all-white (c0=c1=0xFFFF).
        let mut src = Vec::new();
        for _ in 0..4 {
            src.extend_from_slice(&[0xFF, 0xFF, 0xFF, 0xFF, 0, 0, 0, 0]);
        }
        let mut dst = vec![0u8; 8 * 8 * 4];
        decompress_bc1(&mut dst, 4, 8 * 4, &src, 8, 8, true, true);
        assert!(dst.chunks(4).all(|px| px == [255, 255, 255, 255]));
    }

    #[test]
    fn decompress_bc7_advances_source_by_block_size() {
        let src = vec![0u8; 16 * 4]; // 2x2 grid of zero (all-invalid-mode) blocks
        let mut dst = vec![0xAAu8; 8 * 8 * 4];
        decompress_bc7(&mut dst, 4, 8 * 4, &src, 8, 8);
        assert!(dst.iter().all(|&b| b == 0));
    }
}
