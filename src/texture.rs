//! The `Texture` descriptor and mipmap table computation.

use crate::format::{AlphaMode, InternalFormat};

/// Texel-space extent. `z` is depth for volume textures, array length for
/// 1D/2D array slices is tracked separately on `Texture`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Extent3 {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

/// Byte strides between rows and between depth slices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pitch {
    pub y: u32,
    pub z: u32,
}

/// Which of the six cube faces are present, and how many.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CubeFaces {
    pub mask: u8,
    pub count: u32,
}

pub const CUBE_FACE_POSITIVE_X: u8 = 0x01;
pub const CUBE_FACE_NEGATIVE_X: u8 = 0x02;
pub const CUBE_FACE_POSITIVE_Y: u8 = 0x04;
pub const CUBE_FACE_NEGATIVE_Y: u8 = 0x08;
pub const CUBE_FACE_POSITIVE_Z: u8 = 0x10;
pub const CUBE_FACE_NEGATIVE_Z: u8 = 0x20;

/// A parsed DDS texture: everything needed to interpret its payload bytes,
/// but not the bytes themselves beyond `offset0`/`nbytes` bookkeeping. Built
/// exclusively by [`crate::dds::load_from_bytes`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Texture {
    pub offset0: u32,
    pub nbytes: u32,
    pub size: Extent3,
    pub pitch: Pitch,
    pub array_length: u32,
    pub n_mip_levels: u32,
    pub dimension: u32,
    pub cubefaces: CubeFaces,
    pub alpha_mode: AlphaMode,
    pub is_volume: bool,
    pub internal_format: InternalFormat,
}

/// One entry of the mipmap table: where a level's bytes live in the source
/// buffer and how they're laid out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MipMapInfo {
    pub offset: u32,
    pub nbytes: u32,
    pub size: Extent3,
    pub pitch: Pitch,
}

fn halve(v: u32) -> u32 {
    (v / 2).max(1)
}

/// Fill `table` with up to `table.len()` mip levels of `texture_index`
/// (which array slice / cube face, 0-based) and return the number written.
/// Caller owns the fixed-capacity table; this never allocates.
pub fn get_mipmaps(texture: &Texture, table: &mut [MipMapInfo], texture_index: u32) -> usize {
    let cap = table.len().min(texture.n_mip_levels as usize);

    let mut size = texture.size;
    let mut pitch = texture.pitch;
    let mut offset = 0u32;
    let mut written = 0usize;

    for slot in table.iter_mut().take(cap) {
        let nbytes = size.z * pitch.z;
        *slot = MipMapInfo { offset, nbytes, size, pitch };
        offset += nbytes;
        written += 1;

        size.x = halve(size.x);
        size.y = halve(size.y);
        size.z = halve(size.z);
        pitch.y = halve(pitch.y);
        pitch.z = size.y * pitch.y;
    }

    let per_element_stride = {
        // Walk the remaining levels (if the table was shorter than
        // n_mip_levels) purely to find the total per-element byte stride.
        let mut size = size;
        let mut pitch = pitch;
        let mut total = offset;
        for _ in cap..texture.n_mip_levels as usize {
            let nbytes = size.z * pitch.z;
            total += nbytes;
            size.x = halve(size.x);
            size.y = halve(size.y);
            size.z = halve(size.z);
            pitch.y = halve(pitch.y);
            pitch.z = size.y * pitch.y;
        }
        total
    };

    let base = texture.offset0 + texture_index * per_element_stride;
    for slot in table.iter_mut().take(written) {
        slot.offset += base;
    }

    tracing::debug!("mip table for texture_index={texture_index}: {written} levels, base offset {base}");

    written
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texture_256_square() -> Texture {
        Texture {
            offset0: 128,
            size: Extent3 { x: 256, y: 256, z: 1 },
            pitch: Pitch { y: 256, z: 256 * 256 },
            n_mip_levels: 9,
            array_length: 1,
            dimension: 2,
            ..Default::default()
        }
    }

    #[test]
    fn mip_sizes_halve_down_to_one() {
        let tex = texture_256_square();
        let mut table = [MipMapInfo::default(); 9];
        let n = get_mipmaps(&tex, &mut table, 0);
        assert_eq!(n, 9);
        let expected = [256u32, 128, 64, 32, 16, 8, 4, 2, 1];
        for (level, &want) in expected.iter().enumerate() {
            assert_eq!(table[level].size.x, want);
            assert_eq!(table[level].size.y, want);
        }
    }

    #[test]
    fn table_capacity_caps_written_count() {
        let tex = texture_256_square();
        let mut table = [MipMapInfo::default(); 3];
        let n = get_mipmaps(&tex, &mut table, 0);
        assert_eq!(n, 3);
    }

    #[test]
    fn offsets_are_cumulative_and_biased_by_offset0() {
        let tex = texture_256_square();
        let mut table = [MipMapInfo::default(); 2];
        get_mipmaps(&tex, &mut table, 0);
        assert_eq!(table[0].offset, tex.offset0);
        assert_eq!(table[1].offset, tex.offset0 + table[0].nbytes);
    }

    #[test]
    fn second_array_element_offset_is_biased_by_per_element_stride() {
        let tex = texture_256_square();
        let mut full_table = [MipMapInfo::default(); 9];
        get_mipmaps(&tex, &mut full_table, 0);
        let stride: u32 = full_table.iter().map(|m| m.nbytes).sum();

        let mut table0 = [MipMapInfo::default(); 1];
        let mut table1 = [MipMapInfo::default(); 1];
        get_mipmaps(&tex, &mut table0, 0);
        get_mipmaps(&tex, &mut table1, 1);
        assert_eq!(table1[0].offset, table0[0].offset + stride);
    }
}
