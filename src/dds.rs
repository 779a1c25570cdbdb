//! The DDS container reader: magic check, legacy header, pixel-format
//! dispatch, and the optional DXT10 extension header.

use std::io::{Cursor, Read};

use byteorder::{LittleEndian, ReadBytesExt};
use tracing::trace;

use crate::error::{DdsError, Result};
use crate::format::{AlphaMode, InternalFormat};
use crate::texture::{CubeFaces, Extent3, Pitch, Texture};

const MAGIC: u32 = 0x2053_4444; // "DDS " as little-endian u32
const HEADER_SIZE: u32 = 124;
const DXT10_HEADER_SIZE: usize = 20;

const DDSD_PITCH: u32 = 0x8;
const DDSD_MIPMAPCOUNT: u32 = 0x2_0000;
const DDSD_DEPTH: u32 = 0x80_0000;
const DDSD_LINEARSIZE: u32 = 0x8_0000;

const DDPF_ALPHAPIXELS: u32 = 0x1;
const DDPF_ALPHA: u32 = 0x2;
const DDPF_FOURCC: u32 = 0x4;
const DDPF_RGB: u32 = 0x40;
const DDPF_YUV: u32 = 0x200;
const DDPF_LUMINANCE: u32 = 0x2_0000;
const DDPF_BUMPDUDV: u32 = 0x8_0000;

const DDSCAPS2_CUBEMAP: u32 = 0x200;
const DDSCAPS2_CUBEMAP_POSITIVEX: u32 = 0x400;
const DDSCAPS2_CUBEMAP_NEGATIVEX: u32 = 0x800;
const DDSCAPS2_CUBEMAP_POSITIVEY: u32 = 0x1000;
const DDSCAPS2_CUBEMAP_NEGATIVEY: u32 = 0x2000;
const DDSCAPS2_CUBEMAP_POSITIVEZ: u32 = 0x4000;
const DDSCAPS2_CUBEMAP_NEGATIVEZ: u32 = 0x8000;
const DDSCAPS2_VOLUME: u32 = 0x20_0000;

const D3D10_RESOURCE_MISC_TEXTURECUBE: u32 = 0x4;

struct RawHeader {
    flags: u32,
    height: u32,
    width: u32,
    pitch_or_linear_size: u32,
    depth: u32,
    mip_map_count: u32,
    pf_flags: u32,
    pf_four_cc: [u8; 4],
    pf_rgb_bit_count: u32,
    pf_r_mask: u32,
    pf_g_mask: u32,
    pf_b_mask: u32,
    pf_a_mask: u32,
    caps2: u32,
}

fn read_header(cursor: &mut Cursor<&[u8]>) -> Result<RawHeader> {
    let dw_size = read_u32(cursor)?;
    if dw_size != HEADER_SIZE {
        return Err(DdsError::HeaderSizeMismatch { expected: HEADER_SIZE, actual: dw_size });
    }
    let flags = read_u32(cursor)?;
    let height = read_u32(cursor)?;
    let width = read_u32(cursor)?;
    let pitch_or_linear_size = read_u32(cursor)?;
    let depth = read_u32(cursor)?;
    let mip_map_count = read_u32(cursor)?;
    for _ in 0..11 {
        read_u32(cursor)?;
    }

    let pf_size = read_u32(cursor)?;
    let _ = pf_size; // the 32-byte pixel format block's own dwSize, unchecked
    let pf_flags = read_u32(cursor)?;
    let mut pf_four_cc = [0u8; 4];
    read_exact(cursor, &mut pf_four_cc)?;
    let pf_rgb_bit_count = read_u32(cursor)?;
    let pf_r_mask = read_u32(cursor)?;
    let pf_g_mask = read_u32(cursor)?;
    let pf_b_mask = read_u32(cursor)?;
    let pf_a_mask = read_u32(cursor)?;

    let caps = read_u32(cursor)?;
    let caps2 = read_u32(cursor)?;
    let _caps3 = read_u32(cursor)?;
    let _caps4 = read_u32(cursor)?;
    let _reserved2 = read_u32(cursor)?;
    let _ = caps;

    Ok(RawHeader {
        flags,
        height,
        width,
        pitch_or_linear_size,
        depth,
        mip_map_count,
        pf_flags,
        pf_four_cc,
        pf_rgb_bit_count,
        pf_r_mask,
        pf_g_mask,
        pf_b_mask,
        pf_a_mask,
        caps2,
    })
}

fn read_u32(cursor: &mut Cursor<&[u8]>) -> Result<u32> {
    cursor.read_u32::<LittleEndian>().map_err(|_| truncated_error(cursor))
}

fn read_exact(cursor: &mut Cursor<&[u8]>, buf: &mut [u8]) -> Result<()> {
    cursor.read_exact(buf).map_err(|_| truncated_error(cursor))
}

fn truncated_error(cursor: &Cursor<&[u8]>) -> DdsError {
    DdsError::TruncatedFile { needed: cursor.position() as usize + 4, actual: cursor.get_ref().len() }
}

/// Left-to-right: `(shift, width)` of the contiguous run of one-bits in
/// `mask`, or an error if the mask isn't a single contiguous run.
fn mask_shift_width(mask: u32) -> Result<(u32, u32)> {
    if mask == 0 {
        return Ok((0, 0));
    }
    let shift = mask.trailing_zeros();
    let width = (mask >> shift).trailing_ones();
    let reconstructed = if width >= 32 { u32::MAX } else { ((1u32 << width) - 1) << shift };
    if reconstructed != mask {
        return Err(DdsError::NonContiguousChannelMask(mask));
    }
    Ok((shift, width))
}

fn resolve_rgb_format(header: &RawHeader) -> Result<(InternalFormat, AlphaMode)> {
    let has_alpha = header.pf_flags & DDPF_ALPHAPIXELS != 0;
    let (r_shift, r_width) = mask_shift_width(header.pf_r_mask)?;
    let (g_shift, g_width) = mask_shift_width(header.pf_g_mask)?;
    let (b_shift, b_width) = mask_shift_width(header.pf_b_mask)?;
    let (a_shift, a_width) = mask_shift_width(header.pf_a_mask)?;
    let _ = (r_shift, g_shift, b_shift, a_shift);

    match header.pf_rgb_bit_count {
        16 => match (r_width, g_width, b_width, a_width) {
            (5, 6, 5, 0) => Ok((InternalFormat::B5G6R5Unorm, AlphaMode::Opaque)),
            (5, 5, 5, 1) => Ok((InternalFormat::B5G5R5A1Unorm, AlphaMode::Straight)),
            (4, 4, 4, 4) => Ok((InternalFormat::B4G4R4A4Unorm, AlphaMode::Straight)),
            _ => Err(DdsError::UnsupportedRgbBitCount(16)),
        },
        32 => {
            let alpha_mode = if has_alpha && a_width > 0 { AlphaMode::Straight } else { AlphaMode::Opaque };
            match (header.pf_r_mask, header.pf_g_mask, header.pf_b_mask, header.pf_a_mask) {
                (0x0000_00FF, 0x0000_FF00, 0x00FF_0000, 0xFF00_0000) => {
                    Ok((InternalFormat::R8G8B8A8Unorm, alpha_mode))
                }
                (0x00FF_0000, 0x0000_FF00, 0x0000_00FF, 0xFF00_0000) => {
                    Ok((InternalFormat::B8G8R8A8Unorm, alpha_mode))
                }
                (0x00FF_0000, 0x0000_FF00, 0x0000_00FF, 0) => Ok((InternalFormat::B8G8R8X8Unorm, AlphaMode::Opaque)),
                (0x0000_FFFF, 0xFFFF_0000, 0, 0) => Ok((InternalFormat::R16G16Unorm, AlphaMode::Opaque)),
                _ => Err(DdsError::UnsupportedRgbBitCount(32)),
            }
        }
        other => Err(DdsError::UnsupportedRgbBitCount(other)),
    }
}

fn resolve_luminance_format(header: &RawHeader) -> Result<(InternalFormat, AlphaMode)> {
    let has_alpha = header.pf_flags & DDPF_ALPHAPIXELS != 0 && header.pf_a_mask != 0;
    match header.pf_rgb_bit_count {
        8 => Ok((InternalFormat::R8Unorm, AlphaMode::Opaque)),
        16 if has_alpha => Ok((InternalFormat::R8G8Unorm, AlphaMode::Straight)),
        16 => Ok((InternalFormat::R16Unorm, AlphaMode::Opaque)),
        other => Err(DdsError::UnsupportedRgbBitCount(other)),
    }
}

fn resolve_bumpdudv_format(header: &RawHeader) -> Result<(InternalFormat, AlphaMode)> {
    match header.pf_rgb_bit_count {
        16 => Ok((InternalFormat::R8G8Snorm, AlphaMode::Unknown)),
        32 if header.pf_a_mask != 0 => Ok((InternalFormat::R8G8B8A8Snorm, AlphaMode::Straight)),
        32 => Ok((InternalFormat::R16G16Snorm, AlphaMode::Unknown)),
        other => Err(DdsError::UnsupportedRgbBitCount(other)),
    }
}

fn resolve_fourcc_format(four_cc: [u8; 4]) -> Result<Option<(InternalFormat, AlphaMode)>> {
    Ok(Some(match &four_cc {
        b"DXT1" => (InternalFormat::Bc1Unorm, AlphaMode::Premultiplied),
        b"DXT2" => (InternalFormat::Bc2Unorm, AlphaMode::Premultiplied),
        b"DXT3" => (InternalFormat::Bc2Unorm, AlphaMode::Straight),
        b"DXT4" => (InternalFormat::Bc3Unorm, AlphaMode::Premultiplied),
        b"DXT5" => (InternalFormat::Bc3Unorm, AlphaMode::Straight),
        b"ATI1" | b"BC4U" => (InternalFormat::Bc4Unorm, AlphaMode::Unknown),
        b"BC4S" => (InternalFormat::Bc4Snorm, AlphaMode::Unknown),
        b"ATI2" | b"BC5U" => (InternalFormat::Bc5Unorm, AlphaMode::Unknown),
        b"BC5S" => (InternalFormat::Bc5Snorm, AlphaMode::Unknown),
        b"RGBG" => (InternalFormat::R8G8B8G8Unorm, AlphaMode::Opaque),
        b"GRGB" => (InternalFormat::G8R8G8B8Unorm, AlphaMode::Opaque),
        b"YUY2" => (InternalFormat::Yuy2, AlphaMode::Opaque),
        b"DX10" => return Ok(None),
        _ => {
            let code = u32::from_le_bytes(four_cc);
            match code {
                0x24 => (InternalFormat::R16G16B16A16Unorm, AlphaMode::Straight),
                0x6E => (InternalFormat::R16G16B16A16Snorm, AlphaMode::Straight),
                0x6F => (InternalFormat::R16Float, AlphaMode::Opaque),
                0x71 => (InternalFormat::R16G16B16A16Float, AlphaMode::Straight),
                0x72 => (InternalFormat::R32Float, AlphaMode::Opaque),
                0x73 => (InternalFormat::R32G32Float, AlphaMode::Opaque),
                0x74 => (InternalFormat::R32G32B32A32Float, AlphaMode::Straight),
                _ => return Err(DdsError::UnsupportedFourCc(four_cc)),
            }
        }
    }))
}

struct Dxt10Header {
    dxgi_format: u32,
    resource_dimension: u32,
    misc_flag: u32,
    array_size: u32,
    alpha_mode: u32,
}

fn read_dxt10_header(cursor: &mut Cursor<&[u8]>) -> Result<Dxt10Header> {
    let dxgi_format = read_u32(cursor)?;
    let resource_dimension = read_u32(cursor)?;
    let misc_flag = read_u32(cursor)?;
    let array_size = read_u32(cursor)?;
    let misc_flags2 = read_u32(cursor)?;
    Ok(Dxt10Header { dxgi_format, resource_dimension, misc_flag, array_size, alpha_mode: misc_flags2 & 0x7 })
}

fn alpha_mode_from_dxt10(value: u32) -> AlphaMode {
    match value {
        1 => AlphaMode::Straight,
        2 => AlphaMode::Premultiplied,
        3 => AlphaMode::Opaque,
        4 => AlphaMode::Custom,
        _ => AlphaMode::Unknown,
    }
}

/// Parse a DDS container from an in-memory buffer. Returns the populated
/// descriptor, or a [`DdsError`] describing why the buffer isn't a valid
/// (or supported) DDS file.
pub fn load_from_bytes(data: &[u8]) -> Result<Texture> {
    if data.len() < 4 {
        return Err(DdsError::TruncatedFile { needed: 4, actual: data.len() });
    }
    let magic = u32::from_le_bytes(data[0..4].try_into().unwrap());
    if magic != MAGIC {
        return Err(DdsError::NotADdsFile);
    }
    if data.len() < 4 + 124 {
        return Err(DdsError::TruncatedFile { needed: 4 + 124, actual: data.len() });
    }

    let mut cursor = Cursor::new(&data[4..]);
    let header = read_header(&mut cursor)?;

    let depth = if header.flags & DDSD_DEPTH != 0 { header.depth.max(1) } else { 1 };
    if header.mip_map_count > 1 && header.flags & DDSD_MIPMAPCOUNT == 0 {
        return Err(DdsError::MipCountWithoutMipmapCap { actual: header.mip_map_count });
    }
    let mip_map_count = header.mip_map_count.max(1);

    let has_pitch = header.flags & DDSD_PITCH != 0;
    let has_linear_size = header.flags & DDSD_LINEARSIZE != 0;
    if !has_pitch && !has_linear_size {
        return Err(DdsError::MissingPitchOrLinearSize);
    }

    let is_fourcc = header.pf_flags & DDPF_FOURCC != 0;
    let dx10 = if is_fourcc { resolve_fourcc_format(header.pf_four_cc)? } else { None };

    let mut dxt10: Option<Dxt10Header> = None;
    let (internal_format, mut alpha_mode, dimension) = if is_fourcc && header.pf_four_cc == *b"DX10" {
        let parsed = read_dxt10_header(&mut cursor)?;
        let fmt = InternalFormat::from_dxgi(parsed.dxgi_format)
            .ok_or(DdsError::Dx10FormatOutOfRange(parsed.dxgi_format))?;
        let dimension = match parsed.resource_dimension {
            2 => 1,
            3 => 2,
            4 => 3,
            other => return Err(DdsError::Dx10FormatOutOfRange(other)),
        };
        let alpha_mode = alpha_mode_from_dxt10(parsed.alpha_mode);
        dxt10 = Some(parsed);
        trace!("pixel format resolved via DXT10 extension header (dxgiFormat={})", parsed.dxgi_format);
        (fmt, alpha_mode, dimension)
    } else if is_fourcc {
        let (fmt, mode) = dx10.expect("resolve_fourcc_format returns Some for any non-DX10 FourCC");
        trace!("pixel format resolved via legacy FourCC {:?}", header.pf_four_cc);
        (fmt, mode, 2)
    } else if header.pf_flags & DDPF_ALPHA != 0 {
        if header.pf_rgb_bit_count != 8 {
            return Err(DdsError::UnsupportedAlphaBitCount(header.pf_rgb_bit_count));
        }
        (InternalFormat::A8Unorm, AlphaMode::Straight, 2)
    } else if header.pf_flags & DDPF_RGB != 0 {
        let (fmt, mode) = resolve_rgb_format(&header)?;
        trace!("pixel format resolved via legacy RGB mask");
        (fmt, mode, 2)
    } else if header.pf_flags & DDPF_LUMINANCE != 0 {
        let (fmt, mode) = resolve_luminance_format(&header)?;
        trace!("pixel format resolved via legacy LUMINANCE mask");
        (fmt, mode, 2)
    } else if header.pf_flags & DDPF_BUMPDUDV != 0 {
        let (fmt, mode) = resolve_bumpdudv_format(&header)?;
        trace!("pixel format resolved via legacy BUMPDUDV mask");
        (fmt, mode, 2)
    } else if header.pf_flags & DDPF_YUV != 0 {
        return Err(DdsError::YuvUnsupported);
    } else {
        return Err(DdsError::UnsupportedFourCc(header.pf_four_cc));
    };

    let mut cubefaces = CubeFaces::default();
    let mut is_volume = false;
    if header.caps2 & DDSCAPS2_CUBEMAP != 0 {
        let mut mask = 0u8;
        if header.caps2 & DDSCAPS2_CUBEMAP_POSITIVEX != 0 {
            mask |= crate::texture::CUBE_FACE_POSITIVE_X;
        }
        if header.caps2 & DDSCAPS2_CUBEMAP_NEGATIVEX != 0 {
            mask |= crate::texture::CUBE_FACE_NEGATIVE_X;
        }
        if header.caps2 & DDSCAPS2_CUBEMAP_POSITIVEY != 0 {
            mask |= crate::texture::CUBE_FACE_POSITIVE_Y;
        }
        if header.caps2 & DDSCAPS2_CUBEMAP_NEGATIVEY != 0 {
            mask |= crate::texture::CUBE_FACE_NEGATIVE_Y;
        }
        if header.caps2 & DDSCAPS2_CUBEMAP_POSITIVEZ != 0 {
            mask |= crate::texture::CUBE_FACE_POSITIVE_Z;
        }
        if header.caps2 & DDSCAPS2_CUBEMAP_NEGATIVEZ != 0 {
            mask |= crate::texture::CUBE_FACE_NEGATIVE_Z;
        }
        if mask == 0 {
            return Err(DdsError::CubemapWithZeroFaces);
        }
        cubefaces = CubeFaces { mask, count: mask.count_ones() };
    }
    if header.caps2 & DDSCAPS2_VOLUME != 0 {
        is_volume = true;
    }

    let dimension = if let Some(d) = dxt10.as_ref() {
        if d.misc_flag & D3D10_RESOURCE_MISC_TEXTURECUBE != 0 {
            if dimension != 2 {
                return Err(DdsError::CubeDimensionMismatch(dimension));
            }
            if cubefaces.count == 0 {
                cubefaces = CubeFaces { mask: 0x3F, count: 6 };
            }
        }
        if dimension == 3 && d.array_size != 1 {
            return Err(DdsError::VolumeArrayLengthMismatch(d.array_size));
        }
        dimension
    } else {
        dimension
    };
    if cubefaces.count > 0 && dimension != 2 {
        return Err(DdsError::CubeDimensionMismatch(dimension));
    }

    if let Some(d) = dxt10.as_ref() {
        if alpha_mode == AlphaMode::Unknown {
            alpha_mode = alpha_mode_from_dxt10(d.alpha_mode);
        }
    }

    let array_length = dxt10.as_ref().map(|d| d.array_size.max(1)).unwrap_or(1);

    let size = Extent3 { x: header.width, y: header.height, z: depth };
    let pitch_y = if has_pitch {
        header.pitch_or_linear_size
    } else if internal_format.is_block_compressed() {
        let blocks_wide = header.width.div_ceil(4);
        blocks_wide * block_byte_size(internal_format)
    } else {
        header.pitch_or_linear_size
    };
    let pitch = Pitch { y: pitch_y, z: size.y * pitch_y };
    let nbytes = size.z * pitch.z;

    let offset0 = 4 + 124 + if dxt10.is_some() { DXT10_HEADER_SIZE as u32 } else { 0 };

    Ok(Texture {
        offset0,
        nbytes,
        size,
        pitch,
        array_length,
        n_mip_levels: mip_map_count,
        dimension,
        cubefaces,
        alpha_mode,
        is_volume,
        internal_format,
    })
}

fn block_byte_size(format: InternalFormat) -> u32 {
    use InternalFormat::*;
    match format {
        Bc1Typeless | Bc1Unorm | Bc1UnormSrgb | Bc4Typeless | Bc4Unorm | Bc4Snorm => 8,
        _ => 16,
    }
}

/// Read an entire DDS file via `reader` (the I/O itself is an external
/// collaborator) and parse it the same way [`load_from_bytes`] does.
pub fn load_from_file(mut reader: impl Read) -> Result<(Texture, Vec<u8>)> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data).map_err(|_| DdsError::TruncatedFile { needed: 4, actual: 0 })?;
    let texture = load_from_bytes(&data)?;
    Ok((texture, data))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_header_bytes(pf_flags: u32, four_cc: [u8; 4], width: u32, height: u32) -> Vec<u8> {
        let mut v = Vec::with_capacity(128);
        v.extend_from_slice(&MAGIC.to_le_bytes());
        v.extend_from_slice(&124u32.to_le_bytes()); // dwSize
        v.extend_from_slice(&(DDSD_PITCH | 0x1000).to_le_bytes()); // dwFlags
        v.extend_from_slice(&height.to_le_bytes());
        v.extend_from_slice(&width.to_le_bytes());
        v.extend_from_slice(&(width * 4).to_le_bytes()); // pitch
        v.extend_from_slice(&0u32.to_le_bytes()); // depth
        v.extend_from_slice(&1u32.to_le_bytes()); // mip count
        for _ in 0..11 {
            v.extend_from_slice(&0u32.to_le_bytes());
        }
        v.extend_from_slice(&32u32.to_le_bytes()); // pixel format dwSize
        v.extend_from_slice(&pf_flags.to_le_bytes());
        v.extend_from_slice(&four_cc);
        v.extend_from_slice(&0u32.to_le_bytes()); // rgb bit count
        v.extend_from_slice(&0u32.to_le_bytes()); // r mask
        v.extend_from_slice(&0u32.to_le_bytes()); // g mask
        v.extend_from_slice(&0u32.to_le_bytes()); // b mask
        v.extend_from_slice(&0u32.to_le_bytes()); // a mask
        v.extend_from_slice(&0x1000u32.to_le_bytes()); // caps
        v.extend_from_slice(&0u32.to_le_bytes()); // caps2
        v.extend_from_slice(&0u32.to_le_bytes()); // caps3
        v.extend_from_slice(&0u32.to_le_bytes()); // caps4
        v.extend_from_slice(&0u32.to_le_bytes()); // reserved2
        v
    }

    #[test]
    fn rejects_missing_magic() {
        let data = [0u8; 128];
        assert_eq!(load_from_bytes(&data), Err(DdsError::NotADdsFile));
    }

    #[test]
    fn rejects_wrong_header_size() {
        let mut data = minimal_header_bytes(DDPF_FOURCC, *b"DXT1", 64, 64);
        data[4..8].copy_from_slice(&100u32.to_le_bytes());
        assert_eq!(load_from_bytes(&data), Err(DdsError::HeaderSizeMismatch { expected: 124, actual: 100 }));
    }

    #[test]
    fn dxt1_maps_to_bc1_with_premultiplied_alpha() {
        let data = minimal_header_bytes(DDPF_FOURCC, *b"DXT1", 64, 64);
        let tex = load_from_bytes(&data).unwrap();
        assert_eq!(tex.internal_format, InternalFormat::Bc1Unorm);
        assert_eq!(tex.alpha_mode, AlphaMode::Premultiplied);
    }

    #[test]
    fn dxt3_maps_to_bc2_with_straight_alpha() {
        let data = minimal_header_bytes(DDPF_FOURCC, *b"DXT3", 64, 64);
        let tex = load_from_bytes(&data).unwrap();
        assert_eq!(tex.internal_format, InternalFormat::Bc2Unorm);
        assert_eq!(tex.alpha_mode, AlphaMode::Straight);
    }

    #[test]
    fn ati2_and_bc5u_are_the_same_format() {
        let a = load_from_bytes(&minimal_header_bytes(DDPF_FOURCC, *b"ATI2", 64, 64)).unwrap();
        let b = load_from_bytes(&minimal_header_bytes(DDPF_FOURCC, *b"BC5U", 64, 64)).unwrap();
        assert_eq!(a.internal_format, InternalFormat::Bc5Unorm);
        assert_eq!(a.internal_format, b.internal_format);
    }

    #[test]
    fn rgba8888_mask_maps_to_r8g8b8a8() {
        let mut data = minimal_header_bytes(DDPF_RGB | DDPF_ALPHAPIXELS, [0, 0, 0, 0], 64, 64);
        // Offsets: 4 magic + 4 dwSize + ... rgb_bit_count at byte 4+72+4=80? Easiest: rebuild via cursor math.
        let rgb_bit_count_offset = 4 + 4 + 4 * 6 + 44 + 4 + 4 + 4;
        data[rgb_bit_count_offset..rgb_bit_count_offset + 4].copy_from_slice(&32u32.to_le_bytes());
        let r_mask_offset = rgb_bit_count_offset + 4;
        data[r_mask_offset..r_mask_offset + 4].copy_from_slice(&0x0000_00FFu32.to_le_bytes());
        data[r_mask_offset + 4..r_mask_offset + 8].copy_from_slice(&0x0000_FF00u32.to_le_bytes());
        data[r_mask_offset + 8..r_mask_offset + 12].copy_from_slice(&0x00FF_0000u32.to_le_bytes());
        data[r_mask_offset + 12..r_mask_offset + 16].copy_from_slice(&0xFF00_0000u32.to_le_bytes());
        let tex = load_from_bytes(&data).unwrap();
        assert_eq!(tex.internal_format, InternalFormat::R8G8B8A8Unorm);
    }

    #[test]
    fn non_contiguous_mask_is_rejected() {
        assert_eq!(mask_shift_width(0b1011), Err(DdsError::NonContiguousChannelMask(0b1011)));
    }

    #[test]
    fn cubemap_with_zero_faces_is_rejected() {
        let mut data = minimal_header_bytes(DDPF_FOURCC, *b"DXT1", 64, 64);
        let caps2_offset = 4 + 4 + 4 * 6 + 44 + 32 + 4;
        data[caps2_offset..caps2_offset + 4].copy_from_slice(&DDSCAPS2_CUBEMAP.to_le_bytes());
        assert_eq!(load_from_bytes(&data), Err(DdsError::CubemapWithZeroFaces));
    }
}
