//! Error types for container parsing and format resolution.

use thiserror::Error;

/// Everything that can go wrong while parsing a DDS container or resolving
/// its pixel format. Block-level decode failures (invalid BC6H/BC7 modes)
/// are *not* represented here: per the decoder's non-fatal policy they are
/// handled by zero-filling the offending 4x4 block, never by returning an
/// error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DdsError {
    #[error("not a DDS file (missing 'DDS ' magic)")]
    NotADdsFile,

    #[error("truncated file: need at least {needed} bytes, got {actual}")]
    TruncatedFile { needed: usize, actual: usize },

    #[error("header size mismatch: expected {expected}, got {actual}")]
    HeaderSizeMismatch { expected: u32, actual: u32 },

    #[error("unsupported FourCC: {0:?}")]
    UnsupportedFourCc([u8; 4]),

    #[error("unsupported alpha-only bit count: {0}")]
    UnsupportedAlphaBitCount(u32),

    #[error("unsupported RGB bit count: {0}")]
    UnsupportedRgbBitCount(u32),

    #[error("non-contiguous channel mask: 0x{0:08x}")]
    NonContiguousChannelMask(u32),

    #[error("YUV pixel formats are not supported")]
    YuvUnsupported,

    #[error("neither DDSD_PITCH nor DDSD_LINEARSIZE is set; cannot compute pitch")]
    MissingPitchOrLinearSize,

    #[error("DXT10 dxgiFormat {0} is out of the known range")]
    Dx10FormatOutOfRange(u32),

    #[error("cubemap texture has zero faces set")]
    CubemapWithZeroFaces,

    #[error("3D texture has array_length != 1 ({0})")]
    VolumeArrayLengthMismatch(u32),

    #[error("cube texture has dimension != 2 ({0})")]
    CubeDimensionMismatch(u32),

    #[error("mip_map_count is {actual} but DDSD_MIPMAPCOUNT is not set")]
    MipCountWithoutMipmapCap { actual: u32 },
}

pub type Result<T> = std::result::Result<T, DdsError>;
