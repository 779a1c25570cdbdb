//! The internal pixel-format tag and its companion alpha-interpretation
//! enum. Discriminants mirror the DXGI_FORMAT numbering so that the
//! Direct3D mapping contract (`dxgi_format`) can be a plain identity
//! pass-through, and so DXT10's `dxgiFormat` range check (`<= 132`) lines up
//! directly with this enum's own numeric range.

/// A closed tag for every pixel format this crate recognizes. A few DXGI
/// values in the middle of the range (116..=129) were never assigned by the
/// format and have no corresponding variant here either — the gap is
/// intentional, not an omission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum InternalFormat {
    Unknown = 0,
    R32G32B32A32Typeless = 1,
    R32G32B32A32Float = 2,
    R32G32B32A32Uint = 3,
    R32G32B32A32Sint = 4,
    R32G32B32Typeless = 5,
    R32G32B32Float = 6,
    R32G32B32Uint = 7,
    R32G32B32Sint = 8,
    R16G16B16A16Typeless = 9,
    R16G16B16A16Float = 10,
    R16G16B16A16Unorm = 11,
    R16G16B16A16Uint = 12,
    R16G16B16A16Snorm = 13,
    R16G16B16A16Sint = 14,
    R32G32Typeless = 15,
    R32G32Float = 16,
    R32G32Uint = 17,
    R32G32Sint = 18,
    R32G8X24Typeless = 19,
    D32FloatS8X24Uint = 20,
    R32FloatX8X24Typeless = 21,
    X32TypelessG8X24Uint = 22,
    R10G10B10A2Typeless = 23,
    R10G10B10A2Unorm = 24,
    R10G10B10A2Uint = 25,
    R11G11B10Float = 26,
    R8G8B8A8Typeless = 27,
    R8G8B8A8Unorm = 28,
    R8G8B8A8UnormSrgb = 29,
    R8G8B8A8Uint = 30,
    R8G8B8A8Snorm = 31,
    R8G8B8A8Sint = 32,
    R16G16Typeless = 33,
    R16G16Float = 34,
    R16G16Unorm = 35,
    R16G16Uint = 36,
    R16G16Snorm = 37,
    R16G16Sint = 38,
    R32Typeless = 39,
    D32Float = 40,
    R32Float = 41,
    R32Uint = 42,
    R32Sint = 43,
    R24G8Typeless = 44,
    D24UnormS8Uint = 45,
    R24UnormX8Typeless = 46,
    X24TypelessG8Uint = 47,
    R8G8Typeless = 48,
    R8G8Unorm = 49,
    R8G8Uint = 50,
    R8G8Snorm = 51,
    R8G8Sint = 52,
    R16Typeless = 53,
    R16Float = 54,
    D16Unorm = 55,
    R16Unorm = 56,
    R16Uint = 57,
    R16Snorm = 58,
    R16Sint = 59,
    R8Typeless = 60,
    R8Unorm = 61,
    R8Uint = 62,
    R8Snorm = 63,
    R8Sint = 64,
    A8Unorm = 65,
    R1Unorm = 66,
    R9G9B9E5SharedExp = 67,
    R8G8B8G8Unorm = 68,
    G8R8G8B8Unorm = 69,
    Bc1Typeless = 70,
    Bc1Unorm = 71,
    Bc1UnormSrgb = 72,
    Bc2Typeless = 73,
    Bc2Unorm = 74,
    Bc2UnormSrgb = 75,
    Bc3Typeless = 76,
    Bc3Unorm = 77,
    Bc3UnormSrgb = 78,
    Bc4Typeless = 79,
    Bc4Unorm = 80,
    Bc4Snorm = 81,
    Bc5Typeless = 82,
    Bc5Unorm = 83,
    Bc5Snorm = 84,
    B5G6R5Unorm = 85,
    B5G5R5A1Unorm = 86,
    B8G8R8A8Unorm = 87,
    B8G8R8X8Unorm = 88,
    R10G10B10XrBiasA2Unorm = 89,
    B8G8R8A8Typeless = 90,
    B8G8R8A8UnormSrgb = 91,
    B8G8R8X8Typeless = 92,
    B8G8R8X8UnormSrgb = 93,
    Bc6hTypeless = 94,
    Bc6hUf16 = 95,
    Bc6hSf16 = 96,
    Bc7Typeless = 97,
    Bc7Unorm = 98,
    Bc7UnormSrgb = 99,
    Ayuv = 100,
    Y410 = 101,
    Y416 = 102,
    Nv12 = 103,
    P010 = 104,
    P016 = 105,
    Opaque420 = 106,
    Yuy2 = 107,
    Y210 = 108,
    Y216 = 109,
    Nv11 = 110,
    Ai44 = 111,
    Ia44 = 112,
    P8 = 113,
    A8P8 = 114,
    B4G4R4A4Unorm = 115,
    P208 = 130,
    V208 = 131,
    V408 = 132,
}

impl Default for InternalFormat {
    fn default() -> Self {
        InternalFormat::Unknown
    }
}

impl InternalFormat {
    /// Resolve a raw DXT10 `dxgiFormat` value to its tag. Returns `None` for
    /// values outside the known range or inside the unassigned gap.
    pub fn from_dxgi(value: u32) -> Option<Self> {
        use InternalFormat::*;
        Some(match value {
            0 => Unknown,
            1 => R32G32B32A32Typeless,
            2 => R32G32B32A32Float,
            3 => R32G32B32A32Uint,
            4 => R32G32B32A32Sint,
            5 => R32G32B32Typeless,
            6 => R32G32B32Float,
            7 => R32G32B32Uint,
            8 => R32G32B32Sint,
            9 => R16G16B16A16Typeless,
            10 => R16G16B16A16Float,
            11 => R16G16B16A16Unorm,
            12 => R16G16B16A16Uint,
            13 => R16G16B16A16Snorm,
            14 => R16G16B16A16Sint,
            15 => R32G32Typeless,
            16 => R32G32Float,
            17 => R32G32Uint,
            18 => R32G32Sint,
            19 => R32G8X24Typeless,
            20 => D32FloatS8X24Uint,
            21 => R32FloatX8X24Typeless,
            22 => X32TypelessG8X24Uint,
            23 => R10G10B10A2Typeless,
            24 => R10G10B10A2Unorm,
            25 => R10G10B10A2Uint,
            26 => R11G11B10Float,
            27 => R8G8B8A8Typeless,
            28 => R8G8B8A8Unorm,
            29 => R8G8B8A8UnormSrgb,
            30 => R8G8B8A8Uint,
            31 => R8G8B8A8Snorm,
            32 => R8G8B8A8Sint,
            33 => R16G16Typeless,
            34 => R16G16Float,
            35 => R16G16Unorm,
            36 => R16G16Uint,
            37 => R16G16Snorm,
            38 => R16G16Sint,
            39 => R32Typeless,
            40 => D32Float,
            41 => R32Float,
            42 => R32Uint,
            43 => R32Sint,
            44 => R24G8Typeless,
            45 => D24UnormS8Uint,
            46 => R24UnormX8Typeless,
            47 => X24TypelessG8Uint,
            48 => R8G8Typeless,
            49 => R8G8Unorm,
            50 => R8G8Uint,
            51 => R8G8Snorm,
            52 => R8G8Sint,
            53 => R16Typeless,
            54 => R16Float,
            55 => D16Unorm,
            56 => R16Unorm,
            57 => R16Uint,
            58 => R16Snorm,
            59 => R16Sint,
            60 => R8Typeless,
            61 => R8Unorm,
            62 => R8Uint,
            63 => R8Snorm,
            64 => R8Sint,
            65 => A8Unorm,
            66 => R1Unorm,
            67 => R9G9B9E5SharedExp,
            68 => R8G8B8G8Unorm,
            69 => G8R8G8B8Unorm,
            70 => Bc1Typeless,
            71 => Bc1Unorm,
            72 => Bc1UnormSrgb,
            73 => Bc2Typeless,
            74 => Bc2Unorm,
            75 => Bc2UnormSrgb,
            76 => Bc3Typeless,
            77 => Bc3Unorm,
            78 => Bc3UnormSrgb,
            79 => Bc4Typeless,
            80 => Bc4Unorm,
            81 => Bc4Snorm,
            82 => Bc5Typeless,
            83 => Bc5Unorm,
            84 => Bc5Snorm,
            85 => B5G6R5Unorm,
            86 => B5G5R5A1Unorm,
            87 => B8G8R8A8Unorm,
            88 => B8G8R8X8Unorm,
            89 => R10G10B10XrBiasA2Unorm,
            90 => B8G8R8A8Typeless,
            91 => B8G8R8A8UnormSrgb,
            92 => B8G8R8X8Typeless,
            93 => B8G8R8X8UnormSrgb,
            94 => Bc6hTypeless,
            95 => Bc6hUf16,
            96 => Bc6hSf16,
            97 => Bc7Typeless,
            98 => Bc7Unorm,
            99 => Bc7UnormSrgb,
            100 => Ayuv,
            101 => Y410,
            102 => Y416,
            103 => Nv12,
            104 => P010,
            105 => P016,
            106 => Opaque420,
            107 => Yuy2,
            108 => Y210,
            109 => Y216,
            110 => Nv11,
            111 => Ai44,
            112 => Ia44,
            113 => P8,
            114 => A8P8,
            115 => B4G4R4A4Unorm,
            130 => P208,
            131 => V208,
            132 => V408,
            _ => return None,
        })
    }

    /// The inverse of [`from_dxgi`](Self::from_dxgi): the format's own DXGI
    /// numeric value, used directly by the Direct3D mapping contract.
    pub fn to_dxgi(self) -> u32 {
        self as u32
    }

    /// True for any of the seven BC1..BC7 families, in any typeless/UNORM/
    /// SNORM/UFLOAT/SFLOAT/SRGB variant.
    pub fn is_block_compressed(self) -> bool {
        use InternalFormat::*;
        matches!(
            self,
            Bc1Typeless
                | Bc1Unorm
                | Bc1UnormSrgb
                | Bc2Typeless
                | Bc2Unorm
                | Bc2UnormSrgb
                | Bc3Typeless
                | Bc3Unorm
                | Bc3UnormSrgb
                | Bc4Typeless
                | Bc4Unorm
                | Bc4Snorm
                | Bc5Typeless
                | Bc5Unorm
                | Bc5Snorm
                | Bc6hTypeless
                | Bc6hUf16
                | Bc6hSf16
                | Bc7Typeless
                | Bc7Unorm
                | Bc7UnormSrgb
        )
    }

    /// True for the BC1 family specifically (`UNORM`, `SRGB`, or
    /// `TYPELESS`), used by the BC1-opaque special case in the format-enum
    /// mapping contract.
    pub fn is_bc1(self) -> bool {
        matches!(
            self,
            InternalFormat::Bc1Typeless | InternalFormat::Bc1Unorm | InternalFormat::Bc1UnormSrgb
        )
    }
}

/// How the alpha channel of a decoded texture should be interpreted by a
/// consumer (premultiplied blending, straight alpha, or no alpha at all).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlphaMode {
    #[default]
    Unknown,
    Straight,
    Premultiplied,
    Opaque,
    Custom,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dxgi_round_trip() {
        for v in [0u32, 28, 71, 98, 115, 132] {
            let fmt = InternalFormat::from_dxgi(v).expect("known value");
            assert_eq!(fmt.to_dxgi(), v);
        }
    }

    #[test]
    fn gap_is_rejected() {
        assert!(InternalFormat::from_dxgi(116).is_none());
        assert!(InternalFormat::from_dxgi(129).is_none());
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert!(InternalFormat::from_dxgi(133).is_none());
        assert!(InternalFormat::from_dxgi(u32::MAX).is_none());
    }

    #[test]
    fn bc1_is_recognized_as_block_compressed() {
        assert!(InternalFormat::Bc1Unorm.is_block_compressed());
        assert!(InternalFormat::Bc1Unorm.is_bc1());
        assert!(!InternalFormat::R8Unorm.is_block_compressed());
    }
}
