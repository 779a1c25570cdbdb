//! # ddstex
//!
//! A DDS texture-container reader and BC1-BC7 block-compression decoder.
//!
//! This library provides functionality to:
//! - Parse DDS headers (legacy and DXT10-extended) into a [`Texture`] descriptor
//! - Walk a texture's mipmap chain without allocating
//! - Decode BC1-BC7 (and uncompressed Alpha4) block-compressed images to plain RGBA/half-float buffers
//! - Translate the parsed format into Vulkan, OpenGL, and Direct3D enumerations
//!
//! ## Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bytes = std::fs::read("texture.dds")?;
//! let texture = ddstex::load_from_bytes(&bytes)?;
//!
//! let mut mips = vec![ddstex::MipMapInfo::default(); texture.n_mip_levels as usize];
//! let n = ddstex::get_mipmaps(&texture, &mut mips, 0);
//!
//! let base = &mips[0];
//! let src = &bytes[base.offset as usize..(base.offset + base.nbytes) as usize];
//! let mut rgba = vec![0u8; (base.size.x * base.size.y * 4) as usize];
//! ddstex::decompress_bc7(&mut rgba, 4, base.size.x as usize * 4, src, base.size.x, base.size.y);
//! # let _ = n;
//! # Ok(())
//! # }
//! ```

pub mod bits;
pub mod block;
pub mod color;
pub mod dds;
pub mod error;
pub mod format;
pub mod image_decode;
pub mod mapping;
pub mod texture;

pub use bits::{extract_bits, half_to_float, linear_from_srgb, sign_extend, srgb_from_linear};
pub use dds::{load_from_bytes, load_from_file};
pub use error::{DdsError, Result};
pub use format::{AlphaMode, InternalFormat};
pub use image_decode::{
    decompress_alpha4, decompress_bc1, decompress_bc2, decompress_bc3, decompress_bc4, decompress_bc5,
    decompress_bc6h, decompress_bc7,
};
#[cfg(feature = "rayon")]
pub use image_decode::decompress_bc7_rows_parallel;
pub use mapping::{to_direct3d, to_opengl, to_vulkan, Direct3DFormat, OpenGlFormat, VulkanFormat};
pub use texture::{get_mipmaps, CubeFaces, Extent3, MipMapInfo, Pitch, Texture};
