//! CPU-side texture decoding for the floor normal map and the environment cube.

use image::imageops::FilterType;
use image::RgbaImage;

#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    #[error("failed to decode `{name}`: {source}")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },
    #[error("cube map needs 6 faces, got {0}")]
    FaceCount(usize),
    #[error("`{0}` has zero size")]
    Empty(String),
}

/// Tightly packed RGBA8 pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl DecodedImage {
    /// One-pixel image, used until the real texture arrives.
    pub fn solid(rgba: [u8; 4]) -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: rgba.to_vec(),
        }
    }

    /// Bytes per row as uploaded to the GPU.
    pub fn bytes_per_row(&self) -> u32 {
        self.width * 4
    }
}

impl From<RgbaImage> for DecodedImage {
    fn from(img: RgbaImage) -> Self {
        Self {
            width: img.width(),
            height: img.height(),
            rgba: img.into_raw(),
        }
    }
}

/// Decode a jpeg/png payload into RGBA8.
pub fn decode_rgba(name: &str, bytes: &[u8]) -> Result<DecodedImage, TextureError> {
    let img = image::load_from_memory(bytes).map_err(|source| TextureError::Decode {
        name: name.to_string(),
        source,
    })?;
    if img.width() == 0 || img.height() == 0 {
        return Err(TextureError::Empty(name.to_string()));
    }
    Ok(img.to_rgba8().into())
}

/// Six square faces of identical size in +X, -X, +Y, -Y, +Z, -Z order.
#[derive(Clone, Debug)]
pub struct CubeImage {
    pub size: u32,
    pub faces: Vec<DecodedImage>,
}

/// Normalise six decoded faces to a common square size (the smallest edge seen).
pub fn assemble_cube(faces: Vec<DecodedImage>) -> Result<CubeImage, TextureError> {
    if faces.len() != 6 {
        return Err(TextureError::FaceCount(faces.len()));
    }
    let size = faces
        .iter()
        .map(|f| f.width.min(f.height))
        .min()
        .unwrap_or(1)
        .max(1);
    let faces = faces
        .into_iter()
        .map(|f| {
            if f.width == size && f.height == size {
                return f;
            }
            match RgbaImage::from_raw(f.width, f.height, f.rgba) {
                Some(img) => image::imageops::resize(&img, size, size, FilterType::Triangle).into(),
                None => DecodedImage {
                    width: size,
                    height: size,
                    rgba: vec![0; (size * size * 4) as usize],
                },
            }
        })
        .collect();
    log::info!("[gpu] cube map assembled at {size}x{size}");
    Ok(CubeImage { size, faces })
}
