//! Structs and functions for handling textures.
//!
//! The module provides the [`Texture`] struct which is a CPU representation of a GPU texture,
//! and [`TextureOptions`] for the sampling state it is created with.

use std::sync::Arc;

use glow::HasContext;
use image::{DynamicImage, GenericImageView};

/// Sampling state and upload behaviour of a texture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextureOptions {
    pub wrap: u32,
    pub min_filter: u32,
    pub mag_filter: u32,
    pub mipmaps: bool,
    /// Flip rows so the first image row ends up at `v = 1`, where OpenGL expects the top.
    pub flip_vertically: bool,
}

impl Default for TextureOptions {
    fn default() -> Self {
        Self {
            wrap: glow::REPEAT,
            min_filter: glow::LINEAR_MIPMAP_LINEAR,
            mag_filter: glow::LINEAR,
            mipmaps: true,
            flip_vertically: true,
        }
    }
}

/// Converts an image to tightly packed RGBA8 rows in upload order.
pub fn prepare_pixels(image: &DynamicImage, flip_vertically: bool) -> (u32, u32, Vec<u8>) {
    let (width, height) = image.dimensions();
    let data = if flip_vertically {
        image.flipv().to_rgba8().into_raw()
    } else {
        image.to_rgba8().into_raw()
    };
    (width, height, data)
}

/// Represents a texture stored on the GPU side.
pub struct Texture {
    gl: Arc<glow::Context>,
    id: glow::Texture,
    width: u32,
    height: u32,
}

impl Texture {
    /// Creates a new texture from the given [`image::DynamicImage`].
    pub fn new(
        gl: &Arc<glow::Context>,
        image: &DynamicImage,
        options: &TextureOptions,
    ) -> Result<Self, String> {
        let (width, height, data) = prepare_pixels(image, options.flip_vertically);
        if width == 0 || height == 0 {
            return Err("cannot create a texture from an empty image".to_string());
        }
        unsafe {
            let texture = gl.create_texture().map_err(|e| e.to_string())?;
            gl.bind_texture(glow::TEXTURE_2D, Some(texture));
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, options.wrap as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, options.wrap as i32);
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                options.min_filter as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                options.mag_filter as i32,
            );
            // RGBA rows are always 4-byte aligned, whatever the width.
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA8 as i32,
                width as i32,
                height as i32,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(data.as_slice())),
            );
            if options.mipmaps {
                gl.generate_mipmap(glow::TEXTURE_2D);
            }
            gl.bind_texture(glow::TEXTURE_2D, None);

            Ok(Self {
                gl: Arc::clone(gl),
                id: texture,
                width,
                height,
            })
        }
    }

    /// Returns the width of the texture.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the texture.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Binds the texture to the specified texture unit.
    pub fn bind(&self, unit: u32) {
        unsafe {
            self.gl.active_texture(glow::TEXTURE0 + unit);
            self.gl.bind_texture(glow::TEXTURE_2D, Some(self.id));
        }
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_texture(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn two_rows() -> DynamicImage {
        let mut image = RgbaImage::new(2, 2);
        image.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        image.put_pixel(1, 0, Rgba([255, 0, 0, 255]));
        image.put_pixel(0, 1, Rgba([0, 0, 255, 128]));
        image.put_pixel(1, 1, Rgba([0, 0, 255, 128]));
        DynamicImage::ImageRgba8(image)
    }

    #[test]
    fn test_prepare_pixels_keeps_row_order() {
        let (width, height, data) = prepare_pixels(&two_rows(), false);
        assert_eq!((width, height), (2, 2));
        assert_eq!(data.len(), 16);
        assert_eq!(&data[0..4], &[255, 0, 0, 255]);
        assert_eq!(&data[8..12], &[0, 0, 255, 128]);
    }

    #[test]
    fn test_prepare_pixels_flips_rows() {
        let (_, _, data) = prepare_pixels(&two_rows(), true);
        assert_eq!(&data[0..4], &[0, 0, 255, 128]);
        assert_eq!(&data[12..16], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_prepare_pixels_expands_rgb() {
        let image = DynamicImage::ImageRgb8(image::RgbImage::from_pixel(3, 1, image::Rgb([1, 2, 3])));
        let (width, height, data) = prepare_pixels(&image, false);
        assert_eq!((width, height), (3, 1));
        assert_eq!(data, vec![1, 2, 3, 255, 1, 2, 3, 255, 1, 2, 3, 255]);
    }

    #[test]
    fn test_default_options() {
        let options = TextureOptions::default();
        assert_eq!(options.wrap, glow::REPEAT);
        assert_eq!(options.min_filter, glow::LINEAR_MIPMAP_LINEAR);
        assert!(options.mipmaps);
        assert!(options.flip_vertically);
    }
}
