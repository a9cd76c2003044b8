//! Images for the textured lessons, generated in memory.
//!
//! Both images are laid out top row first, like a decoded image file.

use image::{DynamicImage, Rgba, RgbaImage};

const PLANK_LIGHT: [u8; 3] = [168, 117, 64];
const PLANK_DARK: [u8; 3] = [140, 94, 48];
const FRAME: [u8; 3] = [86, 64, 44];
const FACE: [u8; 3] = [255, 214, 40];
const FEATURE: [u8; 3] = [60, 40, 20];

/// A wooden crate: horizontal planks inside a dark frame, fully opaque.
pub fn container(size: u32) -> DynamicImage {
    let size = size.max(8);
    let frame = size / 8;
    let plank = (size / 5).max(1);
    let image = RgbaImage::from_fn(size, size, |x, y| {
        let edge = x.min(y).min(size - 1 - x).min(size - 1 - y);
        let [r, g, b] = if edge < frame {
            FRAME
        } else if (y / plank) % 2 == 0 {
            PLANK_LIGHT
        } else {
            PLANK_DARK
        };
        // Faint grain so the texture does not look flat when filtered.
        let grain = ((x.wrapping_mul(7) ^ y.wrapping_mul(3)) % 9) as u8;
        Rgba([
            r.saturating_sub(grain),
            g.saturating_sub(grain),
            b.saturating_sub(grain),
            255,
        ])
    });
    DynamicImage::ImageRgba8(image)
}

/// A smiling face on a transparent background.
pub fn awesome_face(size: u32) -> DynamicImage {
    let size = size.max(16);
    let center = size as f32 / 2.0;
    let radius = center * 0.9;
    let eye_radius = radius * 0.12;
    let eye_offset = (radius * 0.35, -radius * 0.3);
    let image = RgbaImage::from_fn(size, size, |x, y| {
        let (px, py) = (x as f32 + 0.5, y as f32 + 0.5);
        let (dx, dy) = (px - center, py - center);
        let distance = (dx * dx + dy * dy).sqrt();
        if distance > radius {
            return Rgba([0, 0, 0, 0]);
        }

        // Both eyes at once, mirrored across the vertical axis.
        let (ex, ey) = (dx.abs() - eye_offset.0, dy - eye_offset.1);
        let in_eye = (ex * ex + ey * ey).sqrt() < eye_radius;
        // The smile is a band of the lower half of a circle around the centre.
        let in_smile = dy > radius * 0.15
            && distance > radius * 0.5
            && distance < radius * 0.62
            && dx.abs() < radius * 0.5;
        let outline = distance > radius * 0.94;

        let [r, g, b] = if in_eye || in_smile || outline {
            FEATURE
        } else {
            FACE
        };
        Rgba([r, g, b, 255])
    });
    DynamicImage::ImageRgba8(image)
}
