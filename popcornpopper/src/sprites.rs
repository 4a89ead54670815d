//! Embedded popcorn sprite textures

use egui::{ColorImage, Context, TextureHandle, TextureOptions};
use popcorncore::animation::PIECE_COUNT;

/// Drawn size of one popcorn piece, in points.
pub const PIECE_SIZE: f32 = 64.0;

/// One embedded PNG per piece slot.
const PIECE_IMAGES: [(&str, &[u8]); PIECE_COUNT] = [
    ("popcorn_1", include_bytes!("../../icons/popcorn/popcorn_1.png")),
    ("popcorn_2", include_bytes!("../../icons/popcorn/popcorn_2.png")),
    ("popcorn_3", include_bytes!("../../icons/popcorn/popcorn_3.png")),
    ("popcorn_4", include_bytes!("../../icons/popcorn/popcorn_4.png")),
];

/// Uploaded textures, index-aligned with the popper's pieces. A slot whose
/// PNG fails to decode stays `None` and that piece is simply not drawn.
pub struct PopcornTextures {
    handles: [Option<TextureHandle>; PIECE_COUNT],
}

impl PopcornTextures {
    pub fn load(ctx: &Context) -> Self {
        let handles = PIECE_IMAGES.map(|(name, bytes)| {
            decode_piece(bytes)
                .map(|img| ctx.load_texture(name, img, TextureOptions::LINEAR))
        });
        Self { handles }
    }

    pub fn get(&self, index: usize) -> Option<&TextureHandle> {
        self.handles.get(index)?.as_ref()
    }
}

fn decode_piece(bytes: &[u8]) -> Option<ColorImage> {
    let img = image::load_from_memory(bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();
    Some(ColorImage::from_rgba_unmultiplied(
        [w as usize, h as usize],
        rgba.as_raw(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_embedded_pieces_decode() {
        for (name, bytes) in PIECE_IMAGES {
            let img = decode_piece(bytes).unwrap_or_else(|| panic!("{name} failed to decode"));
            assert_eq!(img.size, [64, 64]);
        }
    }
}
