//! GPU-side images for placed items.
//!
//! Unrotated items draw their decoded pixels with `ObjectFit::Cover`.
//! Rotated items need a pre-rotated bitmap, which is rebuilt only when the
//! item's size or angle changes.
//!
//! Images that are replaced or whose item is gone are retired, then handed
//! back to gpui's sprite atlas by `release_retired` on the next render.

use crate::profile_scope;
use crate::raster;
use crate::types::{ItemId, PlacedImage};
use gpui::{RenderImage, Window};
use image::{Frame, RgbaImage};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// (width, height, rotation bits) the rotated bitmap was built for
type RotatedKey = (u32, u32, u32);

struct ItemTexture {
    base: Arc<RenderImage>,
    rotated: Option<(RotatedKey, Arc<RenderImage>)>,
}

impl ItemTexture {
    fn into_images(self) -> impl Iterator<Item = Arc<RenderImage>> {
        std::iter::once(self.base).chain(self.rotated.map(|(_, image)| image))
    }
}

#[derive(Default)]
pub struct TextureCache {
    items: HashMap<ItemId, ItemTexture>,
    /// No longer drawn, still resident in the atlas
    retired: Vec<Arc<RenderImage>>,
}

impl TextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&mut self, item: &PlacedImage) -> &mut ItemTexture {
        self.items.entry(item.id).or_insert_with(|| ItemTexture {
            base: to_render_image(item.pixels.as_ref().clone()),
            rotated: None,
        })
    }

    /// The item's own pixels.
    pub fn base(&mut self, item: &PlacedImage) -> Arc<RenderImage> {
        self.entry(item).base.clone()
    }

    /// Bitmap of the item at its current size and angle, sized to its
    /// rotated bounding box.
    pub fn rotated(&mut self, item: &PlacedImage) -> Arc<RenderImage> {
        let key = (item.size.0, item.size.1, item.rotation.to_bits());
        let texture = self.entry(item);
        if let Some((cached_key, image)) = &texture.rotated {
            if *cached_key == key {
                return image.clone();
            }
        }

        profile_scope!("textures::rotated");
        let bitmap = raster::render_item(&item.pixels, item.size.0, item.size.1, item.rotation);
        let image = to_render_image(bitmap);
        let replaced = texture.rotated.replace((key, image.clone()));
        if let Some((_, old)) = replaced {
            self.retired.push(old);
        }
        image
    }

    pub fn remove(&mut self, id: ItemId) {
        if let Some(texture) = self.items.remove(&id) {
            self.retired.extend(texture.into_images());
        }
    }

    pub fn clear(&mut self) {
        let textures: Vec<ItemTexture> = self.items.drain().map(|(_, texture)| texture).collect();
        self.retired
            .extend(textures.into_iter().flat_map(ItemTexture::into_images));
    }

    /// Free retired images from the window's sprite atlas.
    pub fn release_retired(&mut self, window: &mut Window) {
        for image in self.retired.drain(..) {
            if let Err(err) = window.drop_image(image) {
                debug!(error = %err, "Could not drop texture");
            }
        }
    }

    pub fn retired_count(&self) -> usize {
        self.retired.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// gpui wants BGRA frames.
fn to_render_image(mut pixels: RgbaImage) -> Arc<RenderImage> {
    for pixel in pixels.chunks_exact_mut(4) {
        pixel.swap(0, 2);
    }
    Arc::new(RenderImage::new(vec![Frame::new(pixels)]))
}
