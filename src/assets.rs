use crate::config::{
    BACKGROUND_FILE, CHEESE_FILE, CRACKER_FILE, START_SCREEN_FILE, TOMATO_FILE,
};
use crate::geometry::Size;
use anyhow::Context;
use std::path::Path;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ImageId {
    Background,
    StartScreen,
    Cheese,
    Cracker,
    Tomato,
}

/// Decoded RGBA8 image, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl Image {
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        debug_assert_eq!(rgba.len(), (width * height * 4) as usize);
        Self { width, height, rgba }
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let decoded = image::open(path)
            .with_context(|| format!("failed to load image {}", path.display()))?
            .to_rgba8();
        let (width, height) = decoded.dimensions();
        log::debug!("loaded {} ({}x{})", path.display(), width, height);
        Ok(Self::from_rgba(width, height, decoded.into_raw()))
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y * self.width + x) * 4) as usize;
        [
            self.rgba[idx],
            self.rgba[idx + 1],
            self.rgba[idx + 2],
            self.rgba[idx + 3],
        ]
    }
}

/// Sprite footprints, the only thing the game logic needs from the images.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SpriteSizes {
    pub background: Size,
    pub cheese: Size,
    pub cracker: Size,
    pub tomato: Size,
}

pub struct Images {
    background: Image,
    start_screen: Image,
    cheese: Image,
    cracker: Image,
    tomato: Image,
}

impl Images {
    pub fn load(dir: &Path) -> anyhow::Result<Self> {
        Ok(Self {
            background: Image::load(&dir.join(BACKGROUND_FILE))?,
            start_screen: Image::load(&dir.join(START_SCREEN_FILE))?,
            cheese: Image::load(&dir.join(CHEESE_FILE))?,
            cracker: Image::load(&dir.join(CRACKER_FILE))?,
            tomato: Image::load(&dir.join(TOMATO_FILE))?,
        })
    }

    pub fn get(&self, id: ImageId) -> &Image {
        match id {
            ImageId::Background => &self.background,
            ImageId::StartScreen => &self.start_screen,
            ImageId::Cheese => &self.cheese,
            ImageId::Cracker => &self.cracker,
            ImageId::Tomato => &self.tomato,
        }
    }

    pub fn sprite_sizes(&self) -> SpriteSizes {
        SpriteSizes {
            background: self.background.size(),
            cheese: self.cheese.size(),
            cracker: self.cracker.size(),
            tomato: self.tomato.size(),
        }
    }

    #[cfg(test)]
    pub fn solid(size: Size, color: impl Fn(ImageId) -> [u8; 4]) -> Self {
        let image = |id| {
            let rgba = color(id).repeat((size.width * size.height) as usize);
            Image::from_rgba(size.width, size.height, rgba)
        };
        Self {
            background: image(ImageId::Background),
            start_screen: image(ImageId::StartScreen),
            cheese: image(ImageId::Cheese),
            cracker: image(ImageId::Cracker),
            tomato: image(ImageId::Tomato),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_image_names_the_file() {
        let err = Images::load(Path::new("/nonexistent/cracker-chase"))
            .err()
            .expect("load must fail");
        assert!(format!("{err:#}").contains(BACKGROUND_FILE));
    }

    #[test]
    fn pixel_reads_row_major() {
        let img = Image::from_rgba(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(img.pixel(1, 0), [5, 6, 7, 8]);
        assert_eq!(img.size(), Size::new(2, 1));
    }

    #[test]
    fn sizes_follow_images() {
        let images = Images::solid(Size::new(3, 5), |_| [0, 0, 0, 255]);
        assert_eq!(images.sprite_sizes().cheese, Size::new(3, 5));
        assert_eq!(images.get(ImageId::StartScreen).size(), Size::new(3, 5));
    }
}
