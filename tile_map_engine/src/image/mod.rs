//! Image module — CPU-side pixel buffers feeding alpha and RGBA textures.

mod image;

pub use image::{AlphaImage, Image, Point, RgbaImage, Size};
