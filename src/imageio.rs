// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Conversions between ImageRS images and the pixel grid
//!
//! The carver itself knows nothing about file formats.  These are the
//! two doors in and out: any `GenericImageView` becomes an eight-bit
//! RGB grid, and a grid becomes an `RgbImage` that ImageRS can encode.

use crate::error::Result;
use crate::pixelgrid::{check_dimensions, Pixel, PixelGrid};
use crate::twodmap::TwoDimensionalMap;
use image::{
    GenericImageView, GrayImage, ImageBuffer, Luma, Pixel as ImagePixel, Primitive, Rgb, RgbImage,
};
use num_traits::{Bounded, NumCast};

// Rescale a channel of any depth to 0..=255.
fn to_eight_bits<S: Primitive>(value: S) -> u8 {
    let max: f64 = NumCast::from(<S as Bounded>::max_value()).unwrap_or(255.0);
    let value: f64 = NumCast::from(value).unwrap_or(0.0);
    let scaled = (value / max * 255.0).round().max(0.0).min(255.0);
    NumCast::from(scaled).unwrap_or(u8::max_value())
}

impl PixelGrid {
    /// Copy an image into a new grid.  Alpha is dropped, and grey or
    /// deeper-than-eight-bit images are converted to eight-bit RGB.
    pub fn from_image<I, P, S>(image: &I) -> Result<Self>
    where
        I: GenericImageView<Pixel = P>,
        P: ImagePixel<Subpixel = S> + 'static,
        S: Primitive + 'static,
    {
        let (width, height) = image.dimensions();
        // ImageRS panics iterating over an empty image.
        check_dimensions(width, height)?;
        let pixels = image
            .pixels()
            .map(|(_, _, p)| {
                let rgb = p.to_rgb();
                let c = rgb.channels();
                Pixel::new(to_eight_bits(c[0]), to_eight_bits(c[1]), to_eight_bits(c[2]))
            })
            .collect();
        PixelGrid::from_pixels(width, height, pixels)
    }

    pub fn to_rgb_image(&self) -> RgbImage {
        ImageBuffer::from_fn(self.width(), self.height(), |x, y| {
            let p = self.get_pixel(x, y);
            Rgb([p.red, p.green, p.blue])
        })
    }
}

/// Render an energy map as a greymap, scaled so the most energetic
/// pixel is white.
pub fn energy_to_image(energy: &TwoDimensionalMap<f64>) -> GrayImage {
    let factor = energy.values().iter().cloned().fold(0.0, f64::max);
    ImageBuffer::from_fn(energy.width, energy.height, |x, y| {
        let e = energy[(x, y)];
        let c = if factor > 0.0 { e / factor * 255.0 } else { 0.0 };
        Luma([NumCast::from(c.round()).unwrap_or(u8::max_value())])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::calculate_energy;
    use crate::error::CarveError;
    use image::{DynamicImage, ImageBuffer, Rgba};

    #[test]
    fn image_round_trips_through_the_grid() {
        let img: RgbImage =
            ImageBuffer::from_fn(4, 3, |x, y| Rgb([x as u8 * 10, y as u8 * 20, 7]));
        let grid = PixelGrid::from_image(&img).unwrap();
        assert_eq!(grid.dimensions(), (4, 3));
        assert_eq!(grid.get_pixel(3, 2), Pixel::new(30, 40, 7));
        assert_eq!(grid.to_rgb_image().into_raw(), img.into_raw());
    }

    #[test]
    fn alpha_is_dropped_and_deep_channels_rescaled() {
        let rgba: ImageBuffer<Rgba<u8>, Vec<u8>> =
            ImageBuffer::from_fn(2, 2, |_, _| Rgba([1, 2, 3, 0]));
        let grid = PixelGrid::from_image(&DynamicImage::ImageRgba8(rgba)).unwrap();
        assert_eq!(grid.get_pixel(1, 1), Pixel::new(1, 2, 3));

        let deep: ImageBuffer<Rgb<u16>, Vec<u16>> =
            ImageBuffer::from_fn(1, 1, |_, _| Rgb([65535, 0, 257 * 128]));
        let grid = PixelGrid::from_image(&deep).unwrap();
        assert_eq!(grid.get_pixel(0, 0), Pixel::new(255, 0, 128));
    }

    #[test]
    fn empty_images_are_rejected() {
        let img: RgbImage = ImageBuffer::new(0, 4);
        assert_eq!(
            PixelGrid::from_image(&img),
            Err(CarveError::InvalidDimension {
                width: 0,
                height: 4
            })
        );
        let img: RgbImage = ImageBuffer::new(3, 0);
        assert_eq!(
            PixelGrid::from_image(&img),
            Err(CarveError::InvalidDimension {
                width: 3,
                height: 0
            })
        );
    }

    #[test]
    fn energy_image_is_normalized() {
        let img: RgbImage = ImageBuffer::from_fn(3, 3, |x, _| {
            if x == 1 {
                Rgb([0, 0, 0])
            } else {
                Rgb([255, 255, 255])
            }
        });
        let grid = PixelGrid::from_image(&img).unwrap();
        let out = energy_to_image(&calculate_energy(&grid));
        assert_eq!(out.get_pixel(0, 0), &Luma([255]));
        assert_eq!(out.get_pixel(1, 2), &Luma([0]));

        let flat = PixelGrid::new(2, 2, Pixel::new(9, 9, 9)).unwrap();
        let out = energy_to_image(&calculate_energy(&flat));
        assert!(out.pixels().all(|p| *p == Luma([0])));
    }
}
