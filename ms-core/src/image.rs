use crate::grid::Grid;
use hsv;

/// Color ramps for the heightmap, selectable per request.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Colormap {
    /// Blue (low) through red (high).
    #[default]
    Thermal,
    /// The full hue wheel, low to high.
    Rainbow,
    /// Grayscale, dark to light.
    Gray,
}

impl Colormap {
    /// The colormap selectors understood by this library, as used in URLs
    /// and on the command line.
    pub fn names() -> &'static [&'static str] {
        &["thermal", "rainbow", "gray"]
    }

    /// Parse a colormap selector.
    pub fn from_name(name: &str) -> Result<Self, String> {
        match name {
            "thermal" => Ok(Colormap::Thermal),
            "rainbow" => Ok(Colormap::Rainbow),
            "gray" => Ok(Colormap::Gray),
            other => Err(format!(
                "unknown colormap {:?} (expected one of {:?})",
                other,
                Self::names()
            )),
        }
    }

    /// Color for a normalized height `t` in [0, 1].
    fn rgb(self, t: f64) -> image::Rgb<u8> {
        let (r, g, b) = match self {
            Colormap::Thermal => hsv::hsv_to_rgb(240.0 * (1.0 - t), 1.0, 1.0),
            Colormap::Rainbow => hsv::hsv_to_rgb(330.0 * t, 1.0, 1.0),
            Colormap::Gray => hsv::hsv_to_rgb(0.0, 0.0, t),
        };
        image::Rgb([r, g, b])
    }
}

/// Settings for rendering a surface height field into an image.
#[derive(Default)]
pub struct Renderer {
    pub colormap: Colormap,
}

impl Renderer {
    /// Render the Z grid of a surface as a colored heightmap.
    ///
    /// Heights are normalized over the grid's min..max span and mapped
    /// through the configured colormap.
    pub fn render(&self, z: &Grid) -> Result<image::DynamicImage, String> {
        let size = z.size();
        if size.width == 0 || size.height == 0 {
            return Err(format!("cannot render an empty grid: {:?}", size));
        }

        let (min, max) = z
            .values()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
                (min.min(v), max.max(v))
            });
        let span = if max > min { max - min } else { 1.0 };

        let mut img =
            image::ImageBuffer::<image::Rgb<u8>, _>::new(size.width as u32, size.height as u32);
        img.enumerate_pixels_mut().for_each(|(x, y, pixel)| {
            let height = z.get(y as usize, x as usize);
            *pixel = self.colormap.rgb((height - min) / span);
        });

        Ok(img.into())
    }
}
