use argh::FromArgs;
use std::str::FromStr;

use texview::image::{
    ElementType, Image, ImageError, ImageSize, InternalFormat, PixelFormat, Swizzle,
    TextureTarget,
};

#[derive(Clone, Copy, Debug)]
enum Format {
    Rgba8,
    RgbaF32,
    Luminance8,
    LuminanceF32,
    Depth,
    Empty,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rgba8" => Ok(Format::Rgba8),
            "rgbaf32" => Ok(Format::RgbaF32),
            "l8" => Ok(Format::Luminance8),
            "lf32" => Ok(Format::LuminanceF32),
            "depth" => Ok(Format::Depth),
            "empty" => Ok(Format::Empty),
            _ => Err(format!(
                "unknown format '{s}', expected one of rgba8, rgbaf32, l8, lf32, depth, empty"
            )),
        }
    }
}

#[derive(FromArgs)]
/// Build a synthetic gradient image and inspect one of its pixels
struct Args {
    /// width of the image in pixels
    #[argh(option, default = "64")]
    width: usize,

    /// height of the image in pixels
    #[argh(option, default = "32")]
    height: usize,

    /// pixel format: rgba8, rgbaf32, l8, lf32, depth or empty
    #[argh(option, default = "Format::RgbaF32")]
    format: Format,

    /// x coordinate of the inspected pixel
    #[argh(option, short = 'x', default = "0")]
    x: i32,

    /// y coordinate of the inspected pixel
    #[argh(option, short = 'y', default = "0")]
    y: i32,
}

/// A texture that only logs what it receives.
struct LoggingTexture;

impl TextureTarget for LoggingTexture {
    fn load_data(
        &mut self,
        width: usize,
        height: usize,
        internal_format: InternalFormat,
        format: PixelFormat,
        element_type: ElementType,
        data: Option<&[u8]>,
    ) -> Result<(), ImageError> {
        log::info!(
            "load_data {width}x{height} internal=0x{:04x} format=0x{:04x} type=0x{:04x} bytes={}",
            internal_format.gl_enum(),
            format.gl_enum(),
            element_type.gl_enum(),
            data.map_or(0, <[u8]>::len)
        );
        Ok(())
    }

    fn set_swizzle(&mut self, swizzle: [Swizzle; 4]) -> Result<(), ImageError> {
        log::info!("set_swizzle {swizzle:?}");
        Ok(())
    }
}

fn gradient(size: ImageSize, channels: usize, scale: f32) -> Vec<f32> {
    let mut data = Vec::with_capacity(size.num_pixels() * channels);
    for y in 0..size.height {
        for x in 0..size.width {
            let u = x as f32 / size.width.max(1) as f32;
            let v = y as f32 / size.height.max(1) as f32;
            let px = [u, v, 1.0 - u, 1.0];
            data.extend(px.iter().take(channels).map(|c| c * scale));
        }
    }
    data
}

fn to_u8(data: Vec<f32>) -> Vec<u8> {
    data.into_iter()
        .map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
        .collect()
}

fn build_image(format: Format, size: ImageSize) -> Result<Image, ImageError> {
    match format {
        Format::Rgba8 => Image::from_rgba8(size, to_u8(gradient(size, 4, 1.0))),
        Format::RgbaF32 => Image::from_rgba_f32(size, gradient(size, 4, 8.0)),
        Format::Luminance8 => Image::from_luminance8(size, to_u8(gradient(size, 1, 1.0))),
        Format::LuminanceF32 => Image::from_luminance_f32(size, gradient(size, 1, 100.0)),
        Format::Depth => Image::from_depth(size, gradient(size, 1, 1.0)),
        Format::Empty => Ok(Image::empty()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let size = ImageSize {
        width: args.width,
        height: args.height,
    };
    let image = build_image(args.format, size)?;
    let data = image.data();

    log::debug!("built {:?}", image);

    let pixel = data.pixel_at(args.x, args.y);
    let info = data.info();
    println!("image: {}", image.size());
    println!(
        "pixel ({}, {}): {} ({})",
        args.x,
        args.y,
        pixel,
        if pixel.is_dark() { "dark" } else { "light" }
    );
    println!("range: [{}, {}]", info.min(), info.max());

    data.upload_to_texture(&mut LoggingTexture)?;

    let native = data.to_native_image();
    println!(
        "native: {}x{} depth {} ({} bytes per line)",
        native.width, native.height, native.depth, native.bytes_per_line
    );

    Ok(())
}
