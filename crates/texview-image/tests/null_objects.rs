use texview_image::{
    ElementType, Image, ImageError, InternalFormat, NativeImage, PixelFormat, PixelInfo,
    PixelValue, TextureTarget,
};

#[derive(Debug, PartialEq)]
struct LoadCall {
    width: usize,
    height: usize,
    internal_format: InternalFormat,
    format: PixelFormat,
    element_type: ElementType,
    has_data: bool,
}

#[derive(Default)]
struct RecordingTexture {
    calls: Vec<LoadCall>,
}

impl TextureTarget for RecordingTexture {
    fn load_data(
        &mut self,
        width: usize,
        height: usize,
        internal_format: InternalFormat,
        format: PixelFormat,
        element_type: ElementType,
        data: Option<&[u8]>,
    ) -> Result<(), ImageError> {
        self.calls.push(LoadCall {
            width,
            height,
            internal_format,
            format,
            element_type,
            has_data: data.is_some(),
        });
        Ok(())
    }
}

#[test]
fn empty_image_is_one_by_one() {
    let image = Image::empty();
    assert_eq!(image.width(), 1);
    assert_eq!(image.height(), 1);
}

#[test]
fn empty_buffer_always_yields_the_null_pixel() {
    let image = Image::empty();
    let coords = [
        (0, 0),
        (1, 1),
        (-1, 0),
        (0, -1),
        (i32::MIN, i32::MAX),
        (1024, 768),
    ];
    for (x, y) in coords {
        assert_eq!(image.data().pixel_at(x, y), PixelValue::NULL);
    }
}

#[test]
fn null_pixel_is_light_and_placeholder() {
    assert!(!PixelValue::NULL.is_dark());
    assert_eq!(PixelValue::NULL.to_string(), "[null]");
}

#[test]
fn null_info_is_unit_range() {
    let info = Image::empty().data().info();
    assert_eq!(info, PixelInfo::NULL);
    assert_eq!(info.min(), 0.0);
    assert_eq!(info.max(), 1.0);
    assert!(info.min() <= info.max());
}

#[test]
fn empty_upload_clears_texture() -> Result<(), ImageError> {
    let mut texture = RecordingTexture::default();
    Image::empty().data().upload_to_texture(&mut texture)?;

    assert_eq!(
        texture.calls,
        vec![LoadCall {
            width: 0,
            height: 0,
            internal_format: InternalFormat::Rgb,
            format: PixelFormat::Rgb,
            element_type: ElementType::UnsignedByte,
            has_data: false,
        }]
    );
    Ok(())
}

#[test]
fn empty_native_image_is_black_pixel() {
    let native = Image::empty().data().to_native_image();
    assert_eq!(&native, NativeImage::empty());
    assert_eq!((native.width, native.height, native.depth), (1, 1, 1));
}

#[test]
fn accessors_are_stable() -> Result<(), ImageError> {
    let image = Image::from_rgba_f32([2, 1].into(), vec![0.0, 0.5, 1.0, 1.0, 2.0, 2.0, 2.0, 1.0])?;
    for image in [Image::empty(), image] {
        let data = image.data();
        assert_eq!(image.size(), image.size());
        assert_eq!(data.pixel_at(1, 0), data.pixel_at(1, 0));
        assert_eq!(data.pixel_at(1, 0).to_string(), data.pixel_at(1, 0).to_string());
        assert_eq!(data.info(), data.info());
        assert_eq!(data.to_native_image(), data.to_native_image());
    }
    Ok(())
}
