#![cfg(feature = "serde")]

use texview_image::{ImageSize, PixelInfo, PixelValue};

#[test]
fn pixel_info_serde() -> Result<(), serde_json::Error> {
    let info = PixelInfo::new(-0.5, 2.0);
    let json = serde_json::to_string(&info)?;
    assert_eq!(json, r#"{"min":-0.5,"max":2.0}"#);
    assert_eq!(serde_json::from_str::<PixelInfo>(&json)?, info);
    Ok(())
}

#[test]
fn pixel_value_serde() -> Result<(), serde_json::Error> {
    for value in [
        PixelValue::Null,
        PixelValue::Rgba8([1, 2, 3, 4]),
        PixelValue::Depth(0.75),
    ] {
        let json = serde_json::to_string(&value)?;
        assert_eq!(serde_json::from_str::<PixelValue>(&json)?, value);
    }
    Ok(())
}

#[test]
fn image_size_serde() -> Result<(), serde_json::Error> {
    let size: ImageSize = serde_json::from_str(r#"{"width":640,"height":480}"#)?;
    assert_eq!(size, ImageSize::from([640, 480]));
    Ok(())
}
