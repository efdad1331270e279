use image::{imageops, DynamicImage, RgbImage};
use tract_onnx::prelude::*;

/// Filter used for every resize so that the same file always yields the same tensor.
pub const RESIZE_FILTER: imageops::FilterType = imageops::FilterType::CatmullRom;

/// Stretches the image to exactly `width`x`height` RGB. Aspect ratio is not kept,
/// the model was trained on stretched inputs.
pub fn resize_image(image: &DynamicImage, width: u32, height: u32) -> RgbImage {
    let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
    if rgb.width() == width && rgb.height() == height {
        return rgb.into_rgb8();
    }
    rgb.resize_exact(width, height, RESIZE_FILTER).into_rgb8()
}

/// NHWC f32 tensor with a batch of one, values in [0, 1].
pub fn image_to_tensor(rgb: &RgbImage) -> Tensor {
    let (width, height) = rgb.dimensions();

    tract_ndarray::Array4::from_shape_fn(
        (1, height as usize, width as usize, 3),
        |(_, y, x, c)| rgb.get_pixel(x as u32, y as u32)[c] as f32 / 255.0,
    )
    .into_tensor()
}

pub fn resize_image_to_tensor(image: &DynamicImage, width: u32, height: u32) -> Tensor {
    let resized = resize_image(image, width, height);
    image_to_tensor(&resized)
}
