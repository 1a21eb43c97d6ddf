/// Colour example: render an RGB colour wheel with ANSI truecolor output
///
/// Requires a terminal with 24-bit colour support.
use asciify::{ConvertConfig, convert_image};
use image::{DynamicImage, Rgb, RgbImage};

fn main() {
    println!("asciify - colour example");
    println!("========================\n");

    let size = 120u32;
    let mut img = RgbImage::new(size, size);

    let center = size as f32 / 2.0;
    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 - center;
            let dy = y as f32 - center;
            let angle = dy.atan2(dx);
            let dist = (dx * dx + dy * dy).sqrt() / center;

            // Hue from the angle, saturation from the distance
            let hue = (angle / std::f32::consts::PI + 1.0) / 2.0;
            let r = (255.0 * hue * dist.min(1.0)) as u8;
            let g = (255.0 * (1.0 - hue) * dist.min(1.0)) as u8;
            let b = (255.0 * (1.0 - dist).max(0.0)) as u8;
            img.put_pixel(x, y, Rgb([r, g, b]));
        }
    }

    let input = DynamicImage::ImageRgb8(img);
    let config = ConvertConfig {
        height: 30,
        colour: true,
        ..Default::default()
    };

    let art = convert_image(&input, &config).expect("conversion failed");
    println!("{art}");
}
