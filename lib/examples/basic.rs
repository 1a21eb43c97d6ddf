/// Basic example: convert a generated test image to ASCII art
///
/// Builds a radial gradient with a bright circle and renders it at a few
/// heights, printing the result to the terminal.
use asciify::{ConvertConfig, convert_image};
use image::{DynamicImage, Rgb, RgbImage};

fn main() {
    println!("asciify - basic example");
    println!("=======================\n");

    // Create a 160x160 test image: dark background, bright circle
    let width = 160;
    let height = 160;
    let mut img = RgbImage::new(width, height);

    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 50.0;

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - center_x;
            let dy = y as f32 - center_y;
            let dist = (dx * dx + dy * dy).sqrt();

            if dist < radius {
                img.put_pixel(x, y, Rgb([230, 230, 230]));
            } else {
                // Gradient falling off toward the corners
                let shade = (255.0 * (1.0 - dist / 120.0)).clamp(0.0, 90.0) as u8;
                img.put_pixel(x, y, Rgb([shade, shade, shade]));
            }
        }
    }

    println!("Created test image: {width}x{height}\n");

    let input = DynamicImage::ImageRgb8(img);
    let config = ConvertConfig {
        height: 40,
        ..Default::default()
    };

    let art = convert_image(&input, &config).expect("conversion failed");
    println!("{art}");
    println!(
        "\nASCII dimensions: {}x{} glyphs",
        art.width(),
        art.height()
    );
}
