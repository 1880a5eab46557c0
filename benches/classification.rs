use criterion::{criterion_group, criterion_main, Criterion};
use image::{Rgb, RgbImage};
use ripescan::{classify_hex, classify_image_bytes};
use std::hint::black_box;
use std::io::Cursor;

fn banana_image_bytes(width: u32, height: u32) -> Vec<u8> {
    // Golden field with a green band, roughly what a ripeness photo yields
    let mut image = RgbImage::from_pixel(width, height, Rgb([240, 200, 60]));
    for y in 0..height / 4 {
        for x in 0..width {
            image.put_pixel(x, y, Rgb([90, 200, 60]));
        }
    }

    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}

fn benchmark_classification(c: &mut Criterion) {
    c.bench_function("classify_hex", |b| {
        b.iter(|| classify_hex(black_box("#FFD700")))
    });

    let small = banana_image_bytes(100, 100);
    c.bench_function("classify_image_100x100", |b| {
        b.iter(|| classify_image_bytes(black_box(&small)))
    });

    let large = banana_image_bytes(800, 600);
    c.bench_function("classify_image_800x600", |b| {
        b.iter(|| classify_image_bytes(black_box(&large)))
    });
}

criterion_group!(benches, benchmark_classification);
criterion_main!(benches);
