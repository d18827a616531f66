#[macro_use]
extern crate criterion;

use criterion::Criterion;
use seamcarve::{find_horizontal_seam, find_vertical_seam, Pixel, PixelGrid, SeamCarver};

fn gradient(width: u32, height: u32) -> PixelGrid {
    let pixels = (0..width * height)
        .map(|i| {
            let (x, y) = (i % width, i / width);
            Pixel::new((x * 7) as u8, (y * 5) as u8, ((x ^ y) * 3) as u8)
        })
        .collect();
    PixelGrid::from_pixels(width, height, pixels).unwrap()
}

fn seam_search(c: &mut Criterion) {
    let grid = gradient(128, 96);
    c.bench_function("vertical seam 128x96", move |b| {
        b.iter(|| find_vertical_seam(&grid))
    });
    let grid = gradient(128, 96);
    c.bench_function("horizontal seam 128x96", move |b| {
        b.iter(|| find_horizontal_seam(&grid))
    });
}

fn carve(c: &mut Criterion) {
    let grid = gradient(64, 64);
    c.bench_function("carve 64x64 to 48x48", move |b| {
        b.iter(|| SeamCarver::new(grid.clone()).carve(48, 48))
    });
}

criterion_group!(benches, seam_search, carve);
criterion_main!(benches);
