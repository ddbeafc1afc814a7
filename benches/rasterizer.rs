use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pineda::{rasterize, ColorQuantizer, RasterizerInput, VertexBuffer, ViewportBounds};

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;
const SCRATCH_WORDS: usize = 4096;

fn create_buffer() -> Vec<u32> {
    vec![0u32; (BUFFER_WIDTH * BUFFER_HEIGHT) as usize]
}

/// Interleave three screen-space points into (x, y, z, w, r, g, b, a)
/// records, wound clockwise.
fn triangle_vertices(points: [(f32, f32); 3]) -> Vec<f32> {
    let colors = [[1.0, 0.0, 0.0, 1.0], [0.0, 1.0, 0.0, 1.0], [0.0, 0.0, 1.0, 1.0]];
    let mut data = Vec::with_capacity(24);
    for (k, &(x, y)) in points.iter().enumerate() {
        data.extend_from_slice(&[x, y, 1.0, 1.0]);
        data.extend_from_slice(&colors[k]);
    }
    data
}

fn small_triangle() -> Vec<f32> {
    triangle_vertices([(100.0, 100.0), (120.0, 100.0), (110.0, 120.0)])
}

fn medium_triangle() -> Vec<f32> {
    triangle_vertices([(100.0, 100.0), (300.0, 100.0), (200.0, 300.0)])
}

fn large_triangle() -> Vec<f32> {
    triangle_vertices([(50.0, 50.0), (750.0, 100.0), (400.0, 550.0)])
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");

    let viewport = ViewportBounds::new(0, 0, BUFFER_WIDTH as i32 - 1, BUFFER_HEIGHT as i32 - 1);

    for (name, data) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
    ] {
        group.bench_with_input(BenchmarkId::new("edge_function", name), &data, |b, data| {
            let mut buffer = create_buffer();
            let mut scratch = vec![0u32; SCRATCH_WORDS];
            let indices = [0u32, 1, 2];
            b.iter(|| {
                let vertices = VertexBuffer::new(black_box(data), 8);
                let input = RasterizerInput::new(vertices, &indices, viewport);
                let mut sink = ColorQuantizer::new(&mut buffer, BUFFER_WIDTH);
                rasterize(&input, &mut scratch, &mut sink);
            });
        });
    }

    group.finish();
}

fn benchmark_many_triangles(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_triangles");

    let viewport = ViewportBounds::new(0, 0, BUFFER_WIDTH as i32 - 1, BUFFER_HEIGHT as i32 - 1);

    // A 20x20 grid of small triangles in one indexed draw.
    let mut data = Vec::new();
    let mut indices = Vec::new();
    for row in 0..20 {
        for col in 0..20 {
            let x = col as f32 * 40.0;
            let y = row as f32 * 30.0;
            let base = (data.len() / 8) as u32;
            data.extend(triangle_vertices([
                (x, y),
                (x + 35.0, y),
                (x + 17.5, y + 25.0),
            ]));
            indices.extend_from_slice(&[base, base + 1, base + 2]);
        }
    }

    group.bench_function("edge_function_400_triangles", |b| {
        let mut buffer = create_buffer();
        let mut scratch = vec![0u32; SCRATCH_WORDS];
        b.iter(|| {
            let vertices = VertexBuffer::new(black_box(&data), 8);
            let input = RasterizerInput::new(vertices, &indices, viewport);
            let mut sink = ColorQuantizer::new(&mut buffer, BUFFER_WIDTH);
            rasterize(&input, &mut scratch, &mut sink);
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_single_triangle, benchmark_many_triangles);
criterion_main!(benches);
