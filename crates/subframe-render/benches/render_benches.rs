use criterion::{black_box, criterion_group, criterion_main, Criterion};
use subframe_core::{Argb, Palette, SubtitleFrame, SubtitleRect};
use subframe_render::{compute_bounding_box, render_all, render_subtitle_image};

/// Two 1280x64 caption lines, like a typical two-line DVB subtitle.
fn create_caption_frame() -> SubtitleFrame {
    let mut palette = Palette::default();
    palette.set(1, Argb(0xFFFF_FFFF));
    palette.set(2, Argb(0xFF00_0000));
    palette.set(3, Argb(0x8000_0000));

    let width = 1280u32;
    let height = 64u32;
    let stride = 1296usize;
    let data: Vec<u8> = (0..stride * height as usize).map(|i| (i % 4) as u8).collect();

    let line = |y: i32| {
        SubtitleRect::bitmap(320, y, width, height, data.clone())
            .with_stride(stride)
            .with_palette(palette.clone())
    };

    SubtitleFrame::new().with_rect(line(880)).with_rect(line(960))
}

/// A palette-less frame, as produced by decoders that emit alpha masks.
fn create_alpha_frame() -> SubtitleFrame {
    let data: Vec<u8> = (0..720 * 120).map(|i| (i % 256) as u8).collect();
    SubtitleFrame::new().with_rect(SubtitleRect::bitmap(0, 456, 720, 120, data))
}

fn bench_bounding_box(c: &mut Criterion) {
    let frame = create_caption_frame();
    c.bench_function("bounding_box_two_lines", |b| {
        b.iter(|| compute_bounding_box(black_box(&frame)))
    });
}

fn bench_compose(c: &mut Criterion) {
    let caption = create_caption_frame();
    let alpha = create_alpha_frame();

    let mut group = c.benchmark_group("compose");
    group.bench_function("palette_two_lines", |b| {
        b.iter(|| render_subtitle_image(black_box(&caption)))
    });
    group.bench_function("direct_alpha", |b| {
        b.iter(|| render_subtitle_image(black_box(&alpha)))
    });
    group.finish();
}

fn bench_track(c: &mut Criterion) {
    let frames: Vec<SubtitleFrame> = (0..64).map(|_| create_caption_frame()).collect();
    let mut group = c.benchmark_group("track");
    group.sample_size(10);
    group.bench_function("render_all_64_frames", |b| {
        b.iter(|| render_all(black_box(&frames)))
    });
    group.finish();
}

criterion_group!(benches, bench_bounding_box, bench_compose, bench_track);
criterion_main!(benches);
