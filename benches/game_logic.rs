use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{GameState, Grid, Piece, ShapeMatrix};
use blockfall::term::{FrameBuffer, GameView};

fn bench_collides(c: &mut Criterion) {
    let mut grid = Grid::new(12, 20);
    let dot = ShapeMatrix::from_rows(&[[1u8]]).unwrap();
    // Fill the bottom half with a checkerboard.
    for y in 10..20 {
        for x in (y % 2..12).step_by(2) {
            grid.merge(&Piece::new(dot.clone(), x, y));
        }
    }
    let piece = Piece::new(ShapeMatrix::canonical(), 5, 8);

    c.bench_function("collides", |b| {
        b.iter(|| black_box(&grid).collides(black_box(&piece)))
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::default();

    c.bench_function("rotate", |b| {
        b.iter(|| {
            state.rotate();
        })
    });
}

fn bench_drop_and_land(c: &mut Criterion) {
    c.bench_function("drop_until_landed", |b| {
        b.iter(|| {
            let arena = Grid::new(12, 20).with_solid_floor(true);
            let mut state = GameState::with_arena(arena, 1000);
            while state.landed_count() == 0 {
                state.drop();
            }
        })
    });
}

fn bench_frame(c: &mut Criterion) {
    let mut state = GameState::default();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(80, 24);
    let mut time = 0u64;

    c.bench_function("frame_render_80x24", |b| {
        b.iter(|| {
            time += 16;
            let mut canvas = view.canvas(&mut fb, 12, 20);
            state.frame(black_box(time), &mut canvas);
        })
    });
}

criterion_group!(
    benches,
    bench_collides,
    bench_rotate,
    bench_drop_and_land,
    bench_frame
);
criterion_main!(benches);
