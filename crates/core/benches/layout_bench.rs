use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use folio_core::arena::{RawWord, TextFlow, TextFlowBuilder};
use folio_core::font::FontDescriptor;
use folio_core::{Area, BoundingBox, TextPage, compile};

struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn gen_f64(&mut self, min: f64, max: f64) -> f64 {
        let n = self.next_u64() as f64 / u64::MAX as f64;
        min + (max - min) * n
    }
}

const WORDS: &[&str] = &["lorem", "ipsum", "dolor", "sit", "amet", "consec-", "tetur"];

/// Two columns of `blocks` paragraphs, eight lines of six words each.
fn generate_flow(seed: u64, blocks: usize) -> TextFlow {
    let mut rng = XorShift64::new(seed);
    let mut b = TextFlowBuilder::new();
    let fonts = [
        b.add_font(FontDescriptor::new("F1", "Times-Roman")),
        b.add_font(FontDescriptor::new("F2", "Times-Italic")),
    ];

    for column in 0..2 {
        b.begin_region(None).unwrap();
        for block in 0..blocks / 2 {
            b.begin_block(None, 0).unwrap();
            let top = 760.0 - block as f64 * 110.0;
            for line in 0..8 {
                let y = top - line as f64 * 12.0;
                let last = WORDS[(block + line) % WORDS.len()];
                b.begin_line(None, 0, last.ends_with('-')).unwrap();
                let mut x = 36.0 + column as f64 * 290.0;
                for w in 0..6 {
                    let text = if w == 5 {
                        last
                    } else {
                        WORDS[(w * 3 + line) % WORDS.len()]
                    };
                    let width = text.len() as f64 * rng.gen_f64(4.5, 5.5);
                    let font = fonts[(rng.next_u64() % 7 == 0) as usize];
                    let bbox = BoundingBox::new(x, y, x + width, y + 10.0);
                    let word = RawWord::new(text, bbox, font, 10.0).space_after(w < 5);
                    b.add_word(word).unwrap();
                    x += width + 3.0;
                }
            }
        }
    }
    b.finish()
}

fn generate_areas(seed: u64, count: usize) -> Vec<Area> {
    let mut rng = XorShift64::new(seed);
    (0..count)
        .map(|i| {
            let x = rng.gen_f64(0.0, 500.0);
            let y = rng.gen_f64(0.0, 700.0);
            let page = (i % 4) as i32;
            let width = rng.gen_f64(10.0, 80.0);
            Area::new(page, 0, BoundingBox::new(x, y, x + width, y + 12.0))
        })
        .collect()
}

fn bench_page_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_text");
    for &n in &[8usize, 32, 128] {
        let page = TextPage::new(0, generate_flow(0x5eed ^ n as u64, n));
        group.throughput(Throughput::Elements(page.flow().num_words() as u64));
        group.bench_with_input(BenchmarkId::new("text", n), &page, |b, page| {
            b.iter(|| black_box(page.text().len()))
        });
    }
    group.finish();
}

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("area_compile");
    for &n in &[16usize, 64, 256] {
        let areas = generate_areas(0xa7ea ^ n as u64, n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("compile", n), &areas, |b, areas| {
            b.iter(|| black_box(compile(areas.iter().copied()).len()))
        });
    }
    group.finish();
}

criterion_group!(layout_benches, bench_page_text, bench_compile);
criterion_main!(layout_benches);
