//! Benchmarks for cleaning and packing.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chaff::{clean, Element, HeuristicTokenizer, TokenBudgetPacker};

fn noisy_text(size: usize) -> String {
    // Realistic PDF-extracted prose: hyphen breaks, blank runs, captions,
    // stray table rows, rules.
    let fragments = [
        "The receiver locks onto the pre-\namble within two symbol periods. ",
        "Supply  rails   must settle before reset deasserts.\n\n\n",
        "Table 4: Absolute maximum ratings\n",
        "| VDD | 3.6 V | max |\n",
        "-----\n",
        "Normal prose continues here with no surprises at all. ",
    ];
    let mut text = String::with_capacity(size);
    let mut i = 0;
    while text.len() < size {
        text.push_str(fragments[i % fragments.len()]);
        i += 1;
    }
    text.truncate(size);
    text
}

fn sample_elements(count: usize) -> Vec<Element> {
    // Mostly prose with a table every tenth element.
    (0..count)
        .map(|i| {
            if i % 10 == 9 {
                Element::table("| pin | function | voltage |\n| 1 | GND | 0 V |")
            } else {
                Element::paragraph(
                    "The peripheral clock derives from the main PLL and can be \
                     gated per block to save power during light sleep.",
                )
                .on_page(u32::try_from(i / 4).unwrap_or(0) + 1)
            }
        })
        .collect()
}

fn bench_clean(c: &mut Criterion) {
    let mut group = c.benchmark_group("clean");

    for size in [1_000, 10_000, 100_000] {
        let text = noisy_text(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("noisy", size), &text, |b, text| {
            b.iter(|| clean(black_box(text)))
        });
    }

    group.finish();
}

fn bench_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack");

    for count in [100, 1_000, 10_000] {
        let elements = sample_elements(count);
        let packer = TokenBudgetPacker::new(1000).unwrap();

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("elements", count),
            &elements,
            |b, elements| b.iter(|| packer.pack(black_box(elements), "doc", &HeuristicTokenizer)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_clean, bench_pack);
criterion_main!(benches);
