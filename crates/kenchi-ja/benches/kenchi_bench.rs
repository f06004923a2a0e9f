// Criterion benchmarks for kenchi-ja.
//
// Uses the bundled lexicon, so no external data is needed.
//
// Run:
//   cargo bench -p kenchi-ja

use criterion::{Criterion, criterion_group, criterion_main};
use kenchi_ja::KenchiHandle;
use kenchi_ja::alphabet::alphabet;
use kenchi_ja::romaji::build_transliterator;

const SURNAMES: &[&str] = &[
    "Sato", "Suzuki", "Takahashi", "Tanaka", "Watanabe", "Kojima", "Inuzuka", "Ohnishi",
    "Shin'yagaito", "Becchaku", "Matumoto", "Ishî", "Uozaki", "Sampei", "IMAZU", "Legokichi",
];

const PAIRS: &[[&str; 2]] = &[
    ["Shougo", "ITO"],
    ["Yamada", "Satoshi"],
    ["Hanaoka", "Hiroshi"],
    ["Takashi", "Ise"],
    ["K.", "Yoshida"],
    ["Kaori", "Sato"],
];

fn load_handle() -> KenchiHandle {
    let handle = KenchiHandle::with_bundled_lexicon().expect("bundled lexicon");
    // Build the cached composition outside the measured loop.
    handle.back_transliterate("sa");
    handle
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Build the transliteration automaton from its table.
fn bench_build_transliterator(c: &mut Criterion) {
    c.bench_function("build_transliterator", |b| {
        b.iter(|| std::hint::black_box(build_transliterator(alphabet())));
    });
}

/// Construct a handle and force the transliterator ∘ lexicon composition.
fn bench_first_query(c: &mut Criterion) {
    c.bench_function("handle_first_query", |b| {
        b.iter(|| {
            let handle = KenchiHandle::with_bundled_lexicon().expect("bundled lexicon");
            std::hint::black_box(handle.back_transliterate("sato"));
        });
    });
}

/// Back-transliterate 16 surnames against a warm handle.
fn bench_back_transliterate(c: &mut Criterion) {
    let handle = load_handle();
    c.bench_function("back_transliterate_16_surnames", |b| {
        b.iter(|| {
            for name in SURNAMES {
                std::hint::black_box(handle.back_transliterate(name));
            }
        });
    });
}

/// Order 6 name pairs with the default prior.
fn bench_order_names(c: &mut Criterion) {
    let handle = load_handle();
    c.bench_function("order_6_pairs", |b| {
        b.iter(|| {
            for pair in PAIRS {
                std::hint::black_box(handle.order_names_default(pair).ok());
            }
        });
    });
}

criterion_group!(
    benches,
    bench_build_transliterator,
    bench_first_query,
    bench_back_transliterate,
    bench_order_names,
);
criterion_main!(benches);
