//! Spell Check Benchmarking Tool
//!
//! This binary measures the throughput of the checking pipeline on large text
//! files, such as book dumps or concatenated articles.
//!
//! ## What It Benchmarks
//!
//! 1. **Tokenize**: splitting, joining, trimming and filtering document words
//! 2. **Check**: tokenization plus dictionary matching
//!
//! The dictionary is built once up front and not timed.
//!
//! ## Usage
//!
//! ```bash
//! # Check a document against a word list
//! ./target/release/sift_bench /path/to/book.txt /path/to/words.txt
//!
//! # Without a word list, the document's own words are the dictionary
//! ./target/release/sift_bench /path/to/book.txt
//! ```
//!
//! ## Tips for Accurate Results
//!
//! - Build with `--release`
//! - Use a large input file (100MB+) for stable measurements

use std::env;
use std::time::{Duration, Instant};

use spellsift_core::{read_dictionary, read_document, SpellChecker, Tokenizer};

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

fn main() -> Result<(), spellsift_core::Error> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: sift_bench <document> [dictionary]");
        std::process::exit(1);
    }

    println!("Loading files...");
    let document = read_document(&args[1])?;
    let dictionary = match args.get(2) {
        Some(path) => read_dictionary(path)?,
        None => Tokenizer::default().tokenize_to_vec(&document),
    };

    println!("Document:   {}", fmt_bytes(document.len() as u64));
    println!("Dictionary: {} entries\n", fmt_count(dictionary.len() as u64));

    let checker = SpellChecker::new(&dictionary)?;

    bench_tokenize(checker.tokenizer(), &document);
    bench_check(&checker, &document);

    let (_, stats) = checker.check_with_stats(&document);
    println!("{}", stats);

    Ok(())
}

fn bench_tokenize(tokenizer: &Tokenizer, document: &str) {
    println!("=== Tokenize ===");

    warmup(|| {
        let mut sink = 0u64;
        tokenizer.tokenize(document, |_| sink += 1);
        std::hint::black_box(sink);
    });

    let mut words = 0u64;
    let elapsed = measure(|| {
        let mut local = 0u64;
        tokenizer.tokenize(document, |_| local += 1);
        words = local;
        std::hint::black_box(words);
    });

    print_perf("Tokenize", document.len(), elapsed, ("Words", words));
}

fn bench_check(checker: &SpellChecker, document: &str) {
    println!("=== Check ===");

    warmup(|| {
        std::hint::black_box(checker.check(document));
    });

    let mut unmatched = 0u64;
    let elapsed = measure(|| {
        let result = checker.check(document);
        unmatched = result.len() as u64;
        std::hint::black_box(result);
    });

    print_perf("Check", document.len(), elapsed, ("Unmatched", unmatched));
}

fn warmup<F: FnMut()>(mut f: F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(mut f: F) -> Duration {
    let mut total = Duration::ZERO;

    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, count: (&str, u64)) {
    let secs = elapsed.as_secs_f64();
    let mib = input_bytes as f64 / (1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Mode        : {}", label);
    println!("Elapsed     : {:.3} s", secs);
    println!("Throughput  : {:.1} MiB/s", mib / secs);
    println!("{:<12}: {}", count.0, fmt_count(count.1));
    println!("--------------------------------\n");
}

fn fmt_bytes(b: u64) -> String {
    if b >= 1024 * 1024 {
        format!("{:.2} MiB", b as f64 / (1024.0 * 1024.0))
    } else if b >= 1024 {
        format!("{:.2} KiB", b as f64 / 1024.0)
    } else {
        format!("{} B", b)
    }
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
