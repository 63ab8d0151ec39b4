//! Comprehensive Sequence Traversal Examples
//!
//! This example demonstrates the traversal toolkit end to end:
//! - Locating extremes with cursor results
//! - Tie-breaking rules of the extremum scans
//! - Partition searches on sorted data
//! - Custom relations and projections
//! - Generating values into growable and fixed sinks
//! - Lazy views over bounded and unbounded sequences
//! - Flattening pipelines with join
//! - Timing a search over a million-element view
//!
//! Each scenario includes the expected output as comments.

#[cfg(feature = "std")]
use traverse::prelude::*;
#[cfg(feature = "std")]
use std::time::Instant;

#[cfg(feature = "std")]
fn main() -> Result<(), SinkFull> {
    println!("{}", "=".repeat(80));
    println!("Traverse - Comprehensive Examples");
    println!("{}", "=".repeat(80));
    println!();

    // Run all example scenarios
    example_1_locating_extremes();
    example_2_tie_breaking();
    example_3_sorted_searches();
    example_4_relations_and_projections();
    example_5_generating_into_sinks()?;
    example_6_lazy_views();
    example_7_flattening_pipelines();
    example_8_benchmark();

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
/// Example 1: Locating Extremes
/// Cursor results carry the position, not just the value
fn example_1_locating_extremes() {
    println!("Example 1: Locating Extremes");
    println!("{}", "-".repeat(80));

    let data = [3, 1, 4, 1, 5, 9, 2, 6];

    let best = max_element(&data[..]);
    println!("Maximum {} at index {}", best.read(), best.index());

    let (low, high) = minmax_element(&data[..]);
    println!(
        "Extremes: {} at index {}, {} at index {}",
        low.read(),
        low.index(),
        high.read(),
        high.index()
    );

    /* Expected Output:
    Maximum 9 at index 5
    Extremes: 1 at index 1, 9 at index 5
    */

    println!();
}

#[cfg(feature = "std")]
/// Example 2: Tie-Breaking Rules
/// max_element keeps the first maximum; the paired scan keeps the
/// first minimum and the last maximum
fn example_2_tie_breaking() {
    println!("Example 2: Tie-Breaking Rules");
    println!("{}", "-".repeat(80));

    let scores = [2, 7, 1, 7];
    let best = max_element(&scores[..]);
    println!("First of the equal maxima: index {}", best.index());

    let uniform = [7, 7, 7];
    let (low, high) = minmax_element(&uniform[..]);
    println!(
        "Uniform input: minimum at index {}, maximum at index {}",
        low.index(),
        high.index()
    );

    /* Expected Output:
    First of the equal maxima: index 1
    Uniform input: minimum at index 0, maximum at index 2
    */

    println!();
}

#[cfg(feature = "std")]
/// Example 3: Partition Searches
/// Bounds and equivalence classes on sorted data, in O(log n) comparisons
fn example_3_sorted_searches() {
    println!("Example 3: Partition Searches");
    println!("{}", "-".repeat(80));

    let sorted = [0, 0, 1, 1, 1, 2, 2, 3];

    let class = equal_range(&sorted[..], &1);
    println!(
        "Value 1 spans [{}, {}), {} elements",
        class.start.index(),
        class.end.index(),
        class.len()
    );

    println!(
        "Value 2 sits between lower bound {} and upper bound {}",
        lower_bound(&sorted[..], &2).index(),
        upper_bound(&sorted[..], &2).index()
    );

    let missing = equal_range(&sorted[..], &5);
    println!(
        "Absent value 5: empty class at insertion point {}",
        missing.start.index()
    );

    /* Expected Output:
    Value 1 spans [2, 5), 3 elements
    Value 2 sits between lower bound 5 and upper bound 7
    Absent value 5: empty class at insertion point 8
    */

    println!();
}

#[cfg(feature = "std")]
/// Example 4: Relations and Projections
/// Steering every algorithm with a custom ordering and a key extractor
fn example_4_relations_and_projections() {
    println!("Example 4: Relations and Projections");
    println!("{}", "-".repeat(80));

    // Hourly temperature readings, sorted by hour
    let readings = [(7u32, 18.4f64), (9, 21.0), (9, 22.5), (12, 19.1)];

    let warmest = max_element_by(&readings, |a: &f64, b: &f64| a < b, |r: &(u32, f64)| r.1);
    println!(
        "Warmest reading {} at hour {}",
        warmest.read().1,
        warmest.read().0
    );

    let at_nine = equal_range_by(&readings, 9u32, |a, b| a < b, |r: &(u32, f64)| r.0);
    println!("Readings at hour 9: {}", at_nine.len());

    // A descending sequence searched under the reversed relation
    let descending = [9, 7, 7, 4, 1];
    let first = lower_bound_by(&descending, 7, |a: &i32, b: &i32| a > b, |x: &i32| *x);
    let past = upper_bound_by(&descending, 7, |a: &i32, b: &i32| a > b, |x: &i32| *x);
    println!("Sevens occupy [{}, {})", first.index(), past.index());

    /* Expected Output:
    Warmest reading 22.5 at hour 9
    Readings at hour 9: 2
    Sevens occupy [1, 3)
    */

    println!();
}

#[cfg(feature = "std")]
/// Example 5: Generating into Sinks
/// One generator, two destinations: a growable vector and a fixed buffer
fn example_5_generating_into_sinks() -> Result<(), SinkFull> {
    println!("Example 5: Generating into Sinks");
    println!("{}", "-".repeat(80));

    // Fibonacci into a vector
    let (mut a, mut b) = (0u64, 1u64);
    let (fib, _) = generate_n(Vec::new(), 10, || {
        let next = a;
        (a, b) = (b, a + b);
        next
    });
    println!("Fibonacci: {:?}", fib);

    // Squares into a fixed buffer, checked writes
    let mut buffer = [0u64; 4];
    let mut sink = SliceSink::new(&mut buffer);
    for i in 1..=4u64 {
        sink.try_put(i * i)?;
    }
    println!("Squares: {:?}, {} written", buffer, 4);

    // One write too many, reported instead of performed
    let mut full = [0u8; 2];
    let mut sink = SliceSink::new(&mut full);
    sink.try_put(1)?;
    sink.try_put(2)?;
    if let Err(err) = sink.try_put(3) {
        println!("Overflow: {}", err);
    }

    /* Expected Output:
    Fibonacci: [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]
    Squares: [1, 4, 9, 16], 4 written
    Overflow: Sink is full: capacity 2 exhausted
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 6: Lazy Views
/// Nothing runs until a traversal pulls elements through the stack
fn example_6_lazy_views() {
    println!("Example 6: Lazy Views");
    println!("{}", "-".repeat(80));

    let firsts: Vec<i64> = elements(take(iota(100), 5)).collect();
    println!("Counter prefix: {:?}", firsts);

    let squares: Vec<i64> = elements(transform(take(iota(1), 6), |i| i * i)).collect();
    println!("Squares: {:?}", squares);

    let echoes: Vec<&str> = elements(repeat_n("echo", 3)).collect();
    println!("Echoes: {:?}", echoes);

    println!(
        "A bounded counter supports {} traversal",
        capability_of(&take(iota(0i32), 5)).name()
    );

    /* Expected Output:
    Counter prefix: [100, 101, 102, 103, 104]
    Squares: [1, 4, 9, 16, 25, 36]
    Echoes: ["echo", "echo", "echo"]
    A bounded counter supports random-access traversal
    */

    println!();
}

#[cfg(feature = "std")]
/// Example 7: Flattening Pipelines
/// join turns a range of ranges into one flat sequence
fn example_7_flattening_pipelines() {
    println!("Example 7: Flattening Pipelines");
    println!("{}", "-".repeat(80));

    let doubled: Vec<i32> =
        elements(join(transform(take(iota(0), 4), |i| repeat_n(i, 2)))).collect();
    println!("Each value twice: {:?}", doubled);

    let triangle: Vec<i32> =
        elements(join(transform(take(iota(0), 4), |i| repeat_n(i, i as usize)))).collect();
    println!("Value i, i times: {:?}", triangle);

    let nested = vec![vec![1, 2], vec![3], vec![4, 5, 6]];
    let flat: Vec<i32> = elements(join(&nested)).copied().collect();
    println!("Nested vectors: {:?}", flat);

    println!(
        "A flattened sequence supports {} traversal",
        capability_of(&join(&nested)).name()
    );

    /* Expected Output:
    Each value twice: [0, 0, 1, 1, 2, 2, 3, 3]
    Value i, i times: [1, 2, 2, 3, 3, 3]
    Nested vectors: [1, 2, 3, 4, 5, 6]
    A flattened sequence supports forward traversal
    */

    println!();
}

#[cfg(feature = "std")]
/// Example 8: Benchmark
/// A partition search over a million-element lazy counter
fn example_8_benchmark() {
    println!("Example 8: Benchmark");
    println!("{}", "-".repeat(80));

    let n = 1_000_000usize;
    let probe = 765_432i64;

    let start = Instant::now();
    let class = equal_range(take(iota(0i64), n), probe);
    let duration = start.elapsed();

    println!(
        "Found {} at position {} among {} lazy elements in {:?}",
        probe,
        class.start.read(),
        n,
        duration
    );

    println!();
}
