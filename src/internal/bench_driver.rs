#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::pedantic)]
#![allow(clippy::unwrap_used)]
#![allow(warnings)]

use plotters::prelude::*;
use rand::seq::SliceRandom;
use std::time::Instant;
use tridict::{AvlHashMap, ChainingTable, Dictionary, OpenAddressingTable};

// Dataset sizes to sweep; each run uses a fresh table per strategy.
const SIZES: [usize; 5] = [1_000, 5_000, 10_000, 50_000, 100_000];

const STRATEGIES: [&str; 3] = ["Open Addressing", "Chaining", "AVL Buckets"];

// Unique keys in shuffled order with derived values.
fn dataset(amount: usize) -> Vec<(i64, i64)> {
    let mut rng = rand::rng();
    let mut keys: Vec<i64> = (0..amount as i64).collect();
    keys.shuffle(&mut rng);
    keys.into_iter().map(|key| (key, key.wrapping_mul(0x9e37_79b9))).collect()
}

fn build_table(strategy: &str, amount: usize) -> Box<dyn Dictionary> {
    match strategy {
        // Fixed-capacity strategies get headroom so the run measures probing,
        // not saturation.
        "Open Addressing" => Box::new(OpenAddressingTable::with_capacity(amount * 2)),
        "Chaining" => Box::new(ChainingTable::with_capacity(amount)),
        "AVL Buckets" => Box::new(AvlHashMap::with_capacity(16)),
        _ => panic!("Unknown strategy"),
    }
}

// Average nanoseconds per operation for insert-all, lookup-all, remove-all.
fn measure(strategy: &str, items: &[(i64, i64)]) -> (f64, f64, f64) {
    let mut table = build_table(strategy, items.len());
    let count = items.len() as f64;

    let start = Instant::now();
    for &(key, value) in items {
        table.insert(key, value).unwrap();
    }
    let insert_ns = start.elapsed().as_nanos() as f64 / count;

    let start = Instant::now();
    for &(key, _) in items {
        let _ = table.contains(key);
    }
    let lookup_ns = start.elapsed().as_nanos() as f64 / count;

    let start = Instant::now();
    for &(key, _) in items {
        table.remove(key);
    }
    let remove_ns = start.elapsed().as_nanos() as f64 / count;

    (insert_ns, lookup_ns, remove_ns)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("strategy,keys,insert_ns,lookup_ns,remove_ns");

    // insert ns/op per strategy per size, for the chart.
    let mut insert_series: Vec<Vec<f64>> = vec![Vec::new(); STRATEGIES.len()];

    for &amount in &SIZES {
        let items = dataset(amount);

        for (strategy_idx, &strategy) in STRATEGIES.iter().enumerate() {
            let (insert_ns, lookup_ns, remove_ns) = measure(strategy, &items);
            insert_series[strategy_idx].push(insert_ns);
            println!(
                "{},{},{:.1},{:.1},{:.1}",
                strategy, amount, insert_ns, lookup_ns, remove_ns
            );
        }
    }

    // Chart: average insert cost per strategy across dataset sizes.
    let font_family = "sans-serif";
    let colors =
        [RGBColor(220, 50, 50), RGBColor(50, 90, 220), RGBColor(50, 180, 50)];
    let line_width = 2;
    let marker_size = 4;
    let text_size = 16;
    let title_size = 35;

    let root = BitMapBackend::new("insert_cost.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_ns = insert_series
        .iter()
        .flat_map(|v| v.iter())
        .fold(0.0, |max, &x| if x > max { x } else { max }) *
        1.1; // Add 10% margin

    let mut chart = ChartBuilder::on(&root)
        .caption("Average Insert Cost per Strategy", (font_family, title_size))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .right_y_label_area_size(10)
        .build_cartesian_2d(0..(SIZES.len() - 1), 0.0..max_ns)?;

    let x_labels: Vec<String> = SIZES.iter().map(|&n| n.to_string()).collect();

    chart
        .configure_mesh()
        .x_labels(SIZES.len())
        .x_label_formatter(&|x| {
            if *x < x_labels.len() { x_labels[*x].clone() } else { "".to_string() }
        })
        .x_desc("Number of Keys Inserted")
        .y_desc("Average Insert Cost (ns/op)")
        .axis_desc_style((font_family, text_size))
        .draw()?;

    for (strategy_idx, &strategy) in STRATEGIES.iter().enumerate() {
        let color = &colors[strategy_idx % colors.len()];
        let line_style = ShapeStyle::from(color).stroke_width(line_width);

        chart
            .draw_series(LineSeries::new(
                (0..SIZES.len()).map(|i| (i, insert_series[strategy_idx][i])),
                line_style,
            ))?
            .label(strategy)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series((0..SIZES.len()).map(|i| {
            Circle::new((i, insert_series[strategy_idx][i]), marker_size, color.filled())
        }))?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    println!("Generated plot image: insert_cost.png");

    Ok(())
}
