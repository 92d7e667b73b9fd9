use edge_graph_core::{Graph, Metric, WeightedEdge};
use std::time::Instant;

/// Edge payload: street id + block length. Blocks of one street share a length,
/// so consecutive blocks compare equal and cost no turn.
type Block = WeightedEdge<u32>;
type StreetGraph = Graph<u32, Block>;
type Generator = fn(u32) -> edge_graph_core::Result<StreetGraph>;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let vertex_count: u32 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(2_500);

    if mode == "help" || mode == "--help" {
        println!("Usage: edge-graph-bench [mode] [vertex_count]");
        println!();
        println!("Modes:");
        println!("  all      Run all generators and benchmark each (default)");
        println!("  grid     Two-way street grid (many equal-weight routes, turn-heavy)");
        println!("  random   Erdos-Renyi uniform random one-way streets");
        println!("  barbell  Two dense districts joined by a single avenue");
        println!();
        println!("Default vertex_count: 2500");
        return;
    }

    println!("edge-graph-bench");
    println!("================");
    println!();

    let generators: Vec<(&str, Generator)> = match mode {
        "grid" => vec![("Street grid", gen_grid)],
        "random" => vec![("Erdos-Renyi random", gen_random)],
        "barbell" => vec![("Barbell (district-avenue-district)", gen_barbell)],
        "all" => vec![
            ("Street grid", gen_grid as Generator),
            ("Erdos-Renyi random", gen_random),
            ("Barbell (district-avenue-district)", gen_barbell),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        if let Err(e) = run_benchmark(name, generator, vertex_count) {
            eprintln!("{}: {}", name, e);
        }
    }
}

fn run_benchmark(
    name: &str,
    generator: Generator,
    vertex_count: u32,
) -> edge_graph_core::Result<()> {
    println!("--- {} ---", name);
    println!("Target: {} vertices", vertex_count);

    let t = Instant::now();
    let mut graph = generator(vertex_count)?;
    let gen_time = t.elapsed();
    println!(
        "Generated in {:.2}s: {} vertices, {} edges, ~{:.1}KB",
        gen_time.as_secs_f64(),
        graph.vertex_count(),
        graph.edge_count(),
        graph.memory_usage() as f64 / 1024.0
    );

    if graph.is_empty() {
        println!();
        return Ok(());
    }

    // First vertex to last: corner to corner on the grid, district to district on the barbell
    let start = 0u32;
    let end = graph.vertex_count() as u32 - 1;

    println!();
    println!("{:>10} {:>12} {:>10}", "query", "result", "time");
    println!("{:->10} {:->12} {:->10}", "", "", "");

    let t = Instant::now();
    let weight = edge_graph_core::shortest_path_weight(&mut graph, &start, &end)?;
    print_row("weight", weight, t.elapsed().as_secs_f64());

    let t = Instant::now();
    let turns = edge_graph_core::shortest_path_turns(&mut graph, &start, &end)?;
    print_row("turns", turns, t.elapsed().as_secs_f64());

    let t = Instant::now();
    let route = edge_graph_core::shortest_route(&mut graph, &start, &end, Metric::Weight)?;
    let elapsed = t.elapsed().as_secs_f64();
    match route {
        Some(r) => println!(
            "{:>10} {:>12} {:>8.1}ms  ({} hops)",
            "route",
            r.cost,
            elapsed * 1000.0,
            r.hops()
        ),
        None => println!("{:>10} {:>12} {:>8.1}ms", "route", "none", elapsed * 1000.0),
    }
    println!();
    Ok(())
}

fn print_row(query: &str, result: i64, secs: f64) {
    if result == edge_graph_core::UNREACHABLE {
        println!("{:>10} {:>12} {:>8.1}ms", query, "unreachable", secs * 1000.0);
    } else {
        println!("{:>10} {:>12} {:>8.1}ms", query, result, secs * 1000.0);
    }
}

// ---------------------------------------------------------------------------
// Generators: deterministic, single-threaded, sized to fit exactly
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
}

/// Block length of a street: every block of street `id` is equally long.
fn block(street: u32) -> Block {
    WeightedEdge::new(street, 1 + (street as u64 * 7) % 5)
}

fn with_vertices(count: u32) -> edge_graph_core::Result<StreetGraph> {
    let mut graph = Graph::with_capacity(count as usize);
    for v in 0..count {
        graph.add_vertex(v)?;
    }
    Ok(graph)
}

/// Square street grid: rows are streets, columns are avenues, all two-way.
///
/// Every corner-to-corner route has the same hop count, so the turn query
/// has to pick the one with a single bend among many equal-weight ones.
fn gen_grid(vertex_count: u32) -> edge_graph_core::Result<StreetGraph> {
    let side = (vertex_count as f64).sqrt() as u32;
    let mut graph = with_vertices(side * side)?;
    let avenue_base = side; // street ids: rows 0..side, avenues side..2*side

    for row in 0..side {
        for col in 0..side {
            let v = row * side + col;
            if col + 1 < side {
                graph.add_edge(&v, &(v + 1), block(row))?;
                graph.add_edge(&(v + 1), &v, block(row))?;
            }
            if row + 1 < side {
                graph.add_edge(&v, &(v + side), block(avenue_base + col))?;
                graph.add_edge(&(v + side), &v, block(avenue_base + col))?;
            }
        }
    }

    Ok(graph)
}

/// Erdos-Renyi: ~4 one-way streets per vertex, 16 street names.
fn gen_random(vertex_count: u32) -> edge_graph_core::Result<StreetGraph> {
    let mut graph = with_vertices(vertex_count)?;
    let mut rng = FastRng::new(54321);
    let n = vertex_count as u64;

    for _ in 0..n * 4 {
        let from = rng.next(n) as u32;
        let to = rng.next(n) as u32;
        if from != to {
            graph.add_edge(&from, &to, block(rng.next(16) as u32))?;
        }
    }

    Ok(graph)
}

/// Barbell: two dense districts joined by a single avenue of ~10 blocks.
///
/// Worst case for "find path through bottleneck": the scan settles most of
/// the first district before the bridge.
fn gen_barbell(vertex_count: u32) -> edge_graph_core::Result<StreetGraph> {
    let bridge_len = 10u32.min(vertex_count);
    let district = (vertex_count - bridge_len) / 2;
    let mut graph = with_vertices(district * 2 + bridge_len)?;
    let mut rng = FastRng::new(99999);
    let avenue = 1000u32;

    let mut connect_district = |graph: &mut StreetGraph, base: u32| -> edge_graph_core::Result<()> {
        for i in 0..district {
            for _ in 0..8u32.min(district.saturating_sub(1)) {
                let target = rng.next(district as u64) as u32;
                if target != i {
                    graph.add_edge(&(base + i), &(base + target), block(rng.next(8) as u32))?;
                }
            }
        }
        Ok(())
    };

    // District A, then the avenue from its last vertex, then district B
    connect_district(&mut graph, 0)?;
    let mut prev = district.saturating_sub(1);
    for i in 0..bridge_len {
        let id = district + i;
        graph.add_edge(&prev, &id, block(avenue))?;
        prev = id;
    }
    let b_start = district + bridge_len;
    if district > 0 {
        graph.add_edge(&prev, &b_start, block(avenue))?;
    }
    connect_district(&mut graph, b_start)?;

    Ok(graph)
}
