//! Common utilities for benchmarks

use std::fmt::Write;

use criterion::Criterion;
use pprof::criterion::{Output, PProfProfiler};
use prereq_resolver::CourseGraph;

/// Configure criterion with flamegraph profiling support
pub fn criterion_config() -> Criterion {
    Criterion::default()
        .warm_up_time(std::time::Duration::from_secs(3))
        .measurement_time(std::time::Duration::from_secs(10))
        .sample_size(100)
        .with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)))
}

fn course(i: usize) -> String {
    format!("course-{}", i)
}

/// Single chain where each course requires the previous one
pub fn chain_graph(len: usize) -> CourseGraph {
    let mut graph = CourseGraph::new();
    for i in 0..len {
        let prerequisites = if i == 0 { vec![] } else { vec![course(i - 1)] };
        graph.add_item(course(i), (i % 7) as f64, prerequisites).expect("valid cost");
    }
    graph
}

/// `layers` layers of `width` courses; each course requires two courses of
/// the layer below
pub fn layered_graph(layers: usize, width: usize) -> CourseGraph {
    let mut graph = CourseGraph::new();
    for layer in 0..layers {
        for slot in 0..width {
            let i = layer * width + slot;
            let prerequisites = if layer == 0 {
                vec![]
            } else {
                let below = (layer - 1) * width;
                vec![course(below + slot), course(below + (slot + 1) % width)]
            };
            graph.add_item(course(i), 1.0, prerequisites).expect("valid cost");
        }
    }
    graph
}

/// `count` disjoint three-course cycles, each hanging off a shared root
pub fn cyclic_graph(count: usize) -> CourseGraph {
    let mut graph = CourseGraph::new();
    graph.set_cost("root", 1.0).expect("valid cost");
    for c in 0..count {
        let base = c * 3;
        graph.add_item(course(base), 1.0, [course(base + 1), "root".to_string()]).expect("valid cost");
        graph.add_item(course(base + 1), 2.0, [course(base + 2)]).expect("valid cost");
        graph.add_item(course(base + 2), 3.0, [course(base)]).expect("valid cost");
    }
    graph
}

/// Catalog text in prereq.toml form with `count` chained courses
pub fn catalog_toml(count: usize) -> String {
    let mut content = String::from("[resolver]\npolicy = \"merge\"\n");
    for i in 0..count {
        let _ = write!(content, "\n[courses.{}]\ncost = {}\n", course(i), i % 7);
        if i > 0 {
            let _ = writeln!(content, "prerequisites = [\"{}\"]", course(i - 1));
        }
    }
    content
}

/// Catalog text in the bare courses.json form with `count` chained courses
pub fn courses_json(count: usize) -> String {
    let entries: Vec<String> = (0..count)
        .map(|i| {
            if i == 0 {
                format!("\"{}\": []", course(i))
            } else {
                format!("\"{}\": [\"{}\"]", course(i), course(i - 1))
            }
        })
        .collect();
    format!("{{{}}}", entries.join(", "))
}
