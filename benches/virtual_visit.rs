use criterion::{black_box, criterion_group, criterion_main, Criterion};
use static_init::dynamic;
use vgraph::build::{self, EdgeSet, VertexSet, Virtual};

#[dynamic]
static VERTEX_SIZE: usize = std::env::var("VERTEX_SIZE")
    .unwrap_or("100".to_string())
    .parse()
    .unwrap();

criterion_group!(benches, generators, combinators, edge_sets);
criterion_main!(benches);

fn visit_all(g: &Virtual) -> usize {
    let mut count = 0;
    g.visit(0, &mut |w, c| {
        count += w + c as usize;
        false
    });
    count
}

fn bench(c: &mut Criterion, name: &str, g: Virtual) {
    c.bench_function(name, |b| b.iter(|| visit_all(black_box(&g))));
}

fn generators(c: &mut Criterion) {
    let n = *VERTEX_SIZE;
    println!("VERTEX_SIZE: {}", n);
    bench(c, "kn", build::kn(n));
    bench(c, "grid", build::grid(n, n).unwrap());
    bench(c, "circulant", build::circulant(n, &[1, 2, 5]));
    bench(c, "specific", build::specific(&build::kn(n)).unwrap());
}

fn combinators(c: &mut Criterion) {
    let n = *VERTEX_SIZE;
    bench(c, "complement", build::empty(n).complement());
    bench(
        c,
        "subgraph",
        build::kn(10 * n).subgraph(&VertexSet::range(0, n)),
    );
    bench(c, "connect", build::kn(n / 2).connect(0, &build::kn(n / 2)).unwrap());
    bench(
        c,
        "join",
        build::kn(1).join(&build::kn(n), EdgeSet::all()).unwrap(),
    );
    bench(c, "add_cost", build::kn(n).add_cost(8));
    bench(c, "add_cost_func", build::kn(n).add_cost_func(build::cost(8)));
    bench(c, "union", build::kn(n).union(&build::kn(n)));
    bench(c, "intersect", build::kn(n).intersect(&build::kn(n)));
    bench(c, "tensor", build::kn(10).tensor(&build::kn(n / 10)).unwrap());
    bench(
        c,
        "cartesian",
        build::kn(n / 2).cartesian(&build::kn(n / 2)).unwrap(),
    );
}

fn edge_sets(c: &mut Criterion) {
    let n = *VERTEX_SIZE;
    bench(c, "delete/none", build::kn(n).delete(&EdgeSet::none()));
    bench(c, "delete/one", build::kn(n).delete(&EdgeSet::edge(3, 8)));
    bench(c, "delete/all", build::kn(n).delete(&EdgeSet::all()));
    bench(c, "add/none", build::kn(n).add(&EdgeSet::none()));
    bench(c, "add/one", build::kn(n).add(&EdgeSet::edge(3, 8)));
    bench(c, "add/all", build::kn(n).add(&EdgeSet::all()));
}
