//! Strategy builders for MST property-based tests.
//!
//! Each generator draws from a seeded [`SmallRng`] so a failing case can be
//! replayed from its distribution and seed alone. Generated edges never form
//! self-loops and always carry finite, non-negative weights.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{MstFixture, WeightDistribution};

/// Minimum vertex count for most generated graphs.
const MIN_VERTICES: usize = 2;
/// Maximum vertex count for most generated graphs.
const MAX_VERTICES: usize = 48;
/// Maximum vertex count for dense graphs.
const DENSE_MAX_VERTICES: usize = 24;
/// Largest graph handed to the brute-force oracle.
const ORACLE_MAX_VERTICES: usize = 6;
/// Largest edge count handed to the brute-force oracle.
const ORACLE_MAX_EDGES: usize = 10;

/// Generates fixtures across all weight distributions, biased towards
/// `ManyIdentical`.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates small fixtures the brute-force oracle can enumerate.
pub(super) fn oracle_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    any::<u64>().prop_map(|seed| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_oracle_sized(&mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    match distribution {
        WeightDistribution::Unique => generate_probabilistic(
            rng,
            MAX_VERTICES,
            (0.2, 0.6),
            distribution,
            continuous_weight,
        ),
        WeightDistribution::ManyIdentical => {
            let pool_size = rng.gen_range(1..=3);
            let pool: Vec<f64> = (0..pool_size)
                .map(|_| f64::from(rng.gen_range(1_u8..=10)))
                .collect();
            generate_probabilistic(rng, MAX_VERTICES, (0.3, 0.7), distribution, move |r| {
                pool[r.gen_range(0..pool.len())]
            })
        }
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => generate_probabilistic(
            rng,
            DENSE_MAX_VERTICES,
            (0.7, 0.95),
            distribution,
            continuous_weight,
        ),
        WeightDistribution::Disconnected => generate_disconnected(rng),
    }
}

fn continuous_weight(rng: &mut SmallRng) -> f64 {
    rng.gen_range(0.1..100.0)
}

/// Adds each unordered pair with a sampled probability, then links any
/// vertex left isolated to a random earlier vertex so the graph stays
/// connected.
fn generate_probabilistic(
    rng: &mut SmallRng,
    max_vertices: usize,
    edge_prob_range: (f64, f64),
    distribution: WeightDistribution,
    mut weight: impl FnMut(&mut SmallRng) -> f64,
) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=max_vertices);
    let edge_probability = rng.gen_range(edge_prob_range.0..=edge_prob_range.1);
    let mut edges = Vec::new();

    for i in 0..vertex_count {
        for j in (i + 1)..vertex_count {
            if rng.gen_bool(edge_probability) {
                let (from, to) = orient(i, j, rng);
                edges.push((from, to, weight(rng)));
            }
        }
    }

    // Vertex `j` is joined to some `i < j`; together these form a spanning
    // tree whatever the random pass produced.
    for j in 1..vertex_count {
        let i = rng.gen_range(0..j);
        edges.push((i, j, weight(rng)));
    }

    MstFixture {
        vertex_count,
        edges,
        distribution,
    }
}

/// A random spanning path plus roughly `n / 2` to `n` extra edges, which may
/// duplicate existing pairs.
fn generate_sparse(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut order: Vec<usize> = (0..vertex_count).collect();
    shuffle(&mut order, rng);

    let mut edges = Vec::new();
    for pair in order.windows(2) {
        edges.push((pair[0], pair[1], continuous_weight(rng)));
    }

    let extra = rng.gen_range(vertex_count / 2..=vertex_count);
    for _ in 0..extra {
        let i = rng.gen_range(0..vertex_count);
        let j = rng.gen_range(0..vertex_count);
        if i != j {
            edges.push((i, j, continuous_weight(rng)));
        }
    }

    MstFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Sparse,
    }
}

/// Two to four components, each internally connected, with no
/// cross-component edges.
fn generate_disconnected(rng: &mut SmallRng) -> MstFixture {
    let component_count = rng.gen_range(2..=4);
    let sizes: Vec<usize> = (0..component_count).map(|_| rng.gen_range(1..=10)).collect();
    let vertex_count: usize = sizes.iter().sum();
    let mut edges = Vec::new();
    let mut offset = 0;

    for size in sizes {
        for j in 1..size {
            let i = rng.gen_range(0..j);
            edges.push((offset + i, offset + j, continuous_weight(rng)));
        }
        for i in 0..size {
            for j in (i + 1)..size {
                if rng.gen_bool(0.3) {
                    edges.push((offset + j, offset + i, continuous_weight(rng)));
                }
            }
        }
        offset += size;
    }

    MstFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Disconnected,
    }
}

/// Small graphs, connected or not, with integral weights so ties are common.
fn generate_oracle_sized(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(1..=ORACLE_MAX_VERTICES);
    let mut edges = Vec::new();
    for i in 0..vertex_count {
        for j in (i + 1)..vertex_count {
            if edges.len() < ORACLE_MAX_EDGES && rng.gen_bool(0.6) {
                let (from, to) = orient(i, j, rng);
                edges.push((from, to, f64::from(rng.gen_range(0_u8..=6))));
            }
        }
    }
    MstFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::ManyIdentical,
    }
}

/// Randomly swaps the endpoints so `either()` is not always the lower index.
fn orient(i: usize, j: usize, rng: &mut SmallRng) -> (usize, usize) {
    if rng.gen_bool(0.5) { (i, j) } else { (j, i) }
}

/// Fisher-Yates shuffle driven by the fixture's RNG.
fn shuffle(values: &mut [usize], rng: &mut SmallRng) {
    for i in (1..values.len()).rev() {
        let j = rng.gen_range(0..=i);
        values.swap(i, j);
    }
}

impl proptest::arbitrary::Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            1 => Just(Self::Disconnected),
        ]
    }
}
