//! Helpers shared by the collection benchmarks.

use rand::{rngs::StdRng, Rng, SeedableRng};
use serde_json::{json, Value};

/// Number of distinct groups records are spread across.
pub const GROUPS: usize = 64;

/// Generates `count` records with a unique `id`, a `group` drawn from [GROUPS] choices, and a
/// random `score`.
pub fn records(count: usize) -> Vec<Value> {
    let mut rng = StdRng::seed_from_u64(0);
    (0..count)
        .map(|id| {
            json!({
                "id": format!("record-{id}"),
                "group": format!("group-{}", rng.gen_range(0..GROUPS)),
                "score": rng.gen_range(0..1_000_000u64),
            })
        })
        .collect()
}
