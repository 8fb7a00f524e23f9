//! Counter over a map-shaped state with the default shallow merge.

use std::collections::HashMap;

use mergestore::Store;

fn main() {
    println!("=== Counter ===\n");

    let store: Store<HashMap<&str, i64>> =
        Store::new(HashMap::from([("count", 0), ("high_water", 0)]));

    store.subscribe(|next, prev| {
        println!("count: {} -> {}", prev["count"], next["count"]);
    });

    println!("Incrementing...");
    store.set_state(HashMap::from([("count", 1)]));
    store.set_state(HashMap::from([("count", 2), ("high_water", 2)]));

    println!("\nRe-submitting the current count (no-op, nothing fires)...");
    store.set_state(HashMap::from([("count", 2)]));

    println!("\nFinal state: {:?}", store.get_state());
}
