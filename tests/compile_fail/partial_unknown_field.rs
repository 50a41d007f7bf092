//! Test that a partial rejects a field the shape does not declare.

use recursive_partial::RecursivePartial;

#[derive(RecursivePartial)]
struct SodaWater {
    co2: u32,
    water: u32,
}

fn main() {
    let _ = PartialSodaWater {
        soda: Some(1),
        ..Default::default()
    };
}
