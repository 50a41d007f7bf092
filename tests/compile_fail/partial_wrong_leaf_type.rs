//! Test that a partial rejects a leaf value of the wrong type.

use recursive_partial::RecursivePartial;

#[derive(RecursivePartial)]
struct SodaWater {
    co2: u32,
    water: u32,
}

#[derive(RecursivePartial)]
struct CokeFormula {
    #[partial(nested)]
    soda_water: SodaWater,
    sugar: u32,
}

fn main() {
    let _ = PartialCokeFormula {
        soda_water: Some(PartialSodaWater {
            water: Some("40"),
            ..Default::default()
        }),
        ..Default::default()
    };
}
