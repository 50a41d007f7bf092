//! Test that an unmarked record field is a leaf: it takes the full shape,
//! not its partial.

use recursive_partial::RecursivePartial;

#[derive(RecursivePartial)]
struct SodaWater {
    co2: u32,
    water: u32,
}

#[derive(RecursivePartial)]
struct CokeFormula {
    soda_water: SodaWater,
    sugar: u32,
}

fn main() {
    let _ = PartialCokeFormula {
        soda_water: Some(PartialSodaWater::default()),
        ..Default::default()
    };
}
