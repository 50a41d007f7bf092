//! Test that deriving on an enum produces a compile error.

use recursive_partial::RecursivePartial;

#[derive(RecursivePartial)]
enum Drink {
    Coke,
    Water,
}

fn main() {}
