//! Test that deriving on a tuple struct produces a compile error.

use recursive_partial::RecursivePartial;

#[derive(RecursivePartial)]
struct Pair(u32, u32);

fn main() {}
