//! Test that `#[partial(nested)]` requires the field type to be a shape.

use recursive_partial::RecursivePartial;

struct Plain {
    value: u32,
}

#[derive(RecursivePartial)]
struct Holder {
    #[partial(nested)]
    plain: Plain,
}

fn main() {}
