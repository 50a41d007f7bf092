//! Test that malformed `#[partial]` attributes produce compile errors.

use recursive_partial::RecursivePartial;

#[derive(RecursivePartial)]
#[partial(rename = "Other")]
struct Config {
    #[partial(nested, skip)]
    port: u16,
}

fn main() {}
