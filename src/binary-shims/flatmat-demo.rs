extern crate flatmat;

fn main() { ::flatmat::cli::demo_main(); }
