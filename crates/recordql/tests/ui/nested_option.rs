#![allow(dead_code)]

#[derive(recordql::Record)]
struct Nested {
    pub a: Option<Option<i8>>,
}

fn main() {}
