#![allow(dead_code)]

#[derive(recordql::Record)]
struct Pair(pub i64, pub i64);

fn main() {}
