#![allow(dead_code)]

#[derive(recordql::Record)]
struct Wrapper<T> {
    pub value: T,
}

fn main() {}
