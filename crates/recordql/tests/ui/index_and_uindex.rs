#![allow(dead_code)]

#[derive(recordql::Record)]
struct Both {
    #[ql("index x, uindex y")]
    pub i: isize,
}

fn main() {}
