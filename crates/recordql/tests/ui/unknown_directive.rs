#![allow(dead_code)]

#[derive(recordql::Record)]
struct Unknown {
    #[ql("primary key")]
    pub id: i64,
}

fn main() {}
