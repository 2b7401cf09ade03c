// tests/support/mocks/mod.rs
//! テスト用インメモリリポジトリ
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod listing;
pub mod store;

mod repos;

pub use store::InMemoryDb;
