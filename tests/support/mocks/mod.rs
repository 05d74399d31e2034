// tests/support/mocks/mod.rs
//! テスト用モックの再エクスポート
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod messaging;
pub mod repos;
pub mod security;
pub mod time;

// インメモリリポジトリ
pub use repos::InMemoryStore;

// キュー
pub use messaging::RecordingPublisher;

// セキュリティ
pub use security::PlainPasswordHasher;

// 時刻
pub use time::{FixedClock, fixed_now};
