//! Ports - 抽象化レイヤー
//!
//! Registry が外部から受け取る依存（時刻、ID 生成）を trait として定義します。
//! テストでは FixedClock などに差し替えて決定的に検証できます。

pub mod clock;
pub mod id_generator;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::id_generator::{IdGenerator, UlidGenerator};
