//! noonlab-core
//!
//! Decision registry for the Noon-Lab demo.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, level, tribe, state, decision, stats）
//! - **ports**: 抽象化レイヤー（Clock, IdGenerator）
//! - **config**: LabConfig（閾値、トライブのプロファイル）
//! - **registry**: Registry（add / vote / stats）
//! - **dashboard**: 統計の枠付きテキスト表示
//! - **error**: エラー型

pub mod config;
pub mod dashboard;
pub mod domain;
pub mod error;
pub mod ports;
pub mod registry;

pub use config::{LabConfig, TribeSeed};
pub use error::LabError;
pub use registry::Registry;
