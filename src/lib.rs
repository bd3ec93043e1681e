// src/lib.rs

// クロンダイク (ソリティア) のゲームエンジンだよ！🃏
// ゲームの状態とルールは全部 Rust 側に置いて、JS 側は `GameApp` に
// インテントを JSON で投げて、返ってきたイベントとスナップショットで描画するだけ。

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod logic;
pub mod protocol;
pub mod systems;
pub mod world;

#[cfg(test)]
mod test_support;

pub use app::{GameApp, GameSession};
pub use config::GameConfig;
pub use error::EngineError;
pub use protocol::{GameEvent, GameSnapshot, Intent};
pub use world::World;
