// src/app/mod.rs
//! セッションと、それを JS に公開する GameApp を置くモジュールだよ！

pub mod console_logger;
pub mod game_session;
pub mod wasm_api;

pub use game_session::GameSession;
pub use wasm_api::GameApp;
