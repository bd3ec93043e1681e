// src/app/wasm_api.rs
//! JavaScript から使う入り口。中身は `GameSession` で、境界は JSON 文字列でやり取りする。

use log::{error, info, LevelFilter};
use wasm_bindgen::prelude::*;

use crate::app::console_logger;
use crate::app::game_session::GameSession;
use crate::config::GameConfig;
use crate::protocol::Intent;

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
    if console_logger::init(LevelFilter::Info).is_ok() {
        info!("Panic hook and console logger set!");
    }
}

fn to_js_error(message: String) -> JsValue {
    error!("{}", message);
    js_sys::Error::new(&message).into()
}

/// JS 側が持つゲーム本体。
#[wasm_bindgen]
pub struct GameApp {
    session: GameSession,
}

#[wasm_bindgen]
impl GameApp {
    /// `config_json` は `GameConfig` の JSON。空文字ならデフォルト設定。
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<GameApp, JsValue> {
        let config = if config_json.trim().is_empty() {
            GameConfig::default()
        } else {
            GameConfig::from_json(config_json)
                .map_err(|e| to_js_error(format!("Invalid game config: {}", e)))?
        };
        info!("GameApp: Initializing with {:?}", config);
        let session = GameSession::new(&config).map_err(|e| to_js_error(format!("Failed to deal: {}", e)))?;
        Ok(GameApp { session })
    }

    /// インテント (JSON) を 1 つ処理して、発生したイベントの配列を JSON で返す。
    pub fn dispatch_json(&mut self, intent_json: &str) -> Result<String, JsValue> {
        let intent: Intent = serde_json::from_str(intent_json)
            .map_err(|e| to_js_error(format!("Failed to parse intent: {}", e)))?;
        let events = self
            .session
            .dispatch(intent)
            .map_err(|e| to_js_error(format!("Intent failed: {}", e)))?;
        serde_json::to_string(&events).map_err(|e| to_js_error(format!("Failed to serialize events: {}", e)))
    }

    /// 盤面全体のスナップショットを JSON で返す。描画はこれを見て行う。
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.session.snapshot())
            .map_err(|e| to_js_error(format!("Failed to serialize game state: {}", e)))
    }

    pub fn is_won(&self) -> bool {
        self.session.is_won()
    }
}
