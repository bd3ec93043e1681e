// src/config/layout.rs
//! ゲーム画面のレイアウトに関する定数を定義するよ！
//! 描画はしないけど、ドロップ先の当たり判定はこの座標で計算する。

pub const CARD_WIDTH: f32 = 150.0; // カード画像の幅
pub const CARD_HEIGHT: f32 = 215.0; // カード画像の高さ

// --- 各山のカードのずらし幅 (縦方向) ---
pub const STOCK_GAP: f32 = 1.0;
pub const FOUNDATION_GAP: f32 = 0.0;
pub const TABLEAU_GAP: f32 = 30.0;

// --- 各エリアの開始位置 ---
pub const STOCK_POS_X: f32 = 95.0;
pub const STOCK_POS_Y: f32 = 20.0;

pub const WASTE_POS_X: f32 = 285.0;
pub const WASTE_POS_Y: f32 = 20.0;

pub const FOUNDATION_START_X: f32 = 610.0;
pub const FOUNDATION_START_Y: f32 = 20.0;
pub const FOUNDATION_X_OFFSET: f32 = 180.0; // 組札同士の間隔

pub const TABLEAU_START_X: f32 = 95.0;
pub const TABLEAU_START_Y: f32 = 275.0;
pub const TABLEAU_X_OFFSET: f32 = 180.0; // 場札の列間の間隔
