// src/components/position.rs

use serde::{Deserialize, Serialize};

use crate::config::layout::{CARD_HEIGHT, CARD_WIDTH};

/// 2D 空間での位置 (左上の座標) だよ！📍
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// この位置に置いたカード 1 枚ぶんの矩形。
    pub fn card_rect(self) -> Rect {
        Rect { x: self.x, y: self.y, width: CARD_WIDTH, height: CARD_HEIGHT }
    }
}

/// 当たり判定用の矩形。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// 2 つの矩形が重なってるか。辺が接してるだけなら重なりとは見なさない。
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}
