// src/logic/mod.rs
//! World を書き換えない純粋なロジックたち (デッキ、レイアウト、ルール、自動移動)。

pub mod auto_move;
pub mod deck;
pub mod layout;
pub mod rules;
