//! Connect-Four style move selection core.
//!
//! このクレートは盤面の契約と参照実装を提供する `engine` と、手を選択する `ai` を提供します。
//! 盤面を所有するゲームループ側から1手ごとに呼び出されることを想定しています。

#![forbid(unsafe_code)]

/// 盤面の契約（`Board`）と参照実装（`Position`）を提供するモジュール。
pub mod engine;

/// AI（手選択アルゴリズム）を提供するモジュール。
pub mod ai;
