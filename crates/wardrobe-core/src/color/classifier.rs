//! Color Classifier
//!
//! sRGB hex色をパレット最近傍探索で11種の基本色カテゴリへ分類する。
//!
//! パイプライン全体は純粋関数：同じ入力は常に同じカテゴリを返す。
//! パレットは空にならないため、妥当な入力に対して分類は必ず成功する。

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::convert::{hex_to_lab, Lab};
use super::palette::{ReferenceShade, REFERENCE_SHADES};

/// 分類結果のカテゴリラベル
///
/// シリアライズ表現は英語名そのまま（`Red`、`Gray`等）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorCategory {
    Red,
    Green,
    Blue,
    Orange,
    Yellow,
    Brown,
    Black,
    White,
    Gray,
    Pink,
    Purple,
}

/// 全カテゴリ（表示・フィルタ用）
pub const ALL_CATEGORIES: [ColorCategory; 11] = [
    ColorCategory::Red,
    ColorCategory::Green,
    ColorCategory::Blue,
    ColorCategory::Orange,
    ColorCategory::Yellow,
    ColorCategory::Brown,
    ColorCategory::Black,
    ColorCategory::White,
    ColorCategory::Gray,
    ColorCategory::Pink,
    ColorCategory::Purple,
];

impl ColorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Orange => "Orange",
            Self::Yellow => "Yellow",
            Self::Brown => "Brown",
            Self::Black => "Black",
            Self::White => "White",
            Self::Gray => "Gray",
            Self::Pink => "Pink",
            Self::Purple => "Purple",
        }
    }

    /// ラベル名からカテゴリを引く（完全一致）
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_CATEGORIES.iter().copied().find(|c| c.as_str() == name)
    }
}

impl std::fmt::Display for ColorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// hex色を基本色カテゴリへ分類
///
/// 入力は`^#?[0-9a-fA-F]{6}$`。それ以外は`InvalidColorFormat`で失敗し、
/// 他のエラーは発生しない。
pub fn classify(input: &str) -> Result<ColorCategory> {
    let lab = hex_to_lab(input)?;
    let winner = nearest_shade(&lab);

    match ColorCategory::from_name(winner.base_name()) {
        Some(category) => Ok(category),
        // パレットキーは全てカテゴリ名を接頭辞に持つ（テストで保証）
        None => unreachable!("palette key without category: {}", winner.key),
    }
}

/// パレット線形走査。定義順で最初に見つかった最小距離のエントリが勝つ
/// （同距離タイは先勝ち）。
fn nearest_shade(lab: &Lab) -> &'static ReferenceShade {
    let mut winner = &REFERENCE_SHADES[0];
    let mut winner_distance = lab.distance(&winner.lab);

    for shade in &REFERENCE_SHADES[1..] {
        let distance = lab.distance(&shade.lab);
        if distance < winner_distance {
            winner = shade;
            winner_distance = distance;
        }
    }

    winner
}
