//! # Color Module
//!
//! 任意のsRGB色を少数の人間に意味のある基本色カテゴリへ対応付ける。
//!
//! ## 設計目的
//!
//! 衣類の色はカラーピッカーから任意の24bit値で入力されるが、
//! 一覧のフィルタリングに使えるのは「赤」「青」のような粗い分類である。
//! RGB空間のユークリッド距離は知覚的な近さと一致しないため、
//! 知覚的に均等なCIE LAB空間へ変換してから最近傍のパレット色を選ぶ：
//!
//! - **convert**: hex → linear RGB → CIE XYZ → CIE LAB の変換パイプライン
//! - **palette**: 分類基準となる30 shadeの定数パレット
//! - **classifier**: 最近傍探索とカテゴリラベル導出
//!
//! ## 使用例
//!
//! ```rust
//! use wardrobe_core::color::{classify, ColorCategory};
//!
//! assert_eq!(classify("#FF0000").unwrap(), ColorCategory::Red);
//! assert_eq!(classify("191970").unwrap(), ColorCategory::Blue);
//! assert!(classify("#12345").is_err());
//! ```

mod classifier;
mod convert;
mod palette;

// Re-exports
pub use classifier::{classify, ColorCategory, ALL_CATEGORIES};
pub use convert::{hex_to_lab, linear_to_xyz, parse_hex, srgb_to_linear, xyz_to_lab, Lab};
pub use palette::{ReferenceShade, REFERENCE_SHADES};
