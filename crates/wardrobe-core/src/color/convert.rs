//! Color Conversion Pipeline
//!
//! sRGB hex文字列をCIE LABへ変換する3段パイプライン。
//! 各段は状態を持たない自由関数で、個別にテスト可能。
//!
//! hex → linear RGB → CIE XYZ → CIE LAB

use crate::error::{Result, WardrobeError};

/// sRGB→linear変換の閾値（IEC 61966-2-1）
const SRGB_LINEAR_THRESHOLD: f64 = 0.04045;

/// XYZ→LAB変換の閾値（CIE規定）
const LAB_EPSILON: f64 = 0.008856;

/// D65参照白色点（Y=100スケール）
const WHITE_X: f64 = 95.047;
const WHITE_Y: f64 = 100.0;
const WHITE_Z: f64 = 108.883;

/// CIE LAB座標
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    /// LAB空間でのユークリッド距離
    pub fn distance(&self, other: &Lab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }
}

/// 6桁hex文字列（先頭`#`は任意）を8bitチャンネルへパース
///
/// `^#?[0-9a-fA-F]{6}$`に一致しない入力は`InvalidColorFormat`。
/// 3桁短縮形は受け付けない。
pub fn parse_hex(input: &str) -> Result<[u8; 3]> {
    let digits = input.strip_prefix('#').unwrap_or(input);

    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(WardrobeError::InvalidColorFormat {
            input: input.to_string(),
        });
    }

    let mut channels = [0u8; 3];
    hex::decode_to_slice(digits, &mut channels).map_err(|_| WardrobeError::InvalidColorFormat {
        input: input.to_string(),
    })?;

    Ok(channels)
}

/// 8bitチャンネルをガンマ展開してlinear RGBへ
///
/// 255で正規化後、チャンネルごとに標準sRGB伝達関数の逆変換を適用。
pub fn srgb_to_linear(rgb: [u8; 3]) -> [f64; 3] {
    rgb.map(|channel| {
        let c = channel as f64 / 255.0;
        if c > SRGB_LINEAR_THRESHOLD {
            ((c + 0.055) / 1.055).powf(2.4)
        } else {
            c / 12.92
        }
    })
}

/// linear RGBをCIE XYZへ（D65、白でY≈100となる100倍スケール）
pub fn linear_to_xyz(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb;
    [
        (r * 0.4124 + g * 0.3576 + b * 0.1805) * 100.0,
        (r * 0.2126 + g * 0.7152 + b * 0.0722) * 100.0,
        (r * 0.0193 + g * 0.1192 + b * 0.9505) * 100.0,
    ]
}

/// CIE XYZをCIE LABへ（D65参照白色で正規化）
pub fn xyz_to_lab(xyz: [f64; 3]) -> Lab {
    let fx = lab_f(xyz[0] / WHITE_X);
    let fy = lab_f(xyz[1] / WHITE_Y);
    let fz = lab_f(xyz[2] / WHITE_Z);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

/// hex文字列からLABまでの全段変換
pub fn hex_to_lab(input: &str) -> Result<Lab> {
    let rgb = parse_hex(input)?;
    Ok(xyz_to_lab(linear_to_xyz(srgb_to_linear(rgb))))
}
