// crates/core/src/counts.rs
//! 行数カウントの値オブジェクト

use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// 1ファイル分の行数内訳
///
/// 不変条件: `total == code + comments + blank`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCounts {
    pub total: usize,
    pub code: usize,
    pub comments: usize,
    pub blank: usize,
}

impl LineCounts {
    pub const ZERO: Self = Self {
        total: 0,
        code: 0,
        comments: 0,
        blank: 0,
    };
}

impl Add for LineCounts {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            total: self.total + rhs.total,
            code: self.code + rhs.code,
            comments: self.comments + rhs.comments,
            blank: self.blank + rhs.blank,
        }
    }
}

impl AddAssign for LineCounts {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
