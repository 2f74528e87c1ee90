// crates/core/src/classifier.rs
//! 行分類ステートマシン
//!
//! ブロックコメントの内外を明示的な2状態で保持し、各行を
//! code / comment / blank のいずれかに分類します。
//!
//! 判定規則 (順序が仕様):
//! 1. trim 後に空なら blank。ブロックコメント中でも blank が優先される。
//! 2. `Normal` 状態: ブロック開始マーカーの部分一致 → comment
//!    (同じ行に終了マーカーもあれば1行ブロックとして状態は据え置き)。
//!    次に行コメントマーカーの前方一致 → comment。どちらでもなければ code。
//! 3. `InBlockComment` 状態: 無条件に comment。終了マーカーを含む行で
//!    `Normal` に復帰する。EOF 時に閉じていなくてもエラーにはしない。
//!
//! 行コメントが前方一致、ブロックマーカーが部分一致という非対称は
//! 意図して維持している。揃えると分類結果が変わる。

use crate::counts::LineCounts;
use crate::language::CommentSyntax;

/// スキャナの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    InBlockComment,
}

/// 1行の分類結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Code,
    Comment,
    Blank,
}

/// 行分類器
///
/// ファイル先頭から順に [`step`](LineClassifier::step) を呼ぶことで
/// 状態を遷移させながら各行を分類する。
pub struct LineClassifier {
    syntax: CommentSyntax,
    state: ScanState,
}

impl LineClassifier {
    pub fn new(syntax: CommentSyntax) -> Self {
        Self {
            syntax,
            state: ScanState::Normal,
        }
    }

    /// 1行を分類し、必要なら状態を遷移させる
    pub fn step(&mut self, line: &str) -> LineKind {
        let trimmed = line.trim();

        // 空行はブロックコメント中でも blank (状態は変えない)
        if trimmed.is_empty() {
            return LineKind::Blank;
        }

        match self.state {
            ScanState::Normal => self.step_normal(trimmed),
            ScanState::InBlockComment => self.step_in_block(trimmed),
        }
    }

    fn step_normal(&mut self, trimmed: &str) -> LineKind {
        // ブロック開始は部分一致 (行中のどこに現れても反応する)
        if let Some(start) = self.syntax.block_start {
            if trimmed.contains(start) {
                let closed = self
                    .syntax
                    .block_end
                    .is_some_and(|end| trimmed.contains(end));
                if !closed {
                    self.state = ScanState::InBlockComment;
                }
                return LineKind::Comment;
            }
        }

        // 行コメントは前方一致のみ
        if let Some(marker) = self.syntax.single_line {
            if trimmed.starts_with(marker) {
                return LineKind::Comment;
            }
        }

        LineKind::Code
    }

    fn step_in_block(&mut self, trimmed: &str) -> LineKind {
        if self
            .syntax
            .block_end
            .is_some_and(|end| trimmed.contains(end))
        {
            self.state = ScanState::Normal;
        }
        LineKind::Comment
    }
}

/// 行の列をまとめて分類し、内訳を集計する
pub fn classify_lines<'l, I>(lines: I, syntax: CommentSyntax) -> LineCounts
where
    I: IntoIterator<Item = &'l str>,
{
    let mut classifier = LineClassifier::new(syntax);
    let mut counts = LineCounts::ZERO;

    for line in lines {
        counts.total += 1;
        match classifier.step(line) {
            LineKind::Code => counts.code += 1,
            LineKind::Comment => counts.comments += 1,
            LineKind::Blank => counts.blank += 1,
        }
    }

    counts
}
