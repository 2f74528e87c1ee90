// crates/core/src/language.rs
//! 言語レジストリ
//!
//! 拡張子 (小文字・先頭ドット込み) をキーに、コメント構文と言語名を引く
//! 静的テーブル。ここに載っている拡張子の集合がそのまま既定の解析対象です。

/// 言語ごとのコメント構文
///
/// マーカーが `None` の場合、その形式のコメントは認識しない
/// (例: JSON は全く持たず、HTML はブロック形式のみ)。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentSyntax {
    /// 行コメントの開始マーカー (前方一致で判定)
    pub single_line: Option<&'static str>,
    /// ブロックコメントの開始マーカー (部分一致で判定)
    pub block_start: Option<&'static str>,
    /// ブロックコメントの終了マーカー (部分一致で判定)
    pub block_end: Option<&'static str>,
}

impl CommentSyntax {
    /// コメント構文を一切持たないディスクリプタ
    ///
    /// 未登録の拡張子にはこれが適用され、非空行はすべてコードになる。
    pub const NONE: Self = Self {
        single_line: None,
        block_start: None,
        block_end: None,
    };
}

/// レジストリの1エントリ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageEntry {
    pub extension: &'static str,
    pub display_name: &'static str,
    pub syntax: CommentSyntax,
}

const fn entry(
    extension: &'static str,
    display_name: &'static str,
    single_line: Option<&'static str>,
    block_start: Option<&'static str>,
    block_end: Option<&'static str>,
) -> LanguageEntry {
    LanguageEntry {
        extension,
        display_name,
        syntax: CommentSyntax {
            single_line,
            block_start,
            block_end,
        },
    }
}

/// 対応言語テーブル
static REGISTRY: &[LanguageEntry] = &[
    entry(".py", "Python", Some("#"), Some("\"\"\""), Some("\"\"\"")),
    entry(".js", "JavaScript", Some("//"), Some("/*"), Some("*/")),
    entry(".ts", "TypeScript", Some("//"), Some("/*"), Some("*/")),
    entry(".java", "Java", Some("//"), Some("/*"), Some("*/")),
    entry(".cpp", "C++", Some("//"), Some("/*"), Some("*/")),
    entry(".c", "C", Some("//"), Some("/*"), Some("*/")),
    entry(".cs", "C#", Some("//"), Some("/*"), Some("*/")),
    entry(".php", "PHP", Some("//"), Some("/*"), Some("*/")),
    entry(".rb", "Ruby", Some("#"), Some("=begin"), Some("=end")),
    entry(".go", "Go", Some("//"), Some("/*"), Some("*/")),
    entry(".rs", "Rust", Some("//"), Some("/*"), Some("*/")),
    entry(".swift", "Swift", Some("//"), Some("/*"), Some("*/")),
    entry(".kt", "Kotlin", Some("//"), Some("/*"), Some("*/")),
    entry(".scala", "Scala", Some("//"), Some("/*"), Some("*/")),
    entry(".html", "HTML", None, Some("<!--"), Some("-->")),
    entry(".xml", "XML", None, Some("<!--"), Some("-->")),
    entry(".css", "CSS", None, Some("/*"), Some("*/")),
    entry(".scss", "SCSS", Some("//"), Some("/*"), Some("*/")),
    entry(".sass", "Sass", Some("//"), Some("/*"), Some("*/")),
    entry(".less", "Less", Some("//"), Some("/*"), Some("*/")),
    entry(".sql", "SQL", Some("--"), Some("/*"), Some("*/")),
    entry(".sh", "Shell", Some("#"), None, None),
    entry(".bash", "Bash", Some("#"), None, None),
    entry(".zsh", "Zsh", Some("#"), None, None),
    entry(".fish", "Fish", Some("#"), None, None),
    entry(".yaml", "YAML", Some("#"), None, None),
    entry(".yml", "YAML", Some("#"), None, None),
    entry(".toml", "TOML", Some("#"), None, None),
    entry(".ini", "INI", Some(";"), None, None),
    entry(".cfg", "Config", Some(";"), None, None),
    entry(".conf", "Config", Some("#"), None, None),
    entry(".json", "JSON", None, None, None),
    entry(".md", "Markdown", None, None, None),
    entry(".txt", "Text", None, None, None),
];

/// 拡張子からエントリを引く (大文字小文字は区別しない)
pub fn lookup(extension: &str) -> Option<&'static LanguageEntry> {
    let ext = extension.to_ascii_lowercase();
    REGISTRY.iter().find(|entry| entry.extension == ext)
}

/// 対応しているすべての拡張子
pub fn supported_extensions() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|entry| entry.extension)
}
