//! Syntax kinds for Java-flavored sources.
//!
//! `SyntaxKind` serves dual roles: token kinds (from lexer) and node kinds (from parser).
//! Logos derives token recognition; node kinds lack token/regex attributes.
//! `JavaLang` implements Rowan's `Language` trait for tree construction.
//!
//! Contextual keywords (`record`, `when`, `sealed`, ...) are lexed as plain
//! identifiers and recognized by text where the grammar needs them, so they
//! remain usable as ordinary names.

#![allow(dead_code)] // Some items are for future use

use logos::Logos;
use rowan::Language;

/// All token and node kinds. Tokens first, then nodes, then `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
///
/// Token discriminants must stay below 64 for `TokenSet`; node kinds are free
/// to go beyond.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("(")]
    LParen = 0,

    #[token(")")]
    RParen,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("<")]
    Lt,

    #[token(">")]
    Gt,

    #[token(";")]
    Semicolon,

    #[token(",")]
    Comma,

    #[token(".")]
    Dot,

    #[token("@")]
    At,

    /// `*` stands alone so `import a.b.*;` stays structural; compound
    /// operators containing `*` fold into `Operator`.
    #[token("*", priority = 3)]
    Star,

    /// Lone `_` (unnamed pattern). `_x` and friends lex as `Ident`.
    #[token("_", priority = 3)]
    Underscore,

    /// Compound operator soup inside bodies (`&&`, `->`, `::`, `+=`, ...).
    /// `<` and `>` are excluded so generic argument lists stay balanced.
    #[regex(r"[!%^&*+=|?:/~-]+")]
    Operator,

    #[regex(r"[0-9][0-9a-zA-Z_$]*(\.[0-9][0-9a-zA-Z_$]*)?")]
    Number,

    #[regex(r#""(?:[^"\\\n]|\\.)*""#)]
    StringLiteral,

    #[regex(r"'(?:[^'\\\n]|\\.)*'")]
    CharLiteral,

    #[token("package")]
    KwPackage,

    #[token("import")]
    KwImport,

    #[token("class")]
    KwClass,

    #[token("interface")]
    KwInterface,

    #[token("enum")]
    KwEnum,

    #[token("public")]
    KwPublic,

    #[token("protected")]
    KwProtected,

    #[token("private")]
    KwPrivate,

    #[token("static")]
    KwStatic,

    #[token("final")]
    KwFinal,

    #[token("abstract")]
    KwAbstract,

    #[token("native")]
    KwNative,

    #[token("synchronized")]
    KwSynchronized,

    #[token("transient")]
    KwTransient,

    #[token("volatile")]
    KwVolatile,

    #[token("strictfp")]
    KwStrictfp,

    #[token("default")]
    KwDefault,

    #[token("boolean")]
    KwBoolean,

    #[token("byte")]
    KwByte,

    #[token("char")]
    KwChar,

    #[token("short")]
    KwShort,

    #[token("int")]
    KwInt,

    #[token("long")]
    KwLong,

    #[token("float")]
    KwFloat,

    #[token("double")]
    KwDouble,

    #[token("void")]
    KwVoid,

    /// Identifier. Defined after keywords so they take precedence.
    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Ident,

    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*[^*]*\*+(?:[^/*][^*]*\*+)*/")]
    BlockComment,

    /// Coalesced unrecognized characters
    Garbage,
    Error,

    // --- Node kinds (non-terminals) ---
    JavaFile,
    PackageStatement,
    ImportList,
    ImportStatement,
    ImportStaticStatement,
    ModifierList,
    Annotation,
    TypeReference,
    TypeArgumentList,
    ArrayType,
    ClassDeclaration,
    ClassBody,
    TypeTestPattern,
    PatternVariable,
    ParenthesizedPattern,
    DeconstructionPattern,
    DeconstructionPatternVariable,
    DeconstructionList,
    UnnamedPattern,
    /// Root for the standalone pattern entry point.
    Fragment,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | LineComment | BlockComment)
    }

    #[inline]
    pub fn is_token(self) -> bool {
        (self as u16) <= Error as u16
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JavaLang {}

impl Language for JavaLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<JavaLang>;
pub type SyntaxToken = rowan::SyntaxToken<JavaLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

/// 64-bit bitset of token `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    /// Creates an empty token set.
    pub const EMPTY: TokenSet = TokenSet(0);

    /// Panics at compile time if any kind's discriminant >= 64.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn single(kind: SyntaxKind) -> Self {
        let kind = kind as u16;
        assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
        TokenSet(1 << kind)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 64 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        for i in 0..64u16 {
            if self.0 & (1 << i) != 0 && i < __LAST as u16 {
                let kind: SyntaxKind = unsafe { std::mem::transmute(i) };
                list.entry(&kind);
            }
        }
        list.finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    pub const TRIVIA: TokenSet = TokenSet::new(&[Whitespace, LineComment, BlockComment]);

    /// Keyword modifiers legal on declarations.
    pub const MODIFIER_KEYWORDS: TokenSet = TokenSet::new(&[
        KwPublic,
        KwProtected,
        KwPrivate,
        KwStatic,
        KwFinal,
        KwAbstract,
        KwNative,
        KwSynchronized,
        KwTransient,
        KwVolatile,
        KwStrictfp,
        KwDefault,
    ]);

    /// The only keyword modifier legal on a pattern.
    pub const PATTERN_MODIFIERS: TokenSet = TokenSet::new(&[KwFinal]);

    pub const PRIMITIVE_TYPES: TokenSet = TokenSet::new(&[
        KwBoolean, KwByte, KwChar, KwShort, KwInt, KwLong, KwFloat, KwDouble, KwVoid,
    ]);

    /// FIRST set of a type reference.
    pub const TYPE_FIRST: TokenSet = PRIMITIVE_TYPES.union(TokenSet::single(Ident));

    pub const DECLARATION_KEYWORDS: TokenSet = TokenSet::new(&[KwClass, KwInterface, KwEnum]);
}
