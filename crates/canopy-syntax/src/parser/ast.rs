//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors.
//! Cast is infallible for correct `SyntaxKind` - validation happens elsewhere.

use super::cst::{SyntaxKind, SyntaxNode, SyntaxToken};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

ast_node!(JavaFile, JavaFile);
ast_node!(PackageStatement, PackageStatement);
ast_node!(ImportList, ImportList);
ast_node!(ImportStatement, ImportStatement);
ast_node!(ImportStaticStatement, ImportStaticStatement);
ast_node!(ModifierList, ModifierList);
ast_node!(Annotation, Annotation);
ast_node!(TypeReference, TypeReference);
ast_node!(ArrayType, ArrayType);
ast_node!(ClassDeclaration, ClassDeclaration);
ast_node!(ClassBody, ClassBody);
ast_node!(TypeTestPattern, TypeTestPattern);
ast_node!(PatternVariable, PatternVariable);
ast_node!(ParenthesizedPattern, ParenthesizedPattern);
ast_node!(DeconstructionPattern, DeconstructionPattern);
ast_node!(DeconstructionPatternVariable, DeconstructionPatternVariable);
ast_node!(DeconstructionList, DeconstructionList);
ast_node!(UnnamedPattern, UnnamedPattern);

impl JavaFile {
    pub fn package(&self) -> Option<PackageStatement> {
        self.0.children().find_map(PackageStatement::cast)
    }

    pub fn import_list(&self) -> Option<ImportList> {
        self.0.children().find_map(ImportList::cast)
    }

    pub fn declarations(&self) -> impl Iterator<Item = ClassDeclaration> + use<> {
        self.0.children().filter_map(ClassDeclaration::cast)
    }
}

impl PackageStatement {
    pub fn reference(&self) -> Option<TypeReference> {
        self.0.children().find_map(TypeReference::cast)
    }
}

/// An import of either flavor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Import {
    Plain(ImportStatement),
    Static(ImportStaticStatement),
}

impl Import {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::ImportStatement => ImportStatement::cast(node).map(Import::Plain),
            SyntaxKind::ImportStaticStatement => {
                ImportStaticStatement::cast(node).map(Import::Static)
            }
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Import::Plain(n) => n.as_cst(),
            Import::Static(n) => n.as_cst(),
        }
    }

    pub fn is_static(&self) -> bool {
        matches!(self, Import::Static(_))
    }

    pub fn reference(&self) -> Option<TypeReference> {
        self.as_cst().children().find_map(TypeReference::cast)
    }
}

impl ImportList {
    pub fn imports(&self) -> impl Iterator<Item = Import> + use<> {
        self.0.children().filter_map(Import::cast)
    }

    /// True for the zero-width node emitted when a file has no imports.
    pub fn is_empty(&self) -> bool {
        self.imports().next().is_none()
    }
}

impl TypeReference {
    /// The dotted name with trivia stripped: `a.b.c` or `a.b.*`.
    pub fn dotted_name(&self) -> String {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .filter(|t| !t.kind().is_trivia())
            .map(|t| t.text().to_string())
            .collect()
    }
}

impl ClassDeclaration {
    pub fn modifier_list(&self) -> Option<ModifierList> {
        self.0.children().find_map(ModifierList::cast)
    }

    pub fn name(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|t| t.kind() == SyntaxKind::Ident)
    }

    pub fn body(&self) -> Option<ClassBody> {
        self.0.children().find_map(ClassBody::cast)
    }
}

/// Pattern: any node the pattern sub-grammar can produce.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Pattern {
    TypeTest(TypeTestPattern),
    Parenthesized(ParenthesizedPattern),
    Deconstruction(DeconstructionPattern),
    Unnamed(UnnamedPattern),
}

impl Pattern {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::TypeTestPattern => TypeTestPattern::cast(node).map(Pattern::TypeTest),
            SyntaxKind::ParenthesizedPattern => {
                ParenthesizedPattern::cast(node).map(Pattern::Parenthesized)
            }
            SyntaxKind::DeconstructionPattern => {
                DeconstructionPattern::cast(node).map(Pattern::Deconstruction)
            }
            SyntaxKind::UnnamedPattern => UnnamedPattern::cast(node).map(Pattern::Unnamed),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Pattern::TypeTest(n) => n.as_cst(),
            Pattern::Parenthesized(n) => n.as_cst(),
            Pattern::Deconstruction(n) => n.as_cst(),
            Pattern::Unnamed(n) => n.as_cst(),
        }
    }
}

impl TypeTestPattern {
    pub fn type_ref(&self) -> Option<SyntaxNode> {
        self.0
            .children()
            .find(|n| matches!(n.kind(), SyntaxKind::TypeReference | SyntaxKind::ArrayType))
    }

    pub fn variable(&self) -> Option<PatternVariable> {
        self.0.children().find_map(PatternVariable::cast)
    }
}

impl PatternVariable {
    pub fn name(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|t| t.kind() == SyntaxKind::Ident)
    }
}

impl ParenthesizedPattern {
    pub fn inner(&self) -> Option<Pattern> {
        self.0.children().find_map(Pattern::cast)
    }
}

impl DeconstructionPattern {
    pub fn type_ref(&self) -> Option<TypeReference> {
        self.0.children().find_map(TypeReference::cast)
    }

    pub fn component_list(&self) -> Option<DeconstructionList> {
        self.0.children().find_map(DeconstructionList::cast)
    }

    pub fn variable(&self) -> Option<DeconstructionPatternVariable> {
        self.0.children().find_map(DeconstructionPatternVariable::cast)
    }
}

impl DeconstructionPatternVariable {
    pub fn name(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|t| t.kind() == SyntaxKind::Ident)
    }
}

impl DeconstructionList {
    pub fn components(&self) -> impl Iterator<Item = Pattern> + use<> {
        self.0.children().filter_map(Pattern::cast)
    }
}
