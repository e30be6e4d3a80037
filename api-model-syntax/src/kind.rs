//! Node kinds of the declaration syntax tree.

use std::fmt;

/// Kind tag carried by every syntax tree node.
///
/// Only the constrained declaration subset of the specification sources is
/// represented: statements, declarations, members, names and type expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    // ==========================================================================
    // Structure
    // ==========================================================================
    SourceFile,
    /// Ordered member list inside an interface, class or enum body
    SyntaxList,
    ModuleBlock,

    // ==========================================================================
    // Statements and declarations
    // ==========================================================================
    ImportDeclaration,
    InterfaceDeclaration,
    EnumDeclaration,
    ClassDeclaration,
    TypeAliasDeclaration,
    ModuleDeclaration,
    HeritageClause,
    ExpressionWithTypeArguments,
    TypeParameter,

    // ==========================================================================
    // Members
    // ==========================================================================
    PropertySignature,
    PropertyDeclaration,
    EnumMember,

    // ==========================================================================
    // Names and literals
    // ==========================================================================
    Identifier,
    QualifiedName,
    StringLiteral,
    NumericLiteral,

    // ==========================================================================
    // Type expressions
    // ==========================================================================
    TypeReference,
    ArrayType,
    UnionType,
    IntersectionType,
    TypeLiteral,
    TupleType,
    ParenthesizedType,
    LiteralType,

    // ==========================================================================
    // Keyword types
    // ==========================================================================
    StringKeyword,
    BooleanKeyword,
    AnyKeyword,
    NumberKeyword,
    ObjectKeyword,
    UnknownKeyword,
    NeverKeyword,
    VoidKeyword,
    NullKeyword,
    UndefinedKeyword,
}

impl SyntaxKind {
    /// Keyword type kind for a bare type keyword, if `word` is one.
    pub fn from_type_keyword(word: &str) -> Option<SyntaxKind> {
        let kind = match word {
            "string" => SyntaxKind::StringKeyword,
            "boolean" => SyntaxKind::BooleanKeyword,
            "any" => SyntaxKind::AnyKeyword,
            "number" => SyntaxKind::NumberKeyword,
            "object" => SyntaxKind::ObjectKeyword,
            "unknown" => SyntaxKind::UnknownKeyword,
            "never" => SyntaxKind::NeverKeyword,
            "void" => SyntaxKind::VoidKeyword,
            "null" => SyntaxKind::NullKeyword,
            "undefined" => SyntaxKind::UndefinedKeyword,
            _ => return None,
        };
        Some(kind)
    }

    /// Kinds that can carry the name of a declaration or member.
    pub fn is_name(self) -> bool {
        matches!(
            self,
            SyntaxKind::Identifier | SyntaxKind::StringLiteral | SyntaxKind::NumericLiteral
        )
    }

    /// Kinds that introduce a named symbol.
    pub fn is_declaration(self) -> bool {
        matches!(
            self,
            SyntaxKind::InterfaceDeclaration
                | SyntaxKind::EnumDeclaration
                | SyntaxKind::ClassDeclaration
                | SyntaxKind::TypeAliasDeclaration
                | SyntaxKind::ModuleDeclaration
                | SyntaxKind::PropertySignature
                | SyntaxKind::PropertyDeclaration
                | SyntaxKind::EnumMember
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SyntaxKind::SourceFile => "SourceFile",
            SyntaxKind::SyntaxList => "SyntaxList",
            SyntaxKind::ModuleBlock => "ModuleBlock",
            SyntaxKind::ImportDeclaration => "ImportDeclaration",
            SyntaxKind::InterfaceDeclaration => "InterfaceDeclaration",
            SyntaxKind::EnumDeclaration => "EnumDeclaration",
            SyntaxKind::ClassDeclaration => "ClassDeclaration",
            SyntaxKind::TypeAliasDeclaration => "TypeAliasDeclaration",
            SyntaxKind::ModuleDeclaration => "ModuleDeclaration",
            SyntaxKind::HeritageClause => "HeritageClause",
            SyntaxKind::ExpressionWithTypeArguments => "ExpressionWithTypeArguments",
            SyntaxKind::TypeParameter => "TypeParameter",
            SyntaxKind::PropertySignature => "PropertySignature",
            SyntaxKind::PropertyDeclaration => "PropertyDeclaration",
            SyntaxKind::EnumMember => "EnumMember",
            SyntaxKind::Identifier => "Identifier",
            SyntaxKind::QualifiedName => "QualifiedName",
            SyntaxKind::StringLiteral => "StringLiteral",
            SyntaxKind::NumericLiteral => "NumericLiteral",
            SyntaxKind::TypeReference => "TypeReference",
            SyntaxKind::ArrayType => "ArrayType",
            SyntaxKind::UnionType => "UnionType",
            SyntaxKind::IntersectionType => "IntersectionType",
            SyntaxKind::TypeLiteral => "TypeLiteral",
            SyntaxKind::TupleType => "TupleType",
            SyntaxKind::ParenthesizedType => "ParenthesizedType",
            SyntaxKind::LiteralType => "LiteralType",
            SyntaxKind::StringKeyword => "StringKeyword",
            SyntaxKind::BooleanKeyword => "BooleanKeyword",
            SyntaxKind::AnyKeyword => "AnyKeyword",
            SyntaxKind::NumberKeyword => "NumberKeyword",
            SyntaxKind::ObjectKeyword => "ObjectKeyword",
            SyntaxKind::UnknownKeyword => "UnknownKeyword",
            SyntaxKind::NeverKeyword => "NeverKeyword",
            SyntaxKind::VoidKeyword => "VoidKeyword",
            SyntaxKind::NullKeyword => "NullKeyword",
            SyntaxKind::UndefinedKeyword => "UndefinedKeyword",
        }
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
