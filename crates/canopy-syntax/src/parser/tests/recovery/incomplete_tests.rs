//! Truncated constructs: the missing token is reported, never invented, and
//! the surrounding node still closes.

use crate::diagnostics::DiagnosticKind;
use crate::{parse_file, parse_pattern};

fn kinds(parse: &crate::parser::Parse) -> Vec<DiagnosticKind> {
    parse.diagnostics().iter().map(|d| d.kind()).collect()
}

#[test]
fn missing_semicolon_after_package() {
    let parse = parse_file("package a\nclass A {}");

    assert_eq!(kinds(&parse), [DiagnosticKind::ExpectedSemicolon]);
    insta::assert_snapshot!(parse.dump(), @r#"
    JavaFile
      PackageStatement
        KwPackage "package"
        TypeReference
          Ident "a"
      ImportList
      ClassDeclaration
        KwClass "class"
        Ident "A"
        ClassBody
          LBrace "{"
          RBrace "}"
    "#);
}

#[test]
fn missing_semicolon_after_import() {
    let parse = parse_file("import a.b\nimport c.d;");

    assert_eq!(kinds(&parse), [DiagnosticKind::ExpectedSemicolon]);
    let dump = parse.dump();
    assert_eq!(dump.matches("ImportStatement").count(), 2, "{dump}");
}

#[test]
fn import_without_a_name() {
    let parse = parse_file("import ;");

    assert_eq!(kinds(&parse), [DiagnosticKind::ExpectedIdentifier]);
    insta::assert_snapshot!(parse.dump(), @r#"
    JavaFile
      ImportList
        ImportStatement
          KwImport "import"
          Semicolon ";"
    "#);
}

#[test]
fn qualified_name_with_a_trailing_dot() {
    let parse = parse_file("import a.;");

    assert_eq!(kinds(&parse), [DiagnosticKind::ExpectedIdentifier]);
    insta::assert_snapshot!(parse.dump(), @r#"
    JavaFile
      ImportList
        ImportStatement
          KwImport "import"
          TypeReference
            Ident "a"
            Dot "."
          Semicolon ";"
    "#);
}

#[test]
fn unclosed_class_body() {
    let parse = parse_file("class A {");

    assert_eq!(kinds(&parse), [DiagnosticKind::UnclosedBody]);
    insta::assert_snapshot!(parse.dump(), @r#"
    JavaFile
      ImportList
      ClassDeclaration
        KwClass "class"
        Ident "A"
        ClassBody
          LBrace "{"
    "#);
}

#[test]
fn unclosed_body_swallows_the_rest_of_the_file() {
    let parse = parse_file("class A { class B");

    assert_eq!(kinds(&parse), [DiagnosticKind::UnclosedBody]);
    insta::assert_snapshot!(parse.dump(), @r#"
    JavaFile
      ImportList
      ClassDeclaration
        KwClass "class"
        Ident "A"
        ClassBody
          LBrace "{"
          KwClass "class"
          Ident "B"
    "#);
}

#[test]
fn declaration_without_a_body() {
    let parse = parse_file("class A");

    assert_eq!(kinds(&parse), [DiagnosticKind::ExpectedLBrace]);
    insta::assert_snapshot!(parse.dump(), @r#"
    JavaFile
      ImportList
      ClassDeclaration
        KwClass "class"
        Ident "A"
    "#);
}

#[test]
fn missing_rparen_in_parenthesized_pattern() {
    let parse = parse_pattern("(String s");

    assert_eq!(kinds(&parse), [DiagnosticKind::ExpectedRParen]);
    insta::assert_snapshot!(parse.dump(), @r#"
    Fragment
      ParenthesizedPattern
        LParen "("
        TypeTestPattern
          TypeReference
            Ident "String"
          PatternVariable
            Ident "s"
    "#);
}

#[test]
fn missing_comma_between_components() {
    let parse = parse_pattern("Point(int x int y)");

    assert_eq!(kinds(&parse), [DiagnosticKind::ExpectedComma]);
    let dump = parse.dump();
    assert_eq!(dump.matches("TypeTestPattern").count(), 2, "{dump}");
}

#[test]
fn missing_rparen_in_deconstruction() {
    let parse = parse_pattern("Point(int x");

    assert_eq!(kinds(&parse), [DiagnosticKind::ExpectedRParen]);
    insta::assert_snapshot!(parse.dump(), @r#"
    Fragment
      DeconstructionPattern
        TypeReference
          Ident "Point"
        DeconstructionList
          LParen "("
          TypeTestPattern
            TypeReference
              KwInt "int"
            PatternVariable
              Ident "x"
    "#);
}

#[test]
fn component_that_is_only_a_type() {
    let parse = parse_pattern("Point(int)");

    assert_eq!(kinds(&parse), [DiagnosticKind::ExpectedPattern]);
    insta::assert_snapshot!(parse.dump(), @r#"
    Fragment
      DeconstructionPattern
        TypeReference
          Ident "Point"
        DeconstructionList
          LParen "("
          TypeReference
            KwInt "int"
          RParen ")"
    "#);
}

#[test]
fn component_that_is_nothing_at_all() {
    let parse = parse_pattern("Point(42)");

    assert_eq!(kinds(&parse), [DiagnosticKind::ExpectedPattern]);
    insta::assert_snapshot!(parse.dump(), @r#"
    Fragment
      DeconstructionPattern
        TypeReference
          Ident "Point"
        DeconstructionList
          LParen "("
          Error
            Number "42"
          RParen ")"
    "#);
}
