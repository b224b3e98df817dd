//! Unrecognized input: runs of garbage group under one error node with one
//! diagnostic, and the parser keeps going.

use crate::diagnostics::DiagnosticKind;
use crate::{parse_file, parse_pattern};

#[test]
fn garbage_run_groups_into_one_diagnostic() {
    let parse = parse_file("### ### ###\nimport a.b;\nclass C {}");

    assert_eq!(parse.diagnostics().len(), 1);
    let diagnostic = parse.diagnostics().iter().next().unwrap();
    assert_eq!(diagnostic.kind(), DiagnosticKind::UnexpectedToken);
    assert_eq!(u32::from(diagnostic.range().start()), 0);
    assert_eq!(u32::from(diagnostic.range().end()), 11);

    insta::assert_snapshot!(parse.dump(), @r####"
    JavaFile
      ImportList
        Error
          Garbage "###"
          Garbage "###"
          Garbage "###"
        ImportStatement
          KwImport "import"
          TypeReference
            Ident "a"
            Dot "."
            Ident "b"
          Semicolon ";"
      ClassDeclaration
        KwClass "class"
        Ident "C"
        ClassBody
          LBrace "{"
          RBrace "}"
    "####);
}

#[test]
fn pure_garbage_file_degrades_to_one_error() {
    let parse = parse_file("### ###");

    assert_eq!(parse.diagnostics().len(), 1);
    insta::assert_snapshot!(parse.dump(), @r####"
    JavaFile
      ImportList
      Error
        Garbage "###"
        Garbage "###"
    "####);
}

#[test]
fn garbage_between_declarations() {
    let parse = parse_file("class A {} ### class B {}");

    assert_eq!(parse.diagnostics().len(), 1);
    insta::assert_snapshot!(parse.dump(), @r####"
    JavaFile
      ImportList
      ClassDeclaration
        KwClass "class"
        Ident "A"
        ClassBody
          LBrace "{"
          RBrace "}"
      Error
        Garbage "###"
      ClassDeclaration
        KwClass "class"
        Ident "B"
        ClassBody
          LBrace "{"
          RBrace "}"
    "####);
}

#[test]
fn dangling_modifiers_stay_in_the_tree() {
    let parse = parse_file("public final");

    assert_eq!(parse.diagnostics().len(), 1);
    assert_eq!(
        parse.diagnostics().iter().next().unwrap().kind(),
        DiagnosticKind::ExpectedDeclaration
    );
    insta::assert_snapshot!(parse.dump(), @r#"
    JavaFile
      ImportList
      ModifierList
        KwPublic "public"
        KwFinal "final"
    "#);
}

#[test]
fn trailing_tokens_after_a_pattern() {
    let parse = parse_pattern("String s extra ;");

    assert_eq!(parse.diagnostics().len(), 1);
    assert_eq!(
        parse.diagnostics().iter().next().unwrap().kind(),
        DiagnosticKind::UnexpectedToken
    );
    insta::assert_snapshot!(parse.dump(), @r#"
    Fragment
      TypeTestPattern
        TypeReference
          Ident "String"
        PatternVariable
          Ident "s"
      Error
        Ident "extra"
        Semicolon ";"
    "#);
}

#[test]
fn input_that_is_no_pattern_at_all() {
    let parse = parse_pattern("42 foo");

    let kinds: Vec<DiagnosticKind> = parse.diagnostics().iter().map(|d| d.kind()).collect();
    assert_eq!(
        kinds,
        [DiagnosticKind::ExpectedPattern, DiagnosticKind::UnexpectedToken]
    );
    insta::assert_snapshot!(parse.dump(), @r#"
    Fragment
      Error
        Number "42"
        Ident "foo"
    "#);
}

#[test]
fn empty_pattern_input() {
    let parse = parse_pattern("");
    assert!(parse.diagnostics().is_empty());
    insta::assert_snapshot!(parse.dump(), @"Fragment");
}
