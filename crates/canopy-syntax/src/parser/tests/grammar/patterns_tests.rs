use crate::parse_pattern;
use crate::parser::Parser;
use crate::parser::lexer::lex;

/// Runs the feasibility probe alone, without committing a parse.
fn probe(source: &str) -> bool {
    let mut p = Parser::new(source, lex(source));
    p.is_pattern()
}

#[test]
fn probe_table() {
    assert!(probe("String s"));
    assert!(probe("final String s"));
    assert!(probe("(String s)"));
    assert!(probe("((String s))"));
    assert!(probe("Point(int x, int y)"));
    assert!(probe("int[] xs"));
    assert!(probe("List<String> xs"));
    assert!(probe("a.b.Point(int x)"));

    // A type alone is a reference, not a pattern.
    assert!(!probe("String"));
    // A modifier forbids the deconstruction reading.
    assert!(!probe("final Point(int x, int y)"));
    assert!(!probe("42"));
    assert!(!probe("_"));
    assert!(!probe(""));
}

#[test]
fn type_test_pattern() {
    let parse = parse_pattern("String s");
    assert!(parse.diagnostics().is_empty());
    insta::assert_snapshot!(parse.dump(), @r#"
    Fragment
      TypeTestPattern
        TypeReference
          Ident "String"
        PatternVariable
          Ident "s"
    "#);
}

#[test]
fn type_test_with_modifier() {
    let parse = parse_pattern("final String s");
    assert!(parse.diagnostics().is_empty());
    insta::assert_snapshot!(parse.dump(), @r#"
    Fragment
      TypeTestPattern
        ModifierList
          KwFinal "final"
        TypeReference
          Ident "String"
        PatternVariable
          Ident "s"
    "#);
}

#[test]
fn array_type_test() {
    let parse = parse_pattern("int[][] grid");
    assert!(parse.diagnostics().is_empty());
    insta::assert_snapshot!(parse.dump(), @r#"
    Fragment
      TypeTestPattern
        ArrayType
          ArrayType
            TypeReference
              KwInt "int"
            LBracket "["
            RBracket "]"
          LBracket "["
          RBracket "]"
        PatternVariable
          Ident "grid"
    "#);
}

#[test]
fn generic_type_test() {
    let parse = parse_pattern("Map<String, List<Integer>> m");
    assert!(parse.diagnostics().is_empty());
    insta::assert_snapshot!(parse.dump(), @r#"
    Fragment
      TypeTestPattern
        TypeReference
          Ident "Map"
          TypeArgumentList
            Lt "<"
            Ident "String"
            Comma ","
            Ident "List"
            Lt "<"
            Ident "Integer"
            Gt ">"
            Gt ">"
        PatternVariable
          Ident "m"
    "#);
}

#[test]
fn parenthesized_pattern() {
    let parse = parse_pattern("(String s)");
    assert!(parse.diagnostics().is_empty());
    insta::assert_snapshot!(parse.dump(), @r#"
    Fragment
      ParenthesizedPattern
        LParen "("
        TypeTestPattern
          TypeReference
            Ident "String"
          PatternVariable
            Ident "s"
        RParen ")"
    "#);
}

#[test]
fn deconstruction_pattern() {
    let parse = parse_pattern("Point(int x, int y)");
    assert!(parse.diagnostics().is_empty());
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
          Comma ","
          TypeTestPattern
            TypeReference
              KwInt "int"
            PatternVariable
              Ident "y"
          RParen ")"
    "#);
}

#[test]
fn nested_deconstruction_with_wildcards() {
    let parse = parse_pattern("Line(Point(int x, _), _)");
    assert!(parse.diagnostics().is_empty());
    insta::assert_snapshot!(parse.dump(), @r#"
    Fragment
      DeconstructionPattern
        TypeReference
          Ident "Line"
        DeconstructionList
          LParen "("
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
              Comma ","
              UnnamedPattern
                Underscore "_"
              RParen ")"
          Comma ","
          UnnamedPattern
            Underscore "_"
          RParen ")"
    "#);
}

#[test]
fn deconstruction_binds_a_trailing_name() {
    let parse = parse_pattern("Point(int x, int y) p");
    assert!(parse.diagnostics().is_empty());
    let dump = parse.dump();
    assert!(dump.contains("DeconstructionPatternVariable"), "{dump}");
}

#[test]
fn type_test_binds_a_name_spelled_when() {
    let parse = parse_pattern("String when");
    assert!(parse.diagnostics().is_empty());
    insta::assert_snapshot!(parse.dump(), @r#"
    Fragment
      TypeTestPattern
        TypeReference
          Ident "String"
        PatternVariable
          Ident "when"
    "#);
}

#[test]
fn deconstruction_leaves_when_for_the_guard() {
    let parse = parse_pattern("Point(int x) when");
    assert_eq!(parse.diagnostics().len(), 1);
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
          RParen ")"
      Error
        Ident "when"
    "#);
}

#[test]
fn qualified_generic_deconstruction() {
    let parse = parse_pattern("java.util.Map.Entry<K, V>(var k, var v)");
    // `var` is a plain identifier here, so each component reads as a
    // type-test pattern with `var` as the type.
    assert!(parse.diagnostics().is_empty());
    let dump = parse.dump();
    assert!(dump.contains("DeconstructionPattern"), "{dump}");
    assert_eq!(dump.matches("TypeTestPattern").count(), 2, "{dump}");
}
