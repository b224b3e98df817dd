use indoc::indoc;

use crate::{parse_file, parse_pattern};

#[test]
fn every_parse_is_lossless() {
    let sources = [
        "",
        "package a.b; // tail",
        "import a.*;\n\nclass A { broken !! }",
        "### garbage ### /* comment */",
        "class A { class B",
    ];
    for source in sources {
        let parse = parse_file(source);
        assert_eq!(parse.syntax().text().to_string(), source);
    }

    let patterns = ["String s", "(String s", "Point(int x, _) trailing junk"];
    for source in patterns {
        let parse = parse_pattern(source);
        assert_eq!(parse.syntax().text().to_string(), source);
    }
}

#[test]
fn comment_ahead_of_declaration_binds_to_it() {
    let input = indoc! {r#"
        // header
        class A {}
    "#};

    let parse = parse_file(input);
    assert!(parse.diagnostics().is_empty());
    insta::assert_snapshot!(parse.dump_full(), @r#"
    JavaFile
      ImportList
      ClassDeclaration
        LineComment "// header"
        Whitespace "\n"
        KwClass "class"
        Whitespace " "
        Ident "A"
        ClassBody
          Whitespace " "
          LBrace "{"
          RBrace "}"
      Whitespace "\n"
    "#);
}

#[test]
fn elided_import_list_is_zero_width() {
    // The comment between package and class must not be captured by the
    // empty import list; it belongs to the class that owns the next token.
    let input = "package a; // tail\nclass A {}";

    let parse = parse_file(input);
    assert!(parse.diagnostics().is_empty());
    insta::assert_snapshot!(parse.dump_full(), @r#"
    JavaFile
      PackageStatement
        KwPackage "package"
        TypeReference
          Whitespace " "
          Ident "a"
        Semicolon ";"
      ImportList
      ClassDeclaration
        Whitespace " "
        LineComment "// tail"
        Whitespace "\n"
        KwClass "class"
        Whitespace " "
        Ident "A"
        ClassBody
          Whitespace " "
          LBrace "{"
          RBrace "}"
    "#);
}

#[test]
fn trailing_trivia_stays_inside_the_root() {
    let parse = parse_file("class A {}  // done\n");
    assert!(parse.diagnostics().is_empty());
    insta::assert_snapshot!(parse.dump_full(), @r#"
    JavaFile
      ImportList
      ClassDeclaration
        KwClass "class"
        Whitespace " "
        Ident "A"
        ClassBody
          Whitespace " "
          LBrace "{"
          RBrace "}"
      Whitespace "  "
      LineComment "// done"
      Whitespace "\n"
    "#);
}

#[test]
fn block_comments_survive_inside_patterns() {
    let parse = parse_pattern("String /* name */ s");
    assert!(parse.diagnostics().is_empty());
    insta::assert_snapshot!(parse.dump_full(), @r#"
    Fragment
      TypeTestPattern
        TypeReference
          Ident "String"
        PatternVariable
          Whitespace " "
          BlockComment "/* name */"
          Whitespace " "
          Ident "s"
    "#);
}

#[test]
fn comment_only_file() {
    let parse = parse_file("// nothing here\n");
    assert!(parse.diagnostics().is_empty());
    insta::assert_snapshot!(parse.dump_full(), @r#"
    JavaFile
      ImportList
      LineComment "// nothing here"
      Whitespace "\n"
    "#);
}
