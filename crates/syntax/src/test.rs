use crate::{
  ast::{ArrayAttribute, Attribute, DeclKind, ExpKind, ExpType, NodeKind, StmtKind, TypeKind},
  *,
};
use indoc::indoc;

/// Indent a listing by one level, as the top level of a printed forest is
fn top_level(listing: &str) -> String {
  listing.lines().map(|line| format!("  {line}\n")).collect()
}

fn kinds_and_lexemes(source: &str) -> Vec<(TokenKind, String)> {
  let mut context = ScanContext::new();
  tokenise(source, &mut context)
    .map(|token| (token.kind, token.lexeme.to_owned()))
    .collect()
}

fn full_form(kind: TokenKind, lexeme: &str) -> String {
  let mut output = String::new();
  print_token(&mut output, kind, lexeme).unwrap();
  output
}

fn symbol_form(kind: TokenKind) -> String {
  let mut output = String::new();
  print_operator_symbol(&mut output, kind).unwrap();
  output
}

fn context_at(line: u32) -> ScanContext {
  let mut context = ScanContext::new();
  context.set_line(line);
  context
}

fn declaration(forest: &mut Forest, kind: DeclKind, attribute: Attribute) -> NodeIdx {
  let node = forest.new_declaration(kind, &context_at(1)).unwrap();
  forest[node].attribute = attribute;
  node
}

fn expression(forest: &mut Forest, kind: ExpKind, attribute: Attribute) -> NodeIdx {
  let node = forest.new_expression(kind, &context_at(1)).unwrap();
  forest[node].attribute = attribute;
  node
}

/// The forest for `if (x <= 10) { return x; }`
fn if_statement_forest() -> Forest {
  let context = context_at(1);
  let mut forest = Forest::new();

  let if_ = forest.new_statement(StmtKind::If, &context).unwrap();
  let test = expression(&mut forest, ExpKind::Op, Attribute::Operator(TokenKind::LessEqual));
  let x = expression(&mut forest, ExpKind::Id, Attribute::Name("x".into()));
  let ten = expression(&mut forest, ExpKind::Const, Attribute::Value(10));
  let body = forest.new_statement(StmtKind::Compound, &context).unwrap();
  let return_ = forest.new_statement(StmtKind::Return, &context).unwrap();
  let returned = expression(&mut forest, ExpKind::Id, Attribute::Name("x".into()));

  forest.set_child(test, 0, x).unwrap();
  forest.set_child(test, 1, ten).unwrap();
  forest.set_child(return_, 0, returned).unwrap();
  forest.set_child(body, 1, return_).unwrap();
  forest.set_child(if_, 0, test).unwrap();
  forest.set_child(if_, 1, body).unwrap();
  forest.set_root(if_).unwrap();

  forest
}

#[test]
fn every_kind_has_a_label_and_symbol_form() {
  for kind in TokenKind::ALL {
    assert!(!kind.label().is_empty());
    assert_eq!(kind.to_string(), kind.label());

    let symbol = symbol_form(kind);
    assert!(symbol.ends_with('\n'));
    assert!(!symbol.trim().is_empty());
  }
}

#[test]
fn labels_are_distinct() {
  let mut labels: Vec<_> = TokenKind::ALL.iter().map(|kind| kind.label()).collect();
  labels.sort_unstable();
  labels.dedup();

  assert_eq!(labels.len(), TokenKind::ALL.len());
}

#[test]
fn codes_map_back_to_kinds() {
  assert_eq!(TokenKind::EndOfFile.code(), 0);
  for kind in TokenKind::ALL {
    assert_eq!(TokenKind::from_code(i32::from(kind.code())), Some(kind));
  }

  assert_eq!(TokenKind::from_code(-1), None);
  assert_eq!(TokenKind::from_code(33), None);
}

#[test]
fn full_form_is_fixed_width() {
  assert_eq!(full_form(TokenKind::If, "if"), format!("IF{:18}if{:18}\n", "", ""));
  assert_eq!(
    full_form(TokenKind::LessEqual, "<="),
    format!("{:<20}{:<20}\n", "LTE", "<=")
  );
  assert_eq!(
    full_form(TokenKind::EndOfFile, ""),
    format!("{:<20}{:<20}\n", "EOF", "")
  );
  assert_eq!(
    full_form(TokenKind::CommentError, "/*"),
    format!("{:<20}{:<20}\n", "COMMENT_ERROR", "/*")
  );
}

#[test]
fn unmapped_code_names_the_code() {
  let mut output = String::new();
  print_token_code(&mut output, 99, "x").unwrap();
  print_token_code(&mut output, -4, "y").unwrap();
  print_token_code(&mut output, 3, "if").unwrap();

  let expected = format!("Unknown token: 99\nUnknown token: -4\n{:<20}{:<20}\n", "IF", "if");
  assert_eq!(output, expected);
}

#[test]
fn symbol_form_of_operators() {
  assert_eq!(symbol_form(TokenKind::Less), "<\n");
  assert_eq!(symbol_form(TokenKind::LessEqual), "<=\n");
  assert_eq!(symbol_form(TokenKind::Greater), ">\n");
  assert_eq!(symbol_form(TokenKind::GreaterEqual), ">=\n");
  assert_eq!(symbol_form(TokenKind::EqualEqual), "==\n");
  assert_eq!(symbol_form(TokenKind::BangEqual), "!=\n");
  assert_eq!(symbol_form(TokenKind::Plus), "+\n");
  assert_eq!(symbol_form(TokenKind::Minus), "-\n");
  assert_eq!(symbol_form(TokenKind::Star), "*\n");
  assert_eq!(symbol_form(TokenKind::Slash), "/\n");
  assert_eq!(symbol_form(TokenKind::Equal), "=\n");
}

#[test]
fn symbol_form_of_non_operators_is_marked() {
  for kind in [
    TokenKind::If,
    TokenKind::Identifier,
    TokenKind::LeftParen,
    TokenKind::Semicolon,
    TokenKind::EndOfFile,
    TokenKind::Error,
  ] {
    assert!(!kind.is_operator());
    assert_eq!(symbol_form(kind), "Not assigned OP token\n");
  }
}

#[test]
fn keywords() {
  for keyword in ["if", "else", "return", "while", "for", "int", "void", "char"] {
    let kind = TokenKind::keyword(keyword).unwrap();
    assert!(kind.is_keyword());
    assert_eq!(kind.label(), keyword.to_uppercase());
  }

  assert_eq!(TokenKind::keyword("iff"), None);
  assert_eq!(TokenKind::keyword("Int"), None);
}

#[test]
fn tokenises_if_statement_in_order() {
  let tokens = kinds_and_lexemes("if (x <= 10) { return x; }");
  let expected = [
    (TokenKind::If, "if"),
    (TokenKind::LeftParen, "("),
    (TokenKind::Identifier, "x"),
    (TokenKind::LessEqual, "<="),
    (TokenKind::Number, "10"),
    (TokenKind::RightParen, ")"),
    (TokenKind::LeftCurly, "{"),
    (TokenKind::Return, "return"),
    (TokenKind::Identifier, "x"),
    (TokenKind::Semicolon, ";"),
    (TokenKind::RightCurly, "}"),
    (TokenKind::EndOfFile, ""),
  ];

  let expected: Vec<_> = expected
    .iter()
    .map(|(kind, lexeme)| (*kind, (*lexeme).to_owned()))
    .collect();
  assert_eq!(tokens, expected);
}

#[test]
fn tokenises_operators_and_punctuation() {
  let kinds: Vec<_> = kinds_and_lexemes("= == != < <= > >= + - * / ( ) [ ] { } ; : ,")
    .into_iter()
    .map(|(kind, _)| kind)
    .collect();

  let mut expected = TokenKind::ALL[usize::from(TokenKind::Equal.code())..].to_vec();
  expected.push(TokenKind::EndOfFile);
  assert_eq!(kinds, expected);
}

#[test]
fn identifiers_are_letters_only() {
  let tokens = kinds_and_lexemes("count1 void");
  assert_eq!(tokens, vec![
    (TokenKind::Identifier, "count".to_owned()),
    (TokenKind::Number, "1".to_owned()),
    (TokenKind::Void, "void".to_owned()),
    (TokenKind::EndOfFile, String::new()),
  ]);
}

#[test]
fn tracks_line_numbers() {
  let mut context = ScanContext::new();
  let lines: Vec<_> = tokenise("int x;\n\nvoid\n  y;\n", &mut context)
    .map(|token| (token.kind, token.line))
    .collect();

  assert_eq!(lines, vec![
    (TokenKind::Int, 1),
    (TokenKind::Identifier, 1),
    (TokenKind::Semicolon, 1),
    (TokenKind::Void, 3),
    (TokenKind::Identifier, 4),
    (TokenKind::Semicolon, 4),
    (TokenKind::EndOfFile, 4),
  ]);
  assert_eq!(context.line(), 4);
  assert!(!context.has_error());
}

#[test]
fn empty_source_ends_immediately() {
  let mut context = ScanContext::new();
  let mut tokeniser = Tokeniser::from("");

  let token = tokeniser.next_token(&mut context);
  assert_eq!(token, Token::new(TokenKind::EndOfFile, "", 0));

  // keeps producing the end of file
  assert_eq!(tokeniser.next_token(&mut context).kind, TokenKind::EndOfFile);
  assert_eq!(tokeniser.next_token(&mut context).kind, TokenKind::EndOfFile);
}

#[test]
fn comments_are_skipped() {
  let mut context = ScanContext::new();
  let tokens: Vec<_> = tokenise("x /* a\ncomment\n*/ y / z", &mut context)
    .map(|token| (token.kind, token.lexeme, token.line))
    .collect();

  assert_eq!(tokens, vec![
    (TokenKind::Identifier, "x", 1),
    (TokenKind::Identifier, "y", 3),
    (TokenKind::Slash, "/", 3),
    (TokenKind::Identifier, "z", 3),
    (TokenKind::EndOfFile, "", 3),
  ]);
  assert!(!context.has_error());
}

#[test]
fn unterminated_comment_is_an_error() {
  let mut context = ScanContext::new();
  let tokens: Vec<_> = tokenise("x\n/* never closed\n", &mut context)
    .map(|token| (token.kind, token.lexeme))
    .collect();

  assert_eq!(tokens, vec![
    (TokenKind::Identifier, "x"),
    (TokenKind::CommentError, "/*"),
    (TokenKind::EndOfFile, ""),
  ]);
  assert!(context.has_error());
}

#[test]
fn unknown_characters_are_errors() {
  let mut context = ScanContext::new();
  let tokens: Vec<_> = tokenise("a $ ! 🤗 b", &mut context)
    .map(|token| (token.kind, token.lexeme))
    .collect();

  assert_eq!(tokens, vec![
    (TokenKind::Identifier, "a"),
    (TokenKind::Error, "$"),
    (TokenKind::Error, "!"),
    (TokenKind::Error, "🤗"),
    (TokenKind::Identifier, "b"),
    (TokenKind::EndOfFile, ""),
  ]);
  assert!(context.has_error());
}

#[test]
fn error_flag_stays_raised() {
  let mut context = ScanContext::new();
  assert!(!context.has_error());

  context.flag_error();
  context.flag_error();
  context.set_line(7);
  assert!(context.has_error());
  assert_eq!(context.line(), 7);
}

#[test]
fn new_nodes_are_empty_and_stamped_with_line() {
  let mut forest = Forest::new();
  let context = context_at(12);

  let nodes = [
    forest.new_statement(StmtKind::Loop, &context).unwrap(),
    forest.new_expression(ExpKind::Call, &context).unwrap(),
    forest.new_declaration(DeclKind::ArrParam, &context).unwrap(),
    forest.new_type(TypeKind::TypeName, &context).unwrap(),
  ];

  for node in nodes {
    let node = &forest[node];
    assert_eq!(node.children(), &[None, None, None]);
    assert_eq!(node.sibling(), None);
    assert_eq!(node.line(), 12);
    assert_eq!(node.attribute, Attribute::Empty);
    assert_eq!(node.exp_type, ExpType::Void);
  }

  assert_eq!(forest[nodes[0]].kind(), NodeKind::Statement(StmtKind::Loop));
  assert_eq!(forest[nodes[1]].kind(), NodeKind::Expression(ExpKind::Call));
  assert_eq!(forest[nodes[2]].kind(), NodeKind::Declaration(DeclKind::ArrParam));
  assert_eq!(forest[nodes[3]].kind(), NodeKind::Type(TypeKind::TypeName));
  assert_eq!(forest.len(), 4);
  assert_eq!(forest.root(), None);
}

#[test]
fn line_is_read_when_node_is_created() {
  let mut forest = Forest::new();
  let mut context = context_at(1);

  let first = forest.new_statement(StmtKind::Return, &context).unwrap();
  context.set_line(5);
  let second = forest.new_statement(StmtKind::Return, &context).unwrap();

  assert_eq!(forest[first].line(), 1);
  assert_eq!(forest[second].line(), 5);
  assert_ne!(first, second);
}

#[test]
fn copy_string_of_nothing_is_nothing() {
  assert_eq!(copy_string(None, &ScanContext::new()), Ok(None));
}

#[test]
fn copy_string_does_not_alias() {
  let mut original = String::from("count");
  let mut copy = copy_string(Some(original.as_str()), &ScanContext::new())
    .unwrap()
    .unwrap();

  assert_eq!(copy, original);
  assert_ne!(copy.as_ptr(), original.as_ptr());

  copy.push_str("er");
  original.make_ascii_uppercase();
  assert_eq!(copy, "counter");
  assert_eq!(original, "COUNT");
}

#[test]
fn out_of_memory_message() {
  assert_eq!(
    OutOfMemory { line: 4 }.to_string(),
    "Out of memory error at line 4"
  );
}

#[test]
fn child_slot_must_exist() {
  let mut forest = Forest::new();
  let parent = expression(&mut forest, ExpKind::Call, Attribute::Name("f".into()));
  let child = expression(&mut forest, ExpKind::Const, Attribute::Value(1));

  assert_eq!(
    forest.set_child(parent, 3, child),
    Err(LinkError::SlotOutOfRange(3))
  );
  assert_eq!(forest.set_child(parent, 2, child), Ok(None));
  assert_eq!(forest[parent].child(2), Some(child));
  assert_eq!(forest[parent].child(0), None);
}

#[test]
fn nodes_can_only_be_linked_once() {
  let mut forest = Forest::new();
  let first = forest.new_statement(StmtKind::Compound, &context_at(1)).unwrap();
  let second = forest.new_statement(StmtKind::Compound, &context_at(1)).unwrap();
  let shared = forest.new_statement(StmtKind::Return, &context_at(1)).unwrap();

  forest.set_child(first, 1, shared).unwrap();
  assert_eq!(
    forest.set_child(second, 1, shared),
    Err(LinkError::AlreadyOwned(shared))
  );
  assert_eq!(
    forest.set_sibling(second, shared),
    Err(LinkError::AlreadyOwned(shared))
  );

  // linking the same edge again changes nothing
  assert_eq!(forest.set_child(first, 1, shared), Ok(None));
}

#[test]
fn links_can_not_create_cycles() {
  let mut forest = Forest::new();
  let outer = forest.new_statement(StmtKind::Loop, &context_at(1)).unwrap();
  let inner = forest.new_statement(StmtKind::Compound, &context_at(1)).unwrap();
  let deepest = forest.new_statement(StmtKind::Return, &context_at(1)).unwrap();

  forest.set_child(outer, 1, inner).unwrap();
  forest.set_sibling(inner, deepest).unwrap();

  assert_eq!(forest.set_child(deepest, 0, outer), Err(LinkError::Cycle(outer)));
  assert_eq!(forest.set_sibling(outer, outer), Err(LinkError::Cycle(outer)));
  assert_eq!(forest.set_child(inner, 0, inner), Err(LinkError::AlreadyOwned(inner)));
}

#[test]
fn replacing_a_child_detaches_the_old_one() {
  let mut forest = Forest::new();
  let return_ = forest.new_statement(StmtKind::Return, &context_at(1)).unwrap();
  let old = expression(&mut forest, ExpKind::Const, Attribute::Value(1));
  let new = expression(&mut forest, ExpKind::Const, Attribute::Value(2));
  let other = forest.new_statement(StmtKind::Return, &context_at(1)).unwrap();

  forest.set_child(return_, 0, old).unwrap();
  assert_eq!(forest.set_child(return_, 0, new), Ok(Some(old)));
  assert_eq!(forest[return_].child(0), Some(new));

  // the detached node can be linked somewhere else
  assert_eq!(forest.set_child(other, 0, old), Ok(None));
}

#[test]
fn append_sibling_adds_to_the_end_of_the_chain() {
  let mut forest = Forest::new();
  let a = declaration(&mut forest, DeclKind::Var, Attribute::Name("a".into()));
  let b = declaration(&mut forest, DeclKind::Var, Attribute::Name("b".into()));
  let c = declaration(&mut forest, DeclKind::Var, Attribute::Name("c".into()));

  forest.set_root(a).unwrap();
  forest.append_sibling(a, b).unwrap();
  forest.append_sibling(a, c).unwrap();

  let chain: Vec<_> = forest.siblings(forest.root()).collect();
  assert_eq!(chain, vec![a, b, c]);
  assert_eq!(
    forest.append_sibling(a, b),
    Err(LinkError::AlreadyOwned(b))
  );
}

#[test]
fn root_must_be_unlinked() {
  let mut forest = Forest::new();
  let root = declaration(&mut forest, DeclKind::Func, Attribute::Name("main".into()));
  let child = forest.new_statement(StmtKind::Compound, &context_at(1)).unwrap();
  forest.set_child(root, 2, child).unwrap();

  assert_eq!(forest.set_root(child), Err(LinkError::AlreadyOwned(child)));
  forest.set_root(root).unwrap();

  let other = forest.new_statement(StmtKind::Compound, &context_at(1)).unwrap();
  assert_eq!(forest.set_child(other, 0, root), Err(LinkError::AlreadyOwned(root)));
}

#[test]
fn lone_variable_declaration() {
  let mut forest = Forest::new();
  let count = declaration(&mut forest, DeclKind::Var, Attribute::Name("count".into()));
  forest.set_root(count).unwrap();

  assert_eq!(forest.to_string(), "  Variable Declare : count\n");
}

#[test]
fn array_declarations() {
  let mut forest = Forest::new();
  let unsized_ = declaration(
    &mut forest,
    DeclKind::ArrVar,
    Attribute::Array(ArrayAttribute::r#unsized("values")),
  );
  let sized = declaration(
    &mut forest,
    DeclKind::ArrVar,
    Attribute::Array(ArrayAttribute {
      name: "values".into(),
      size: 5,
    }),
  );

  assert_eq!(
    forest.subtree(unsized_).to_string(),
    "  Array Variable Declare : values\n"
  );
  assert_eq!(
    forest.subtree(sized).to_string(),
    "  Array Variable Allocate : values of size 5\n"
  );
}

#[test]
fn if_statement() {
  let forest = if_statement_forest();
  let expected = top_level(indoc! {"
    If
      Simple Expression
        Operator : <=
        Variable : x
        Constant : 10
      Compound Statement
        Return
          Variable : x
  "});

  assert_eq!(forest.to_string(), expected);
}

#[test]
fn function_declaration() {
  let context = context_at(1);
  let mut forest = Forest::new();

  let type_ = forest.new_type(TypeKind::TypeName, &context).unwrap();
  forest[type_].attribute = Attribute::Type(TokenKind::Int);
  let function = declaration(&mut forest, DeclKind::Func, Attribute::Name("main".into()));
  let body = forest.new_statement(StmtKind::Compound, &context).unwrap();
  let loop_ = forest.new_statement(StmtKind::Loop, &context).unwrap();
  let condition = expression(&mut forest, ExpKind::Id, Attribute::Name("go".into()));
  let assign = expression(&mut forest, ExpKind::Assign, Attribute::Empty);
  let target = expression(&mut forest, ExpKind::ArrayId, Attribute::Name("a".into()));
  let index = expression(&mut forest, ExpKind::Const, Attribute::Value(0));
  let call = expression(&mut forest, ExpKind::Call, Attribute::Name("input".into()));
  let global = declaration(&mut forest, DeclKind::Var, Attribute::Name("g".into()));

  forest.set_child(function, 0, type_).unwrap();
  forest.set_child(function, 2, body).unwrap();
  forest.set_child(body, 1, loop_).unwrap();
  forest.set_child(loop_, 0, condition).unwrap();
  forest.set_child(loop_, 1, assign).unwrap();
  forest.set_child(assign, 0, target).unwrap();
  forest.set_child(target, 0, index).unwrap();
  forest.set_child(assign, 1, call).unwrap();
  forest.set_root(global).unwrap();
  forest.append_sibling(global, function).unwrap();

  let expected = top_level(indoc! {"
    Variable Declare : g
    Function Declare : main
      Type : int
      Compound Statement
        While
          Variable : go
          Assign : =
            Array ID : a
              Constant : 0
            Call to input
  "});
  assert_eq!(forest.to_string(), expected);
}

#[test]
fn type_names() {
  let mut forest = Forest::new();
  let mut printed = Vec::new();

  for token in [TokenKind::Int, TokenKind::Void, TokenKind::Char] {
    let node = forest.new_type(TypeKind::TypeName, &context_at(1)).unwrap();
    forest[node].attribute = Attribute::Type(token);
    printed.push(forest.subtree(node).to_string());
  }

  assert_eq!(printed, vec![
    "  Type : int\n",
    "  Type : void\n",
    "  Type : Unknown Variable Type\n",
  ]);
}

#[test]
fn operator_which_is_not_an_operator() {
  let mut forest = Forest::new();
  let op = expression(&mut forest, ExpKind::Op, Attribute::Operator(TokenKind::Semicolon));
  forest.set_root(op).unwrap();

  assert_eq!(
    forest.to_string(),
    "  Simple Expression\n    Operator : Not assigned OP token\n"
  );
}

#[test]
fn unknown_nodes_do_not_stop_printing() {
  let mut forest = Forest::new();
  let function = declaration(&mut forest, DeclKind::Func, Attribute::Name("f".into()));
  let parameter = declaration(&mut forest, DeclKind::Param, Attribute::Name("p".into()));
  let array_parameter = declaration(
    &mut forest,
    DeclKind::ArrParam,
    Attribute::Array(ArrayAttribute::r#unsized("q")),
  );
  let body = forest.new_statement(StmtKind::Compound, &context_at(1)).unwrap();
  let broken = expression(&mut forest, ExpKind::Const, Attribute::Name("oops".into()));
  let type_ = forest.new_type(TypeKind::TypeName, &context_at(1)).unwrap();
  let after = declaration(&mut forest, DeclKind::Var, Attribute::Name("after".into()));

  forest.set_child(function, 1, parameter).unwrap();
  forest.set_sibling(parameter, array_parameter).unwrap();
  forest.set_child(function, 2, body).unwrap();
  forest.set_child(body, 1, broken).unwrap();
  forest.set_sibling(broken, type_).unwrap();
  forest.set_root(function).unwrap();
  forest.append_sibling(function, after).unwrap();

  let expected = top_level(indoc! {"
    Function Declare : f
      Unknown Declaration Node Kind
      Unknown Declaration Node Kind
      Compound Statement
        Unknown ExpNode kind
        Unknown Type Node Kind
    Variable Declare : after
  "});
  let printed = forest.to_string();
  assert_eq!(printed, expected);
  assert_eq!(printed.matches("Unknown").count(), 4);
}

#[test]
fn printing_is_idempotent() {
  let forest = if_statement_forest();
  let before = format!("{forest:?}");

  let first = forest.to_string();
  let second = forest.to_string();
  let mut third = String::new();
  print_tree(&mut third, &forest).unwrap();

  assert_eq!(first, second);
  assert_eq!(first, third);
  assert_eq!(format!("{forest:?}"), before);
}

#[test]
fn indentation_follows_depth() {
  let forest = if_statement_forest();
  let depths: Vec<_> = forest
    .to_string()
    .lines()
    .map(|line| line.len() - line.trim_start().len())
    .collect();

  assert_eq!(depths, vec![2, 4, 6, 6, 6, 4, 6, 8]);

  // a deeper subtree starts back at the top level
  let body = forest[forest.root().unwrap()].child(1).unwrap();
  assert_eq!(
    forest.subtree(body).to_string(),
    "  Compound Statement\n    Return\n      Variable : x\n"
  );
}

#[test]
fn empty_forest_prints_nothing() {
  let mut forest = Forest::new();
  assert_eq!(forest.to_string(), "");

  // nodes which aren't linked to the root are not printed
  let unlinked = expression(&mut forest, ExpKind::Id, Attribute::Name("unlinked".into()));
  assert_eq!(forest.to_string(), "");
  assert_eq!(forest[unlinked].name(), Some("unlinked"));
  assert!(!forest.is_empty());
}

#[test]
fn nodes_are_listed_with_their_handles() {
  let mut forest = Forest::new();
  let first = expression(&mut forest, ExpKind::Id, Attribute::Name("a".into()));
  let second = forest.new_statement(StmtKind::Return, &context_at(2)).unwrap();
  let third = expression(&mut forest, ExpKind::Const, Attribute::Value(7));

  let handles: Vec<_> = forest.nodes().map(|(node, _)| node).collect();
  assert_eq!(handles, vec![first, second, third]);

  for (node, tree_node) in forest.nodes() {
    assert_eq!(&forest[node], tree_node);
  }
  assert_eq!(forest.nodes().count(), forest.len());
}
