use logos::Logos;

/// Represents a lexical token in an expression line.
///
/// The calculator only distinguishes operator symbols from everything else;
/// any run of non-operator characters becomes a single [`Token::Text`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token<'src> {
    /// `+`, `-`, `*` or `/`.
    #[regex(r"[+\-*/]", parse_operator)]
    Operator(char),
    /// A run of operand characters, such as `12` or `XIV`.
    #[regex(r"[^+\-*/]+", |lex| lex.slice(), allow_greedy = true)]
    Text(&'src str),
}

/// Extracts the operator symbol from the current token slice.
///
/// # Returns
/// - `Some(char)`: The single operator character.
/// - `None`: If the slice is empty.
fn parse_operator<'src>(lex: &logos::Lexer<'src, Token<'src>>) -> Option<char> {
    lex.slice().chars().next()
}
