use std::collections::HashMap;

thread_local!(
    static STRING_TO_TOKEN: HashMap<std::string::String, Token> = Token::field_less()
        .drain(..)
        .chain(Word::field_less().drain(..).map(Token::Word))
        .chain(Operator::field_less().drain(..).map(Token::Operator))
        .map(|d| (d.to_string(), d))
        .collect();
);

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Unknown(String),
    Whitespace(usize),
    Number(String),
    Word(Word),
    Operator(Operator),
    Ident(String),
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
}

impl Token {
    fn field_less() -> Vec<Token> {
        use Token::*;
        vec![LParen, RParen, LBracket, RBracket, Comma]
    }

    pub fn from_string(s: &str) -> Option<Token> {
        STRING_TO_TOKEN.with(|stt| stt.get(s).cloned())
    }

    pub fn is_word(&self) -> bool {
        matches!(self, Token::Word(_))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Unknown(s) => write!(f, "{}", s),
            Whitespace(u) => write!(f, "{s:>w$}", s = "", w = u),
            Number(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            LBracket => write!(f, "["),
            RBracket => write!(f, "]"),
            Comma => write!(f, ","),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Word {
    Goto,
    If,
}

impl Word {
    fn field_less() -> Vec<Word> {
        vec![Word::Goto, Word::If]
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            Goto => write!(f, "GOTO"),
            If => write!(f, "IF"),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Operator {
    Assign,
    Plus,
    Minus,
    NotEqual,
}

impl Operator {
    fn field_less() -> Vec<Operator> {
        use Operator::*;
        vec![Assign, Plus, Minus, NotEqual]
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Assign => write!(f, "<-"),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            NotEqual => write!(f, "!="),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string() {
        let t = Token::from_string("GOTO");
        assert_eq!(t, Some(Token::Word(Word::Goto)));
        let t = Token::from_string("<-");
        assert_eq!(t, Some(Token::Operator(Operator::Assign)));
        let t = Token::from_string("PICKLES");
        assert_eq!(t, None);
    }
}
