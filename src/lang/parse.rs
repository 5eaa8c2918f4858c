use super::ident::{is_label, is_macro_name, is_variable};
use super::instruction::{Instruction, Kind};
use super::token::*;
use super::{Error, LineNumber};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// Parse the tokens of one line into exactly one instruction.
///
/// The grammar alternatives are tried in a fixed order: increment,
/// decrement, conditional branch, assignment macro, conditional macro.
/// The forms do not overlap, so the first structural match is the only one.
pub fn parse(line_number: LineNumber, tokens: &[Token]) -> Result<Instruction> {
    match Parser::parse(tokens) {
        Err(e) => Err(e.in_line_number(line_number)),
        Ok(r) => Ok(r),
    }
}

struct Parser<'a> {
    token_stream: std::slice::Iter<'a, Token>,
    peeked: Option<&'a Token>,
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a [Token]) -> Result<Instruction> {
        let mut parse = Parser {
            token_stream: tokens.iter(),
            peeked: None,
        };
        let label = parse.label()?;
        let (kind, args) = match parse.peek() {
            Some(Token::Word(Word::If)) => {
                parse.next();
                parse.r#if()?
            }
            Some(Token::Ident(_)) => parse.assignment()?,
            _ => return Err(error!(InvalidInstruction; "EXPECTED STATEMENT")),
        };
        if let Some(t) = parse.next() {
            return Err(error!(InvalidInstruction; format!("UNEXPECTED {}", t)));
        }
        Instruction::new(label, kind, args)
    }

    fn next(&mut self) -> Option<&'a Token> {
        if self.peeked.is_some() {
            return self.peeked.take();
        }
        loop {
            match self.token_stream.next()? {
                Token::Whitespace(_) => continue,
                t => return Some(t),
            }
        }
    }

    fn peek(&mut self) -> Option<&&'a Token> {
        if self.peeked.is_none() {
            self.peeked = self.next();
        }
        self.peeked.as_ref()
    }

    fn expect(&mut self, token: Token) -> Result<()> {
        if let Some(t) = self.next() {
            if *t == token {
                return Ok(());
            }
        }
        Err(error!(InvalidInstruction;
            match token {
                Token::Unknown(_) | Token::Whitespace(_) => "UNEXPECTED TOKEN",
                Token::Number(_) => "EXPECTED NUMBER",
                Token::Word(Word::If) => "EXPECTED IF",
                Token::Word(Word::Goto) => "EXPECTED GOTO",
                Token::Operator(_) => "EXPECTED OPERATOR",
                Token::Ident(_) => "EXPECTED IDENTIFIER",
                Token::LParen => "EXPECTED LEFT PARENTHESIS",
                Token::RParen => "EXPECTED RIGHT PARENTHESIS",
                Token::LBracket => "EXPECTED LEFT BRACKET",
                Token::RBracket => "EXPECTED RIGHT BRACKET",
                Token::Comma => "EXPECTED COMMA",
            }
        ))
    }

    fn expect_number(&mut self, n: &str) -> Result<()> {
        match self.next() {
            Some(Token::Number(s)) if s == n => Ok(()),
            _ => Err(error!(InvalidInstruction; format!("EXPECTED {}", n))),
        }
    }

    fn ident(&mut self) -> Result<String> {
        match self.next() {
            Some(Token::Ident(s)) => Ok(s.clone()),
            _ => Err(error!(InvalidInstruction; "EXPECTED IDENTIFIER")),
        }
    }

    fn variable(&mut self) -> Result<String> {
        let name = self.ident()?;
        if is_variable(&name) {
            Ok(name)
        } else {
            Err(error!(InvalidInstruction; format!("BAD VARIABLE {}", name)))
        }
    }

    fn label_name(&mut self) -> Result<String> {
        let name = self.ident()?;
        if is_label(&name) {
            Ok(name)
        } else {
            Err(error!(InvalidInstruction; format!("BAD LABEL {}", name)))
        }
    }

    fn label(&mut self) -> Result<Option<String>> {
        if let Some(Token::LBracket) = self.peek() {
            self.next();
            let name = self.label_name()?;
            self.expect(Token::RBracket)?;
            Ok(Some(name))
        } else {
            Ok(None)
        }
    }

    fn is_call(&mut self) -> bool {
        matches!(self.peek(), Some(Token::LParen))
    }

    fn macro_call(&mut self, name: String) -> Result<Vec<String>> {
        if !is_macro_name(&name) {
            return Err(error!(InvalidInstruction; format!("BAD MACRO NAME {}", name)));
        }
        self.expect(Token::LParen)?;
        let mut v = vec![name];
        if let Some(Token::RParen) = self.peek() {
            self.next();
            return Ok(v);
        }
        loop {
            v.push(self.variable()?);
            match self.next() {
                Some(Token::RParen) => return Ok(v),
                Some(Token::Comma) => continue,
                _ => return Err(error!(InvalidInstruction; "EXPECTED END OR SEPARATOR")),
            }
        }
    }

    fn not_zero_goto(&mut self) -> Result<String> {
        self.expect(Token::Operator(Operator::NotEqual))?;
        self.expect_number("0")?;
        self.expect(Token::Word(Word::Goto))?;
        self.label_name()
    }

    /// `IF V != 0 GOTO L` or `IF F(V1, ..., Vn) != 0 GOTO L`
    fn r#if(&mut self) -> Result<(Kind, Vec<String>)> {
        let name = self.ident()?;
        if self.is_call() {
            let mut args = self.macro_call(name)?;
            args.push(self.not_zero_goto()?);
            return Ok((Kind::ConditionalMacro, args));
        }
        if !is_variable(&name) {
            return Err(error!(InvalidInstruction; format!("BAD VARIABLE {}", name)));
        }
        let label = self.not_zero_goto()?;
        Ok((Kind::ConditionalBranch, vec![name, label]))
    }

    /// `V <- V + 1`, `V <- V - 1` or `W <- F(V1, ..., Vn)`
    fn assignment(&mut self) -> Result<(Kind, Vec<String>)> {
        let target = self.variable()?;
        self.expect(Token::Operator(Operator::Assign))?;
        let name = self.ident()?;
        if self.is_call() {
            let mut args = vec![target];
            args.append(&mut self.macro_call(name)?);
            return Ok((Kind::AssignmentMacro, args));
        }
        let kind = match self.next() {
            Some(Token::Operator(Operator::Plus)) => Kind::Increment,
            Some(Token::Operator(Operator::Minus)) => Kind::Decrement,
            _ => return Err(error!(InvalidInstruction; "EXPECTED + OR -")),
        };
        self.expect_number("1")?;
        if name != target {
            return Err(error!(InvalidInstruction;
                format!("{} AND {} MUST BE THE SAME VARIABLE", target, name)));
        }
        Ok((kind, vec![target]))
    }
}

#[cfg(test)]
mod tests {
    use super::super::lex;
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse_str(s: &str) -> Result<Instruction> {
        parse(Some(1), &lex(s))
    }

    fn instr(label: Option<&str>, kind: Kind, args: &[&str]) -> Instruction {
        Instruction::new(
            label.map(String::from),
            kind,
            args.iter().map(|s| s.to_string()).collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_increment_and_decrement() {
        assert_eq!(
            parse_str("X <- X + 1").unwrap(),
            instr(None, Kind::Increment, &["X"])
        );
        assert_eq!(
            parse_str("[B1] Z3<-Z3-1").unwrap(),
            instr(Some("B1"), Kind::Decrement, &["Z3"])
        );
    }

    #[test]
    fn test_mismatched_variables() {
        let e = parse_str("A <- B + 1").unwrap_err();
        assert_eq!(e.line_number(), Some(1));
        assert!(parse_str("A <- B - 1").is_err());
    }

    #[test]
    fn test_branch() {
        assert_eq!(
            parse_str("[A] IF X1 != 0 GOTO E").unwrap(),
            instr(Some("A"), Kind::ConditionalBranch, &["X1", "E"])
        );
    }

    #[test]
    fn test_word_labels() {
        assert_eq!(
            parse_str("[LOOP] IF X != 0 GOTO END").unwrap(),
            instr(Some("LOOP"), Kind::ConditionalBranch, &["X", "END"])
        );
    }

    #[test]
    fn test_macros() {
        assert_eq!(
            parse_str("W <- ADD(X1, X2)").unwrap(),
            instr(None, Kind::AssignmentMacro, &["W", "ADD", "X1", "X2"])
        );
        assert_eq!(
            parse_str("W <- ZERO()").unwrap(),
            instr(None, Kind::AssignmentMacro, &["W", "ZERO"])
        );
        assert_eq!(
            parse_str("IF LT(X, Y) != 0 GOTO L2").unwrap(),
            instr(None, Kind::ConditionalMacro, &["LT", "X", "Y", "L2"])
        );
    }

    #[test]
    fn test_rejects() {
        for s in &[
            "",
            "X <- X + 2",
            "X <- X * 1",
            "XY <- XY + 1",
            "IF X != 1 GOTO L",
            "IF X != 0 GOTO",
            "IF X != 0 GOTO L1L",
            "IF X = 0 GOTO L",
            "[A1B] X <- X + 1",
            "[] X <- X + 1",
            "[A X <- X + 1",
            "W <- F1(X)",
            "W <- F(X,)",
            "W <- F(X Y)",
            "X <- X + 1 EXTRA",
            "HALT",
        ] {
            assert!(parse_str(s).is_err(), "{:?} should not parse", s);
        }
    }
}
