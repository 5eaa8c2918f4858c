use super::token::*;

pub fn lex(s: &str) -> Vec<Token> {
    SlangLexer::lex(s)
}

fn is_slang_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_slang_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_slang_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

trait Tokenizers<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>>;

    fn whitespace(&mut self) -> Option<Token> {
        let mut len = 0;
        loop {
            self.chars().next();
            len += 1;
            if let Some(pk) = self.chars().peek() {
                if is_slang_whitespace(*pk) {
                    continue;
                }
            }
            return Some(Token::Whitespace(len));
        }
    }

    fn number(&mut self) -> Option<Token> {
        let mut s = String::new();
        loop {
            match self.chars().next() {
                Some(ch) => s.push(ch),
                None => {
                    debug_assert!(false, "Failed to tokenize number.");
                    return None;
                }
            }
            if let Some(pk) = self.chars().peek() {
                if is_slang_digit(*pk) {
                    continue;
                }
            }
            break;
        }
        Some(Token::Number(s))
    }

    /// Letters, then digits. A letter after a digit starts a new token,
    /// so `X1Y` is two identifiers and never a single name.
    fn alphabetic(&mut self) -> Option<Token> {
        let mut s = String::new();
        let mut digit = false;
        loop {
            let ch = match self.chars().next() {
                Some(ch) => ch.to_ascii_uppercase(),
                None => {
                    debug_assert!(false, "Failed to tokenize alphabetic.");
                    return None;
                }
            };
            s.push(ch);
            if is_slang_digit(ch) {
                digit = true;
            }
            if let Some(pk) = self.chars().peek() {
                if is_slang_alphabetic(*pk) {
                    if digit {
                        break;
                    }
                    continue;
                }
                if is_slang_digit(*pk) {
                    continue;
                }
            }
            break;
        }
        match Token::from_string(&s) {
            Some(token) if token.is_word() => Some(token),
            _ => Some(Token::Ident(s)),
        }
    }

    fn minutia(&mut self) -> Option<Token> {
        let mut s = String::new();
        loop {
            if let Some(ch) = self.chars().next() {
                s.push(ch);
                if let Some(t) = Token::from_string(&s) {
                    return Some(t);
                }
                if let Some(pk) = self.chars().peek() {
                    if is_slang_alphabetic(*pk) {
                        break;
                    }
                    if is_slang_digit(*pk) {
                        break;
                    }
                    if is_slang_whitespace(*pk) {
                        break;
                    }
                    continue;
                }
            }
            break;
        }
        Some(Token::Unknown(s))
    }
}

struct SlangLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> Tokenizers<'a> for SlangLexer<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>> {
        &mut self.chars
    }
}

impl<'a> Iterator for SlangLexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let pk = self.chars.peek()?;
        if is_slang_whitespace(*pk) {
            return self.whitespace();
        }
        if is_slang_digit(*pk) {
            return self.number();
        }
        if is_slang_alphabetic(*pk) {
            return self.alphabetic();
        }
        self.minutia()
    }
}

impl<'a> SlangLexer<'a> {
    fn lex(s: &str) -> Vec<Token> {
        let mut tokens: Vec<Token> = SlangLexer {
            chars: s.trim_start().chars().peekable(),
        }
        .collect();
        SlangLexer::trim_end(&mut tokens);
        tokens
    }

    fn trim_end(tokens: &mut Vec<Token>) {
        if let Some(Token::Whitespace(_)) = tokens.last() {
            tokens.pop();
        }
    }
}
