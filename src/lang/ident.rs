// Naming rules shared by the parser, the instruction constructor and the
// command line. Variables are one uppercase letter followed by zero or
// more digits. Labels may start with several letters (`END`, `L2`).
// Macro names are one or more uppercase letters.

pub fn is_variable(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_uppercase() => chars.all(|c| c.is_ascii_digit()),
        _ => false,
    }
}

pub fn is_label(s: &str) -> bool {
    let letters = s.chars().take_while(|c| c.is_ascii_uppercase()).count();
    letters > 0 && s.chars().skip(letters).all(|c| c.is_ascii_digit())
}

pub fn is_macro_name(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_uppercase())
}
