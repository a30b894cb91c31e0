//! Body stripping over captured declaration text.
//!
//! Cut points are found with a single forward scan that tracks nesting depth
//! per delimiter class and skips string literals, so a `{`, `:` or `=>` only
//! counts when it sits at depth zero in every class.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delim {
    Paren,
    Bracket,
    Brace,
    Angle,
}

impl Delim {
    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Open(Delim),
    Close(Delim),
    /// `=>`
    FatArrow,
    Colon,
}

/// One structural token.
///
/// `top_level` means every depth counter is zero *outside* the token: before
/// an opener, after a closer, and around arrows and colons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub pos: usize,
    pub token: Token,
    pub top_level: bool,
}

/// Forward scanner yielding delimiter events with depth bookkeeping.
pub struct DelimiterScanner<'a> {
    bytes: &'a [u8],
    pos: usize,
    angles: bool,
    comments: bool,
    hash_comments: bool,
    depth: [usize; 4],
}

impl<'a> DelimiterScanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            pos: 0,
            angles: false,
            comments: true,
            hash_comments: false,
            depth: [0; 4],
        }
    }

    /// Track `<` `>` as a delimiter class (generics, templates).
    #[must_use]
    pub fn with_angles(mut self, on: bool) -> Self {
        self.angles = on;
        self
    }

    /// Skip `//` and `/* */` comments. Off for Python, where `//` is an operator.
    #[must_use]
    pub fn with_c_comments(mut self, on: bool) -> Self {
        self.comments = on;
        self
    }

    /// Skip `#` comments to end of line.
    #[must_use]
    pub fn with_hash_comments(mut self, on: bool) -> Self {
        self.hash_comments = on;
        self
    }

    fn at_top(&self) -> bool {
        self.depth.iter().all(|&d| d == 0)
    }

    fn peek(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.bytes.len());
    }

    fn skip_literal(&mut self, quote: u8) {
        let triple = [quote; 3];
        if quote != b'`' && self.bytes[self.pos..].starts_with(&triple) {
            self.advance(3);
            while self.pos < self.bytes.len() {
                if self.bytes[self.pos..].starts_with(&triple) {
                    self.advance(3);
                    return;
                }
                let step = if self.bytes[self.pos] == b'\\' { 2 } else { 1 };
                self.advance(step);
            }
            return;
        }

        self.advance(1);
        while let Some(b) = self.peek(0) {
            match b {
                b'\\' => self.advance(2),
                b if b == quote => {
                    self.advance(1);
                    return;
                }
                // Unterminated single-line literal: an apostrophe in prose.
                b'\n' if quote != b'`' => return,
                _ => self.advance(1),
            }
        }
    }

    fn skip_line(&mut self) {
        while let Some(b) = self.peek(0) {
            if b == b'\n' {
                return;
            }
            self.advance(1);
        }
    }

    fn skip_block_comment(&mut self) {
        self.advance(2);
        while self.pos < self.bytes.len() {
            if self.bytes[self.pos..].starts_with(b"*/") {
                self.advance(2);
                return;
            }
            self.advance(1);
        }
    }

    /// `operator<` and friends in C++ are names, not template brackets.
    fn follows_operator_keyword(&self) -> bool {
        let before = &self.bytes[..self.pos];
        let trimmed = before.trim_ascii_end();
        trimmed.ends_with(b"operator")
    }

    fn open(&mut self, delim: Delim) -> Event {
        let top_level = self.at_top();
        self.depth[delim.index()] += 1;
        let pos = self.pos;
        self.advance(1);
        Event {
            pos,
            token: Token::Open(delim),
            top_level,
        }
    }

    fn close(&mut self, delim: Delim) -> Option<Event> {
        let pos = self.pos;
        self.advance(1);
        let d = &mut self.depth[delim.index()];
        if *d == 0 {
            return None;
        }
        *d -= 1;
        Some(Event {
            pos,
            token: Token::Close(delim),
            top_level: self.at_top(),
        })
    }
}

impl Iterator for DelimiterScanner<'_> {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        while let Some(b) = self.peek(0) {
            let next = self.peek(1);
            match b {
                b'#' if self.hash_comments => self.skip_line(),
                b'"' | b'\'' | b'`' => self.skip_literal(b),
                b'/' if self.comments && next == Some(b'/') => self.skip_line(),
                b'/' if self.comments && next == Some(b'*') => self.skip_block_comment(),
                b'=' if next == Some(b'>') => {
                    let pos = self.pos;
                    self.advance(2);
                    return Some(Event {
                        pos,
                        token: Token::FatArrow,
                        top_level: self.at_top(),
                    });
                }
                b'-' if next == Some(b'>') => self.advance(2),
                b'<' if self.angles
                    && (matches!(next, Some(b'<' | b'='))
                        || self.follows_operator_keyword()) =>
                {
                    self.advance(if next == Some(b'<') || next == Some(b'=') { 2 } else { 1 });
                }
                b'(' => return Some(self.open(Delim::Paren)),
                b'[' => return Some(self.open(Delim::Bracket)),
                b'{' => return Some(self.open(Delim::Brace)),
                b'<' if self.angles => return Some(self.open(Delim::Angle)),
                b')' | b']' | b'}' => {
                    let delim = match b {
                        b')' => Delim::Paren,
                        b']' => Delim::Bracket,
                        _ => Delim::Brace,
                    };
                    if let Some(ev) = self.close(delim) {
                        return Some(ev);
                    }
                }
                b'>' if self.angles => {
                    if let Some(ev) = self.close(Delim::Angle) {
                        return Some(ev);
                    }
                }
                b':' => {
                    let pos = self.pos;
                    self.advance(1);
                    return Some(Event {
                        pos,
                        token: Token::Colon,
                        top_level: self.at_top(),
                    });
                }
                _ => self.advance(1),
            }
        }
        None
    }
}

/// Byte offset of the `{` opening the declaration body.
///
/// If the text ends with the `}` closing the last top-level brace group, that
/// group is the body; otherwise the first top-level `{` is. With
/// `after_params`, braces before the first balanced `()` are not candidates.
pub fn body_brace(text: &str, angles: bool, after_params: bool) -> Option<usize> {
    let found = scan_body_brace(text, angles, after_params);
    if found.is_none() && angles {
        // An unbalanced `<` (a comparison) swallows everything after it.
        return scan_body_brace(text, false, after_params);
    }
    found
}

fn scan_body_brace(text: &str, angles: bool, after_params: bool) -> Option<usize> {
    let end = text.trim_end().len();
    let mut params_closed = !after_params;
    let mut first = None;
    let mut open_group: Option<(usize, bool)> = None;
    let mut last_group: Option<(usize, usize, bool)> = None;

    for ev in DelimiterScanner::new(text).with_angles(angles) {
        if !ev.top_level {
            continue;
        }
        match ev.token {
            Token::Close(Delim::Paren) => params_closed = true,
            Token::Open(Delim::Brace) => {
                open_group = Some((ev.pos, params_closed));
                if params_closed && first.is_none() {
                    first = Some(ev.pos);
                }
            }
            Token::Close(Delim::Brace) => {
                if let Some((open, valid)) = open_group.take() {
                    last_group = Some((open, ev.pos + 1, valid));
                }
            }
            _ => {}
        }
    }

    match last_group {
        Some((open, close_end, true)) if close_end == end => Some(open),
        _ => first,
    }
}

/// Byte offset of the first top-level `=>`.
pub fn arrow(text: &str) -> Option<usize> {
    let find = |angles| {
        DelimiterScanner::new(text)
            .with_angles(angles)
            .find(|ev| ev.top_level && ev.token == Token::FatArrow)
            .map(|ev| ev.pos)
    };
    find(true).or_else(|| find(false))
}

/// Byte offset of the first `:` outside every bracket and string literal.
pub fn python_colon(text: &str) -> Option<usize> {
    DelimiterScanner::new(text)
        .with_c_comments(false)
        .with_hash_comments(true)
        .find(|ev| ev.top_level && ev.token == Token::Colon)
        .map(|ev| ev.pos)
}

/// Keep `text` up to `cut`, trimmed. Falls back to the whole trimmed text when
/// there is no cut point or the cut would leave nothing.
pub fn cut_at(text: &str, cut: Option<usize>) -> String {
    let text = text.trim();
    match cut {
        Some(i) if i > 0 && i <= text.len() => {
            let head = text[..i].trim_end();
            if head.is_empty() {
                text.to_string()
            } else {
                head.to_string()
            }
        }
        _ => text.to_string(),
    }
}

/// Strip a function-like body at its brace.
pub fn strip_braced(text: &str, angles: bool, callable: bool) -> String {
    let text = text.trim();
    cut_at(text, body_brace(text, angles, callable))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str, angles: bool) -> Vec<(Token, bool)> {
        DelimiterScanner::new(text)
            .with_angles(angles)
            .map(|ev| (ev.token, ev.top_level))
            .collect()
    }

    #[test]
    fn test_scanner_tracks_depth() {
        let toks = tokens("f(a[0]) {}", false);
        assert_eq!(
            toks,
            vec![
                (Token::Open(Delim::Paren), true),
                (Token::Open(Delim::Bracket), false),
                (Token::Close(Delim::Bracket), false),
                (Token::Close(Delim::Paren), true),
                (Token::Open(Delim::Brace), true),
                (Token::Close(Delim::Brace), true),
            ]
        );
    }

    #[test]
    fn test_scanner_skips_string_literals() {
        assert!(tokens(r#"x = "({[" + '}'"#, false).is_empty());
        assert!(tokens(r#"s = "a \" {""#, false).is_empty());
        assert!(tokens("t = `${a}{`", false).is_empty());
    }

    #[test]
    fn test_scanner_skips_triple_quoted_strings() {
        assert!(tokens(r#"x = """ a "(" b """"#, false).is_empty());
    }

    #[test]
    fn test_scanner_never_goes_negative() {
        let toks = tokens(") ] } (", false);
        assert_eq!(toks, vec![(Token::Open(Delim::Paren), true)]);
    }

    #[test]
    fn test_scanner_arrows_do_not_close_angles() {
        let toks = tokens("Array<() => void>", true);
        assert_eq!(toks[0], (Token::Open(Delim::Angle), true));
        assert!(toks.contains(&(Token::FatArrow, false)));
        assert_eq!(toks.last(), Some(&(Token::Close(Delim::Angle), true)));

        let toks = tokens("a->b > c", true);
        assert!(toks.is_empty());
    }

    #[test]
    fn test_scanner_skips_comments() {
        assert!(tokens("// {\n/* ( */", false).is_empty());
    }

    #[test]
    fn test_apostrophe_in_comment_does_not_swallow_text() {
        let text = "func f() {\n\t// don't\n\treturn\n}";
        assert_eq!(strip_braced(text, false, true), "func f()");
    }

    #[test]
    fn test_brace_cut_simple() {
        let text = "func Add(a, b int) int {\n\treturn a + b\n}";
        assert_eq!(strip_braced(text, false, true), "func Add(a, b int) int");
    }

    #[test]
    fn test_brace_cut_keeps_braces_in_return_type() {
        let text = "func Any() interface{} {\n\treturn nil\n}";
        assert_eq!(strip_braced(text, false, true), "func Any() interface{}");

        let text = "function f(): { a: number } { return { a: 1 }; }";
        assert_eq!(strip_braced(text, true, true), "function f(): { a: number }");
    }

    #[test]
    fn test_brace_cut_ignores_braces_in_parameters() {
        let text = "function f({ a, b }: Opts) { return a; }";
        assert_eq!(strip_braced(text, true, true), "function f({ a, b }: Opts)");
    }

    #[test]
    fn test_brace_cut_respects_generics() {
        let text = "public <T extends Map<String, List<T>>> void put(T t) { }";
        assert_eq!(
            strip_braced(text, true, true),
            "public <T extends Map<String, List<T>>> void put(T t)"
        );
    }

    #[test]
    fn test_brace_cut_first_candidate_when_text_continues() {
        let text = "class A { int x; };";
        assert_eq!(strip_braced(text, true, false), "class A");
    }

    #[test]
    fn test_brace_cut_operator_less() {
        let text = "bool operator<(const A& o) const { return x < o.x; }";
        assert_eq!(
            strip_braced(text, true, true),
            "bool operator<(const A& o) const"
        );
    }

    #[test]
    fn test_brace_cut_shift_operator() {
        let text = "std::ostream& print(std::ostream& os) { return os << 1; }";
        assert_eq!(
            strip_braced(text, true, true),
            "std::ostream& print(std::ostream& os)"
        );
    }

    #[test]
    fn test_no_brace_leaves_text() {
        assert_eq!(strip_braced("int add(int a, int b);", false, true), "int add(int a, int b);");
    }

    #[test]
    fn test_arrow_cut_skips_nested_arrows() {
        let text = "const f = (cb: (x: number) => void) => { cb(1); }";
        let at = arrow(text).unwrap();
        assert_eq!(cut_at(text, Some(at)), "const f = (cb: (x: number) => void)");
    }

    #[test]
    fn test_arrow_cut_missing() {
        assert_eq!(arrow("const x = 1"), None);
    }

    #[test]
    fn test_python_colon_skips_annotations() {
        let text = "def f(a: int, b: Dict[str, int]) -> Dict[str, int]:\n    return {}";
        let at = python_colon(text).unwrap();
        assert_eq!(
            cut_at(text, Some(at)),
            "def f(a: int, b: Dict[str, int]) -> Dict[str, int]"
        );
    }

    #[test]
    fn test_python_colon_skips_string_defaults() {
        let text = "def f(sep=\":\", d={}) -> str:\n    pass";
        let at = python_colon(text).unwrap();
        assert_eq!(cut_at(text, Some(at)), "def f(sep=\":\", d={}) -> str");
    }

    #[test]
    fn test_python_colon_skips_hash_comments() {
        let text = "def f(a,  # (see note: x\n      b):\n    return a";
        assert_eq!(cut_at(text, python_colon(text)), "def f(a,  # (see note: x\n      b)");
    }

    #[test]
    fn test_hash_comments_off_by_default() {
        assert_eq!(tokens("# (", false), vec![(Token::Open(Delim::Paren), true)]);
    }

    #[test]
    fn test_cut_at_zero_keeps_text() {
        assert_eq!(cut_at("{ x }", Some(0)), "{ x }");
        assert_eq!(cut_at("  abc  ", None), "abc");
    }
}
