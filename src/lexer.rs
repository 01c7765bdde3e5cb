//! A module splitting a command line into argument tokens.

/// An argument vector: owned tokens plus one trailing empty sentinel
/// entry.
///
/// The sentinel stands in for the terminating null slot expected by
/// argv-style spawn interfaces and is present even when there are no
/// real tokens, so the entry count is always at least one. Every
/// accessor except [`entries`](TokenVector::entries) works on the real
/// tokens only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenVector {
    entries: Vec<String>,
}

impl TokenVector {
    /// A vector with zero real tokens.
    pub fn new() -> Self {
        Self {
            entries: vec![String::new()],
        }
    }

    fn from_tokens(mut tokens: Vec<String>) -> Self {
        tokens.push(String::new());
        Self { entries: tokens }
    }

    /// Number of real tokens, excluding the sentinel.
    pub fn len(&self) -> usize {
        self.entries.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The real tokens, sentinel excluded.
    pub fn tokens(&self) -> &[String] {
        &self.entries[..self.entries.len() - 1]
    }

    /// All entries, including the trailing sentinel.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn first(&self) -> Option<&str> {
        self.tokens().first().map(String::as_str)
    }

    /// The real token immediately preceding the sentinel.
    pub fn last(&self) -> Option<&str> {
        self.tokens().last().map(String::as_str)
    }

    /// Remove and return the last real token; the sentinel shifts up.
    pub fn pop(&mut self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let idx = self.entries.len() - 2;
        Some(self.entries.remove(idx))
    }
}

impl Default for TokenVector {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexingState {
    Start,
    ReadingWord,
    ReadingQuoted,
}

struct LexingFsm {
    input: Vec<char>,
    pos: usize,
    state: LexingState,
    buffer: String,
}

impl LexingFsm {
    fn new(line: &str) -> Self {
        LexingFsm {
            input: line.chars().collect(),
            pos: 0,
            state: LexingState::Start,
            buffer: String::new(),
        }
    }

    fn make_tokens(&mut self) -> Vec<String> {
        let mut out = Vec::new();

        while let Some(ch) = self.read_char() {
            match self.state {
                LexingState::Start => self.handle_start(ch),
                LexingState::ReadingWord => self.handle_word(ch, &mut out),
                LexingState::ReadingQuoted => self.handle_quoted(ch, &mut out),
            }
        }

        // An unterminated quote degrades to "rest of the line is one
        // token". A word cut off by the end of the line is complete.
        match self.state {
            LexingState::ReadingWord | LexingState::ReadingQuoted => {
                out.push(std::mem::take(&mut self.buffer));
            }
            LexingState::Start => {}
        }

        out
    }

    fn read_char(&mut self) -> Option<char> {
        let ch = self.input.get(self.pos).copied();
        if ch.is_some() {
            self.pos += 1;
        }
        ch
    }

    fn handle_start(&mut self, ch: char) {
        match ch {
            ' ' => {}
            '"' => self.state = LexingState::ReadingQuoted,
            c => {
                self.buffer.push(c);
                self.state = LexingState::ReadingWord;
            }
        }
    }

    fn handle_word(&mut self, ch: char, out: &mut Vec<String>) {
        match ch {
            ' ' => {
                out.push(std::mem::take(&mut self.buffer));
                self.state = LexingState::Start;
            }
            // A quote inside a word is an ordinary character; only a
            // quote at the start of a token opens a literal.
            c => self.buffer.push(c),
        }
    }

    fn handle_quoted(&mut self, ch: char, out: &mut Vec<String>) {
        match ch {
            '"' => {
                out.push(std::mem::take(&mut self.buffer));
                self.state = LexingState::Start;
            }
            c => self.buffer.push(c),
        }
    }
}

/// Split a line into argument tokens.
///
/// Runs of spaces separate tokens and never produce empty ones. A token
/// beginning with `"` extends verbatim to the matching close quote,
/// spaces included. Each token owns its text independently of `line`.
pub fn tokenize(line: &str) -> TokenVector {
    TokenVector::from_tokens(LexingFsm::new(line).make_tokens())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(line: &str) -> Vec<String> {
        tokenize(line).tokens().to_vec()
    }

    #[test]
    fn quoted_literal_is_one_token() {
        assert_eq!(toks(r#"echo "a b" c"#), ["echo", "a b", "c"]);
    }

    #[test]
    fn whitespace_collapses() {
        assert_eq!(toks("  ls   -la  "), ["ls", "-la"]);
    }

    #[test]
    fn empty_line_has_only_the_sentinel() {
        let tv = tokenize("");
        assert!(tv.is_empty());
        assert_eq!(tv.entries(), [""]);
    }

    #[test]
    fn spaces_only_line_has_no_tokens() {
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn sentinel_always_trails() {
        for line in ["", "ls", r#"echo "a b""#, "sleep 5 &"] {
            let tv = tokenize(line);
            assert_eq!(tv.entries().len(), tv.len() + 1);
            assert_eq!(tv.entries().last().unwrap(), "");
        }
    }

    #[test]
    fn unterminated_quote_takes_rest_of_line() {
        assert_eq!(toks(r#"echo "a b c"#), ["echo", "a b c"]);
    }

    #[test]
    fn quote_inside_word_is_literal() {
        assert_eq!(toks(r#"a"b c""#), [r#"a"b"#, r#"c""#]);
    }

    #[test]
    fn empty_quotes_make_an_empty_token() {
        assert_eq!(toks(r#"echo """#), ["echo", ""]);
    }

    #[test]
    fn adjacent_tokens_split_at_closing_quote() {
        assert_eq!(toks(r#""ab"cd"#), ["ab", "cd"]);
    }

    #[test]
    fn trailing_ampersand_is_a_token() {
        let tv = tokenize("sleep 5 &");
        assert_eq!(tv.tokens(), ["sleep", "5", "&"]);
        assert_eq!(tv.last(), Some("&"));
    }

    #[test]
    fn pop_removes_last_real_token_and_keeps_sentinel() {
        let mut tv = tokenize("sleep 5 &");
        assert_eq!(tv.pop().as_deref(), Some("&"));
        assert_eq!(tv.tokens(), ["sleep", "5"]);
        assert_eq!(tv.entries().last().unwrap(), "");
        let mut empty = TokenVector::new();
        assert_eq!(empty.pop(), None);
    }

    fn rejoin(tokens: &[String]) -> String {
        tokens
            .iter()
            .map(|t| {
                if t.contains(' ') {
                    format!("\"{t}\"")
                } else {
                    t.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn rejoining_round_trips() {
        for line in [r#"echo "a b" c"#, "  ls   -la  ", "grep -n \"fn main\" src"] {
            let first = tokenize(line);
            let second = tokenize(&rejoin(first.tokens()));
            assert_eq!(first, second);
        }
    }
}
