//! # Text dictionary
//!
//! Boundary conditions are configured with keyword entries
//! ```text
//! inlet
//! {
//!     type            fourierParabolic;
//!     Q               ((3 0) (0 2) (2 4)); // complex coefficients
//!     omega           7.854;
//!     value           uniform (0 0 0);
//! }
//! ```
//! An entry is either a stream of words, numbers and parentheses closed by
//! `;`, or a sub-dictionary in braces. `//` and `/* */` comments are
//! skipped. Entries keep their order, a repeated keyword overrides the
//! earlier value.
use crate::error::ConfigError;
use ndarray::{Array1, Array2};
use num_complex::Complex;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Element of an entry stream
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Word
    Word(String),
    /// Number
    Number(f64),
    /// Opening parenthesis
    Open,
    /// Closing parenthesis
    Close,
}

/// Dictionary entry
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// Token stream
    Stream(Vec<Token>),
    /// Sub-dictionary
    Dict(Dictionary),
}

/// Ordered keyword entries
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    entries: Vec<(String, Entry)>,
}

/// Keyword column width when writing
const KEYWORD_WIDTH: usize = 16;

impl Dictionary {
    /// Return empty dictionary
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read dictionary from file
    ///
    /// # Errors
    /// File cannot be read or is not a well formed dictionary.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        text.parse()
    }

    /// Write dictionary to file
    ///
    /// # Errors
    /// File cannot be written.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_string())?;
        Ok(())
    }

    /// Keywords in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there are no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if `key` exists
    pub fn found(&self, key: &str) -> bool {
        self.entry(key).is_some()
    }

    /// Entry of `key`
    pub fn entry(&self, key: &str) -> Option<&Entry> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, e)| e)
    }

    /// Add entry, replacing an existing one with the same keyword
    pub fn add(&mut self, key: &str, entry: Entry) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, e)) => *e = entry,
            None => self.entries.push((key.to_string(), entry)),
        }
    }

    /// Remove entry, return it if it existed
    pub fn remove(&mut self, key: &str) -> Option<Entry> {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(pos).1)
    }

    /// Token stream of `key`
    ///
    /// # Errors
    /// Keyword is missing or is a sub-dictionary.
    pub fn lookup(&self, key: &str) -> Result<&[Token], ConfigError> {
        match self.entry(key) {
            Some(Entry::Stream(tokens)) => Ok(tokens),
            Some(Entry::Dict(_)) => Err(parse_error(key, "stream")),
            None => Err(ConfigError::Missing(key.to_string())),
        }
    }

    /// Sub-dictionary of `key`
    ///
    /// # Errors
    /// Keyword is missing or is not a sub-dictionary.
    pub fn sub_dict(&self, key: &str) -> Result<&Dictionary, ConfigError> {
        match self.entry(key) {
            Some(Entry::Dict(dict)) => Ok(dict),
            Some(Entry::Stream(_)) => Err(parse_error(key, "dictionary")),
            None => Err(ConfigError::Missing(key.to_string())),
        }
    }

    /// Single number
    ///
    /// # Errors
    /// Keyword missing or not a single number.
    pub fn get_scalar(&self, key: &str) -> Result<f64, ConfigError> {
        let mut stream = TokenReader::new(key, self.lookup(key)?, "scalar");
        let value = stream.number()?;
        stream.finish()?;
        Ok(value)
    }

    /// Single word
    ///
    /// # Errors
    /// Keyword missing or not a single word.
    pub fn get_word(&self, key: &str) -> Result<&str, ConfigError> {
        match self.lookup(key)? {
            [Token::Word(word)] => Ok(word.as_str()),
            _ => Err(parse_error(key, "word")),
        }
    }

    /// List of complex numbers `((re im) ...)`, with optional size prefix
    ///
    /// # Errors
    /// Keyword missing or not a list of pairs.
    pub fn get_complex_list(&self, key: &str) -> Result<Array1<Complex<f64>>, ConfigError> {
        let mut stream = TokenReader::new(key, self.lookup(key)?, "list of complex");
        let list = stream.list(2)?;
        stream.finish()?;
        Ok(list.iter().map(|c| Complex::new(c[0], c[1])).collect())
    }

    /// Uniform vector `uniform (x y z)`
    ///
    /// # Errors
    /// Keyword missing or not a uniform vector.
    pub fn get_uniform_vector(&self, key: &str) -> Result<[f64; 3], ConfigError> {
        let mut stream = TokenReader::new(key, self.lookup(key)?, "uniform vector");
        stream.keyword("uniform")?;
        let v = stream.tuple(3)?;
        stream.finish()?;
        Ok([v[0], v[1], v[2]])
    }

    /// Vector field with one row per face, either `uniform (x y z)`
    /// or `nonuniform List<vector> N((x y z) ...)`
    ///
    /// # Errors
    /// Keyword missing, malformed, or list length differs from `n_faces`.
    pub fn get_vector_field(&self, key: &str, n_faces: usize) -> Result<Array2<f64>, ConfigError> {
        if self.is_uniform(key)? {
            let v = self.get_uniform_vector(key)?;
            let mut field = Array2::<f64>::zeros((n_faces, 3));
            for mut row in field.rows_mut() {
                row.assign(&ndarray::aview1(&v));
            }
            return Ok(field);
        }
        let field = self.get_nonuniform_vectors(key)?;
        if field.nrows() != n_faces {
            return Err(ConfigError::InvalidValue {
                key: key.to_string(),
                reason: format!("size {} is not equal to {} faces", field.nrows(), n_faces),
            });
        }
        Ok(field)
    }

    /// True if the entry starts with `uniform`
    ///
    /// # Errors
    /// Keyword missing or a sub-dictionary.
    pub fn is_uniform(&self, key: &str) -> Result<bool, ConfigError> {
        Ok(matches!(self.lookup(key)?.first(), Some(Token::Word(w)) if w == "uniform"))
    }

    /// Vectors of `nonuniform List<vector> N((x y z) ...)`, one row each
    ///
    /// # Errors
    /// Keyword missing or not a nonuniform vector list.
    pub fn get_nonuniform_vectors(&self, key: &str) -> Result<Array2<f64>, ConfigError> {
        let mut stream = TokenReader::new(key, self.lookup(key)?, "vector field");
        stream.keyword("nonuniform")?;
        stream.keyword("List<vector>")?;
        let list = stream.list(3)?;
        stream.finish()?;
        let mut field = Array2::<f64>::zeros((list.len(), 3));
        for (mut row, v) in field.rows_mut().into_iter().zip(list.iter()) {
            row.assign(&ndarray::aview1(v));
        }
        Ok(field)
    }

    /// Add single number
    pub fn add_scalar(&mut self, key: &str, value: f64) {
        self.add(key, Entry::Stream(vec![Token::Number(value)]));
    }

    /// Add single word
    pub fn add_word(&mut self, key: &str, word: &str) {
        self.add(key, Entry::Stream(vec![Token::Word(word.to_string())]));
    }

    /// Add list of complex numbers
    pub fn add_complex_list(&mut self, key: &str, list: &Array1<Complex<f64>>) {
        let mut tokens = vec![Token::Open];
        for c in list.iter() {
            tokens.extend(vec![Token::Open, Token::Number(c.re), Token::Number(c.im), Token::Close]);
        }
        tokens.push(Token::Close);
        self.add(key, Entry::Stream(tokens));
    }

    /// Add vector field, written uniform if all rows are equal
    pub fn add_vector_field(&mut self, key: &str, field: &Array2<f64>) {
        let first = field.rows().into_iter().next();
        let uniform = match first {
            Some(first) => field.rows().into_iter().all(|row| row == first),
            None => false,
        };
        let vector = |tokens: &mut Vec<Token>, row: ndarray::ArrayView1<f64>| {
            tokens.push(Token::Open);
            tokens.extend(row.iter().map(|x| Token::Number(*x)));
            tokens.push(Token::Close);
        };
        let mut tokens = Vec::new();
        match first {
            Some(first) if uniform => {
                tokens.push(Token::Word("uniform".to_string()));
                vector(&mut tokens, first);
            }
            _ => {
                tokens.push(Token::Word("nonuniform".to_string()));
                tokens.push(Token::Word("List<vector>".to_string()));
                tokens.push(Token::Number(field.nrows() as f64));
                tokens.push(Token::Open);
                for row in field.rows() {
                    vector(&mut tokens, row);
                }
                tokens.push(Token::Close);
            }
        }
        self.add(key, Entry::Stream(tokens));
    }

    /// Add sub-dictionary
    pub fn add_dict(&mut self, key: &str, dict: Dictionary) {
        self.add(key, Entry::Dict(dict));
    }

    fn write_indented(&self, f: &mut fmt::Formatter, indent: usize) -> fmt::Result {
        let pad = " ".repeat(indent);
        for (key, entry) in &self.entries {
            match entry {
                Entry::Stream(tokens) => {
                    writeln!(
                        f,
                        "{}{:<width$} {};",
                        pad,
                        key,
                        format_tokens(tokens),
                        width = KEYWORD_WIDTH - 1
                    )?;
                }
                Entry::Dict(dict) => {
                    writeln!(f, "{}{}", pad, key)?;
                    writeln!(f, "{}{{", pad)?;
                    dict.write_indented(f, indent + 4)?;
                    writeln!(f, "{}}}", pad)?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

impl FromStr for Dictionary {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lexemes = tokenize(s)?;
        let mut pos = 0;
        parse_dict(&lexemes, &mut pos, None)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Word(w) if w.chars().any(is_delimiter) => write!(f, "\"{}\"", w),
            Token::Word(w) => write!(f, "{}", w),
            Token::Number(x) => write!(f, "{}", x),
            Token::Open => write!(f, "("),
            Token::Close => write!(f, ")"),
        }
    }
}

fn format_tokens(tokens: &[Token]) -> String {
    let mut s = String::new();
    let mut prev: Option<&Token> = None;
    for t in tokens {
        let glue = matches!(prev, None | Some(Token::Open)) || *t == Token::Close;
        if !glue {
            s.push(' ');
        }
        s.push_str(&t.to_string());
        prev = Some(t);
    }
    s
}

fn parse_error(key: &str, expected: &'static str) -> ConfigError {
    ConfigError::Parse {
        key: key.to_string(),
        expected,
    }
}

/// Cursor over the tokens of one entry
struct TokenReader<'a> {
    key: &'a str,
    tokens: &'a [Token],
    pos: usize,
    expected: &'static str,
}

impl<'a> TokenReader<'a> {
    fn new(key: &'a str, tokens: &'a [Token], expected: &'static str) -> Self {
        TokenReader {
            key,
            tokens,
            pos: 0,
            expected,
        }
    }

    fn error(&self) -> ConfigError {
        parse_error(self.key, self.expected)
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Result<&'a Token, ConfigError> {
        let t = self.tokens.get(self.pos).ok_or_else(|| self.error())?;
        self.pos += 1;
        Ok(t)
    }

    fn expect(&mut self, token: &Token) -> Result<(), ConfigError> {
        if self.next()? == token {
            Ok(())
        } else {
            Err(self.error())
        }
    }

    fn keyword(&mut self, word: &str) -> Result<(), ConfigError> {
        match self.next()? {
            Token::Word(w) if w == word => Ok(()),
            _ => Err(self.error()),
        }
    }

    fn number(&mut self) -> Result<f64, ConfigError> {
        match self.next()? {
            Token::Number(x) => Ok(*x),
            _ => Err(self.error()),
        }
    }

    /// `(x0 x1 ...)` with `width` numbers
    fn tuple(&mut self, width: usize) -> Result<Vec<f64>, ConfigError> {
        self.expect(&Token::Open)?;
        let v = (0..width)
            .map(|_| self.number())
            .collect::<Result<Vec<f64>, ConfigError>>()?;
        self.expect(&Token::Close)?;
        Ok(v)
    }

    /// `[N](tuple tuple ...)`
    fn list(&mut self, width: usize) -> Result<Vec<Vec<f64>>, ConfigError> {
        let size = match self.peek() {
            Some(Token::Number(n)) => {
                if n.fract() != 0. || *n < 0. {
                    return Err(self.error());
                }
                self.pos += 1;
                Some(*n as usize)
            }
            _ => None,
        };
        self.expect(&Token::Open)?;
        let mut list = Vec::new();
        while self.peek() == Some(&Token::Open) {
            list.push(self.tuple(width)?);
        }
        self.expect(&Token::Close)?;
        if let Some(n) = size {
            if n != list.len() {
                return Err(ConfigError::InvalidValue {
                    key: self.key.to_string(),
                    reason: format!("list size {} but {} elements", n, list.len()),
                });
            }
        }
        Ok(list)
    }

    fn finish(&self) -> Result<(), ConfigError> {
        if self.pos == self.tokens.len() {
            Ok(())
        } else {
            Err(self.error())
        }
    }
}

/// Lexical unit of a dictionary text
#[derive(Debug, Clone, PartialEq)]
enum Lexeme {
    Token(Token),
    End,
    BeginDict,
    EndDict,
}

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || "(){};\"".contains(c)
}

/// True if the next two characters open a comment
fn starts_comment(chars: &std::iter::Peekable<std::str::Chars>) -> bool {
    let mut ahead = chars.clone();
    ahead.next();
    matches!(ahead.next(), Some('/') | Some('*'))
}

fn classify(word: String) -> Token {
    let numeric_start = word
        .chars()
        .next()
        .map_or(false, |c| c.is_ascii_digit() || "+-.".contains(c));
    if numeric_start {
        if let Ok(x) = word.parse::<f64>() {
            return Token::Number(x);
        }
    }
    Token::Word(word)
}

fn tokenize(text: &str) -> Result<Vec<(Lexeme, usize)>, ConfigError> {
    let mut lexemes = Vec::new();
    let mut line = 1;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\n' => line += 1,
            c if c.is_whitespace() => (),
            '/' if chars.peek() == Some(&'/') => {
                while let Some(&c) = chars.peek() {
                    if c == '\n' {
                        break;
                    }
                    chars.next();
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                let start = line;
                chars.next();
                let mut closed = false;
                while let Some(c) = chars.next() {
                    if c == '\n' {
                        line += 1;
                    } else if c == '*' && chars.peek() == Some(&'/') {
                        chars.next();
                        closed = true;
                        break;
                    }
                }
                if !closed {
                    return Err(ConfigError::Syntax {
                        line: start,
                        reason: "unterminated comment".to_string(),
                    });
                }
            }
            '(' => lexemes.push((Lexeme::Token(Token::Open), line)),
            ')' => lexemes.push((Lexeme::Token(Token::Close), line)),
            '{' => lexemes.push((Lexeme::BeginDict, line)),
            '}' => lexemes.push((Lexeme::EndDict, line)),
            ';' => lexemes.push((Lexeme::End, line)),
            '"' => {
                let start = line;
                let mut word = String::new();
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some(c) => {
                            if c == '\n' {
                                line += 1;
                            }
                            word.push(c);
                        }
                        None => {
                            return Err(ConfigError::Syntax {
                                line: start,
                                reason: "unterminated string".to_string(),
                            })
                        }
                    }
                }
                lexemes.push((Lexeme::Token(Token::Word(word)), start));
            }
            c => {
                let mut word = c.to_string();
                while let Some(&c) = chars.peek() {
                    if is_delimiter(c) || (c == '/' && starts_comment(&chars)) {
                        break;
                    }
                    word.push(c);
                    chars.next();
                }
                lexemes.push((Lexeme::Token(classify(word)), line));
            }
        }
    }
    Ok(lexemes)
}

/// Parse entries until end of input or, for a sub-dictionary opened
/// on line `open`, until the matching brace.
fn parse_dict(
    lexemes: &[(Lexeme, usize)],
    pos: &mut usize,
    open: Option<usize>,
) -> Result<Dictionary, ConfigError> {
    let mut dict = Dictionary::new();
    loop {
        let (lexeme, line) = match lexemes.get(*pos) {
            Some((lexeme, line)) => (lexeme, *line),
            None => {
                return match open {
                    Some(line) => Err(ConfigError::Syntax {
                        line,
                        reason: "missing '}'".to_string(),
                    }),
                    None => Ok(dict),
                }
            }
        };
        *pos += 1;
        let key = match lexeme {
            Lexeme::EndDict if open.is_some() => return Ok(dict),
            Lexeme::Token(Token::Word(key)) => key,
            _ => {
                return Err(ConfigError::Syntax {
                    line,
                    reason: "expected keyword".to_string(),
                })
            }
        };
        if let Some((Lexeme::BeginDict, _)) = lexemes.get(*pos) {
            *pos += 1;
            let sub = parse_dict(lexemes, pos, Some(line))?;
            dict.add(key, Entry::Dict(sub));
            continue;
        }
        let mut tokens = Vec::new();
        let mut depth: i32 = 0;
        loop {
            match lexemes.get(*pos) {
                Some((Lexeme::End, l)) => {
                    *pos += 1;
                    if depth != 0 {
                        return Err(ConfigError::Syntax {
                            line: *l,
                            reason: format!("unbalanced parentheses in entry '{}'", key),
                        });
                    }
                    break;
                }
                Some((Lexeme::Token(t), l)) => {
                    *pos += 1;
                    match t {
                        Token::Open => depth += 1,
                        Token::Close => depth -= 1,
                        _ => (),
                    }
                    if depth < 0 {
                        return Err(ConfigError::Syntax {
                            line: *l,
                            reason: format!("unbalanced parentheses in entry '{}'", key),
                        });
                    }
                    tokens.push(t.clone());
                }
                _ => {
                    return Err(ConfigError::Syntax {
                        line,
                        reason: format!("missing ';' after entry '{}'", key),
                    })
                }
            }
        }
        dict.add(key, Entry::Stream(tokens));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    const INLET: &str = r#"
        // pulsatile inlet
        inlet
        {
            type       fourierParabolic;
            Q       ( (3 0) (0 2) (2 4) ); // list of complex values
            omega   7.854;
            /* optional
               dummy */
            value      uniform (0 0 0);
        }
    "#;

    #[test]
    fn test_parse_inlet() {
        let dict: Dictionary = INLET.parse().unwrap();
        let inlet = dict.sub_dict("inlet").unwrap();
        assert_eq!(inlet.get_word("type").unwrap(), "fourierParabolic");
        assert_eq!(inlet.get_scalar("omega").unwrap(), 7.854);
        let q = inlet.get_complex_list("Q").unwrap();
        assert_eq!(
            q,
            array![Complex::new(3., 0.), Complex::new(0., 2.), Complex::new(2., 4.)]
        );
        assert_eq!(inlet.get_uniform_vector("value").unwrap(), [0., 0., 0.]);
        assert_eq!(inlet.keys().collect::<Vec<_>>(), vec!["type", "Q", "omega", "value"]);
    }

    #[test]
    fn test_size_prefixed_list() {
        let dict: Dictionary = "Q 2((1 0)(0.5 -0.5));".parse().unwrap();
        let q = dict.get_complex_list("Q").unwrap();
        assert_eq!(q, array![Complex::new(1., 0.), Complex::new(0.5, -0.5)]);
        let dict: Dictionary = "Q 3((1 0)(0.5 -0.5));".parse().unwrap();
        assert!(matches!(
            dict.get_complex_list("Q"),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_missing_and_malformed() {
        let dict: Dictionary = "omega fast; Q ((1 2 3));".parse().unwrap();
        assert!(matches!(dict.get_scalar("nu"), Err(ConfigError::Missing(_))));
        assert!(matches!(
            dict.get_scalar("omega"),
            Err(ConfigError::Parse { .. })
        ));
        assert!(matches!(
            dict.get_complex_list("Q"),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_syntax_errors_report_line() {
        let err = "a 1;\nb (1 2;\n".parse::<Dictionary>().unwrap_err();
        assert!(matches!(err, ConfigError::Syntax { line: 2, .. }));
        let err = "a 1;\nb 2".parse::<Dictionary>().unwrap_err();
        assert!(matches!(err, ConfigError::Syntax { line: 2, .. }));
        let err = "inlet\n{\n a 1;\n".parse::<Dictionary>().unwrap_err();
        assert!(matches!(err, ConfigError::Syntax { line: 1, .. }));
        let err = "a 1; /* open".parse::<Dictionary>().unwrap_err();
        assert!(matches!(err, ConfigError::Syntax { .. }));
    }

    #[test]
    fn test_comment_right_after_word() {
        let dict: Dictionary = "omega 7.854// note\n; type fixedValue/* note */; path a/b;"
            .parse()
            .unwrap();
        assert_eq!(dict.get_scalar("omega").unwrap(), 7.854);
        assert_eq!(dict.get_word("type").unwrap(), "fixedValue");
        assert_eq!(dict.get_word("path").unwrap(), "a/b");
    }

    #[test]
    fn test_later_entry_overrides() {
        let dict: Dictionary = "omega 1; omega 2;".parse().unwrap();
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get_scalar("omega").unwrap(), 2.);
    }

    #[test]
    fn test_write_and_read_back() {
        let mut inlet = Dictionary::new();
        inlet.add_word("type", "fourierParabolic");
        let q = array![Complex::new(0.1, 0.), Complex::new(-1e-7, 2.5e10)];
        inlet.add_complex_list("Q", &q);
        inlet.add_scalar("omega", 7.854);
        let mut dict = Dictionary::new();
        dict.add_dict("inlet", inlet);

        let text = dict.to_string();
        assert!(text.contains("    omega           7.854;"));
        let read: Dictionary = text.parse().unwrap();
        assert_eq!(read, dict);
        assert_eq!(read.sub_dict("inlet").unwrap().get_complex_list("Q").unwrap(), q);
    }

    #[test]
    fn test_vector_field() {
        let mut dict = Dictionary::new();
        let uniform = array![[1., 2., 3.], [1., 2., 3.]];
        dict.add_vector_field("value", &uniform);
        assert_eq!(dict.to_string(), format!("{:<15} uniform (1 2 3);\n", "value"));
        assert_eq!(dict.get_vector_field("value", 4).unwrap().nrows(), 4);

        let field = array![[1., 2., 3.], [0., -1., 0.5]];
        dict.add_vector_field("value", &field);
        let read: Dictionary = dict.to_string().parse().unwrap();
        assert_eq!(read.get_vector_field("value", 2).unwrap(), field);
        assert!(read.get_vector_field("value", 3).is_err());
    }

    #[test]
    fn test_quoted_word() {
        let dict: Dictionary = "name \"two words\";".parse().unwrap();
        assert_eq!(dict.get_word("name").unwrap(), "two words");
        assert!(dict.to_string().contains("\"two words\""));
    }
}
