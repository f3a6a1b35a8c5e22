//! Problem files in native syntax and in TPTP.

use crate::Error;
use log::info;
use std::fmt::{self, Display};
use std::path::{Path, PathBuf};
use tableau::role::RoleMap;
use tableau::szs::{self, NoSuccessKind};
use tableau::{Form, Op, Sequent};

/// Syntax error in a formula, with 1-based line and column.
#[derive(Debug, PartialEq, Eq)]
pub struct ParseError {
    pub line: usize,
    pub column: usize,
    pub expected: &'static str,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (line, col) = (self.line, self.column);
        write!(f, "line {}, column {}: expected {}", line, col, self.expected)
    }
}

impl std::error::Error for ParseError {}

/// Recursive-descent parser for a single formula.
///
/// From weakest to strongest binding:
/// `>` (right-associative), `#`, `&` (both left-associative), `-`.
struct Parser {
    chars: Vec<char>,
    pos: usize,
    line: usize,
}

impl Parser {
    fn new(line: usize, s: &str) -> Self {
        let chars = s.chars().collect();
        Self { chars, pos: 0, line }
    }

    fn error(&self, expected: &'static str) -> ParseError {
        ParseError {
            line: self.line,
            column: self.pos + 1,
            expected,
        }
    }

    fn peek(&mut self) -> Option<char> {
        while self.chars.get(self.pos).map_or(false, |c| c.is_whitespace()) {
            self.pos += 1;
        }
        self.chars.get(self.pos).copied()
    }

    fn eat(&mut self, c: char) -> bool {
        let eaten = self.peek() == Some(c);
        if eaten {
            self.pos += 1;
        }
        eaten
    }

    fn formula(&mut self) -> Result<Form, ParseError> {
        let fm = self.imp()?;
        match self.peek() {
            None => Ok(fm),
            Some(_) => Err(self.error("connective or end of line")),
        }
    }

    fn imp(&mut self) -> Result<Form, ParseError> {
        let l = self.bin(Op::Disj)?;
        if self.eat(Op::Impl.token()) {
            Ok(Form::imp(l, self.imp()?))
        } else {
            Ok(l)
        }
    }

    /// Parse a left-associative sequence of `&` or `#`.
    fn bin(&mut self, op: Op) -> Result<Form, ParseError> {
        let next = |p: &mut Self| match op {
            Op::Disj => p.bin(Op::Conj),
            _ => p.unary(),
        };
        let mut l = next(self)?;
        while self.eat(op.token()) {
            l = Form::bin(l, op, next(self)?);
        }
        Ok(l)
    }

    fn unary(&mut self) -> Result<Form, ParseError> {
        match self.peek() {
            Some(tableau::form::NEG) => {
                self.pos += 1;
                Ok(-self.unary()?)
            }
            Some('(') => {
                self.pos += 1;
                let fm = self.imp()?;
                if self.eat(')') {
                    Ok(fm)
                } else {
                    Err(self.error("\")\""))
                }
            }
            Some(c) if c.is_ascii_lowercase() => {
                self.pos += 1;
                Ok(Form::Atom(c))
            }
            _ => Err(self.error("formula")),
        }
    }
}

/// Parse a single formula, reporting errors in the given line.
pub fn parse_formula(line: usize, s: &str) -> Result<Form, ParseError> {
    Parser::new(line, s).formula()
}

/// Parse one formula per line, skipping empty lines and `%` comments.
///
/// ~~~
/// let sequent = tabprove::parse::parse_str("b\na > b\na").unwrap();
/// assert_eq!(sequent.unwrap().to_string(), "a > b, a ⊢ b");
/// ~~~
pub fn parse_str(s: &str) -> Result<Option<Sequent>, ParseError> {
    let lines = s.lines().enumerate().map(|(i, l)| (i + 1, l.trim()));
    let lines = lines.filter(|(_, l)| !l.is_empty() && !l.starts_with('%'));
    let mut forms = lines.map(|(i, l)| parse_formula(i, l));
    let conclusion = match forms.next() {
        Some(fm) => fm?,
        None => return Ok(None),
    };
    let premises = forms.collect::<Result<_, _>>()?;
    Ok(Some(Sequent::new(conclusion, premises)))
}

fn read_file(filename: &Path) -> std::io::Result<Vec<u8>> {
    std::fs::read(filename).or_else(|e| {
        let tptp = std::env::var("TPTP").or(Err(e))?;
        let mut path = PathBuf::from(tptp);
        path.push(filename);
        std::fs::read(path)
    })
}

fn parse_tptp_include(filename: &str, forms: &mut RoleMap<Vec<Form>>) -> Result<(), NoSuccessKind> {
    info!("include {}", filename);
    let bytes = read_file(Path::new(filename)).map_err(|_| szs::OsError)?;
    tableau::tptp::parse(&bytes, forms, parse_tptp_include)
}

/// Parse a TPTP problem, loading included files relative to
/// the working directory or the `TPTP` environment variable.
pub fn parse_tptp(bytes: &[u8]) -> Result<Sequent, Error> {
    let mut forms = RoleMap::default();
    tableau::tptp::parse(bytes, &mut forms, parse_tptp_include)?;
    let sequent = forms.join();
    sequent.ok_or_else(|| Error::new(szs::InputError, "no conjecture".into()))
}

/// Read a sequent from a problem file.
pub fn parse_file(filename: &Path, tptp: bool) -> Result<Sequent, Error> {
    info!("loading {:?}", filename);
    let bytes = read_file(filename)?;
    if tptp {
        return parse_tptp(&bytes);
    }
    let s = std::str::from_utf8(&bytes).map_err(|e| Error::new(szs::SyntaxError, e.into()))?;
    match parse_str(s) {
        Ok(Some(sequent)) => Ok(sequent),
        Ok(None) => Err(tableau::Error::EmptySequent.into()),
        Err(e) => Err(Error::new(szs::SyntaxError, e.into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Form {
        parse_formula(1, s).unwrap()
    }

    fn at(a: char) -> Form {
        Form::Atom(a)
    }

    #[test]
    fn precedence() {
        let (a, b, c) = (at('a'), at('b'), at('c'));
        assert_eq!(parse("a & b # c"), (a.clone() & b.clone()) | c.clone());
        assert_eq!(parse("a # b & c"), a.clone() | (b.clone() & c.clone()));
        assert_eq!(parse("-a & b"), -a.clone() & b.clone());
        assert_eq!(parse("a # b > c"), Form::imp(a.clone() | b.clone(), c.clone()));
        assert_eq!(parse("--a"), --a.clone());
        assert_eq!(parse("-(a # b)"), -(a | b));
    }

    #[test]
    fn associativity() {
        let (a, b, c) = (at('a'), at('b'), at('c'));
        let imp = Form::imp(a.clone(), Form::imp(b.clone(), c.clone()));
        assert_eq!(parse("a > b > c"), imp);
        assert_eq!(parse("a&b&c"), (a.clone() & b.clone()) & c.clone());
        assert_eq!(parse("(a > b) > c"), Form::imp(Form::imp(a, b), c));
    }

    #[test]
    fn display_parses_back() {
        let fms = ["a > b > c", "(a > b) > c", "-(a & b) # c", "a & (b # c)", "--a"];
        for s in fms.iter() {
            let fm = parse(s);
            assert_eq!(parse(&fm.to_string()), fm);
        }
    }

    #[test]
    fn errors() {
        let err = |line, column, expected| ParseError {
            line,
            column,
            expected,
        };
        assert_eq!(parse_formula(1, "a &"), Err(err(1, 4, "formula")));
        assert_eq!(parse_formula(2, "(a # b"), Err(err(2, 7, "\")\"")));
        assert_eq!(parse_formula(3, "a b"), Err(err(3, 3, "connective or end of line")));
        assert_eq!(parse_formula(4, "A"), Err(err(4, 1, "formula")));
        assert_eq!(parse_str("a\n\nb c").err(), Some(err(3, 3, "connective or end of line")));
    }

    #[test]
    fn problems() {
        assert_eq!(parse_str("% nothing\n\n"), Ok(None));
        let sequent = parse_str("% syllogism\na > c\n a > b\nb > c\n").unwrap().unwrap();
        assert_eq!(sequent.premises.len(), 2);
        assert_eq!(sequent.conclusion, Form::imp(at('a'), at('c')));
    }

    #[test]
    fn tptp() {
        let problem = b"fof(ax, axiom, p => q).\nfof(c1, conjecture, p).\nfof(c2, conjecture, ~ q | r).\n";
        let sequent = parse_tptp(problem).ok().unwrap();
        assert_eq!(sequent.premises, [Form::imp(at('p'), at('q'))]);
        assert_eq!(sequent.conclusion, at('p') & (-at('q') | at('r')));
        assert_eq!(sequent.to_string(), "p > q ⊢ p & (-q # r)");

        let no_conjecture = parse_tptp(b"fof(ax, axiom, p).\n").err().unwrap();
        assert!(matches!(no_conjecture.get_kind(), szs::InputError));
        let predicate = parse_tptp(b"fof(c, conjecture, p(a)).\n").err().unwrap();
        assert!(matches!(predicate.get_kind(), szs::Inappropriate));
        let syntax = parse_tptp(b"fof(c, conjecture, p").err().unwrap();
        assert!(matches!(syntax.get_kind(), szs::SyntaxError));
        let typed = parse_tptp(b"tff(c, conjecture, p).\n").err().unwrap();
        assert!(matches!(typed.get_kind(), szs::Inappropriate));
    }

    #[test]
    fn tptp_refutation() {
        let problem = b"cnf(c1, axiom, p | q).\ncnf(c2, negated_conjecture, ~p).\ncnf(c3, negated_conjecture, ~q).\n";
        let sequent = parse_tptp(problem).ok().unwrap();
        assert_eq!(sequent.conclusion, Form::falsum());
        assert_eq!(sequent.premises.len(), 3);
        let prover = sequent.prove(Default::default()).unwrap();
        assert!(prover.tableau().is_closed());

        let satisfiable = b"cnf(c1, negated_conjecture, p | q).\n";
        let sequent = parse_tptp(satisfiable).ok().unwrap();
        let prover = sequent.prove(Default::default()).unwrap();
        assert!(!prover.tableau().is_closed());
    }

    #[test]
    fn comments_only() {
        let mut path = std::env::temp_dir();
        path.push(format!("tabprove-comments-{}.txt", std::process::id()));
        std::fs::write(&path, "% no formulas\n\n").unwrap();
        let err = parse_file(&path, false).err().unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err.get_kind(), szs::InputError));
    }
}
