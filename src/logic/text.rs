use std::io::BufRead;

use indexmap::IndexSet;
use thiserror::Error;

use super::clause::Clause;
use super::literal::{GRID_LIMIT, Label, Literal, Position};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: empty literal")]
    EmptyLiteral { line: usize },
    #[error("line {line}: invalid label '{name}'")]
    InvalidLabel { line: usize, name: String },
    #[error("line {line}: invalid position '{text}', expected x,y")]
    InvalidPosition { line: usize, text: String },
    #[error("line {line}: coordinate {value} exceeds grid limit {limit}")]
    CoordinateOutOfRange { line: usize, value: u32, limit: u8 },
    #[error("line {line}: read failed: {message}")]
    Io { line: usize, message: String },
    #[error("expected exactly one clause, found {found}")]
    ClauseCount { found: usize },
}

/// Parses a single clause such as `~wumpus@1,2 | stench@1,1`.
pub fn parse_clause(s: &str) -> Result<Clause, ParseError> {
    let clauses = parse_clauses(s)?;
    if clauses.len() != 1 {
        return Err(ParseError::ClauseCount {
            found: clauses.len(),
        });
    }
    Ok(clauses.into_iter().next().unwrap_or_default())
}

pub fn parse_clauses(s: &str) -> Result<IndexSet<Clause>, ParseError> {
    parse_clauses_reader(std::io::Cursor::new(s.as_bytes()))
}

/// Reads one clause per line. Repeated clauses keep their first position.
pub fn parse_clauses_reader<R: BufRead>(r: R) -> Result<IndexSet<Clause>, ParseError> {
    let mut clauses = IndexSet::new();
    for (idx, line) in r.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| ParseError::Io {
            line: line_no,
            message: e.to_string(),
        })?;
        let clean = strip_comment(&line).trim();
        if clean.is_empty() {
            continue;
        }
        clauses.insert(parse_line(clean, line_no)?);
    }
    Ok(clauses)
}

pub fn write_clauses(clauses: &IndexSet<Clause>) -> String {
    let mut out = String::new();
    for clause in clauses {
        out.push_str(&clause.to_string());
        out.push('\n');
    }
    out
}

fn parse_line(s: &str, line: usize) -> Result<Clause, ParseError> {
    if s == "[]" {
        return Ok(Clause::empty());
    }
    s.split('|')
        .map(|part| parse_literal(part.trim(), line))
        .collect::<Result<Clause, _>>()
}

fn parse_literal(s: &str, line: usize) -> Result<Literal, ParseError> {
    if s.is_empty() {
        return Err(ParseError::EmptyLiteral { line });
    }
    let (negated, rest) = match s.strip_prefix('~') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, s),
    };
    let (name, position) = match rest.split_once('@') {
        Some((name, pos)) => (name.trim(), parse_position(pos.trim(), line)?),
        None => (rest, Position::default()),
    };
    if !is_valid_name(name) {
        return Err(ParseError::InvalidLabel {
            line,
            name: name.to_owned(),
        });
    }
    Ok(Literal::new(Label::from_name(name), position, negated))
}

fn parse_position(s: &str, line: usize) -> Result<Position, ParseError> {
    let invalid = || ParseError::InvalidPosition {
        line,
        text: s.to_owned(),
    };
    let (x, y) = s.split_once(',').ok_or_else(invalid)?;
    let x = x.trim().parse::<u32>().map_err(|_| invalid())?;
    let y = y.trim().parse::<u32>().map_err(|_| invalid())?;
    Ok(Position::new(coordinate(x, line)?, coordinate(y, line)?))
}

fn coordinate(value: u32, line: usize) -> Result<u8, ParseError> {
    if value > GRID_LIMIT as u32 {
        return Err(ParseError::CoordinateOutOfRange {
            line,
            value,
            limit: GRID_LIMIT,
        });
    }
    Ok(value as u8)
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    }
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
