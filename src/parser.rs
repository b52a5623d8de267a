//! Line parser for the adjacency-list text format.
//!
//! A line looks like `<label> <id><delim><weight> <id><delim><weight> ...`.
//! The label is scanned and discarded; every `id<delim>weight` pair becomes
//! one [`Vertex`] in the current slot.
use log::trace;
use std::fmt::Display;

use crate::error::FormatViolation;
use crate::graph::Vertex;

pub const DEFAULT_DELIMITER: char = ',';

/// What to do with a token that should be a number but is not.
///
/// Delimiter mismatches are always violations, whatever the policy.
#[derive(Copy, Debug, Clone, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum MalformedTokenPolicy {
    /// Stop the build and report a format violation.
    #[default]
    Reject,
    /// Stop reading the current line and keep going with the next one.
    /// A neighbor whose weight is missing keeps weight 0.
    Tolerate,
}

impl MalformedTokenPolicy {
    fn settle(self, violation: FormatViolation) -> Result<(), FormatViolation> {
        match self {
            MalformedTokenPolicy::Reject => Err(violation),
            MalformedTokenPolicy::Tolerate => {
                trace!("Tolerated: {violation}");
                Ok(())
            }
        }
    }
}

impl Display for MalformedTokenPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedTokenPolicy::Reject => write!(f, "reject"),
            MalformedTokenPolicy::Tolerate => write!(f, "tolerate"),
        }
    }
}

/// Parser settings shared by every line of a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Separates a neighbor id from its weight. Should not be a digit, a
    /// sign or whitespace, see [`is_valid_delimiter`].
    pub delimiter: char,
    pub policy: MalformedTokenPolicy,
}

impl ParserConfig {
    pub fn new(delimiter: char) -> Self {
        ParserConfig {
            delimiter,
            ..Default::default()
        }
    }

    pub fn with_policy(self, policy: MalformedTokenPolicy) -> Self {
        ParserConfig { policy, ..self }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            delimiter: DEFAULT_DELIMITER,
            policy: MalformedTokenPolicy::default(),
        }
    }
}

/// A delimiter that can be told apart from the numbers around it.
pub fn is_valid_delimiter(delimiter: char) -> bool {
    !(delimiter.is_ascii_digit()
        || delimiter == '+'
        || delimiter == '-'
        || delimiter.is_whitespace())
}

/// Parses `line` and appends its neighbors to `slot`.
///
/// On a violation the neighbors read so far stay in `slot`. When the
/// violation comes after a neighbor id (delimiter mismatch, missing or bad
/// weight) that neighbor is appended too, with weight 0.
pub fn parse_line(
    line: &str,
    config: &ParserConfig,
    slot: &mut Vec<Vertex>,
) -> Result<(), FormatViolation> {
    let mut tokens = Tokens::new(line);

    // Owner label, never stored.
    match tokens.next_number() {
        Scan::Number(_) => {}
        Scan::End => return Ok(()),
        Scan::Malformed { column, token } => {
            return config
                .policy
                .settle(FormatViolation::MalformedToken { column, token })
        }
    }

    loop {
        let mut neighbor = Vertex::default();
        neighbor.id = match tokens.next_number() {
            Scan::Number(id) => id,
            Scan::End => return Ok(()),
            Scan::Malformed { column, token } => {
                return config
                    .policy
                    .settle(FormatViolation::MalformedToken { column, token })
            }
        };

        let column = tokens.column();
        match tokens.peek() {
            Some(c) if c == config.delimiter => tokens.bump(c),
            found => {
                slot.push(neighbor);
                return Err(FormatViolation::UnexpectedCharacter {
                    column,
                    expected: config.delimiter,
                    found,
                });
            }
        }

        match tokens.next_number() {
            Scan::Number(weight) => {
                neighbor.weight = weight;
                trace!("Neighbor {:?}", neighbor);
                slot.push(neighbor);
            }
            Scan::End => {
                slot.push(neighbor);
                return config.policy.settle(FormatViolation::MissingWeight {
                    column: tokens.column(),
                });
            }
            Scan::Malformed { column, token } => {
                slot.push(neighbor);
                return config
                    .policy
                    .settle(FormatViolation::MalformedToken { column, token });
            }
        }
    }
}

enum Scan {
    Number(i32),
    End,
    Malformed { column: usize, token: String },
}

/// Cursor over one line. Numbers are an optional sign followed by ASCII
/// digits, preceded by any amount of ASCII whitespace.
struct Tokens<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> Tokens<'a> {
    fn new(line: &'a str) -> Self {
        Tokens { line, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.line[self.pos..]
    }

    /// 1-based character column of the cursor.
    fn column(&self) -> usize {
        self.line[..self.pos].chars().count() + 1
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self, c: char) {
        self.pos += c.len_utf8();
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        let trimmed = rest.trim_start_matches(|c: char| c.is_ascii_whitespace());
        self.pos += rest.len() - trimmed.len();
    }

    fn next_number(&mut self) -> Scan {
        self.skip_whitespace();
        let rest = self.rest();
        if rest.is_empty() {
            return Scan::End;
        }

        let bytes = rest.as_bytes();
        let sign = usize::from(matches!(bytes[0], b'+' | b'-'));
        let digits = bytes[sign..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        let len = sign + digits;

        if digits > 0 {
            // Only overflow can make this fail.
            if let Ok(value) = rest[..len].parse::<i32>() {
                self.pos += len;
                return Scan::Number(value);
            }
        }

        let token_len = rest
            .find(|c: char| c.is_ascii_whitespace())
            .unwrap_or(rest.len());
        Scan::Malformed {
            column: self.column(),
            token: rest[..token_len].to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str, config: &ParserConfig) -> (Vec<(i32, i32)>, Result<(), FormatViolation>) {
        let mut slot = Vec::new();
        let result = parse_line(line, config, &mut slot);
        (slot.iter().map(|v| (v.id, v.weight)).collect(), result)
    }

    #[test]
    fn reads_pairs_in_order() {
        let (slot, result) = parse("7 3,10 5,20", &ParserConfig::default());
        assert!(result.is_ok());
        assert_eq!(slot, vec![(3, 10), (5, 20)]);
    }

    #[test]
    fn label_is_discarded() {
        let (a, _) = parse("1 2,5", &ParserConfig::default());
        let (b, _) = parse("999 2,5", &ParserConfig::default());
        assert_eq!(a, b);
    }

    #[test]
    fn empty_and_label_only_lines() {
        for line in ["", "   ", "4", "4   \t"] {
            let (slot, result) = parse(line, &ParserConfig::default());
            assert!(result.is_ok(), "{line:?}");
            assert!(slot.is_empty(), "{line:?}");
        }
    }

    #[test]
    fn wrong_delimiter_keeps_partial_neighbor() {
        let (slot, result) = parse("1 2;5", &ParserConfig::default());
        assert_eq!(slot, vec![(2, 0)]);
        assert_eq!(
            result,
            Err(FormatViolation::UnexpectedCharacter {
                column: 4,
                expected: ',',
                found: Some(';'),
            })
        );
    }

    #[test]
    fn whitespace_before_delimiter_is_a_violation() {
        let (slot, result) = parse("1 2,5 3 ,9", &ParserConfig::default());
        assert_eq!(slot, vec![(2, 5), (3, 0)]);
        assert!(matches!(
            result,
            Err(FormatViolation::UnexpectedCharacter { found: Some(' '), .. })
        ));
    }

    #[test]
    fn id_at_end_of_line_is_a_violation() {
        let (slot, result) = parse("1 2,5 3", &ParserConfig::default());
        assert_eq!(slot, vec![(2, 5), (3, 0)]);
        assert!(matches!(
            result,
            Err(FormatViolation::UnexpectedCharacter { found: None, column: 8, .. })
        ));
    }

    #[test]
    fn custom_delimiter() {
        let config = ParserConfig::new(';');
        let (slot, result) = parse("1 2;5 3;9", &config);
        assert!(result.is_ok());
        assert_eq!(slot, vec![(2, 5), (3, 9)]);

        let (slot, result) = parse("1 2,5", &config);
        assert_eq!(slot, vec![(2, 0)]);
        assert!(result.is_err());
    }

    #[test]
    fn signed_numbers_and_crlf() {
        let (slot, result) = parse("-1 +2,-5 3,+9\r", &ParserConfig::default());
        assert!(result.is_ok());
        assert_eq!(slot, vec![(2, -5), (3, 9)]);
    }

    #[test]
    fn reject_malformed_tokens() {
        let config = ParserConfig::default();

        let (slot, result) = parse("x 2,5", &config);
        assert!(slot.is_empty());
        assert_eq!(
            result,
            Err(FormatViolation::MalformedToken { column: 1, token: "x".to_string() })
        );

        let (slot, result) = parse("1 2,5 abc,3", &config);
        assert_eq!(slot, vec![(2, 5)]);
        assert_eq!(
            result,
            Err(FormatViolation::MalformedToken { column: 7, token: "abc,3".to_string() })
        );

        let (slot, result) = parse("1 2,zz", &config);
        assert_eq!(slot, vec![(2, 0)]);
        assert!(matches!(result, Err(FormatViolation::MalformedToken { column: 5, .. })));

        let (slot, result) = parse("1 2,", &config);
        assert_eq!(slot, vec![(2, 0)]);
        assert_eq!(result, Err(FormatViolation::MissingWeight { column: 5 }));
    }

    #[test]
    fn tolerate_malformed_tokens() {
        let config = ParserConfig::default().with_policy(MalformedTokenPolicy::Tolerate);

        let (slot, result) = parse("1 2,5 abc,3 4,4", &config);
        assert!(result.is_ok());
        assert_eq!(slot, vec![(2, 5)]);

        let (slot, result) = parse("1 2,", &config);
        assert!(result.is_ok());
        assert_eq!(slot, vec![(2, 0)]);

        // Delimiter mismatches are never tolerated.
        let (_, result) = parse("1 2;5", &config);
        assert!(result.is_err());
    }

    #[test]
    fn overflow_is_malformed() {
        let (slot, result) = parse("1 2,99999999999", &ParserConfig::default());
        assert_eq!(slot, vec![(2, 0)]);
        assert!(matches!(result, Err(FormatViolation::MalformedToken { .. })));
    }

    #[test]
    fn multibyte_delimiter() {
        let (slot, result) = parse("1 2→5 3→9", &ParserConfig::new('→'));
        assert!(result.is_ok());
        assert_eq!(slot, vec![(2, 5), (3, 9)]);
    }

    #[test]
    fn delimiter_validation() {
        assert!(is_valid_delimiter(','));
        assert!(is_valid_delimiter(';'));
        assert!(is_valid_delimiter(':'));
        for bad in ['0', '7', '+', '-', ' ', '\t'] {
            assert!(!is_valid_delimiter(bad), "{bad:?}");
        }
    }
}
