//! Arithmetic expression evaluation with cell-reference substitution
//!
//! A recursive descent parser restricted to `+`, `-`, `*`, `/`, parentheses,
//! numeric literals, and cell references. The expression is tokenized first
//! and references are substituted per token, so a reference that is a prefix
//! of another (`A1` vs `A10`) can never corrupt the longer token.
//!
//! Grammar:
//!   expression --> term ( ("+" | "-") term )*
//!   term       --> factor ( ("*" | "/") factor )*
//!   factor     --> "-" factor | NUMBER | REFERENCE | "(" expression ")"

use tabula_core::{CellAddress, GridAccessor};

use crate::error::{FormulaError, FormulaResult};

/// Token types
#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Reference(CellAddress),
    Plus,
    Minus,
    Star,
    Slash,
    LeftParen,
    RightParen,
    Eof,
}

/// Evaluate an arithmetic expression against a grid.
///
/// Each cell reference token reads the referenced cell's current text; an
/// empty cell reads as 0, non-numeric text is an `InvalidOperand`.
pub fn eval_expr<G: GridAccessor>(text: &str, grid: &G) -> FormulaResult<f64> {
    let tokens = tokenize(text)?;
    let mut parser = ExprParser {
        tokens,
        pos: 0,
        grid,
    };

    let value = parser.expression()?;

    if parser.current() != &Token::Eof {
        return Err(FormulaError::Evaluation(format!(
            "unexpected token after expression in '{}'",
            text
        )));
    }

    Ok(value)
}

fn tokenize(text: &str) -> FormulaResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let bytes = text.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        let c = bytes[pos];

        match c {
            b' ' | b'\t' => {
                pos += 1;
            }
            b'+' => {
                tokens.push(Token::Plus);
                pos += 1;
            }
            b'-' => {
                tokens.push(Token::Minus);
                pos += 1;
            }
            b'*' => {
                tokens.push(Token::Star);
                pos += 1;
            }
            b'/' => {
                tokens.push(Token::Slash);
                pos += 1;
            }
            b'(' => {
                tokens.push(Token::LeftParen);
                pos += 1;
            }
            b')' => {
                tokens.push(Token::RightParen);
                pos += 1;
            }
            b'0'..=b'9' | b'.' => {
                let start = pos;
                while pos < bytes.len() && (bytes[pos].is_ascii_digit() || bytes[pos] == b'.') {
                    pos += 1;
                }
                let literal = &text[start..pos];
                let n: f64 = literal.parse().map_err(|_| {
                    FormulaError::Evaluation(format!("invalid number literal '{}'", literal))
                })?;
                tokens.push(Token::Number(n));
            }
            c if c.is_ascii_alphabetic() => {
                // A reference token is the full letters+digits run; scanning
                // it whole is what makes A10 immune to A1 substitution.
                let start = pos;
                while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
                    pos += 1;
                }
                while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                    pos += 1;
                }
                let token = &text[start..pos];
                let addr = CellAddress::parse(token)
                    .map_err(|_| FormulaError::InvalidReference(token.to_string()))?;
                tokens.push(Token::Reference(addr));
            }
            _ => {
                return Err(FormulaError::Evaluation(format!(
                    "unexpected character '{}'",
                    c as char
                )));
            }
        }
    }

    tokens.push(Token::Eof);
    Ok(tokens)
}

/// Recursive descent parser over a token sequence
struct ExprParser<'a, G: GridAccessor> {
    tokens: Vec<Token>,
    pos: usize,
    grid: &'a G,
}

impl<'a, G: GridAccessor> ExprParser<'a, G> {
    fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        token
    }

    fn expression(&mut self) -> FormulaResult<f64> {
        let mut value = self.term()?;

        loop {
            match self.current() {
                Token::Plus => {
                    self.advance();
                    value += self.term()?;
                }
                Token::Minus => {
                    self.advance();
                    value -= self.term()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn term(&mut self) -> FormulaResult<f64> {
        let mut value = self.factor()?;

        loop {
            match self.current() {
                Token::Star => {
                    self.advance();
                    value *= self.factor()?;
                }
                Token::Slash => {
                    self.advance();
                    let divisor = self.factor()?;
                    if divisor == 0.0 {
                        return Err(FormulaError::Evaluation("division by zero".into()));
                    }
                    value /= divisor;
                }
                _ => return Ok(value),
            }
        }
    }

    fn factor(&mut self) -> FormulaResult<f64> {
        match self.advance() {
            Token::Minus => Ok(-self.factor()?),
            Token::Number(n) => Ok(n),
            Token::Reference(addr) => self.resolve(addr),
            Token::LeftParen => {
                let value = self.expression()?;
                match self.advance() {
                    Token::RightParen => Ok(value),
                    _ => Err(FormulaError::Evaluation("expected ')'".into())),
                }
            }
            other => Err(FormulaError::Evaluation(format!(
                "unexpected token {:?}",
                other
            ))),
        }
    }

    /// Substitute one reference token with the referenced cell's value
    fn resolve(&self, addr: CellAddress) -> FormulaResult<f64> {
        let text = self.grid.cell_text(addr.row, addr.col);

        if text.is_empty() {
            return Ok(0.0);
        }

        text.trim().parse().map_err(|_| {
            FormulaError::InvalidOperand(format!("cell {} holds non-numeric '{}'", addr, text))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_core::Grid;

    fn grid_with(cells: &[(u32, u16, &str)]) -> Grid {
        let mut grid = Grid::new();
        for &(row, col, text) in cells {
            grid.set_cell_text(row, col, text);
        }
        grid
    }

    #[test]
    fn test_literals_and_precedence() {
        let grid = Grid::new();
        assert_eq!(eval_expr("1+2*3", &grid).unwrap(), 7.0);
        assert_eq!(eval_expr("(1+2)*3", &grid).unwrap(), 9.0);
        assert_eq!(eval_expr("10-4/2", &grid).unwrap(), 8.0);
        assert_eq!(eval_expr("-3+5", &grid).unwrap(), 2.0);
        assert_eq!(eval_expr("2.5*2", &grid).unwrap(), 5.0);
    }

    #[test]
    fn test_reference_substitution() {
        let grid = grid_with(&[(0, 0, "5"), (0, 1, "3")]);
        assert_eq!(eval_expr("A1+B1", &grid).unwrap(), 8.0);
        assert_eq!(eval_expr("A1*B1-1", &grid).unwrap(), 14.0);
    }

    #[test]
    fn test_empty_cell_reads_zero() {
        let grid = grid_with(&[(0, 0, "5")]);
        assert_eq!(eval_expr("A1+B2", &grid).unwrap(), 5.0);
    }

    #[test]
    fn test_prefix_reference_collision() {
        // A1=1, A10=100: substituting A1 must not corrupt the A10 token
        let grid = grid_with(&[(0, 0, "1"), (9, 0, "100")]);
        assert_eq!(eval_expr("A1+A10", &grid).unwrap(), 101.0);
        assert_eq!(eval_expr("A10-A1", &grid).unwrap(), 99.0);
    }

    #[test]
    fn test_non_numeric_operand() {
        let grid = grid_with(&[(0, 0, "abc")]);
        let err = eval_expr("A1+1", &grid).unwrap_err();
        assert!(matches!(err, FormulaError::InvalidOperand(_)));
    }

    #[test]
    fn test_division_by_zero() {
        let grid = Grid::new();
        let err = eval_expr("1/0", &grid).unwrap_err();
        assert!(matches!(err, FormulaError::Evaluation(_)));

        // Empty referenced cell reads as zero
        let err = eval_expr("1/B9", &grid).unwrap_err();
        assert!(matches!(err, FormulaError::Evaluation(_)));
    }

    #[test]
    fn test_malformed_expressions() {
        let grid = Grid::new();
        assert!(eval_expr("(1+2", &grid).is_err());
        assert!(eval_expr("1+", &grid).is_err());
        assert!(eval_expr("1 ? 2", &grid).is_err());
        assert!(eval_expr("", &grid).is_err());
        assert!(eval_expr("1..2", &grid).is_err());
    }

    #[test]
    fn test_letters_without_digits_is_invalid_reference() {
        let grid = Grid::new();
        let err = eval_expr("ABC+1", &grid).unwrap_err();
        assert!(matches!(err, FormulaError::InvalidReference(_)));
    }
}
