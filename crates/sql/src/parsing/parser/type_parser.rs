//! Type parser module
//!
//! Handles parsing of column data types. Type names are not reserved words;
//! they are matched on identifier text so they stay usable as column names.

use super::super::Token;
use super::token_helper::TokenHelper;
use crate::error::Result;
use crate::parsing::ast::{DataType, IntegerSize};

/// Parser trait for data types
pub trait TypeParser: TokenHelper {
    /// Parses a column data type.
    fn parse_type(&mut self) -> Result<DataType> {
        let name = self.expect_ident("data type")?;
        Ok(match name.to_uppercase().as_str() {
            "TINYINT" => self.parse_integer_type(IntegerSize::Tiny)?,
            "SMALLINT" => self.parse_integer_type(IntegerSize::Small)?,
            "MEDIUMINT" => self.parse_integer_type(IntegerSize::Medium)?,
            "INT" | "INTEGER" => self.parse_integer_type(IntegerSize::Int)?,
            "BIGINT" => self.parse_integer_type(IntegerSize::Big)?,

            "DECIMAL" | "NUMERIC" | "DEC" => {
                let args = self.parse_type_arguments(2)?;
                DataType::Decimal {
                    precision: args.first().copied(),
                    scale: args.get(1).copied(),
                }
            }
            "FLOAT" | "REAL" => {
                self.parse_type_arguments(2)?;
                DataType::Float
            }
            "DOUBLE" => {
                self.next_if_ident_eq("PRECISION");
                self.parse_type_arguments(2)?;
                DataType::Double
            }
            "BOOL" | "BOOLEAN" => DataType::Boolean,

            "CHAR" | "CHARACTER" => DataType::Char(self.parse_type_arguments(1)?.first().copied()),
            "VARCHAR" => {
                self.expect(Token::OpenParen)?;
                let length = self.parse_type_argument()?;
                self.expect(Token::CloseParen)?;
                DataType::Varchar(length)
            }
            "TEXT" | "TINYTEXT" | "MEDIUMTEXT" | "LONGTEXT" => {
                self.parse_type_arguments(1)?;
                DataType::Text
            }
            "BLOB" | "TINYBLOB" | "MEDIUMBLOB" | "LONGBLOB" => {
                self.parse_type_arguments(1)?;
                DataType::Blob
            }

            // Fractional-second precision is accepted and dropped.
            "DATE" => DataType::Date,
            "TIME" => {
                self.parse_type_arguments(1)?;
                DataType::Time
            }
            "DATETIME" => {
                self.parse_type_arguments(1)?;
                DataType::DateTime
            }
            "TIMESTAMP" => {
                self.parse_type_arguments(1)?;
                DataType::Timestamp
            }

            _ => DataType::Custom {
                args: self.parse_custom_type_arguments()?,
                name,
            },
        })
    }

    /// Parses the optional display width and UNSIGNED/ZEROFILL modifiers of an
    /// integer type.
    fn parse_integer_type(&mut self, size: IntegerSize) -> Result<DataType> {
        let width = self.parse_type_arguments(1)?.first().copied();
        let unsigned = self.next_if_ident_eq("UNSIGNED");
        self.next_if_ident_eq("ZEROFILL");
        Ok(DataType::Integer {
            size,
            width,
            unsigned,
        })
    }

    /// Parses an optional parenthesized list of up to `max` numeric arguments.
    fn parse_type_arguments(&mut self, max: usize) -> Result<Vec<u32>> {
        let mut args = Vec::new();
        if !self.next_is(Token::OpenParen) {
            return Ok(args);
        }
        loop {
            args.push(self.parse_type_argument()?);
            if args.len() >= max || !self.next_is(Token::Comma) {
                break;
            }
        }
        self.expect(Token::CloseParen)?;
        Ok(args)
    }

    /// Parses a single numeric type argument.
    fn parse_type_argument(&mut self) -> Result<u32> {
        match self.next_if_map(|token| match token {
            Token::Number(n) => n.parse::<u32>().ok(),
            _ => None,
        }) {
            Some(n) => Ok(n),
            None => Err(self.syntax_error("unsigned integer type argument")),
        }
    }

    /// Parses the arguments of an unknown type, e.g. ENUM('a', 'b'), keeping
    /// their literal text.
    fn parse_custom_type_arguments(&mut self) -> Result<Vec<String>> {
        let mut args = Vec::new();
        if !self.next_is(Token::OpenParen) {
            return Ok(args);
        }
        loop {
            match self.next_if_map(|token| match token {
                Token::Number(_)
                | Token::String(_)
                | Token::Ident(_)
                | Token::QuotedIdent(_) => Some(token.literal()),
                _ => None,
            }) {
                Some(arg) => args.push(arg),
                None => return Err(self.syntax_error("type argument")),
            }
            if !self.next_is(Token::Comma) {
                break;
            }
        }
        self.expect(Token::CloseParen)?;
        Ok(args)
    }
}
