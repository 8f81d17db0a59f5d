//! SQL expressions and operators

use std::fmt::{self, Display};

/// SQL expressions, e.g. `a + 7 > b`. Can be nested.
///
/// Expressions appear in column defaults, index column lists, the
/// `PARTITIONS` count and the trailing `SELECT` of a CREATE TABLE.
#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    /// All columns, i.e. *.
    All,
    /// A column reference, optionally qualified with a table name.
    Column(Option<String>, String),
    /// A literal value.
    Literal(Literal),
    /// A function call (name and parameters).
    Function(String, Vec<Expression>),
    /// An operator.
    Operator(Operator),
}

impl Expression {
    /// Convenience constructor for an unqualified column reference.
    pub fn column(name: impl Into<String>) -> Self {
        Self::Column(None, name.into())
    }
}

/// Expression literal values.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

/// Expression operators.
///
/// Since this is a recursive data structure, we have to box each child
/// expression, which incurs a heap allocation.
#[derive(Clone, Debug, PartialEq)]
pub enum Operator {
    And(Box<Expression>, Box<Expression>), // a AND b
    Not(Box<Expression>),                  // NOT a
    Or(Box<Expression>, Box<Expression>),  // a OR b

    Equal(Box<Expression>, Box<Expression>),       // a = b
    GreaterThan(Box<Expression>, Box<Expression>), // a > b
    GreaterThanOrEqual(Box<Expression>, Box<Expression>), // a >= b
    Is(Box<Expression>, Literal),                  // a IS NULL
    LessThan(Box<Expression>, Box<Expression>),    // a < b
    LessThanOrEqual(Box<Expression>, Box<Expression>), // a <= b
    NotEqual(Box<Expression>, Box<Expression>),    // a != b

    Add(Box<Expression>, Box<Expression>),       // a + b
    Divide(Box<Expression>, Box<Expression>),    // a / b
    Identity(Box<Expression>),                   // +a
    Multiply(Box<Expression>, Box<Expression>),  // a * b
    Negate(Box<Expression>),                     // -a
    Remainder(Box<Expression>, Box<Expression>), // a % b
    Subtract(Box<Expression>, Box<Expression>),  // a - b
}

impl From<Literal> for Expression {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl From<Operator> for Expression {
    fn from(operator: Operator) -> Self {
        Self::Operator(operator)
    }
}

impl From<Operator> for Box<Expression> {
    fn from(operator: Operator) -> Self {
        Box::new(operator.into())
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "NULL"),
            Self::Boolean(true) => write!(f, "TRUE"),
            Self::Boolean(false) => write!(f, "FALSE"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(s) => write!(f, "'{}'", s.replace('\'', "''")),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Operator::*;
        match self {
            Self::All => write!(f, "*"),
            Self::Column(Some(table), column) => write!(f, "{table}.{column}"),
            Self::Column(None, column) => write!(f, "{column}"),
            Self::Literal(literal) => write!(f, "{literal}"),
            Self::Function(name, args) => {
                let args: Vec<String> = args.iter().map(ToString::to_string).collect();
                write!(f, "{name}({})", args.join(", "))
            }
            Self::Operator(op) => match op {
                And(l, r) => write!(f, "({l} AND {r})"),
                Or(l, r) => write!(f, "({l} OR {r})"),
                Not(e) => write!(f, "(NOT {e})"),
                Equal(l, r) => write!(f, "({l} = {r})"),
                NotEqual(l, r) => write!(f, "({l} != {r})"),
                GreaterThan(l, r) => write!(f, "({l} > {r})"),
                GreaterThanOrEqual(l, r) => write!(f, "({l} >= {r})"),
                LessThan(l, r) => write!(f, "({l} < {r})"),
                LessThanOrEqual(l, r) => write!(f, "({l} <= {r})"),
                Is(e, literal) => write!(f, "({e} IS {literal})"),
                Add(l, r) => write!(f, "({l} + {r})"),
                Subtract(l, r) => write!(f, "({l} - {r})"),
                Multiply(l, r) => write!(f, "({l} * {r})"),
                Divide(l, r) => write!(f, "({l} / {r})"),
                Remainder(l, r) => write!(f, "({l} % {r})"),
                Negate(e) => write!(f, "-{e}"),
                Identity(e) => write!(f, "+{e}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_fully_parenthesized() {
        let expr: Expression = Operator::Add(
            Box::new(Literal::Integer(1).into()),
            Operator::Multiply(
                Box::new(Expression::column("a")),
                Box::new(Literal::String("it's".into()).into()),
            )
            .into(),
        )
        .into();
        assert_eq!(expr.to_string(), "(1 + (a * 'it''s'))");
    }
}
