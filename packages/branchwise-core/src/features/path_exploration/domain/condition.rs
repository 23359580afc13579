//! Branch condition extraction
//!
//! Reduces a condition expression to `variable <op> constant`, the only
//! shape a Domain can be refined by.

use super::statement::Expr;
use crate::features::constraint::RelationalOp;
use crate::shared::Number;

/// A condition reduced to one variable, one ordering and one constant
#[derive(Debug, Clone, PartialEq)]
pub struct BranchCondition {
    pub variable: String,
    /// Operator with the variable on the left
    pub op: RelationalOp,
    pub constant: Number,
    /// `XIsLessThan0`-style description, operands as written
    pub description: String,
}

impl BranchCondition {
    /// Extract from a condition expression.
    ///
    /// `constant <op> variable` is normalized by flipping the operator. Any
    /// other shape is returned as an `Err` describing why it is unsupported.
    pub fn from_expr(expr: &Expr) -> Result<Self, String> {
        let (op, left, right) = match expr {
            Expr::BinaryComparison { op, left, right } => (op, left.as_ref(), right.as_ref()),
            other => return Err(format!("condition '{}' is not a comparison", other)),
        };

        let rel = op
            .relational()
            .ok_or_else(|| format!("operator '{}' is not a relational comparison", op))?;

        let (variable, op, constant) = match (left, right) {
            (Expr::Identifier { name }, Expr::Literal { value }) => (name.clone(), rel, *value),
            (Expr::Literal { value }, Expr::Identifier { name }) => {
                (name.clone(), rel.flip(), *value)
            }
            (Expr::Identifier { .. }, Expr::Identifier { .. }) => {
                return Err(format!("condition '{}' compares two variables", expr));
            }
            (Expr::Literal { .. }, Expr::Literal { .. }) => {
                return Err(format!("condition '{}' references no variable", expr));
            }
            _ => return Err(format!("condition '{}' has unsupported operands", expr)),
        };

        let description = format!(
            "{}{}{}",
            describe_operand(left),
            rel.description_word(),
            describe_operand(right)
        );

        Ok(Self {
            variable,
            op,
            constant,
            description,
        })
    }
}

fn describe_operand(expr: &Expr) -> String {
    match expr {
        Expr::Identifier { name } => uc_first(name),
        other => other.to_string(),
    }
}

fn uc_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::path_exploration::domain::statement::BinaryOperator;

    #[test]
    fn test_identifier_left() {
        let expr = Expr::compare(BinaryOperator::Lt, Expr::ident("x"), Expr::literal(0));
        let cond = BranchCondition::from_expr(&expr).unwrap();
        assert_eq!(cond.variable, "x");
        assert_eq!(cond.op, RelationalOp::Lt);
        assert_eq!(cond.constant, Number::Int(0));
        assert_eq!(cond.description, "XIsLessThan0");
    }

    #[test]
    fn test_literal_left_is_flipped() {
        let expr = Expr::compare(BinaryOperator::Le, Expr::literal(0.5), Expr::ident("speed"));
        let cond = BranchCondition::from_expr(&expr).unwrap();
        assert_eq!(cond.variable, "speed");
        assert_eq!(cond.op, RelationalOp::Ge);
        assert_eq!(cond.description, "0.5IsLessThanOrEqualSpeed");
    }

    #[test]
    fn test_two_variables_rejected() {
        let expr = Expr::compare(BinaryOperator::Gt, Expr::ident("a"), Expr::ident("b"));
        let err = BranchCondition::from_expr(&expr).unwrap_err();
        assert!(err.contains("two variables"));
    }

    #[test]
    fn test_no_variable_rejected() {
        let expr = Expr::compare(BinaryOperator::Gt, Expr::literal(1), Expr::literal(2));
        assert!(BranchCondition::from_expr(&expr).is_err());
    }

    #[test]
    fn test_equality_rejected() {
        let expr = Expr::compare(BinaryOperator::Eq, Expr::ident("x"), Expr::literal(1));
        let err = BranchCondition::from_expr(&expr).unwrap_err();
        assert!(err.contains("not a relational comparison"));
    }

    #[test]
    fn test_bare_identifier_rejected() {
        assert!(BranchCondition::from_expr(&Expr::ident("ok")).is_err());
    }
}
