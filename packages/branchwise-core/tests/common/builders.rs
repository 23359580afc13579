//! Test data builders for statement trees and declarations

use branchwise_core::{BinaryOperator, Expr, FunctionDecl, Number, ParamDecl, Statement, TypeTag};

/// `if <var> <op> <constant> { body }`
pub fn cond(line: usize, var: &str, op: &str, constant: impl Into<Number>, body: Vec<Statement>) -> Statement {
    Statement::Conditional {
        line,
        condition: Expr::compare(
            BinaryOperator::from(op.to_string()),
            Expr::ident(var),
            Expr::literal(constant),
        ),
        body,
    }
}

pub fn ret(line: usize) -> Statement {
    Statement::Return { line }
}

pub fn other(line: usize) -> Statement {
    Statement::Other { line }
}

/// Builder for FunctionDecl
#[derive(Debug)]
pub struct FunctionBuilder {
    decl: FunctionDecl,
}

impl FunctionBuilder {
    pub fn new(name: &str, return_type: &str) -> Self {
        Self {
            decl: FunctionDecl {
                name: name.to_string(),
                return_type: TypeTag::parse(return_type),
                params: Vec::new(),
                body: Vec::new(),
            },
        }
    }

    pub fn param(mut self, name: &str, type_name: &str) -> Self {
        self.decl.params.push(ParamDecl::new(name, type_name));
        self
    }

    pub fn stmt(mut self, stmt: Statement) -> Self {
        self.decl.body.push(stmt);
        self
    }

    pub fn build(self) -> FunctionDecl {
        self.decl
    }
}
