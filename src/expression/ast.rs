/// Binary operators available when combining two sub-expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    /// Commutative operators are the only ones flattened and reordered
    pub fn is_commutative(self) -> bool {
        matches!(self, Operator::Add | Operator::Multiply)
    }
}

/// Arithmetic expression tree with the value of every node computed at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Number(i64),
    Neg {
        value: i64,
        operand: Box<Expression>,
    },
    // Two operands as built; more once a commutative chain has been flattened.
    Apply {
        op: Operator,
        value: i64,
        operands: Vec<Expression>,
    },
}

impl Expression {
    /// Value stored on this node
    pub fn value(&self) -> i64 {
        match self {
            Expression::Number(n) => *n,
            Expression::Neg { value, .. } | Expression::Apply { value, .. } => *value,
        }
    }

    /// Constant leaves in left-to-right rendering order
    pub fn leaves(&self) -> Vec<i64> {
        fn collect(expr: &Expression, out: &mut Vec<i64>) {
            match expr {
                Expression::Number(n) => out.push(*n),
                Expression::Neg { operand, .. } => collect(operand, out),
                Expression::Apply { operands, .. } => {
                    for operand in operands {
                        collect(operand, out);
                    }
                }
            }
        }

        let mut out = Vec::new();
        collect(self, &mut out);
        out
    }
}
