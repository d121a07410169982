/// The four arithmetic operators understood by the language.
///
/// Every operator is variadic: it folds over any number of operands. How the
/// fold is seeded depends on the operator (see
/// [`crate::interpreter::evaluator`]).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    /// Addition (`sum`, `+`)
    Sum,
    /// Subtraction (`sub`, `-`)
    Sub,
    /// Division (`div`, `/`)
    Div,
    /// Multiplication (`mul`, `*`)
    Mul,
}

impl OperatorKind {
    /// Looks up the operator spelled by a prefix keyword.
    ///
    /// ## Example
    /// ```
    /// use prefixa::ast::OperatorKind;
    ///
    /// assert_eq!(OperatorKind::from_keyword("mul"), Some(OperatorKind::Mul));
    /// assert_eq!(OperatorKind::from_keyword("pow"), None);
    /// ```
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "sum" => Some(Self::Sum),
            "sub" => Some(Self::Sub),
            "div" => Some(Self::Div),
            "mul" => Some(Self::Mul),
            _ => None,
        }
    }

    /// The prefix keyword, e.g. `sum`.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Sub => "sub",
            Self::Div => "div",
            Self::Mul => "mul",
        }
    }

    /// The infix symbol, e.g. `+`.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Sum => "+",
            Self::Sub => "-",
            Self::Div => "/",
            Self::Mul => "*",
        }
    }
}

impl std::fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// The operator of an [`Expr::Operation`] as written in the source.
///
/// Parsing never rejects an operator keyword. A token that is neither a
/// number nor one of the four keywords is kept as [`Operator::Unknown`] and
/// only fails once the tree is evaluated or compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operator {
    /// One of the recognized keywords.
    Known(OperatorKind),
    /// Any other non-numeric token.
    Unknown(String),
}

impl Operator {
    /// Classifies an operator token.
    ///
    /// ## Example
    /// ```
    /// use prefixa::ast::{Operator, OperatorKind};
    ///
    /// assert_eq!(Operator::from_token("sub"), Operator::Known(OperatorKind::Sub));
    /// assert_eq!(Operator::from_token("mod"), Operator::Unknown("mod".to_string()));
    /// ```
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        OperatorKind::from_keyword(token).map_or_else(|| Self::Unknown(token.to_string()),
                                                      Self::Known)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Known(kind) => write!(f, "{kind}"),
            Self::Unknown(name) => write!(f, "{name}"),
        }
    }
}

/// An abstract syntax tree (AST) node for a prefix expression.
///
/// The tree is built once by the parser and then only read. Each operation
/// owns its operands, so the tree is finite and acyclic and its depth equals
/// the nesting depth of the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Number {
        /// The parsed value.
        value:    i64,
        /// Index of the literal in the token sequence.
        position: usize,
    },
    /// An operator applied to zero or more operands.
    Operation {
        /// The operator keyword.
        operator: Operator,
        /// Operands in source order.
        operands: Vec<Self>,
        /// Index of the operator keyword in the token sequence.
        position: usize,
    },
}

impl Expr {
    /// Gets the token index the node was parsed from.
    /// ## Example
    /// ```
    /// use prefixa::ast::Expr;
    ///
    /// let expr = Expr::Number { value:    7,
    ///                           position: 3, };
    ///
    /// assert_eq!(expr.position(), 3);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Number { position, .. } | Self::Operation { position, .. } => *position,
        }
    }

    /// Number of [`Expr::Number`] leaves in the tree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Number { .. } => 1,
            Self::Operation { operands, .. } => operands.iter().map(Self::leaf_count).sum(),
        }
    }

    /// Number of [`Expr::Operation`] nodes in the tree.
    #[must_use]
    pub fn operation_count(&self) -> usize {
        match self {
            Self::Number { .. } => 0,
            Self::Operation { operands, .. } => {
                1 + operands.iter().map(Self::operation_count).sum::<usize>()
            },
        }
    }

    /// Height of the tree; a lone literal has depth 1.
    ///
    /// ## Example
    /// ```
    /// use prefixa::interpreter::{lexer::lex, parser::parse};
    ///
    /// let ast = parse(&lex("sub 2 sum 1 3 4")).unwrap();
    /// assert_eq!(ast.depth(), 3);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Number { .. } => 1,
            Self::Operation { operands, .. } => {
                1 + operands.iter().map(Self::depth).max().unwrap_or(0)
            },
        }
    }
}
