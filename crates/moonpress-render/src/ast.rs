//! AST node types for the Lua grammar.
//!
//! The shapes mirror the external parser's JSON output: every node is a map
//! with a `type` tag, so a tree produced by the parser deserializes directly.
//! Extra fields the parser may attach (`loc`, `range`, cooked literal values)
//! are ignored; an unknown `type` tag is a decode error.
//!
//! The tree is immutable during rendering. Each child is exclusively owned by
//! its parent; there are no shared or cyclic references.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The root of a parsed script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// All statements in the program.
    pub body: Vec<Stmt>,
}

impl Chunk {
    /// Create a new chunk.
    pub fn new(body: Vec<Stmt>) -> Self {
        Self { body }
    }
}

/// Deserialize a chunk from the external parser's JSON output.
pub fn from_json(json: &str) -> Result<Chunk, Error> {
    Ok(serde_json::from_str(json)?)
}

// =============================================================================
// Statements
// =============================================================================

/// Statement kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Stmt {
    /// `::label::`. Consumed by the parser stage, never re-emitted.
    #[serde(rename = "LabelStatement")]
    Label { label: Identifier },

    /// `break`
    #[serde(rename = "BreakStatement")]
    Break,

    /// `goto label`. Consumed by the parser stage, never re-emitted.
    #[serde(rename = "GotoStatement")]
    Goto { label: Identifier },

    /// `return a, b`
    #[serde(rename = "ReturnStatement")]
    Return { arguments: Vec<Expr> },

    /// `if .. then .. elseif .. else .. end`
    #[serde(rename = "IfStatement")]
    If { clauses: Vec<Clause> },

    /// `while cond do .. end`
    #[serde(rename = "WhileStatement")]
    While { condition: Expr, body: Vec<Stmt> },

    /// `do .. end`
    #[serde(rename = "DoStatement")]
    Do { body: Vec<Stmt> },

    /// `repeat .. until cond`
    #[serde(rename = "RepeatStatement")]
    Repeat { body: Vec<Stmt>, condition: Expr },

    /// `local a, b = x, y`
    #[serde(rename = "LocalStatement")]
    Local {
        variables: Vec<Identifier>,
        #[serde(default)]
        init: Vec<Expr>,
    },

    /// `a, t.k = x, y`
    #[serde(rename = "AssignmentStatement")]
    Assignment { variables: Vec<Expr>, init: Vec<Expr> },

    /// A call used as a statement.
    #[serde(rename = "CallStatement")]
    Call { expression: Expr },

    /// `function name(..) .. end`, optionally `local`
    #[serde(rename = "FunctionDeclaration")]
    Function(FunctionDecl),

    /// `for i = start, stop, step do .. end`
    #[serde(rename = "ForNumericStatement")]
    ForNumeric {
        variable: Identifier,
        start: Expr,
        end: Expr,
        #[serde(default)]
        step: Option<Expr>,
        body: Vec<Stmt>,
    },

    /// `for k, v in .. do .. end`
    #[serde(rename = "ForGenericStatement")]
    ForGeneric {
        variables: Vec<Identifier>,
        iterators: Vec<Expr>,
        body: Vec<Stmt>,
    },
}

/// One clause of a conditional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Clause {
    #[serde(rename = "IfClause")]
    If { condition: Expr, body: Vec<Stmt> },
    #[serde(rename = "ElseifClause")]
    Elseif { condition: Expr, body: Vec<Stmt> },
    #[serde(rename = "ElseClause")]
    Else { body: Vec<Stmt> },
}

/// Payload shared by function declaration statements and function
/// expressions. The name is absent for anonymous functions and may be a
/// member path (`function t.f() .. end`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDecl {
    #[serde(default)]
    pub identifier: Option<Box<Expr>>,
    #[serde(rename = "isLocal", default)]
    pub is_local: bool,
    #[serde(default)]
    pub parameters: Vec<Expr>,
    pub body: Vec<Stmt>,
}

// =============================================================================
// Expressions
// =============================================================================

/// Expression kinds.
///
/// Literal variants carry the parser's already-formatted `raw` text, emitted
/// verbatim by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Expr {
    #[serde(rename = "Identifier")]
    Identifier(Identifier),

    #[serde(rename = "StringLiteral")]
    String { raw: String },
    #[serde(rename = "NumericLiteral")]
    Numeric { raw: String },
    #[serde(rename = "BooleanLiteral")]
    Boolean { raw: String },
    #[serde(rename = "NilLiteral")]
    Nil { raw: String },
    #[serde(rename = "VarargLiteral")]
    Vararg { raw: String },

    /// `{ .. }`
    #[serde(rename = "TableConstructorExpression")]
    Table { fields: Vec<TableField> },

    /// `a and b`, `a or b`
    #[serde(rename = "LogicalExpression")]
    Logical {
        operator: LogicalOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// `a + b`, `a == b`, `a .. b`
    #[serde(rename = "BinaryExpression")]
    Binary {
        operator: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// `not a`, `-a`, `#a`
    #[serde(rename = "UnaryExpression")]
    Unary { operator: UnaryOp, argument: Box<Expr> },

    /// `t.f` or `t:f`
    #[serde(rename = "MemberExpression")]
    Member {
        indexer: Indexer,
        identifier: Identifier,
        base: Box<Expr>,
    },

    /// `t[k]`
    #[serde(rename = "IndexExpression")]
    Index { base: Box<Expr>, index: Box<Expr> },

    /// `f(a, b)`
    #[serde(rename = "CallExpression")]
    Call { base: Box<Expr>, arguments: Vec<Expr> },

    /// `f{ .. }`: table argument, no parentheses
    #[serde(rename = "TableCallExpression")]
    TableCall { base: Box<Expr>, arguments: Box<Expr> },

    /// `f"s"`: string argument, no parentheses
    #[serde(rename = "StringCallExpression")]
    StringCall { base: Box<Expr>, argument: Box<Expr> },

    /// `function(..) .. end`
    #[serde(rename = "FunctionDeclaration")]
    Function(FunctionDecl),
}

/// An identifier occurrence. `is_local` comes from the external parser's
/// scope analysis and is the sole input that decides whether the renderer
/// asks the minimizer for a replacement name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
    #[serde(rename = "isLocal", default)]
    pub is_local: bool,
}

impl Identifier {
    /// A block/function-scoped variable occurrence.
    pub fn local(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_local: true,
        }
    }

    /// A global reference, table key, or member-access name.
    pub fn global(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_local: false,
        }
    }
}

/// One entry of a table constructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TableField {
    /// `[key] = value`
    #[serde(rename = "TableKey")]
    Key { key: Expr, value: Expr },
    /// `name = value`
    #[serde(rename = "TableKeyString")]
    KeyString { key: Identifier, value: Expr },
    /// positional `value`
    #[serde(rename = "TableValue")]
    Value { value: Expr },
}

// =============================================================================
// Operators
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalOp {
    #[serde(rename = "and")]
    And,
    #[serde(rename = "or")]
    Or,
}

impl LogicalOp {
    pub const fn as_str(self) -> &'static str {
        match self {
            LogicalOp::And => "and",
            LogicalOp::Or => "or",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
    #[serde(rename = "%")]
    Mod,
    #[serde(rename = "^")]
    Pow,
    #[serde(rename = "..")]
    Concat,
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "~=")]
    NotEq,
    #[serde(rename = "<")]
    Less,
    #[serde(rename = ">")]
    Greater,
    #[serde(rename = "<=")]
    LessEq,
    #[serde(rename = ">=")]
    GreaterEq,
}

impl BinaryOp {
    pub const fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Pow => "^",
            BinaryOp::Concat => "..",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "~=",
            BinaryOp::Less => "<",
            BinaryOp::Greater => ">",
            BinaryOp::LessEq => "<=",
            BinaryOp::GreaterEq => ">=",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    #[serde(rename = "not")]
    Not,
    #[serde(rename = "-")]
    Neg,
    #[serde(rename = "#")]
    Len,
}

impl UnaryOp {
    pub const fn as_str(self) -> &'static str {
        match self {
            UnaryOp::Not => "not",
            UnaryOp::Neg => "-",
            UnaryOp::Len => "#",
        }
    }
}

/// Member-access punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Indexer {
    #[serde(rename = ".")]
    Dot,
    #[serde(rename = ":")]
    Colon,
}

impl Indexer {
    pub const fn as_str(self) -> &'static str {
        match self {
            Indexer::Dot => ".",
            Indexer::Colon => ":",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_parser_output() {
        // Shape produced by the external parser for `local x = 1` with scope
        // analysis enabled.
        let json = r#"{
            "type": "Chunk",
            "body": [{
                "type": "LocalStatement",
                "variables": [{"type": "Identifier", "name": "x", "isLocal": true}],
                "init": [{"type": "NumericLiteral", "value": 1, "raw": "1"}]
            }],
            "comments": []
        }"#;
        let chunk = from_json(json).unwrap();
        assert_eq!(
            chunk,
            Chunk::new(vec![Stmt::Local {
                variables: vec![Identifier::local("x")],
                init: vec![Expr::Numeric { raw: "1".into() }],
            }])
        );
    }

    #[test]
    fn test_deserialize_call_with_member_base() {
        let json = r#"{
            "type": "Chunk",
            "body": [{
                "type": "CallStatement",
                "expression": {
                    "type": "CallExpression",
                    "base": {
                        "type": "MemberExpression",
                        "indexer": ":",
                        "identifier": {"type": "Identifier", "name": "play"},
                        "base": {"type": "Identifier", "name": "actor", "isLocal": true}
                    },
                    "arguments": []
                }
            }]
        }"#;
        let chunk = from_json(json).unwrap();
        match &chunk.body[0] {
            Stmt::Call {
                expression: Expr::Call { base, .. },
            } => match base.as_ref() {
                Expr::Member {
                    indexer,
                    identifier,
                    base,
                } => {
                    assert_eq!(*indexer, Indexer::Colon);
                    assert!(!identifier.is_local);
                    assert_eq!(**base, Expr::Identifier(Identifier::local("actor")));
                }
                other => panic!("unexpected base: {other:?}"),
            },
            other => panic!("unexpected statement: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_node_tag_is_an_error() {
        let json = r#"{
            "type": "Chunk",
            "body": [{"type": "Comment", "value": "x", "raw": "--x"}]
        }"#;
        assert!(from_json(json).is_err());
    }

    #[test]
    fn test_missing_required_child_is_an_error() {
        // An if-clause with no condition must fail to decode, not render
        // garbled text downstream.
        let json = r#"{
            "type": "Chunk",
            "body": [{
                "type": "IfStatement",
                "clauses": [{"type": "IfClause", "body": []}]
            }]
        }"#;
        assert!(from_json(json).is_err());
    }

    #[test]
    fn test_serialize_round_trip() {
        let chunk = Chunk::new(vec![Stmt::Return {
            arguments: vec![Expr::Logical {
                operator: LogicalOp::Or,
                left: Box::new(Expr::Identifier(Identifier::local("a"))),
                right: Box::new(Expr::Nil { raw: "nil".into() }),
            }],
        }]);
        let json = serde_json::to_string(&chunk).unwrap();
        assert_eq!(from_json(&json).unwrap(), chunk);
    }
}
