//! moonpress-render: Lua syntax tree renderer with identifier minification
//!
//! Takes the abstract syntax tree an external Lua parser produced (as typed
//! nodes or as the parser's JSON output) and renders it back to compact,
//! token-correct source text, renaming local identifiers to the shortest
//! collision-free codes along the way.
//!
//! # Design Principles
//!
//! 1. **One pass, one state**: a [`Renderer`] owns its output buffer and its
//!    [`NameMinifier`] and is consumed by [`Renderer::render`], so name
//!    assignments can never leak between documents.
//!
//! 2. **Spacing from token adjacency**: no original whitespace survives. A
//!    single space is inserted exactly where two adjacent tokens would
//!    otherwise lex as one word; everything else concatenates.
//!
//! 3. **Closed grammar**: statements and expressions are closed enums, so a
//!    variant without a render rule is a compile error, not a silent drop.
//!
//! # Example
//!
//! ```
//! use moonpress_render::{render, Chunk, Expr, Identifier, Stmt};
//!
//! let chunk = Chunk::new(vec![Stmt::Local {
//!     variables: vec![Identifier::local("greeting")],
//!     init: vec![Expr::String { raw: "\"hi\"".into() }],
//! }]);
//! assert_eq!(render(&chunk).unwrap(), "local a=\"hi\"");
//! ```

mod ast;
mod error;
mod lexer;
mod minify;
mod render;
mod span;
mod token;

// Re-exports
pub use ast::*;
pub use error::Error;
pub use lexer::Lexer;
pub use minify::NameMinifier;
pub use render::{RenderOptions, Renderer};
pub use span::Span;
pub use token::{keyword_from_str, Token, TokenKind};

/// Render a chunk to minimized source text with a fresh renderer.
pub fn render(chunk: &Chunk) -> Result<String, Error> {
    Renderer::new(RenderOptions::default()).render(chunk)
}

/// Render a chunk with explicit options.
pub fn render_with_options(chunk: &Chunk, options: RenderOptions) -> Result<String, Error> {
    Renderer::new(options).render(chunk)
}

/// Decode the external parser's JSON output and render it in one step.
pub fn render_json(json: &str) -> Result<String, Error> {
    let chunk = ast::from_json(json)?;
    render(&chunk)
}
