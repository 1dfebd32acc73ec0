//! Lua code generator.
//!
//! Converts a syntax tree back to compact source text, renaming local
//! identifiers through the minifier as it goes. Output carries none of the
//! original whitespace: a single space is inserted only where two adjacent
//! tokens would otherwise fuse into one word.

use crate::ast::*;
use crate::error::Error;
use crate::lexer::is_ident_char;
use crate::minify::NameMinifier;

/// Rendering options.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Replace local identifier names with generated short names.
    pub rename_locals: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { rename_locals: true }
    }
}

/// The code generator. One instance renders exactly one chunk.
pub struct Renderer {
    /// Rendering options.
    options: RenderOptions,
    /// Output buffer. Read only at its trailing byte, for the spacing rule.
    out: String,
    /// Short-name assignments for this pass.
    names: NameMinifier,
}

impl Renderer {
    /// Create a new renderer with a fresh name table and empty buffer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            out: String::new(),
            names: NameMinifier::new(),
        }
    }

    /// Render a chunk to minimized source text.
    ///
    /// Consumes the renderer: the name table and buffer belong to one pass
    /// and must not leak into the next document.
    pub fn render(mut self, chunk: &Chunk) -> Result<String, Error> {
        self.emit_stmts(&chunk.body)?;
        Ok(self.out)
    }

    // =========================================================================
    // Output Helpers
    // =========================================================================

    /// Append a token. When the buffer's last byte and the token's first byte
    /// are both word characters a single space keeps them apart; every other
    /// token pair concatenates directly.
    fn emit(&mut self, token: &str) {
        if let (Some(&last), Some(&first)) = (self.out.as_bytes().last(), token.as_bytes().first())
        {
            if is_ident_char(last) && is_ident_char(first) {
                self.out.push(' ');
            }
        }
        self.out.push_str(token);
    }

    /// Render a comma-separated expression list (no trailing comma).
    fn emit_expr_list(&mut self, exprs: &[Expr]) -> Result<(), Error> {
        for (i, expr) in exprs.iter().enumerate() {
            if i > 0 {
                self.emit(",");
            }
            self.emit_expr(expr)?;
        }
        Ok(())
    }

    /// Render a comma-separated identifier list.
    fn emit_name_list(&mut self, names: &[Identifier]) -> Result<(), Error> {
        for (i, name) in names.iter().enumerate() {
            if i > 0 {
                self.emit(",");
            }
            self.emit_ident(name)?;
        }
        Ok(())
    }

    fn emit_stmts(&mut self, body: &[Stmt]) -> Result<(), Error> {
        for stmt in body {
            self.emit_stmt(stmt)?;
        }
        Ok(())
    }

    // =========================================================================
    // Statement Emission
    // =========================================================================

    fn emit_stmt(&mut self, stmt: &Stmt) -> Result<(), Error> {
        match stmt {
            // Labels and gotos are consumed upstream and deliberately
            // dropped from the output. These are the only silent no-ops.
            Stmt::Label { .. } | Stmt::Goto { .. } => {}
            Stmt::Break => self.emit("break"),
            Stmt::Return { arguments } => {
                self.emit("return");
                self.emit_expr_list(arguments)?;
            }
            Stmt::If { clauses } => {
                if clauses.is_empty() {
                    return Err(Error::malformed("if statement with no clauses"));
                }
                for clause in clauses {
                    self.emit_clause(clause)?;
                }
                self.emit("end");
            }
            Stmt::While { condition, body } => {
                self.emit("while");
                self.emit_expr(condition)?;
                self.emit("do");
                self.emit_stmts(body)?;
                self.emit("end");
            }
            Stmt::Do { body } => {
                self.emit("do");
                self.emit_stmts(body)?;
                self.emit("end");
            }
            Stmt::Repeat { body, condition } => {
                self.emit("repeat");
                self.emit_stmts(body)?;
                self.emit("until");
                self.emit_expr(condition)?;
            }
            Stmt::Local { variables, init } => {
                self.emit("local");
                self.emit_name_list(variables)?;
                if !init.is_empty() {
                    self.emit("=");
                    self.emit_expr_list(init)?;
                }
            }
            Stmt::Assignment { variables, init } => {
                self.emit_expr_list(variables)?;
                self.emit("=");
                self.emit_expr_list(init)?;
            }
            Stmt::Call { expression } => self.emit_expr(expression)?,
            Stmt::Function(decl) => self.emit_function(decl)?,
            Stmt::ForNumeric {
                variable,
                start,
                end,
                step,
                body,
            } => {
                self.emit("for");
                self.emit_ident(variable)?;
                self.emit("=");
                self.emit_expr(start)?;
                self.emit(",");
                self.emit_expr(end)?;
                if let Some(step) = step {
                    self.emit(",");
                    self.emit_expr(step)?;
                }
                self.emit("do");
                self.emit_stmts(body)?;
                self.emit("end");
            }
            Stmt::ForGeneric {
                variables,
                iterators,
                body,
            } => {
                self.emit("for");
                self.emit_name_list(variables)?;
                self.emit("in");
                self.emit_expr_list(iterators)?;
                self.emit("do");
                self.emit_stmts(body)?;
                self.emit("end");
            }
        }
        Ok(())
    }

    /// Render one clause of a conditional. The closing `end` belongs to the
    /// whole construct, not to the clause.
    fn emit_clause(&mut self, clause: &Clause) -> Result<(), Error> {
        match clause {
            Clause::If { condition, body } => {
                self.emit("if");
                self.emit_expr(condition)?;
                self.emit("then");
                self.emit_stmts(body)?;
            }
            Clause::Elseif { condition, body } => {
                self.emit("elseif");
                self.emit_expr(condition)?;
                self.emit("then");
                self.emit_stmts(body)?;
            }
            Clause::Else { body } => {
                self.emit("else");
                self.emit_stmts(body)?;
            }
        }
        Ok(())
    }

    fn emit_function(&mut self, decl: &FunctionDecl) -> Result<(), Error> {
        if decl.is_local {
            self.emit("local");
        }
        self.emit("function");
        if let Some(identifier) = &decl.identifier {
            self.emit_expr(identifier)?;
        }
        self.emit("(");
        self.emit_expr_list(&decl.parameters)?;
        self.emit(")");
        self.emit_stmts(&decl.body)?;
        self.emit("end");
        Ok(())
    }

    // =========================================================================
    // Expression Emission
    // =========================================================================

    fn emit_expr(&mut self, expr: &Expr) -> Result<(), Error> {
        match expr {
            Expr::Identifier(ident) => self.emit_ident(ident)?,

            // Literals carry the parser's text verbatim.
            Expr::String { raw }
            | Expr::Numeric { raw }
            | Expr::Boolean { raw }
            | Expr::Nil { raw }
            | Expr::Vararg { raw } => self.emit(raw),

            Expr::Table { fields } => self.emit_table(fields)?,

            Expr::Logical {
                operator,
                left,
                right,
            } => {
                self.emit_expr(left)?;
                self.emit(operator.as_str());
                self.emit_expr(right)?;
            }
            Expr::Binary {
                operator,
                left,
                right,
            } => {
                self.emit_expr(left)?;
                self.emit(operator.as_str());
                self.emit_expr(right)?;
            }
            Expr::Unary { operator, argument } => {
                self.emit(operator.as_str());
                self.emit_expr(argument)?;
            }

            Expr::Member {
                indexer,
                identifier,
                base,
            } => {
                self.emit_base(base)?;
                self.emit(indexer.as_str());
                self.emit_ident(identifier)?;
            }
            Expr::Index { base, index } => {
                self.emit_base(base)?;
                self.emit("[");
                self.emit_expr(index)?;
                self.emit("]");
            }
            Expr::Call { base, arguments } => {
                self.emit_base(base)?;
                self.emit("(");
                self.emit_expr_list(arguments)?;
                self.emit(")");
            }
            Expr::TableCall { base, arguments } => {
                self.emit_expr(base)?;
                self.emit_expr(arguments)?;
            }
            Expr::StringCall { base, argument } => {
                self.emit_expr(base)?;
                self.emit_expr(argument)?;
            }

            Expr::Function(decl) => self.emit_function(decl)?,
        }
        Ok(())
    }

    /// Render the receiver of a member/index/call expression, parenthesizing
    /// forms whose trailing tokens would otherwise be read as continuing into
    /// the outer access (`"s"(x)` is a string call, `("s")(x)` is not).
    fn emit_base(&mut self, expr: &Expr) -> Result<(), Error> {
        let needs_parens = matches!(
            expr,
            Expr::Function(_)
                | Expr::String { .. }
                | Expr::Table { .. }
                | Expr::Logical { .. }
                | Expr::Binary { .. }
                | Expr::Call { .. }
        );
        if needs_parens {
            self.emit("(");
        }
        self.emit_expr(expr)?;
        if needs_parens {
            self.emit(")");
        }
        Ok(())
    }

    /// Emit an identifier, substituting the minified name for local
    /// occurrences. The input node is never mutated; repeated visits yield
    /// the same replacement because the name table is keyed by original name.
    fn emit_ident(&mut self, ident: &Identifier) -> Result<(), Error> {
        if self.options.rename_locals && ident.is_local {
            let short = self.names.shorten(&ident.name)?;
            self.emit(&short);
        } else {
            self.emit(&ident.name);
        }
        Ok(())
    }

    fn emit_table(&mut self, fields: &[TableField]) -> Result<(), Error> {
        self.emit("{");
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                self.emit(",");
            }
            match field {
                TableField::Key { key, value } => {
                    self.emit("[");
                    self.emit_expr(key)?;
                    self.emit("]");
                    self.emit("=");
                    self.emit_expr(value)?;
                }
                TableField::KeyString { key, value } => {
                    self.emit_ident(key)?;
                    self.emit("=");
                    self.emit_expr(value)?;
                }
                TableField::Value { value } => self.emit_expr(value)?,
            }
        }
        self.emit("}");
        Ok(())
    }
}
