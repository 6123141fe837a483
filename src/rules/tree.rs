use crate::catalog;
use crate::diagnostics::DiagnosticSet;
use crate::naming::is_snake_case;
use crate::utils::LineIndex;
use rustpython_ast::{self as ast, Expr, Stmt};

/// Visitor applying the tree rules to every function definition in the file:
/// argument naming, direct local-variable naming, and mutable list defaults.
pub struct TreeVisitor<'a> {
    /// Helper for mapping byte offsets to line numbers.
    line_index: &'a LineIndex,
}

impl<'a> TreeVisitor<'a> {
    /// Creates a new `TreeVisitor`.
    pub fn new(line_index: &'a LineIndex) -> Self {
        Self { line_index }
    }

    /// Walks every statement reachable from `body` with an explicit stack,
    /// applying the function rules to each `def` found at any nesting depth.
    /// Async functions are not inspected.
    pub fn walk(&self, body: &[Stmt], diagnostics: &mut DiagnosticSet) {
        let mut stack: Vec<&Stmt> = body.iter().rev().collect();
        while let Some(stmt) = stack.pop() {
            if let Stmt::FunctionDef(node) = stmt {
                self.check_function(node, diagnostics);
            }
            push_children(stmt, &mut stack);
        }
    }

    fn check_function(&self, node: &ast::StmtFunctionDef, diagnostics: &mut DiagnosticSet) {
        // Positional parameter names must be snake_case.
        for arg in &node.args.args {
            let name = arg.def.arg.as_str();
            if !name.is_empty() && !is_snake_case(name) {
                let line = self.line_index.line_index(arg.def.range.start());
                diagnostics.add(line, catalog::ARGUMENT_NAMING, name);
            }
        }

        // Only list displays count as mutable defaults; dict and set
        // displays are out of scope.
        for arg in node.args.posonlyargs.iter().chain(node.args.args.iter()) {
            if let Some(default) = &arg.default {
                if let Expr::List(list) = default.as_ref() {
                    let line = self.line_index.line_index(list.range.start());
                    diagnostics.add(line, catalog::MUTABLE_DEFAULT, "");
                }
            }
        }

        // Direct body statements only: assignments nested inside inner blocks
        // of the function are not inspected.
        for stmt in &node.body {
            if let Stmt::Assign(assign) = stmt {
                for target in &assign.targets {
                    if let Expr::Name(name_node) = target {
                        let name = name_node.id.as_str();
                        if !name.is_empty() && !is_snake_case(name) {
                            let line = self.line_index.line_index(name_node.range.start());
                            diagnostics.add(line, catalog::VARIABLE_NAMING, name);
                        }
                    }
                }
            }
        }
    }
}

/// Pushes the nested statement bodies of a compound statement onto the stack.
fn push_children<'a>(stmt: &'a Stmt, stack: &mut Vec<&'a Stmt>) {
    match stmt {
        Stmt::FunctionDef(node) => stack.extend(&node.body),
        Stmt::AsyncFunctionDef(node) => stack.extend(&node.body),
        Stmt::ClassDef(node) => stack.extend(&node.body),
        Stmt::If(node) => {
            stack.extend(&node.body);
            stack.extend(&node.orelse);
        }
        Stmt::For(node) => {
            stack.extend(&node.body);
            stack.extend(&node.orelse);
        }
        Stmt::AsyncFor(node) => {
            stack.extend(&node.body);
            stack.extend(&node.orelse);
        }
        Stmt::While(node) => {
            stack.extend(&node.body);
            stack.extend(&node.orelse);
        }
        Stmt::With(node) => stack.extend(&node.body),
        Stmt::AsyncWith(node) => stack.extend(&node.body),
        Stmt::Try(node) => {
            stack.extend(&node.body);
            for handler in &node.handlers {
                if let ast::ExceptHandler::ExceptHandler(handler_node) = handler {
                    stack.extend(&handler_node.body);
                }
            }
            stack.extend(&node.orelse);
            stack.extend(&node.finalbody);
        }
        Stmt::TryStar(node) => {
            stack.extend(&node.body);
            for handler in &node.handlers {
                if let ast::ExceptHandler::ExceptHandler(handler_node) = handler {
                    stack.extend(&handler_node.body);
                }
            }
            stack.extend(&node.orelse);
            stack.extend(&node.finalbody);
        }
        Stmt::Match(node) => {
            for case in &node.cases {
                stack.extend(&case.body);
            }
        }
        _ => {}
    }
}
