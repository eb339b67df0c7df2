//! Text rendering of a parsed `Program`.
//!
//! Every node becomes `Kind(field=value, ...)`. A node with children opens
//! its parenthesis, lists the children one per line one level deeper, and
//! closes on its own line.

use crate::{
    ast::{
        ast::{Expr, Program, Stmt},
        expressions::IdentifierExpr,
        statements::{BlockStmt, FunctionArgument, VariableDeclarator},
    },
    Location,
};

const INDENT: &str = "    ";

/// A rendered node before layout.
struct Node {
    label: String,
    children: Vec<Node>,
}

impl Node {
    fn new(kind: &str, attributes: &[String]) -> Self {
        Node {
            label: format!("{}({}", kind, attributes.join(", ")),
            children: vec![],
        }
    }

    fn child(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }

    fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    fn render(&self, depth: usize, out: &mut String) {
        let indent = INDENT.repeat(depth);
        out.push_str(&indent);
        out.push_str(&self.label);

        if self.children.is_empty() {
            out.push(')');
            return;
        }

        out.push_str(",\n");
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                out.push_str(",\n");
            }
            child.render(depth + 1, out);
        }
        out.push('\n');
        out.push_str(&indent);
        out.push(')');
    }
}

fn location(location: &Location) -> String {
    format!(
        "location=({}, {}, {})",
        location.path(),
        location.row(),
        location.col()
    )
}

fn identifier_node(identifier: &IdentifierExpr) -> Node {
    Node::new(
        "Identifier",
        &[
            format!("name={}", identifier.name),
            location(&identifier.location),
        ],
    )
}

fn expr_node(expr: &Expr) -> Node {
    match expr {
        Expr::Identifier(identifier) => identifier_node(identifier),
        Expr::Literal(literal) => Node::new(
            "Literal",
            &[
                format!("value={}", literal.value),
                format!("kind={:?}", literal.kind),
                location(&literal.location),
            ],
        ),
        Expr::Array(array) => Node::new("ArrayExpression", &[location(&array.location)])
            .children(array.elements.iter().map(expr_node)),
        Expr::Member(member) => Node::new(
            "MemberExpression",
            &[
                format!("property={}", member.property.name),
                location(&member.location),
            ],
        )
        .child(expr_node(&member.object)),
        Expr::Call(call) => Node::new("CallExpression", &[location(&call.location)])
            .child(expr_node(&call.callee))
            .children(call.arguments.iter().map(expr_node)),
        Expr::Assignment(assignment) => {
            Node::new("AssignmentExpression", &[location(&assignment.location)])
                .child(expr_node(&assignment.assignee))
                .child(expr_node(&assignment.value))
        }
        Expr::Binary(binary) => Node::new(
            "BinaryExpression",
            &[
                format!("operator={}", binary.operator.as_str()),
                location(&binary.location),
            ],
        )
        .child(expr_node(&binary.left))
        .child(expr_node(&binary.right)),
        Expr::Prefix(prefix) => Node::new(
            "PrefixExpression",
            &[
                format!("operator={}", prefix.operator.as_str()),
                location(&prefix.location),
            ],
        )
        .child(expr_node(&prefix.operand)),
    }
}

fn block_node(block: &BlockStmt) -> Node {
    Node::new("BlockStatement", &[location(&block.location)]).children(block.iter().map(stmt_node))
}

fn declarator_node(declarator: &VariableDeclarator) -> Node {
    Node::new(
        "VariableDeclarator",
        &[
            format!("name={}", declarator.id.name),
            location(&declarator.id.location),
        ],
    )
    .children(declarator.init.iter().map(expr_node))
}

fn parameter_node(param: &FunctionArgument) -> Node {
    Node::new(
        "Parameter",
        &[
            format!("name={}", param.id.name),
            location(&param.id.location),
        ],
    )
    .children(param.default.iter().map(expr_node))
}

fn stmt_node(stmt: &Stmt) -> Node {
    match stmt {
        Stmt::Empty(empty) => Node::new("EmptyStatement", &[location(&empty.location)]),
        Stmt::Debugger(debugger) => Node::new("DebuggerStatement", &[location(&debugger.location)]),
        Stmt::Block(block) => block_node(block),
        Stmt::Expression(expression) => {
            Node::new("ExpressionStatement", &[location(&expression.location)])
                .child(expr_node(&expression.expression))
        }
        Stmt::If(if_stmt) => Node::new("IfStatement", &[location(&if_stmt.location)])
            .child(expr_node(&if_stmt.test))
            .child(stmt_node(&if_stmt.consequent))
            .children(if_stmt.alternate.iter().map(|alternate| stmt_node(alternate))),
        Stmt::While(while_stmt) => Node::new("WhileStatement", &[location(&while_stmt.location)])
            .child(expr_node(&while_stmt.test))
            .child(stmt_node(&while_stmt.body)),
        Stmt::Return(ret) => Node::new("ReturnStatement", &[location(&ret.location)])
            .children(ret.argument.iter().map(expr_node)),
        Stmt::VarDecl(decl) => Node::new(
            "VariableDeclaration",
            &[
                format!("kind={}", decl.kind.as_str()),
                location(&decl.location),
            ],
        )
        .children(decl.declarations.iter().map(declarator_node)),
        Stmt::FnDecl(function) => Node::new(
            "FunctionDeclaration",
            &[
                format!("name={}", function.id.name),
                format!("async={}", function.is_async),
                format!("generator={}", function.is_generator),
                location(&function.location),
            ],
        )
        .children(function.params.iter().map(parameter_node))
        .child(block_node(&function.body)),
    }
}

/// Renders the program, one node per line, ending with `]);`.
pub fn print_program(program: &Program) -> String {
    if program.is_empty() {
        return String::from("Program([]);");
    }

    let mut out = String::from("Program([\n");
    for (i, stmt) in program.iter().enumerate() {
        if i > 0 {
            out.push_str(",\n");
        }
        stmt_node(stmt).render(1, &mut out);
    }
    out.push_str("\n]);");
    out
}
