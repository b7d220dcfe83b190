//! Reference renderer for forwarding declarations.
//!
//! Produces C#-style partial class text: one `namespace` block per
//! delegating field, a generated-code attribute, and one expression-bodied
//! member per [`ForwardingDecl`]. Output depends only on the resolution and
//! the options, so unchanged input renders byte-identically.
//!
//! ```text
//! namespace Demo
//! {
//!   // Delegation for field Demo.TestThing._inner
//!   [System.CodeDom.Compiler.GeneratedCode("DelegatedImplementation", "1.0.0.0")]
//!   partial class TestThing
//!   {
//!     // Delegation for Interface Demo.IThing
//!     string Demo.IThing.@PassThru(string @a) => ((Demo.IThing)this._inner).@PassThru(@a);
//!   }
//! }
//! ```

mod options;

pub use options::EmitOptions;

use std::fmt::Write;

use crate::resolve::{
    FieldForwarding, ForwardAccess, ForwardExpr, ForwardKind, ForwardedAccessor, ForwardingDecl, Qualifier,
    Resolution, TypeResolution,
};
use crate::symbols::{Parameter, SymbolHost, TypeId};

/// File preamble written once by [`render_resolution`].
pub const PREAMBLE: &str = "#pragma warning disable\n#nullable enable annotations\n";

/// Render every non-empty declaring type of a resolution into one file.
pub fn render_resolution<H: SymbolHost + ?Sized>(host: &H, resolution: &Resolution, options: &EmitOptions) -> String {
    let mut output = String::from(PREAMBLE);
    for ty in &resolution.types {
        output.push_str(&render_type(host, ty, options));
    }
    output
}

/// Render the forwarders of one declaring type. Empty when no field owns a
/// target.
pub fn render_type<H: SymbolHost + ?Sized>(host: &H, resolution: &TypeResolution, options: &EmitOptions) -> String {
    let mut ctx = RenderContext::new(host, options);
    for field in &resolution.fields {
        ctx.render_field(resolution.declaring_type, field);
    }
    ctx.output
}

/// Split a full name into namespace and simple name, ignoring dots inside
/// generic argument lists.
fn split_name(full: &str) -> (Option<&str>, &str) {
    let mut depth = 0usize;
    let mut last_dot = None;
    for (i, c) in full.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            '.' if depth == 0 => last_dot = Some(i),
            _ => {}
        }
    }
    match last_dot {
        Some(i) => (Some(&full[..i]), &full[i + 1..]),
        None => (None, full),
    }
}

struct RenderContext<'a, H: SymbolHost + ?Sized> {
    host: &'a H,
    options: &'a EmitOptions,
    output: String,
    indent_level: usize,
}

impl<'a, H: SymbolHost + ?Sized> RenderContext<'a, H> {
    fn new(host: &'a H, options: &'a EmitOptions) -> Self {
        Self {
            host,
            options,
            output: String::new(),
            indent_level: 0,
        }
    }

    fn name(&self, ty: TypeId) -> &'a str {
        let host: &'a H = self.host;
        host.type_name(ty)
    }

    fn write_line(&mut self, text: &str) {
        let indent = self.options.indent(self.indent_level);
        let _ = writeln!(self.output, "{}{}", indent, text);
    }

    fn open(&mut self) {
        self.write_line("{");
        self.indent_level += 1;
    }

    fn close(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
        self.write_line("}");
    }

    fn render_field(&mut self, declaring_type: TypeId, field: &FieldForwarding) {
        let full = self.name(declaring_type);
        let (namespace, simple) = split_name(full);

        if let Some(namespace) = namespace {
            self.write_line(&format!("namespace {}", namespace));
            self.open();
        }
        if self.options.emit_comments {
            self.write_line(&format!("// Delegation for field {}.{}", full, field.field));
        }
        self.write_line(&format!(
            "[System.CodeDom.Compiler.GeneratedCode(\"{}\", \"{}\")]",
            self.options.generator_name, self.options.generator_version
        ));
        self.write_line(&format!("partial class {}", simple));
        self.open();

        for target in &field.targets {
            if self.options.emit_comments {
                self.write_line(&format!(
                    "// Delegation for {} {}",
                    target.kind.display(),
                    self.name(target.target.ty)
                ));
            }
            for decl in &target.decls {
                let line = self.format_decl(decl);
                self.write_line(&line);
            }
        }

        self.close();
        if namespace.is_some() {
            self.close();
        }
    }

    fn format_params(&self, params: &[Parameter]) -> String {
        params
            .iter()
            .map(|p| format!("{} @{}", self.name(p.ty), p.name))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn format_expr(&self, expr: &ForwardExpr) -> String {
        let receiver = format!("(({})this.{})", self.name(expr.cast), expr.field);
        let args = |args: &[smol_str::SmolStr]| {
            args.iter()
                .map(|a| format!("@{}", a))
                .collect::<Vec<_>>()
                .join(", ")
        };
        match &expr.access {
            ForwardAccess::Call { member, args: a } => format!("{}.@{}({})", receiver, member, args(a)),
            ForwardAccess::Property { member } => format!("{}.@{}", receiver, member),
            ForwardAccess::Index { args: a } => format!("{}[{}]", receiver, args(a)),
        }
    }

    /// Modifiers, type and qualified name: everything before the body.
    fn format_head(&self, decl: &ForwardingDecl) -> String {
        let result = self.name(decl.result_type);
        let name = match decl.kind {
            ForwardKind::Indexer => format!("this[{}]", self.format_params(&decl.parameters)),
            ForwardKind::Property => format!("@{}", decl.name),
            ForwardKind::Method => format!("@{}({})", decl.name, self.format_params(&decl.parameters)),
        };
        match decl.qualifier {
            Qualifier::Override => format!("{} override {} {}", decl.accessibility.keyword(), result, name),
            Qualifier::Explicit(iface) => format!("{} {}.{}", result, self.name(iface), name),
            Qualifier::Plain => format!("{} {} {}", decl.accessibility.keyword(), result, name),
        }
    }

    fn format_decl(&self, decl: &ForwardingDecl) -> String {
        let head = self.format_head(decl);
        let expr = self.format_expr(&decl.expr);
        if decl.kind == ForwardKind::Method {
            return format!("{} => {};", head, expr);
        }

        // Accessor modifiers are only legal when both accessors are present
        // and never on type-qualified members.
        let modifier = |accessor: &ForwardedAccessor| match accessor.accessibility {
            Some(acc) if !decl.is_explicit() => format!("{} ", acc.keyword()),
            _ => String::new(),
        };
        match (&decl.getter, &decl.setter) {
            (Some(get), Some(set)) => format!(
                "{} {{ {}get => {}; {}set => {} = value; }}",
                head,
                modifier(get),
                expr,
                modifier(set),
                expr
            ),
            (Some(_), None) => format!("{} => {};", head, expr),
            (None, Some(_)) => format!("{} {{ set => {} = value; }}", head, expr),
            (None, None) => format!("{} {{ }}", head),
        }
    }
}
