use serde_json::json;

use crate::graph_spec::{DiagramKind, Direction, Edge, GraphSpec, LineStyle, Node, NodeShape};
use crate::label_wrap::wrap;
use crate::theme::{RenderConfig, swatch};
use crate::validator::validate;

const INDENT: &str = "    ";
const PLACEHOLDER_NODE: &str = "empty[\"No data\"]";
const LEGEND_ID: &str = "legend";

/// Never fails. An empty node list yields a single placeholder node.
pub fn compile(spec: &GraphSpec, config: &RenderConfig) -> String {
    let mut lines = vec![init_directive(spec, config)];

    if spec.nodes.is_empty() {
        tracing::debug!("graph spec has no nodes, emitting placeholder diagram");
        lines.push(format!("flowchart {}", direction_keyword(spec.direction)));
        lines.push(format!("{INDENT}{PLACEHOLDER_NODE}"));
        return lines.join("\n");
    }

    if spec.kind != DiagramKind::Flow {
        tracing::debug!(kind = ?spec.kind, "no node support for diagram kind, header only");
        lines.push(kind_keyword(spec.kind).to_string());
        return lines.join("\n");
    }

    let defects = validate(Some(spec)).len();
    if defects > 0 {
        tracing::warn!(defects, "compiling a graph spec that failed validation");
    }

    lines.push(format!("flowchart {}", direction_keyword(spec.direction)));
    lines.extend(spec.nodes.iter().map(|n| node_line(n, config.wrap_width)));
    lines.extend(spec.edges.iter().map(edge_line));

    for group in spec.groups.iter().flatten() {
        lines.push(format!(
            "{INDENT}subgraph {}[\"{}\"]",
            group.id,
            escape_label(&group.label)
        ));
        for id in &group.member_node_ids {
            lines.push(format!("{INDENT}{INDENT}{id}"));
        }
        lines.push(format!("{INDENT}end"));
    }

    if let Some(entries) = &spec.legend_items {
        lines.push(format!("{INDENT}subgraph {LEGEND_ID}[\"Legend\"]"));
        for (i, entry) in entries.iter().enumerate() {
            lines.push(format!(
                "{INDENT}{INDENT}{LEGEND_ID}_{i}[\"{}\"]",
                escape_label(&entry.label)
            ));
        }
        lines.push(format!("{INDENT}end"));
        for (i, entry) in entries.iter().enumerate() {
            let colors = swatch(&entry.swatch_key);
            lines.push(format!(
                "{INDENT}style {LEGEND_ID}_{i} fill:{},stroke:{},color:#fff",
                colors.fill, colors.stroke
            ));
        }
    }

    for node in &spec.nodes {
        if let Some(class) = &node.style_class {
            lines.push(format!("{INDENT}class {} {class}", node.id));
        }
    }

    for node in &spec.nodes {
        lines.push(format!("{INDENT}click {} {}", node.id, config.click_hook));
    }

    tracing::debug!(
        nodes = spec.nodes.len(),
        edges = spec.edges.len(),
        lines = lines.len(),
        "compiled graph spec"
    );
    lines.join("\n")
}

pub fn compile_default(spec: &GraphSpec) -> String {
    compile(spec, &RenderConfig::default())
}

/// Validate, then compile. Every defect is returned at once.
pub fn compile_checked(spec: &GraphSpec, config: &RenderConfig) -> crate::Result<String> {
    let errors = validate(Some(spec));
    if !errors.is_empty() {
        return Err(crate::Error::Invalid(errors));
    }
    Ok(compile(spec, config))
}

fn init_directive(spec: &GraphSpec, config: &RenderConfig) -> String {
    let init = json!({
        "theme": spec.theme_name.as_str(),
        "themeVariables": config.theme_variables,
    });
    format!("%%{{init: {init}}}%%")
}

pub fn direction_keyword(direction: Direction) -> &'static str {
    match direction {
        Direction::TopToBottom => "TB",
        Direction::BottomToTop => "BT",
        Direction::RightToLeft => "RL",
        Direction::LeftToRight => "LR",
    }
}

fn kind_keyword(kind: DiagramKind) -> &'static str {
    match kind {
        DiagramKind::Flow => "flowchart",
        DiagramKind::Sequence => "sequenceDiagram",
        DiagramKind::Class => "classDiagram",
        DiagramKind::State => "stateDiagram-v2",
    }
}

pub fn shape_delimiters(shape: NodeShape) -> (&'static str, &'static str) {
    match shape {
        NodeShape::Rectangle => ("[", "]"),
        NodeShape::Round => ("(", ")"),
        NodeShape::Stadium => ("([", "])"),
        NodeShape::Cylinder => ("[(", ")]"),
        NodeShape::Circle => ("((", "))"),
        NodeShape::Diamond => ("{", "}"),
        NodeShape::Hexagon => ("{{", "}}"),
    }
}

pub fn connector(style: LineStyle) -> &'static str {
    match style {
        LineStyle::Solid => "--->",
        LineStyle::Thick => "===>",
        LineStyle::Dotted => "-.->",
        LineStyle::Dashed => "-->",
    }
}

fn node_line(node: &Node, wrap_width: usize) -> String {
    let (open, close) = shape_delimiters(node.shape);
    let label = escape_label(&wrap(&node.label, wrap_width));
    format!("{INDENT}{}{open}\"{label}\"{close}", node.id)
}

fn edge_line(edge: &Edge) -> String {
    let token = connector(edge.line_style);
    match &edge.label {
        Some(label) => format!(
            "{INDENT}{} {token}|\"{}\"| {}",
            edge.from,
            escape_label(label),
            edge.to
        ),
        None => format!("{INDENT}{} {token} {}", edge.from, edge.to),
    }
}

// `#quot;` is Mermaid's entity for a double quote
fn escape_label(label: &str) -> String {
    label.replace('"', "#quot;")
}
