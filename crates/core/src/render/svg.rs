//! Scene → SVG markup serializer.
//!
//! Pure string construction with no I/O: the frontend shell receives the
//! returned markup and attaches it to the page. Text content and string
//! attributes are XML-escaped here, so renderers can pass user-sourced
//! labels through untouched.

use std::fmt::Write;

use crate::charts::geometry::fmt_num;

use super::scene::{Node, Scene};

/// Escape the five XML special characters for safe embedding in element
/// text content and attribute values.
#[must_use]
pub fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

/// Serialize a scene to a complete `<svg>` element.
#[must_use]
pub fn scene_to_svg(scene: &Scene) -> String {
    let mut out = String::new();
    let w = fmt_num(scene.width);
    let h = fmt_num(scene.height);
    let _ = write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">"
    );
    for node in &scene.nodes {
        write_node(&mut out, node);
    }
    out.push_str("</svg>");
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Group {
            transform,
            children,
        } => {
            out.push_str("<g");
            push_attr_opt(out, "transform", transform.as_deref());
            out.push('>');
            for child in children {
                write_node(out, child);
            }
            out.push_str("</g>");
        }
        Node::Rect {
            x,
            y,
            width,
            height,
            rx,
            fill,
            class,
        } => {
            out.push_str("<rect");
            push_attr_num(out, "x", *x);
            push_attr_num(out, "y", *y);
            push_attr_num(out, "width", *width);
            push_attr_num(out, "height", *height);
            if let Some(rx) = rx {
                push_attr_num(out, "rx", *rx);
            }
            push_attr_opt(out, "fill", fill.as_deref());
            push_attr_opt(out, "class", class.as_deref());
            out.push_str("/>");
        }
        Node::Circle {
            cx,
            cy,
            r,
            fill,
            class,
        } => {
            out.push_str("<circle");
            push_attr_num(out, "cx", *cx);
            push_attr_num(out, "cy", *cy);
            push_attr_num(out, "r", *r);
            push_attr_opt(out, "fill", fill.as_deref());
            push_attr_opt(out, "class", class.as_deref());
            out.push_str("/>");
        }
        Node::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
            stroke_width,
            class,
        } => {
            out.push_str("<line");
            push_attr_num(out, "x1", *x1);
            push_attr_num(out, "y1", *y1);
            push_attr_num(out, "x2", *x2);
            push_attr_num(out, "y2", *y2);
            push_attr_opt(out, "stroke", stroke.as_deref());
            if let Some(width) = stroke_width {
                push_attr_num(out, "stroke-width", *width);
            }
            push_attr_opt(out, "class", class.as_deref());
            out.push_str("/>");
        }
        Node::Path {
            d,
            fill,
            stroke,
            stroke_width,
            stroke_linejoin,
            class,
        } => {
            out.push_str("<path");
            push_attr(out, "d", d);
            push_attr_opt(out, "fill", fill.as_deref());
            push_attr_opt(out, "stroke", stroke.as_deref());
            if let Some(width) = stroke_width {
                push_attr_num(out, "stroke-width", *width);
            }
            push_attr_opt(out, "stroke-linejoin", stroke_linejoin.as_deref());
            push_attr_opt(out, "class", class.as_deref());
            out.push_str("/>");
        }
        Node::Text {
            x,
            y,
            content,
            anchor,
            transform,
            fill,
            font_size,
            font_weight,
            class,
        } => {
            out.push_str("<text");
            push_attr_num(out, "x", *x);
            push_attr_num(out, "y", *y);
            push_attr(out, "text-anchor", anchor.as_svg());
            push_attr_opt(out, "transform", transform.as_deref());
            push_attr_opt(out, "fill", fill.as_deref());
            if let Some(size) = font_size {
                push_attr_num(out, "font-size", *size);
            }
            push_attr_opt(out, "font-weight", font_weight.as_deref());
            push_attr_opt(out, "class", class.as_deref());
            let _ = write!(out, ">{}</text>", xml_escape(content));
        }
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    let _ = write!(out, " {name}=\"{}\"", xml_escape(value));
}

fn push_attr_opt(out: &mut String, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        push_attr(out, name, value);
    }
}

fn push_attr_num(out: &mut String, name: &str, value: f64) {
    let _ = write!(out, " {name}=\"{}\"", fmt_num(value));
}
