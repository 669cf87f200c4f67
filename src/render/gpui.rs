//! Turns a [`RenderNode`] tree into gpui elements.
//!
//! Only the style properties gpui can express directly are applied: flex
//! layout, sizes and spacing given as lengths, radii, opacity and hex colors.
//! Theme tokens such as `gray.500` or `md` are left to the application.

use gpui::{AnyElement, Hsla, IntoElement, ParentElement, Styled, div, svg};
use mosaic_theme::{Length, StyleMap, StyleValue};

use crate::{render::RenderNode, utils::{parse_hex, rgb_a}};

/// Converts a rendered tree into a gpui element.
///
/// Screen-reader-only nodes render as empty boxes.
pub fn into_element(node: RenderNode) -> AnyElement {
    if node.is_text() {
        return node.text.unwrap_or_default().into_any_element();
    }

    if node.a11y.sr_only {
        return div().into_any_element();
    }

    if node.tag == "svg" {
        let path = node.attrs.get("src").cloned().unwrap_or_default();
        return apply_style(svg().path(path), &node.style).into_any_element();
    }

    apply_style(div(), &node.style)
        .children(node.children.into_iter().map(into_element))
        .into_any_element()
}

fn apply_style<E: Styled>(element: E, style: &StyleMap) -> E {
    style
        .iter()
        .fold(element, |element, (property, value)| {
            apply_property(element, property, value)
        })
}

fn apply_property<E: Styled>(element: E, property: &str, value: &StyleValue) -> E {
    match property {
        "display" if value.as_str().is_some_and(|display| display.ends_with("flex")) => {
            element.flex()
        }
        "flexDirection" if value.as_str() == Some("column") => element.flex_col(),
        "alignItems" if value.as_str() == Some("center") => element.items_center(),
        "justifyContent" if value.as_str() == Some("center") => element.justify_center(),
        "position" if value.as_str() == Some("relative") => element.relative(),
        "opacity" => match value.as_number() {
            Some(opacity) => element.opacity(opacity as f32),
            None => element,
        },
        "w" | "width" => with_length(element, value, |element, length| element.w(length)),
        "h" | "height" => with_length(element, value, |element, length| element.h(length)),
        "minW" | "minWidth" => with_length(element, value, |element, length| element.min_w(length)),
        "px" => with_length(element, value, |element, length| element.px(length)),
        "py" => with_length(element, value, |element, length| element.py(length)),
        "gap" => with_length(element, value, |element, length| element.gap(length)),
        "marginStart" => with_length(element, value, |element, length| element.ml(length)),
        "marginEnd" => with_length(element, value, |element, length| element.mr(length)),
        "marginTop" => with_length(element, value, |element, length| element.mt(length)),
        "borderRadius" => match length_of(value).and_then(|length| length.to_absolute()) {
            Some(radius) => element.rounded(radius),
            None => element,
        },
        "bg" | "background" | "backgroundColor" => match color_of(value) {
            Some(color) => element.bg(color),
            None => element,
        },
        "color" => match color_of(value) {
            Some(color) => element.text_color(color),
            None => element,
        },
        _ => {
            tracing::trace!(property, "style property not applied to gpui element");
            element
        }
    }
}

fn with_length<E: Styled>(element: E, value: &StyleValue, apply: impl FnOnce(E, Length) -> E) -> E {
    match length_of(value) {
        Some(length) => apply(element, length),
        None => element,
    }
}

fn length_of(value: &StyleValue) -> Option<Length> {
    match value {
        StyleValue::Number(px) => Some(Length::px(*px as f32)),
        StyleValue::String(string) => string.parse().ok(),
        _ => None,
    }
}

fn color_of(value: &StyleValue) -> Option<Hsla> {
    let (hex, alpha) = parse_hex(value.as_str()?)?;
    Some(rgb_a(hex, alpha).into())
}
