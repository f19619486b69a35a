//! Handlebars helpers for rendering sssd.conf style INI files

use handlebars::{
    Context, Handlebars, Helper, HelperResult, Output, RenderContext, RenderError,
    RenderErrorReason,
};
use serde_json::Value;

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// `{{default value "fallback"}}`: fallback when the value is null or empty
pub fn default_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let fallback = h
        .param(1)
        .map(|v| scalar_to_string(v.value()))
        .unwrap_or_default();

    let rendered = match h.param(0).map(|p| p.value()) {
        None | Some(Value::Null) => fallback,
        Some(Value::String(s)) if s.is_empty() => fallback,
        Some(value) => scalar_to_string(value),
    };

    out.write(&rendered)?;
    Ok(())
}

/// `{{ini_bool value}}`: sssd spells booleans `True` and `False`
pub fn ini_bool_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let param = h.param(0).ok_or_else(|| {
        RenderError::from(RenderErrorReason::Other(
            "ini_bool helper requires one parameter".to_string(),
        ))
    })?;

    let truthy = match param.value() {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => matches!(
            s.to_ascii_lowercase().as_str(),
            "true" | "yes" | "on" | "1"
        ),
        _ => false,
    };

    out.write(if truthy { "True" } else { "False" })?;
    Ok(())
}

/// `{{#if (eq a b)}}`: string-wise equality across scalar types
pub fn equality_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let (left, right) = match (h.param(0), h.param(1)) {
        (Some(left), Some(right)) => (left, right),
        _ => {
            return Err(RenderError::from(RenderErrorReason::Other(
                "eq helper requires two parameters".to_string(),
            )))
        }
    };

    let equal = scalar_to_string(left.value()) == scalar_to_string(right.value());
    // Empty output is falsy inside subexpressions
    if equal {
        out.write("true")?;
    }
    Ok(())
}
