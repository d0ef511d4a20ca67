// ABOUTME: Parameter and return-type descriptors built from Rust type names.
// ABOUTME: Option<T> unwraps to T and marks the parameter as not required.

use serde::Serialize;

/// Render a raw `std::any::type_name` output without namespace paths.
///
/// `core::option::Option<alloc::string::String>` becomes `Option<String>`,
/// including inside generic arguments.
pub fn display_type(raw: &str) -> String {
    let mut out = String::new();
    let mut segment = String::new();
    for ch in raw.chars() {
        if ch.is_alphanumeric() || ch == '_' {
            segment.push(ch);
        } else if ch == ':' {
            // Path separator - everything accumulated so far was a module
            // prefix, drop it.
            segment.clear();
        } else {
            out.push_str(&segment);
            segment.clear();
            out.push(ch);
        }
    }
    out.push_str(&segment);
    out
}

/// If `ty` is an `Option<T>` rendering, return the inner `T`.
pub fn unwrap_optional(ty: &str) -> Option<&str> {
    ty.strip_prefix("Option<")?.strip_suffix(">")
}

/// One formal parameter of a tool.
#[derive(Debug, Clone, Serialize)]
pub struct Param {
    pub name: String,

    /// Display rendering of the declared type, or `"Any"` when untyped.
    #[serde(rename = "type")]
    pub ty: String,

    /// True iff no default exists and the type is not an optional wrapper.
    pub required: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Param {
    /// Build a parameter from a declared Rust type.
    ///
    /// An `Option<T>` annotation unwraps to `T` and forces `required = false`
    /// regardless of default presence.
    pub fn of<T: ?Sized>(name: impl Into<String>) -> Self {
        let rendered = display_type(std::any::type_name::<T>());
        let (ty, required) = match unwrap_optional(&rendered) {
            Some(inner) => (inner.to_string(), false),
            None => (rendered, true),
        };
        Self {
            name: name.into(),
            ty,
            required,
            default: None,
            description: None,
        }
    }

    /// Build a parameter with no type annotation.
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: "Any".to_string(),
            required: true,
            default: None,
            description: None,
        }
    }

    /// Attach a declared default value. A parameter with a default is never
    /// required.
    pub fn default_value(mut self, value: impl Serialize) -> Self {
        self.default = serde_json::to_value(value).ok();
        self.required = false;
        self
    }

    /// Attach a human-readable description.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Structural description of a tool's declared return type.
#[derive(Debug, Clone, Serialize)]
pub struct ReturnInfo {
    #[serde(rename = "type")]
    pub ty: String,
    pub description: String,
}

impl ReturnInfo {
    /// Build a return descriptor from a declared Rust type.
    pub fn of<T: ?Sized>(description: impl Into<String>) -> Self {
        Self {
            ty: display_type(std::any::type_name::<T>()),
            description: description.into(),
        }
    }

    /// Fallback for an undeclared return type.
    pub fn any() -> Self {
        Self {
            ty: "Any".to_string(),
            description: String::new(),
        }
    }
}

impl Default for ReturnInfo {
    fn default() -> Self {
        Self::any()
    }
}
