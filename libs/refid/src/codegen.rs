//! Source generator for per-entity RefId types.
//!
//! [`render`] turns an [`EntitySpec`] into one Rust source unit declaring the
//! entity's tag constant, its [`RefTag`](crate::RefTag) marker, and the
//! `<Name>RefId`, `Null<Name>RefId` and `<Name>RefIdMatcher` aliases. The
//! transform is pure: the same spec and crate path always produce the same
//! bytes. The `refidgen` tool writes the result to disk; the entity modules
//! of this crate are its output.

use thiserror::Error;

const TEMPLATE: &str = include_str!("../templates/entity.rs.tpl");

/// Errors raised while validating generator input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodegenError {
    #[error("entity name is required")]
    EmptyName,

    #[error("invalid entity name '{0}': must be an ASCII identifier starting with an uppercase letter")]
    InvalidName(String),

    #[error("tag value is required and must be greater than zero, got {0}")]
    TagNotPositive(i64),

    #[error("tag value {0} does not fit in a byte (max 255)")]
    TagOutOfRange(i64),
}

/// Validated generator input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySpec {
    name: String,
    tag: u8,
}

impl EntitySpec {
    /// Validates `name` and `tag`.
    ///
    /// `name` is the bare entity name in PascalCase (`User`, `EventItem`);
    /// `tag` must lie in `1..=255`.
    pub fn new(name: impl Into<String>, tag: i64) -> Result<Self, CodegenError> {
        let name = name.into();
        validate_name(&name)?;
        if tag <= 0 {
            return Err(CodegenError::TagNotPositive(tag));
        }
        let tag = u8::try_from(tag).map_err(|_| CodegenError::TagOutOfRange(tag))?;
        Ok(Self { name, tag })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tag(&self) -> u8 {
        self.tag
    }

    /// File the unit should be written to, e.g. `event_item.rs`.
    pub fn file_name(&self) -> String {
        format!("{}.rs", snake_case(&self.name))
    }

    /// Name of the tag constant's prefix, e.g. `EVENT_ITEM`.
    pub fn const_prefix(&self) -> String {
        snake_case(&self.name).to_ascii_uppercase()
    }
}

fn validate_name(name: &str) -> Result<(), CodegenError> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(CodegenError::EmptyName);
    };
    if !first.is_ascii_uppercase() || !chars.all(|c| c.is_ascii_alphanumeric()) {
        return Err(CodegenError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// `UserPwReset` -> `user_pw_reset`.
fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            if prev_lower {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
            prev_lower = false;
        } else {
            out.push(c);
            prev_lower = true;
        }
    }
    out
}

/// Renders the source unit for `spec`.
///
/// `crate_path` is how the unit refers to this library: `icbt_refid` from a
/// downstream crate, `crate` from inside it.
pub fn render(spec: &EntitySpec, crate_path: &str) -> String {
    TEMPLATE
        .replace("{{CRATE}}", crate_path)
        .replace("{{CONST}}", &spec.const_prefix())
        .replace("{{NAME}}", &spec.name)
        .replace("{{TAG}}", &spec.tag.to_string())
}
