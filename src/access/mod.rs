//! Typed scalar accessors.
//!
//! Two families of lookups convert text into scalars:
//!
//! - value accessors (`value_*`) find a node with
//!   [`Document::select_node`] and parse its value;
//! - attribute accessors (`attr_*`) scan the node's own attributes, in order,
//!   with the same name predicate, and parse the first match.
//!
//! Neither family fails. A missing node or attribute and a value that does
//! not parse both produce the type's zero value (`""`, `0`, `0.0`, `false`),
//! so callers that need to tell the two apart should use
//! [`Document::select_node`] or [`Document::has_attr`] first.

use crate::tree::{Attribute, Document, NodeId};

/// A scalar that can be read out of node or attribute text.
///
/// `Default::default()` is the zero value returned when text is missing or
/// does not parse. Text is parsed as-is, without trimming.
///
/// `bool` accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
pub trait Scalar: Default {
    /// Parses `text`, returning `None` if it is not a valid value.
    fn parse_scalar(text: &str) -> Option<Self>;
}

macro_rules! impl_scalar_from_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Scalar for $ty {
                fn parse_scalar(text: &str) -> Option<Self> {
                    text.parse().ok()
                }
            }
        )*
    };
}

impl_scalar_from_str!(i32, i64, u32, u64, f32, f64);

impl Scalar for String {
    fn parse_scalar(text: &str) -> Option<Self> {
        Some(text.to_owned())
    }
}

impl Scalar for bool {
    fn parse_scalar(text: &str) -> Option<Self> {
        match text {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
            _ => None,
        }
    }
}

fn parse_or_zero<T: Scalar>(text: Option<&str>) -> T {
    text.and_then(T::parse_scalar).unwrap_or_default()
}

impl Document {
    // --- Node values ---

    /// Returns the value of the first node matching `namespace`/`local` in
    /// the subtree of `from`, or `""`.
    ///
    /// # Examples
    ///
    /// ```
    /// use xmlx::Document;
    ///
    /// let doc = Document::parse_str("<cfg><host>db1</host><port>5432</port></cfg>").unwrap();
    /// assert_eq!(doc.value_str(doc.root(), "*", "host"), "db1");
    /// assert_eq!(doc.value_u32(doc.root(), "*", "port"), 5432);
    /// assert_eq!(doc.value_u32(doc.root(), "*", "missing"), 0);
    /// ```
    #[must_use]
    pub fn value_str(&self, from: NodeId, namespace: &str, local: &str) -> &str {
        self.select_node(from, namespace, local)
            .map_or("", |id| self.value(id))
    }

    /// Parses the value of the first matching node as `T`, or returns
    /// `T::default()`.
    #[must_use]
    pub fn value_as<T: Scalar>(&self, from: NodeId, namespace: &str, local: &str) -> T {
        parse_or_zero(
            self.select_node(from, namespace, local)
                .map(|id| self.value(id)),
        )
    }

    /// Value of the first matching node as `i32`.
    #[must_use]
    pub fn value_i32(&self, from: NodeId, namespace: &str, local: &str) -> i32 {
        self.value_as(from, namespace, local)
    }

    /// Value of the first matching node as `i64`.
    #[must_use]
    pub fn value_i64(&self, from: NodeId, namespace: &str, local: &str) -> i64 {
        self.value_as(from, namespace, local)
    }

    /// Value of the first matching node as `u32`.
    #[must_use]
    pub fn value_u32(&self, from: NodeId, namespace: &str, local: &str) -> u32 {
        self.value_as(from, namespace, local)
    }

    /// Value of the first matching node as `u64`.
    #[must_use]
    pub fn value_u64(&self, from: NodeId, namespace: &str, local: &str) -> u64 {
        self.value_as(from, namespace, local)
    }

    /// Value of the first matching node as `f32`.
    #[must_use]
    pub fn value_f32(&self, from: NodeId, namespace: &str, local: &str) -> f32 {
        self.value_as(from, namespace, local)
    }

    /// Value of the first matching node as `f64`.
    #[must_use]
    pub fn value_f64(&self, from: NodeId, namespace: &str, local: &str) -> f64 {
        self.value_as(from, namespace, local)
    }

    /// Value of the first matching node as `bool`.
    #[must_use]
    pub fn value_bool(&self, from: NodeId, namespace: &str, local: &str) -> bool {
        self.value_as(from, namespace, local)
    }

    // --- Attributes ---

    /// Returns the first attribute of `id` matching `namespace`/`local`.
    ///
    /// Only `id`'s own attributes are scanned; descendants are not.
    #[must_use]
    pub fn find_attr(&self, id: NodeId, namespace: &str, local: &str) -> Option<&Attribute> {
        self.attributes(id)
            .iter()
            .find(|attr| attr.name.matches(namespace, local))
    }

    /// Returns `true` if `id` has an attribute matching `namespace`/`local`.
    #[must_use]
    pub fn has_attr(&self, id: NodeId, namespace: &str, local: &str) -> bool {
        self.find_attr(id, namespace, local).is_some()
    }

    /// Returns the value of the first matching attribute of `id`, or `""`.
    ///
    /// # Examples
    ///
    /// ```
    /// use xmlx::Document;
    ///
    /// let doc = Document::parse_str(r#"<box weight="2.5" fragile="true"/>"#).unwrap();
    /// let node = doc.root_element().unwrap();
    /// assert_eq!(doc.attr_str(node, "*", "weight"), "2.5");
    /// assert_eq!(doc.attr_f64(node, "*", "weight"), 2.5);
    /// assert!(doc.attr_bool(node, "*", "fragile"));
    /// assert_eq!(doc.attr_f64(node, "*", "height"), 0.0);
    /// ```
    #[must_use]
    pub fn attr_str(&self, id: NodeId, namespace: &str, local: &str) -> &str {
        self.find_attr(id, namespace, local)
            .map_or("", |attr| attr.value.as_str())
    }

    /// Parses the first matching attribute of `id` as `T`, or returns
    /// `T::default()`.
    #[must_use]
    pub fn attr_as<T: Scalar>(&self, id: NodeId, namespace: &str, local: &str) -> T {
        parse_or_zero(
            self.find_attr(id, namespace, local)
                .map(|attr| attr.value.as_str()),
        )
    }

    /// First matching attribute as `i32`.
    #[must_use]
    pub fn attr_i32(&self, id: NodeId, namespace: &str, local: &str) -> i32 {
        self.attr_as(id, namespace, local)
    }

    /// First matching attribute as `i64`.
    #[must_use]
    pub fn attr_i64(&self, id: NodeId, namespace: &str, local: &str) -> i64 {
        self.attr_as(id, namespace, local)
    }

    /// First matching attribute as `u32`.
    #[must_use]
    pub fn attr_u32(&self, id: NodeId, namespace: &str, local: &str) -> u32 {
        self.attr_as(id, namespace, local)
    }

    /// First matching attribute as `u64`.
    #[must_use]
    pub fn attr_u64(&self, id: NodeId, namespace: &str, local: &str) -> u64 {
        self.attr_as(id, namespace, local)
    }

    /// First matching attribute as `f32`.
    #[must_use]
    pub fn attr_f32(&self, id: NodeId, namespace: &str, local: &str) -> f32 {
        self.attr_as(id, namespace, local)
    }

    /// First matching attribute as `f64`.
    #[must_use]
    pub fn attr_f64(&self, id: NodeId, namespace: &str, local: &str) -> f64 {
        self.attr_as(id, namespace, local)
    }

    /// First matching attribute as `bool`.
    #[must_use]
    pub fn attr_bool(&self, id: NodeId, namespace: &str, local: &str) -> bool {
        self.attr_as(id, namespace, local)
    }
}
