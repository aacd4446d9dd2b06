//! Decoding subtrees into caller-defined types.
//!
//! The crate does no structured decoding itself. [`Document::unmarshal`]
//! renders a subtree with [`serial::serialize_node`](crate::serial::serialize_node)
//! and hands the text, together with the caller's target, to a [`Decoder`].
//! Whatever error the decoder reports is returned as-is.
//!
//! Any `Fn(&str, &mut T) -> Result<(), E>` is a decoder. With the `serde`
//! feature, [`SerdeDecoder`] decodes into any `serde::de::DeserializeOwned`
//! type through `quick_xml::de`.

use crate::serial::serialize_node;
use crate::tree::{Document, NodeId};

/// Populates a target of type `T` from XML text.
pub trait Decoder<T: ?Sized> {
    /// The error reported when the text cannot be decoded into `T`.
    type Error;

    /// Decodes `text` into `target`.
    ///
    /// # Errors
    ///
    /// Returns the decoder's error if `text` is malformed or does not fit `T`.
    fn decode(&self, text: &str, target: &mut T) -> Result<(), Self::Error>;
}

impl<T, E, F> Decoder<T> for F
where
    T: ?Sized,
    F: Fn(&str, &mut T) -> Result<(), E>,
{
    type Error = E;

    fn decode(&self, text: &str, target: &mut T) -> Result<(), E> {
        self(text, target)
    }
}

impl Document {
    /// Renders `id` and its subtree to text and decodes it into `target`.
    ///
    /// # Errors
    ///
    /// Returns the decoder's error unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use xmlx::Document;
    ///
    /// let doc = Document::parse_str("<list><n>1</n><n>2</n></list>").unwrap();
    /// let list = doc.root_element().unwrap();
    ///
    /// let mut text = String::new();
    /// let copy = |xml: &str, out: &mut String| -> Result<(), ()> {
    ///     out.push_str(xml);
    ///     Ok(())
    /// };
    /// doc.unmarshal(list, &copy, &mut text).unwrap();
    /// assert_eq!(text, "<list><n>1</n><n>2</n></list>");
    /// ```
    pub fn unmarshal<T, D>(&self, id: NodeId, decoder: &D, target: &mut T) -> Result<(), D::Error>
    where
        T: ?Sized,
        D: Decoder<T> + ?Sized,
    {
        decoder.decode(&serialize_node(self, id), target)
    }
}

/// Decodes into `serde` types with `quick_xml::de`.
///
/// The rendered subtree's top element is the document element seen by the
/// deserializer, so its own name is not checked against the target type.
///
/// ```
/// use serde::Deserialize;
/// use xmlx::decode::SerdeDecoder;
/// use xmlx::Document;
///
/// #[derive(Debug, Default, Deserialize, PartialEq)]
/// struct Server {
///     host: String,
///     port: u16,
/// }
///
/// let doc = Document::parse_str(
///     "<config><server><host>db1</host><port>5432</port></server></config>",
/// ).unwrap();
/// let server = doc.select_node(doc.root(), "*", "server").unwrap();
///
/// let mut out = Server::default();
/// doc.unmarshal(server, &SerdeDecoder, &mut out).unwrap();
/// assert_eq!(out, Server { host: "db1".into(), port: 5432 });
/// ```
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeDecoder;

#[cfg(feature = "serde")]
impl<T: serde::de::DeserializeOwned> Decoder<T> for SerdeDecoder {
    type Error = quick_xml::DeError;

    fn decode(&self, text: &str, target: &mut T) -> Result<(), Self::Error> {
        *target = quick_xml::de::from_str(text)?;
        Ok(())
    }
}
