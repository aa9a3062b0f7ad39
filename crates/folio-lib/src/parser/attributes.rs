//! Typed access to element attributes.

use folio_core::ast::ImageSize;
use folio_core::{BlockId, TypeName, ValueRejected};

use super::element::Element;
use super::error::ParseErrorKind;
use crate::event::Attributes;

pub(super) struct AttributeReader<'a> {
    element: Element,
    attributes: &'a Attributes,
}

impl<'a> AttributeReader<'a> {
    /// Fails on the first attribute the element does not take.
    pub fn new(element: Element, attributes: &'a Attributes) -> Result<Self, ParseErrorKind> {
        let allowed = element.attributes();
        if let Some(unknown) = attributes.keys().find(|k| !allowed.contains(&k.as_str())) {
            return Err(ParseErrorKind::UnknownAttribute {
                element: element.name(),
                attribute: unknown.clone(),
            });
        }
        Ok(Self {
            element,
            attributes,
        })
    }

    pub fn optional(&self, name: &'static str) -> Option<&'a str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn required(&self, name: &'static str) -> Result<&'a str, ParseErrorKind> {
        self.optional(name)
            .ok_or(ParseErrorKind::MissingAttribute {
                element: self.element.name(),
                attribute: name,
            })
    }

    pub fn optional_type(&self) -> Result<Option<TypeName>, ParseErrorKind> {
        self.optional("type")
            .map(|v| TypeName::new(v).map_err(|e| self.rejected("type", e)))
            .transpose()
    }

    pub fn optional_id(&self) -> Result<Option<BlockId>, ParseErrorKind> {
        self.optional("id")
            .map(|v| BlockId::new(v).map_err(|e| self.rejected("id", e)))
            .transpose()
    }

    /// A required attribute holding a block id: `id` of footnotes, `target` of references.
    pub fn required_block_id(&self, name: &'static str) -> Result<BlockId, ParseErrorKind> {
        let value = self.required(name)?;
        BlockId::new(value).map_err(|e| self.rejected(name, e))
    }

    /// The `toc` flag, `true` when absent.
    pub fn toc(&self) -> Result<bool, ParseErrorKind> {
        match self.optional("toc") {
            None | Some("true") => Ok(true),
            Some("false") => Ok(false),
            Some(other) => Err(self.invalid("toc", other, "expected `true` or `false`")),
        }
    }

    /// `width` and `height` together, or neither.
    pub fn size(&self) -> Result<Option<ImageSize>, ParseErrorKind> {
        let width = self.optional("width");
        let height = self.optional("height");
        match (width, height) {
            (None, None) => Ok(None),
            (Some(width), Some(height)) => Ok(Some(ImageSize {
                width: self.dimension("width", width)?,
                height: self.dimension("height", height)?,
            })),
            (Some(_), None) => Err(ParseErrorKind::MissingAttribute {
                element: self.element.name(),
                attribute: "height",
            }),
            (None, Some(_)) => Err(ParseErrorKind::MissingAttribute {
                element: self.element.name(),
                attribute: "width",
            }),
        }
    }

    fn dimension(&self, name: &'static str, value: &str) -> Result<u32, ParseErrorKind> {
        value
            .parse::<u32>()
            .map_err(|e| self.invalid(name, value, &e.to_string()))
    }

    fn rejected(&self, name: &'static str, err: ValueRejected) -> ParseErrorKind {
        self.invalid(name, &err.value, &err.reason.to_string())
    }

    fn invalid(&self, name: &'static str, value: &str, reason: &str) -> ParseErrorKind {
        ParseErrorKind::InvalidAttribute {
            element: self.element.name(),
            attribute: name,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}
