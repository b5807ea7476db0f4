use ecow::EcoString;

use super::{HtmlWriteResult, HtmlWriter};
use crate::ast::Attribute;

pub(crate) enum GuardedElement<'a> {
    Render(GuardedTagWriter<'a>),
    Textualize,
}

/// An open start tag whose name and attributes passed validation.
pub(crate) struct GuardedTagWriter<'a> {
    writer: &'a mut HtmlWriter,
    tag_name: EcoString,
}

impl<'a> GuardedTagWriter<'a> {
    pub(crate) fn new(writer: &'a mut HtmlWriter, tag_name: EcoString) -> Self {
        Self { writer, tag_name }
    }

    pub(crate) fn write_attribute(&mut self, name: &str, value: &str) -> HtmlWriteResult<()> {
        self.writer.attribute(name, value)
    }

    pub(crate) fn write_attributes(&mut self, attributes: &[Attribute]) -> HtmlWriteResult<()> {
        for attr in attributes {
            self.writer.attribute(&attr.name, &attr.value)?;
        }
        Ok(())
    }

    pub(crate) fn finish(self) -> HtmlWriteResult<GuardedTagBody<'a>> {
        self.writer.finish_tag()?;
        Ok(GuardedTagBody {
            writer: self.writer,
            tag_name: self.tag_name,
        })
    }

    pub(crate) fn finish_self_closing(self) -> HtmlWriteResult<&'a mut HtmlWriter> {
        self.writer.finish_self_closing_tag()?;
        Ok(self.writer)
    }
}

/// The content of an element; the end tag is written by [`Self::end`].
pub(crate) struct GuardedTagBody<'a> {
    writer: &'a mut HtmlWriter,
    tag_name: EcoString,
}

impl<'a> GuardedTagBody<'a> {
    pub(crate) fn writer(&mut self) -> &mut HtmlWriter {
        self.writer
    }

    pub(crate) fn end(self) -> HtmlWriteResult<&'a mut HtmlWriter> {
        self.writer.end_tag(&self.tag_name)?;
        Ok(self.writer)
    }
}
