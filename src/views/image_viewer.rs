use crate::content::ImageSource;
use crate::message::Message;
use crate::model::Preview;
use iced::widget::image::Handle;
use iced::widget::text::Wrapping;
use iced::widget::{text, Image};
use iced::{ContentFit, Element, Length};

/// Image handles the views may draw, borrowed from the controller.
#[derive(Debug, Clone, Copy, Default)]
pub struct Images<'a> {
    pub preview: Option<&'a Preview>,
    pub placeholder: Option<&'a Handle>,
}

impl<'a> Images<'a> {
    pub fn resolve(&self, source: ImageSource) -> Option<&'a Handle> {
        match source {
            ImageSource::Preview(id) => self
                .preview
                .filter(|preview| preview.id() == id)
                .map(Preview::handle),
            ImageSource::Remote(_) => self.placeholder,
        }
    }
}

pub fn image_panel<'a>(source: Option<ImageSource>, images: Images<'a>) -> Element<'a, Message> {
    let Some(source) = source else {
        return text("").into();
    };

    if let Some(handle) = images.resolve(source) {
        Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into()
    } else {
        match source {
            ImageSource::Remote(url) => text(url).size(12).wrapping(Wrapping::Glyph).into(),
            ImageSource::Preview(_) => text("").into(),
        }
    }
}
