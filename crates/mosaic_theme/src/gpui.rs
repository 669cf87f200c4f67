use gpui::{AbsoluteLength, DefiniteLength, px, relative, rems};

use crate::Length;

impl From<Length> for DefiniteLength {
    fn from(value: Length) -> Self {
        match value {
            Length::Px(value) => px(value).into(),
            Length::Rem(value) => rems(value).into(),
            Length::Percent(value) => relative(value / 100.),
        }
    }
}

impl From<Length> for gpui::Length {
    fn from(value: Length) -> Self {
        DefiniteLength::from(value).into()
    }
}

impl Length {
    /// Absolute form of this length; percentages have none.
    pub fn to_absolute(self) -> Option<AbsoluteLength> {
        match self {
            Length::Px(value) => Some(px(value).into()),
            Length::Rem(value) => Some(rems(value).into()),
            Length::Percent(_) => None,
        }
    }
}
