mod button;
pub use button::*;

mod button_group;
pub use button_group::*;

mod icon;
pub use icon::*;

mod icon_button;
pub use icon_button::*;

mod spinner;
pub use spinner::*;
