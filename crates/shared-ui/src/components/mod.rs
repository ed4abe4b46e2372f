pub mod badge;
pub mod button;
pub mod card;
pub mod input;
pub mod label;
pub mod navbar;
pub mod page_header;
pub mod separator;
pub mod skeleton;
pub mod toast;
pub mod tooltip;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use input::*;
pub use label::*;
pub use navbar::*;
pub use page_header::*;
pub use separator::*;
pub use skeleton::*;
pub use toast::*;
pub use tooltip::*;
