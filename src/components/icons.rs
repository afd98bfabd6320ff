//! Centralized icon definitions (change icon set here).

use icondata::Icon;

pub const MENU: Icon = icondata::BsList;
pub const CLOSE: Icon = icondata::BsXLg;
pub const CHEVRON_LEFT: Icon = icondata::BsChevronLeft;
pub const CHEVRON_RIGHT: Icon = icondata::BsChevronRight;
pub const BACK: Icon = icondata::BsArrowLeft;
pub const EXTERNAL_LINK: Icon = icondata::BsBoxArrowUpRight;
