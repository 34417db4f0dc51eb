//! Data model for the timeline layout engine.
//!
//! Input records ([`ScheduledCampaign`]), calendar helpers ([`DayIndex`],
//! [`DateWindow`]) and the render-ready output ([`LayoutResult`]).

pub mod campaign;
pub mod layout;
pub mod macros;
pub mod time;

pub use campaign::*;
pub use layout::*;
pub use time::*;
