//! Reusable UI Components
//!
//! Stateless rendering units. Each takes already-fetched display data and
//! produces lines or a widget; none of them touch the network.
//!
//! - `StoryCard` - tags, title and a clamped summary
//! - `policy_chip_row` - horizontal topic selector
//! - `chat_bubble_lines` - one chat message, pre-wrapped
//! - `StatusBanner` - loading, empty and error banners

mod chat_bubble;
mod policy_chip;
mod status_banner;
mod story_card;

pub use chat_bubble::{chat_bubble_lines, BOT_LABEL, USER_LABEL};
pub use policy_chip::policy_chip_row;
pub use status_banner::{BannerKind, StatusBanner};
pub use story_card::{StoryCard, MAX_CARD_TAGS, SUMMARY_LINES};
