pub mod format;
pub mod html;
pub mod lenient;

pub use format::{
    UNKNOWN, epoch_to_datetime, format_count, format_epoch, format_rate, format_seconds,
    format_timestamp, format_token_count,
};
pub use html::{html_escape, text_to_html};
