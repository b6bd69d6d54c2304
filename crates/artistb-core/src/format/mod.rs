//! Display formatting shared by the view models.

pub mod bio;
pub mod date;
pub mod price;

pub use bio::to_paragraph_html;
pub use date::{format_day, format_range};
pub use price::{PRICE_ON_REQUEST_LABEL, SOLD_LABEL, format_currency, price_label};
