//! HTTP 请求处理器

pub mod fallback;
pub mod health;
pub mod sum;

pub use fallback::{handle_method_not_allowed, handle_not_found};
pub use health::handle_health;
pub use sum::{handle_sum_path, handle_sum_query, SumQuery, SumResponse};
