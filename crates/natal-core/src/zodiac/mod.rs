pub mod format;
pub mod mapper;
pub mod types;

pub use format::{format_degree, to_dms, Dms};
pub use mapper::{map_longitude, normalize_longitude, sign_index};
pub use types::{Element, Modality, ZodiacPlacement, ZodiacSign, ALL_SIGNS};
