pub mod dates;
pub mod model;
pub mod status;

pub use dates::parse_czech_date;
pub use model::{exhibitions, status_label, Exhibition, ExhibitionStatus};
pub use status::{
    active_exhibitions, active_from, calculated_status, days_info, vernissage_visible,
    ActiveExhibition,
};
