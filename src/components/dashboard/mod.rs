pub mod calls;
pub mod categories;
pub mod overview;

pub use calls::CallList;
pub use categories::CategoryBreakdown;
pub use overview::CampaignOverview;
