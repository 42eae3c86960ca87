//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod admin;
pub mod alert_banner;
pub mod analytics_chart;
pub mod density_chart;
pub mod loading;
pub mod summary;
pub mod toast;
pub mod video_feed;
pub mod zone_grid;

pub use admin::AdminPanel;
pub use alert_banner::AlertBanner;
pub use analytics_chart::AnalyticsChart;
pub use density_chart::DensityChart;
pub use loading::Loading;
pub use summary::SummaryCards;
pub use toast::Toast;
pub use video_feed::VideoFeed;
pub use zone_grid::ZoneGrid;
