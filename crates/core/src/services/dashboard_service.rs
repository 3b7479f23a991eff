use std::fmt::Write;

use crate::charts::scale::compute_scale;
use crate::charts::{area, bar, donut, paired};
use crate::errors::CoreError;
use crate::models::analytics::RatioBand;
use crate::models::chart::ChartLayout;
use crate::models::series::SeriesPoint;
use crate::models::user::{ProfileData, UserProfile};
use crate::render::mount::MountRegistry;
use crate::render::svg::xml_escape;
use crate::render::Rendering;

use super::aggregation_service::AggregationService;
use super::skill_catalog::SkillCatalog;

/// Mount point keys the dashboard renders into.
pub mod keys {
    pub const USER: &str = "user-data";
    pub const AUDIT: &str = "audit-data";
    pub const SKILLS: &str = "skills-data";
    pub const XP_CHART: &str = "xp-chart";
    pub const XP_PROJECT_CHART: &str = "xp-project-chart";
    pub const AUDIT_RATIO_CHART: &str = "audit-ratio-chart";
    pub const AUDIT_BYTES_CHART: &str = "audit-bytes-chart";

    /// Every key, in render order.
    pub const ALL: &[&str] = &[
        USER,
        AUDIT,
        SKILLS,
        XP_CHART,
        XP_PROJECT_CHART,
        AUDIT_RATIO_CHART,
        AUDIT_BYTES_CHART,
    ];
}

/// Bytes per displayed megabyte in the audit panel.
const BYTES_PER_MB: f64 = 1_000_000.0;

/// Orchestrates one render pass: aggregate the fetched record, build
/// every panel and chart, then mount them.
///
/// All renderings are built before any mounting happens — a failure
/// discards the whole pass instead of leaving a half-updated page.
pub struct DashboardService {
    aggregation: AggregationService,
    bar_layout: ChartLayout,
    donut_layout: ChartLayout,
    area_layout: ChartLayout,
    paired_layout: ChartLayout,
}

impl DashboardService {
    pub fn new() -> Self {
        Self {
            aggregation: AggregationService::new(),
            bar_layout: ChartLayout::bar_default(),
            donut_layout: ChartLayout::donut_default(),
            area_layout: ChartLayout::area_default(),
            paired_layout: ChartLayout::paired_default(),
        }
    }

    /// Render the full dashboard for one fetched record.
    pub fn render_all(
        &self,
        profile: &ProfileData,
        catalog: &SkillCatalog,
        frame: &mut MountRegistry,
    ) -> Result<(), CoreError> {
        let skills = self
            .aggregation
            .group_skills(&profile.skills, catalog)?;
        let projects = self.aggregation.xp_by_project(&profile.transactions);
        let (up_count, down_count) = self.aggregation.audit_counts(&profile.transactions);

        let renderings = [
            (keys::USER, self.user_panel(&profile.user, profile.level)),
            (keys::AUDIT, self.audit_panel(&profile.user)),
            (keys::SKILLS, self.skills_panel(&skills)),
            (
                keys::XP_CHART,
                area::cumulative_xp(&profile.transactions, self.area_layout),
            ),
            (
                keys::XP_PROJECT_CHART,
                bar::xp_by_project(&projects, self.bar_layout),
            ),
            (
                keys::AUDIT_RATIO_CHART,
                donut::audit_ratio(up_count, down_count, self.donut_layout),
            ),
            (
                keys::AUDIT_BYTES_CHART,
                paired::audit_bytes(
                    profile.user.total_up,
                    profile.user.total_down,
                    self.paired_layout,
                ),
            ),
        ];

        for (key, rendering) in &renderings {
            frame.mount(key, rendering);
        }

        log::info!(
            "dashboard rendered for '{}' ({} transactions)",
            profile.user.login,
            profile.transactions.len()
        );
        Ok(())
    }

    /// Render the terminal error panel into the user panel's mount.
    pub fn render_error(&self, message: &str, frame: &mut MountRegistry) {
        let markup = format!(
            "<div class=\"error\">Failed to load data</div><div>{}</div>",
            xml_escape(message)
        );
        frame.mount(keys::USER, &Rendering::Html(markup));
    }

    // ── Panels ──────────────────────────────────────────────────────

    /// Profile header and detail rows. Missing optional fields render
    /// as "N/A" rather than dropping the row.
    fn user_panel(&self, user: &UserProfile, level: Option<u64>) -> Rendering {
        let email = user.email.as_deref().unwrap_or("N/A");
        let campus = user.campus.as_deref().unwrap_or("N/A");
        let level = level.map_or_else(|| "N/A".to_string(), |l| l.to_string());

        let mut markup = String::new();
        let _ = write!(
            markup,
            "<div class=\"profile-header\"><h2>{}</h2>\
             <p class=\"username\"><strong>Username:</strong> {}</p></div>",
            xml_escape(&user.display_name()),
            xml_escape(&user.login),
        );
        let _ = write!(
            markup,
            "<div class=\"profile-details\">\
             <p><strong>Email:</strong> {}</p>\
             <p><strong>Campus:</strong> {}</p>\
             <p><strong>ID:</strong> {}</p>\
             <p><strong>Level:</strong> {}</p></div>",
            xml_escape(email),
            xml_escape(campus),
            user.id,
            level,
        );
        Rendering::Html(markup)
    }

    /// Audit ratio with its band comment, plus the up/down MB
    /// comparison bars normalized against their shared max.
    fn audit_panel(&self, user: &UserProfile) -> Rendering {
        // The band is classified from the rounded display ratio.
        let ratio = (user.audit_ratio * 10.0).round() / 10.0;
        let band = RatioBand::classify(ratio);

        let up_mb = user.total_up as f64 / BYTES_PER_MB;
        let down_mb = user.total_down as f64 / BYTES_PER_MB;
        let max_mb = compute_scale(&[up_mb, down_mb], 1.0);
        let up_percent = up_mb / max_mb * 100.0;
        let down_percent = down_mb / max_mb * 100.0;

        let mut markup = String::new();
        let _ = write!(
            markup,
            "<div class=\"stat-item\"><div class=\"stat-label\">Audit Ratio:</div>\
             <span class=\"stat-value ratio-{}\">{ratio:.1}</span> \
             <span class=\"ratio-comment\">{}</span></div>",
            band.css_class(),
            band.comment(),
        );
        let _ = write!(
            markup,
            "<div class=\"stat-item\"><div class=\"stat-label\">Audit XP Comparison:</div>\
             <div class=\"chart-bar-container\">\
             <div class=\"bar up-bar\" style=\"width: {up_percent:.1}%\" title=\"Up: {up_mb:.2} MB\"></div>\
             <div class=\"bar down-bar\" style=\"width: {down_percent:.1}%\" title=\"Down: {down_mb:.2} MB\"></div>\
             </div>\
             <div class=\"chart-labels\">\
             <span class=\"up-label\">Up: {up_mb:.2} MB</span>\
             <span class=\"down-label\">Down: {down_mb:.2} MB</span>\
             </div></div>",
        );
        Rendering::Html(markup)
    }

    /// Grouped skill list, descending by amount.
    fn skills_panel(&self, skills: &[SeriesPoint]) -> Rendering {
        if skills.is_empty() {
            return Rendering::placeholder("No skills data available");
        }

        let mut markup = String::from("<h3>Skills</h3><div class=\"skills-container\">");
        for point in skills {
            let _ = write!(
                markup,
                "<div class=\"skill-item\">\
                 <span class=\"skill-name\">{}</span>\
                 <span class=\"skill-amount\">{} XP</span></div>",
                xml_escape(&point.label),
                crate::charts::geometry::fmt_num(point.value),
            );
        }
        markup.push_str("</div>");
        Rendering::Html(markup)
    }
}

impl Default for DashboardService {
    fn default() -> Self {
        Self::new()
    }
}
