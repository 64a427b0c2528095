//! Public widget output.
//!
//! Rendering is split in two: [`plan`] resolves which accounts are shown, in
//! what order and in which colors; [`render`] turns that plan into markup.

use std::borrow::Cow;
use std::fmt::{self, Write as _};
use std::sync::Arc;

use social_dock_sdk::{
    brand_color, platform_info, ColorSlot, Design, LinkTarget, Platform, RenderedWidget,
    SettingsRecord, SocialAccount,
};

use super::contrast::contrast_color;

const CSS_PREFIX: &str = "social-dock";
const NAV_LABEL: &str = "Social Media Links";

/// Source of inline SVG glyphs.
pub trait IconSource: Send + Sync {
    /// SVG markup for the platform, or an empty string when unavailable.
    fn svg(&self, platform: Platform) -> Arc<str>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    pub background: String,
    pub foreground: &'static str,
}

impl Swatch {
    fn for_slot(record: &SettingsRecord, slot: ColorSlot) -> Self {
        let background = record
            .platform_colors
            .get(&slot)
            .filter(|c| !c.is_empty())
            .cloned()
            .unwrap_or_else(|| brand_color(slot).to_owned());
        let foreground = contrast_color(&background);
        Self {
            background,
            foreground,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedIcon<'a> {
    pub account: &'a SocialAccount,
    pub label: &'static str,
    pub swatch: Swatch,
}

/// Everything the markup needs, already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetPlan<'a> {
    pub record: &'a SettingsRecord,
    /// Enabled accounts in ascending `order`, ties in stored order.
    pub icons: Vec<PlannedIcon<'a>>,
    pub trigger: Swatch,
    pub wrapper_bg: String,
}

/// Resolve the visible icons; `None` when no account would be shown.
#[must_use]
pub fn plan(record: &SettingsRecord) -> Option<WidgetPlan<'_>> {
    let mut icons: Vec<PlannedIcon<'_>> = record
        .social_accounts
        .iter()
        .filter(|a| a.enabled && !a.url.is_empty())
        .map(|account| PlannedIcon {
            account,
            label: platform_info(account.platform).label,
            swatch: Swatch::for_slot(record, ColorSlot::Platform(account.platform)),
        })
        .collect();

    if icons.is_empty() {
        return None;
    }
    icons.sort_by_key(|icon| icon.account.order);

    Some(WidgetPlan {
        record,
        icons,
        trigger: Swatch::for_slot(record, ColorSlot::TriggerButton),
        wrapper_bg: Swatch::for_slot(record, ColorSlot::WrapperBg).background,
    })
}

/// Render the widget for `record`, or `None` when there is nothing to show.
#[must_use]
pub fn render(record: &SettingsRecord, icons: &dyn IconSource) -> Option<RenderedWidget> {
    let plan = plan(record)?;
    let mut markup = String::new();
    write_markup(&mut markup, &plan, icons).ok()?;
    Some(RenderedWidget {
        inline_style: inline_style(&plan),
        markup,
    })
}

/// CSS custom properties for the container.
#[must_use]
pub fn inline_style(plan: &WidgetPlan<'_>) -> String {
    format!(
        ".{CSS_PREFIX}-container {{ --{CSS_PREFIX}-icon-size: {}rem; --{CSS_PREFIX}-icon-spacing: {}rem; --{CSS_PREFIX}-wrapper-bg: {}; }}",
        px_to_rem(plan.record.icon_size),
        px_to_rem(plan.record.icon_spacing),
        escape_html(&plan.wrapper_bg),
    )
}

fn px_to_rem(px: u32) -> String {
    let rem = (f64::from(px) / 16.0 * 10_000.0).round() / 10_000.0;
    rem.to_string()
}

fn container_classes(record: &SettingsRecord) -> String {
    let mut classes = vec![
        format!("{CSS_PREFIX}-container"),
        format!("{CSS_PREFIX}-{}", record.active_design.as_str()),
        format!("{CSS_PREFIX}-position-{}", record.active_position.as_str()),
        format!("{CSS_PREFIX}-style-{}", record.icon_style.as_str()),
    ];
    if record.show_tooltip {
        classes.push(format!("{CSS_PREFIX}-has-tooltips"));
    }
    classes.join(" ")
}

fn write_markup(out: &mut String, plan: &WidgetPlan<'_>, icons: &dyn IconSource) -> fmt::Result {
    let record = plan.record;
    let is_orbit = record.active_design == Design::Orbit;

    write!(
        out,
        r#"<div class="{}" role="navigation" aria-label="{NAV_LABEL}">"#,
        container_classes(record)
    )?;
    write!(out, r#"<div class="{CSS_PREFIX}-icons-wrapper""#)?;
    if is_orbit {
        write!(out, r#" style="--{CSS_PREFIX}-item-count:{}""#, plan.icons.len())?;
    }
    out.push('>');

    for (index, icon) in plan.icons.iter().enumerate() {
        write_icon(out, record, icon, is_orbit.then_some(index), icons)?;
    }
    out.push_str("</div>");

    if is_orbit {
        write_trigger(out, &plan.trigger)?;
    }
    out.push_str("</div>");

    if is_orbit {
        write_toggle_script(out)?;
    }
    Ok(())
}

fn write_icon(
    out: &mut String,
    record: &SettingsRecord,
    icon: &PlannedIcon<'_>,
    index: Option<usize>,
    icons: &dyn IconSource,
) -> fmt::Result {
    let platform = icon.account.platform.as_str();
    write!(
        out,
        r#"<a href="{}" class="{CSS_PREFIX}-icon-link {CSS_PREFIX}-platform-{platform}""#,
        escape_html(&icon.account.url)
    )?;
    if record.link_target == LinkTarget::NewTab {
        out.push_str(r#" target="_blank" rel="noopener noreferrer""#);
    }
    let label = escape_html(icon.label);
    if record.show_tooltip {
        write!(out, r#" title="{label}""#)?;
    }
    write!(
        out,
        r#" aria-label="{label}" style="--{CSS_PREFIX}-bg:{};--{CSS_PREFIX}-fg:{}"#,
        escape_html(&icon.swatch.background),
        icon.swatch.foreground
    )?;
    if let Some(index) = index {
        write!(out, ";--{CSS_PREFIX}-item-index:{index}")?;
    }
    write!(out, r#"">{}</a>"#, icons.svg(icon.account.platform))
}

fn write_trigger(out: &mut String, trigger: &Swatch) -> fmt::Result {
    write!(
        out,
        r#"<button type="button" class="{CSS_PREFIX}-trigger" style="--{CSS_PREFIX}-trigger-bg:{};--{CSS_PREFIX}-trigger-fg:{}" aria-label="{NAV_LABEL}">"#,
        escape_html(&trigger.background),
        trigger.foreground
    )?;
    write!(
        out,
        r#"<svg class="{CSS_PREFIX}-trigger-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2.5" stroke-linecap="round"><line x1="12" y1="5" x2="12" y2="19"/><line x1="5" y1="12" x2="19" y2="12"/></svg></button>"#
    )
}

fn write_toggle_script(out: &mut String) -> fmt::Result {
    write!(
        out,
        "<script>(function(){{var c=document.querySelector('.{CSS_PREFIX}-design-1');if(!c)return;\
var btn=c.querySelector('.{CSS_PREFIX}-trigger');if(!btn)return;\
btn.addEventListener('click',function(){{c.classList.toggle('{CSS_PREFIX}-open');}});\
document.addEventListener('click',function(e){{if(!c.contains(e.target)){{c.classList.remove('{CSS_PREFIX}-open');}}}});\
}})();</script>"
    )
}

/// Escape text for use inside an HTML attribute or element body.
#[must_use]
pub fn escape_html(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(raw);
    }
    let mut escaped = String::with_capacity(raw.len() + 8);
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}
