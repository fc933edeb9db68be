use crate::models::ProfileStats;
use crate::render::escape_xml;
use crate::render::theme::{Theme, TierStyle};

const PADDING: u32 = 24;
const MAIN_CARD_W: u32 = 600;
const MAIN_CARD_H: u32 = 200;
const TROPHY_PANEL: u32 = 140;
const BADGE_W: u32 = 160;
const BADGE_H: u32 = 72;
const BADGE_GAP: u32 = 20;
const XP_BAR_W: u32 = 280;

fn non_empty<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

/// Render the trophy card for aggregated stats.
///
/// Pure string assembly: the same stats, theme and column count always
/// produce the identical document. `columns` is clamped to 1..=4; the badge
/// grid reserves the full requested width even when a row is short, and
/// every short row is centered individually.
pub fn render_trophy(stats: &ProfileStats, theme: Theme, columns: u32) -> String {
    let p = theme.palette();
    let tier_style = TierStyle::for_tier(stats.tier);
    let tier_color = tier_style.color;
    let tier_edge = tier_style.edge;

    let username = escape_xml(non_empty(&stats.username, "unknown"));
    let grade = stats.grade.as_str();
    let tier_label = stats.tier.as_str().to_uppercase();
    let score = stats.score;
    let level = stats.level;
    let next_level = level + 1;
    let xp = u32::from(stats.xp_percent.min(100));

    let badges = [
        ("Stars", non_empty(&stats.formatted_stars, "0"), icon_star(tier_color)),
        ("Repositories", non_empty(&stats.formatted_repos, "0"), icon_repo(tier_color)),
        ("Followers", non_empty(&stats.formatted_followers, "0"), icon_users(tier_color)),
    ];

    let columns = columns.clamp(1, 4) as usize;
    let badge_rows = badges.len().div_ceil(columns) as u32;
    let grid_width = columns as u32 * BADGE_W + (columns as u32 - 1) * BADGE_GAP;
    let badges_height = badge_rows * BADGE_H + (badge_rows - 1) * BADGE_GAP;

    let svg_width = (MAIN_CARD_W + 2 * PADDING).max(grid_width + 2 * PADDING);
    let svg_height = PADDING + MAIN_CARD_H + PADDING + badges_height + PADDING;
    let center_x = svg_width / 2;
    let main_card_x = center_x - MAIN_CARD_W / 2;
    let grid_y = PADDING + MAIN_CARD_H + PADDING;

    let mut badge_groups = String::new();
    for (i, (label, value, icon)) in badges.iter().enumerate() {
        let row = i / columns;
        let col = (i % columns) as u32;
        let row_count = columns.min(badges.len() - row * columns) as u32;
        let row_width = row_count * BADGE_W + (row_count - 1) * BADGE_GAP;
        let x = center_x - row_width / 2 + col * (BADGE_W + BADGE_GAP);
        let y = grid_y + row as u32 * (BADGE_H + BADGE_GAP);
        let value = escape_xml(value);

        badge_groups.push_str(&format!(
            r##"
  <g transform="translate({x}, {y})">
    <rect x="0" y="0" rx="12" width="{BADGE_W}" height="{BADGE_H}" fill="{card}" stroke="{panel_edge}" stroke-width="1.2" />
    <g transform="translate(16, 18)">
      <g transform="translate(0, 0)">{icon}</g>
      <text x="46" y="12" font-family="Segoe UI, Roboto, Arial, sans-serif" font-size="14" fill="{text}" font-weight="700">{label}</text>
      <text x="46" y="34" font-family="Segoe UI, Roboto, Arial, sans-serif" font-size="16" fill="{accent_text}" font-weight="900">{value}</text>
    </g>
  </g>"##,
            card = p.card,
            panel_edge = p.panel_edge,
            text = p.text,
            accent_text = p.accent_text,
        ));
    }

    let panel_h = MAIN_CARD_H - 48;
    let medal_c = TROPHY_PANEL / 2;
    let medal_icon = icon_medal_inner(p.card);
    let title_x = TROPHY_PANEL + 48;
    let chip_x = MAIN_CARD_W - 84;
    let caption_x = XP_BAR_W + 12;
    let xp_filled = (XP_BAR_W * xp + 50) / 100;
    let achievements_y = grid_y - 10;
    let footer_y = svg_height - 10;

    format!(
        r##"<svg width="{svg_width}" height="{svg_height}" viewBox="0 0 {svg_width} {svg_height}" xmlns="http://www.w3.org/2000/svg" role="img" aria-label="GitHub Trophy for {username}">
  <defs>
    <linearGradient id="bgGrad" x1="0" x2="0" y1="0" y2="1">
      <stop offset="0%" stop-color="{bg}"/>
      <stop offset="100%" stop-color="{bg_dark}"/>
    </linearGradient>
    <linearGradient id="xpGrad" x1="0" y1="0" x2="1" y2="0">
      <stop offset="0%" stop-color="{glow}"/>
      <stop offset="100%" stop-color="{tier_color}" />
    </linearGradient>
    <filter id="shadow">
      <feDropShadow dx="0" dy="4" stdDeviation="6" flood-color="#000" flood-opacity="0.3"/>
    </filter>
    <style>
      .title {{ font-family: "Segoe UI", Roboto, Arial, sans-serif; font-size:22px; fill:{title_text}; font-weight:800; }}
      .meta {{ font-family: "Segoe UI", Roboto, Arial, sans-serif; font-size:14px; fill:{meta_text}; }}
      .small {{ font-family: "Segoe UI", Roboto, Arial, sans-serif; font-size:12px; fill:{meta_text}; }}
    </style>
  </defs>

  <rect width="100%" height="100%" fill="url(#bgGrad)" />

  <g transform="translate({main_card_x}, {PADDING})">
    <rect x="0" y="0" rx="16" width="{MAIN_CARD_W}" height="{MAIN_CARD_H}" fill="{card}" stroke="{card_edge}" stroke-width="2" filter="url(#shadow)"/>

    <g transform="translate(24, 24)">
      <rect x="0" y="0" rx="12" width="{TROPHY_PANEL}" height="{panel_h}" fill="{panel}" stroke="{tier_edge}" stroke-width="1.5"/>
      <g transform="translate({medal_c}, {medal_c})">
        <circle cx="0" cy="0" r="50" fill="{tier_color}" stroke="#00000040" stroke-width="2" />
        <g transform="translate(-28, -28)">
          {medal_icon}
        </g>
        <text x="0" y="68" font-size="12" font-family="Segoe UI, Roboto, Arial, sans-serif" fill="{text}" text-anchor="middle" font-weight="700">TIER: {tier_label}</text>
      </g>
    </g>

    <g transform="translate({title_x}, 32)">
      <text class="title" x="110" y="0" text-anchor="middle">&#127942; GitHub Trophy</text>

      <text class="meta" x="0" y="32">
        Score: <tspan fill="{accent_text}" font-weight="800">{score}</tspan> &#160;&#8226; &#160;
        Grade: <tspan fill="{tier_color}" font-weight="800">{grade}</tspan> &#160;&#8226; &#160;
        Level: <tspan fill="{glow}" font-weight="800">{level}</tspan>
      </text>

      <g transform="translate(0,68)">
        <rect x="0" y="0" rx="7" width="{XP_BAR_W}" height="14" fill="#071018" stroke="{panel_edge}" stroke-width="1"/>
        <rect x="0" y="0" rx="7" width="{xp_filled}" height="14" fill="url(#xpGrad)"/>
        <text x="{caption_x}" y="11" class="small">{xp}% XP to Level {next_level}</text>
      </g>
    </g>

    <g transform="translate({chip_x}, 18)">
      <rect x="0" y="0" rx="8" width="60" height="40" fill="{panel}" stroke="{tier_edge}" stroke-width="1.2"/>
      <text x="30" y="26" font-size="18" text-anchor="middle" font-family="Segoe UI, Roboto, Arial, sans-serif" fill="{tier_color}" font-weight="900">{grade}</text>
    </g>
  </g>

  <text x="{center_x}" y="{achievements_y}" text-anchor="middle" font-size="14" fill="{meta_text}" font-weight="700">ACHIEVEMENTS</text>
{badge_groups}

  <text x="{center_x}" y="{footer_y}" text-anchor="middle" class="small" fill="{meta_text}">Powered by the GitHub API</text>
</svg>
"##,
        bg = p.bg,
        bg_dark = p.bg_dark,
        card = p.card,
        card_edge = p.card_edge,
        panel = p.panel,
        panel_edge = p.panel_edge,
        glow = p.glow,
        title_text = p.title_text,
        text = p.text,
        meta_text = p.meta_text,
        accent_text = p.accent_text,
    )
}

fn icon_medal_inner(fill: &str) -> String {
    format!(
        r#"<svg width="56" height="56" viewBox="0 0 56 56" xmlns="http://www.w3.org/2000/svg">
      <path d="M28 10 L33.5 22 L46 22 L36.5 29 L40 42 L28 34 L16 42 L19.5 29 L10 22 L22.5 22 Z" fill="{fill}" />
    </svg>"#
    )
}

fn icon_star(fill: &str) -> String {
    format!(
        r#"<svg width="30" height="30" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg">
      <path fill="{fill}" d="M12 .587l3.668 7.431L23.4 9.75l-5.7 5.558L19.335 24 12 20.201 4.665 24l1.635-8.692L.6 9.75l7.732-1.732z"/>
    </svg>"#
    )
}

fn icon_repo(fill: &str) -> String {
    format!(
        r#"<svg width="30" height="30" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg">
      <path fill="{fill}" d="M21 8V7l-9-4-9 4v1l9 4 9-4zM3 10v6l9 5 9-5v-6l-9 4-9-4z"/>
    </svg>"#
    )
}

fn icon_users(fill: &str) -> String {
    format!(
        r#"<svg width="30" height="30" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg">
      <path fill="{fill}" d="M16 11c1.657 0 3-1.343 3-3s-1.343-3-3-3-3 1.343-3 3 1.343 3 3 3zM8 11c1.657 0 3-1.343 3-3S9.657 5 8 5 5 6.343 5 8s1.343 3 3 3zM8 13c-2.33 0-7 1.17-7 3.5V19h14v-2.5C15 14.17 10.33 13 8 13zm8 0c-.29 0-.62.02-.98.05 1.17.8 1.98 1.93 1.98 3.45V19h6v-2.5C23 14.17 18.33 13 16 13z"/>
    </svg>"#
    )
}
